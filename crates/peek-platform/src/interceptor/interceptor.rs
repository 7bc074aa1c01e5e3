use peek_common::OverlayAction;
use tracing::debug;

use crate::input::{ChordRegistry, KeyCombo};
use crate::keys::KeyEvent;

/// Capture-stage keyboard listener for the overlay's reserved chords.
///
/// Runs before any other handler in the page. A matching chord is
/// swallowed (default prevented, propagation stopped) so neither the host
/// page nor the embedded frame ever sees it.
#[derive(Debug, Clone, Default)]
pub struct ShortcutInterceptor {
    registry: ChordRegistry,
}

impl ShortcutInterceptor {
    pub fn new() -> Self {
        Self {
            registry: ChordRegistry::new(),
        }
    }

    /// Inspect one key event.
    ///
    /// Returns the action to dispatch when the event is a reserved chord;
    /// otherwise leaves the event untouched and returns `None`.
    pub fn intercept(&self, event: &mut KeyEvent) -> Option<OverlayAction> {
        let combo = KeyCombo::from_event(event);
        let action = self.registry.lookup(&combo)?;

        event.prevent_default();
        event.stop_propagation();
        debug!(key = %combo.key, mods = combo.mods, action = action.label(), "chord intercepted");
        Some(action)
    }

    pub fn registry(&self) -> &ChordRegistry {
        &self.registry
    }
}
