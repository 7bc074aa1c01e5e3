use std::collections::HashMap;

use peek_common::OverlayAction;

use crate::keymap::{keybind_to_display, parse_keybind};

use super::key_combo::KeyCombo;

/// Chord bound to [`OverlayAction::ToggleVisibility`].
pub const CHORD_TOGGLE_VISIBILITY: &str = "Ctrl+Shift+Z";
/// Chord bound to [`OverlayAction::Close`].
pub const CHORD_CLOSE: &str = "Ctrl+Shift+X";
/// Chord bound to [`OverlayAction::TogglePlayback`].
pub const CHORD_TOGGLE_PLAYBACK: &str = "Ctrl+Shift+Space";

/// Maps the reserved chords to [`OverlayAction`]s.
///
/// The bindings are fixed; there is no user configuration.
#[derive(Debug, Clone)]
pub struct ChordRegistry {
    bindings: HashMap<KeyCombo, OverlayAction>,
}

impl ChordRegistry {
    pub fn new() -> Self {
        let mut bindings = HashMap::new();

        let mappings = [
            (CHORD_TOGGLE_VISIBILITY, OverlayAction::ToggleVisibility),
            (CHORD_CLOSE, OverlayAction::Close),
            (CHORD_TOGGLE_PLAYBACK, OverlayAction::TogglePlayback),
        ];

        for (chord, action) in mappings {
            match parse_keybind(chord) {
                Ok(kb) => {
                    bindings.insert(KeyCombo::from_keybind(&kb), action);
                }
                Err(e) => {
                    tracing::warn!("invalid chord '{chord}': {e}");
                }
            }
        }

        Self { bindings }
    }

    /// Look up the action for a key combination.
    pub fn lookup(&self, combo: &KeyCombo) -> Option<OverlayAction> {
        self.bindings.get(combo).copied()
    }

    /// Display string for an action's chord (reverse lookup).
    pub fn display_for(&self, action: OverlayAction) -> Option<String> {
        self.bindings
            .iter()
            .find(|(_, a)| **a == action)
            .map(|(combo, _)| keybind_to_display(&combo.to_keybind()))
    }

    /// Number of registered chords.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the registry has no chords.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for ChordRegistry {
    fn default() -> Self {
        Self::new()
    }
}
