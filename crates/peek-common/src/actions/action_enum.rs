use serde::{Deserialize, Serialize};

/// Every user-triggerable overlay action.
///
/// The three reserved chords resolve to an `OverlayAction`; the overlay
/// runtime matches on this enum to drive its state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverlayAction {
    ToggleVisibility,
    Close,
    TogglePlayback,
}
