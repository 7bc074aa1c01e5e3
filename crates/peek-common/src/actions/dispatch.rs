use super::OverlayAction;

impl OverlayAction {
    /// Human-readable label, used in logs and tooltips.
    pub fn label(&self) -> &'static str {
        match self {
            OverlayAction::ToggleVisibility => "Toggle Overlay",
            OverlayAction::Close => "Close",
            OverlayAction::TogglePlayback => "Play / Pause",
        }
    }

    /// All actions, in chord order.
    pub fn all() -> [OverlayAction; 3] {
        [
            OverlayAction::ToggleVisibility,
            OverlayAction::Close,
            OverlayAction::TogglePlayback,
        ]
    }
}
