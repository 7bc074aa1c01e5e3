//! Control messages posted into the embedded frame.
//!
//! The player inside the frame listens for `postMessage` strings of the
//! form `{"event":"command","func":"<name>","args":<args>}`. Only the
//! play/pause toggle is ever sent.

use serde::{Deserialize, Serialize};

/// Player functions the overlay can invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlayerFunc {
    TogglePlayback,
}

/// A typed message for the frame's control channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameMessage {
    pub event: String,
    pub func: PlayerFunc,
    pub args: String,
}

impl FrameMessage {
    pub fn command(func: PlayerFunc) -> Self {
        Self {
            event: "command".into(),
            func,
            args: String::new(),
        }
    }

    pub fn playback_toggle() -> Self {
        Self::command(PlayerFunc::TogglePlayback)
    }

    /// Parse a message as received by the frame.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Wire form handed to the frame's `postMessage`.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
