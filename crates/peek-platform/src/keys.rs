//! Keyboard events as seen at the page's window boundary.
//!
//! Mirrors the fields of a DOM `KeyboardEvent` that chord matching needs,
//! plus the two flags a listener can set to stop the event from reaching
//! the host page or the embedded frame.

use serde::{Deserialize, Serialize};

use crate::keymap::{normalize_key_name, parse_keybind, KeybindError, Modifier};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Produced character or named key (`"Z"`, `" "`, `"Enter"`).
    pub key: String,
    /// Physical key code (`"KeyZ"`, `"Space"`).
    pub code: String,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
    #[serde(skip)]
    default_prevented: bool,
    #[serde(skip)]
    propagation_stopped: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            code: code.into(),
            ctrl: false,
            alt: false,
            shift: false,
            meta: false,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// Build the event a browser would emit for a chord string such as
    /// `"Ctrl+Shift+Z"`. Used to feed synthetic input streams.
    pub fn from_chord(chord: &str) -> Result<Self, KeybindError> {
        let kb = parse_keybind(chord)?;
        let (key, code) = match kb.key.as_str() {
            "Space" => (" ".to_string(), "Space".to_string()),
            k if k.chars().count() == 1 && k.chars().all(|c| c.is_ascii_alphabetic()) => {
                (k.to_string(), format!("Key{k}"))
            }
            k if k.chars().count() == 1 && k.chars().all(|c| c.is_ascii_digit()) => {
                (k.to_string(), format!("Digit{k}"))
            }
            k => (k.to_string(), k.to_string()),
        };

        let mut event = Self::new(key, code);
        for m in kb.modifiers {
            match m {
                Modifier::Ctrl => event.ctrl = true,
                Modifier::Alt => event.alt = true,
                Modifier::Shift => event.shift = true,
                Modifier::Meta => event.meta = true,
            }
        }
        Ok(event)
    }

    /// Normalized key name for chord lookup.
    ///
    /// The space bar is recognized by either its produced character or its
    /// physical code; single characters are uppercased so Caps Lock does
    /// not change the match.
    pub fn normalized_key(&self) -> String {
        if self.code == "Space" {
            return "Space".into();
        }
        normalize_key_name(&self.key)
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
