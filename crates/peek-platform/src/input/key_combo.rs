use crate::keymap::{KeyBind, Modifier};
use crate::keys::KeyEvent;

pub(super) const MOD_CTRL: u8 = 0b0001;
pub(super) const MOD_ALT: u8 = 0b0010;
pub(super) const MOD_SHIFT: u8 = 0b0100;
pub(super) const MOD_META: u8 = 0b1000;

/// A canonical key representation for fast HashMap lookup.
///
/// Modifiers are stored as a bitmask so a chord matches only when exactly
/// its modifiers are held.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// Bitmask: Ctrl=1, Alt=2, Shift=4, Meta=8.
    pub mods: u8,
    /// Normalized key name (e.g. "Z", "Space").
    pub key: String,
}

impl KeyCombo {
    /// Build from a parsed [`KeyBind`].
    pub fn from_keybind(kb: &KeyBind) -> Self {
        let mut mods = 0u8;
        for m in &kb.modifiers {
            mods |= match m {
                Modifier::Ctrl => MOD_CTRL,
                Modifier::Alt => MOD_ALT,
                Modifier::Shift => MOD_SHIFT,
                Modifier::Meta => MOD_META,
            };
        }
        Self {
            mods,
            key: kb.key.clone(),
        }
    }

    /// Build from a live key event.
    pub fn from_event(event: &KeyEvent) -> Self {
        let mut mods = 0u8;
        if event.ctrl {
            mods |= MOD_CTRL;
        }
        if event.alt {
            mods |= MOD_ALT;
        }
        if event.shift {
            mods |= MOD_SHIFT;
        }
        if event.meta {
            mods |= MOD_META;
        }
        Self {
            mods,
            key: event.normalized_key(),
        }
    }

    /// Reconstruct a [`KeyBind`] for display purposes.
    pub(super) fn to_keybind(&self) -> KeyBind {
        let mut modifiers = Vec::new();
        if self.mods & MOD_CTRL != 0 {
            modifiers.push(Modifier::Ctrl);
        }
        if self.mods & MOD_ALT != 0 {
            modifiers.push(Modifier::Alt);
        }
        if self.mods & MOD_SHIFT != 0 {
            modifiers.push(Modifier::Shift);
        }
        if self.mods & MOD_META != 0 {
            modifiers.push(Modifier::Meta);
        }
        KeyBind {
            modifiers,
            key: self.key.clone(),
        }
    }
}
