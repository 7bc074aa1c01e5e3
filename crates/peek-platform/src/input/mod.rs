//! Chord registry: maps reserved key combinations to overlay actions.

mod key_combo;
mod registry;

pub use key_combo::KeyCombo;
pub use registry::{ChordRegistry, CHORD_CLOSE, CHORD_TOGGLE_PLAYBACK, CHORD_TOGGLE_VISIBILITY};
