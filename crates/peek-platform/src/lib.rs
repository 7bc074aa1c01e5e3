//! Keyboard and pointer input for the overlay: chord parsing and display,
//! the fixed chord registry, the capture-stage interceptor, and the
//! injected input stream.

pub mod events;
pub mod input;
pub mod interceptor;
pub mod keymap;
pub mod keys;

pub use events::{InputEvent, InputSource, PointerEvent, PointerPhase, PointerTarget, SyntheticInput};
pub use input::{ChordRegistry, KeyCombo};
pub use interceptor::{CaptureSentinel, ShortcutInterceptor};
pub use keymap::{keybind_to_display, parse_keybind, KeyBind, KeybindError, Modifier};
pub use keys::KeyEvent;
