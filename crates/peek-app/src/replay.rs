//! Builds the synthetic input stream replayed after loading.

use peek_common::OverlayPosition;
use peek_platform::{KeyEvent, KeybindError, PointerEvent, PointerTarget, SyntheticInput};

/// Where on the handle the simulated press lands, relative to the panel.
const HANDLE_GRAB: (i32, i32) = (10, 10);

/// A drag of the handle by `offset` from `panel`, followed by `chords`.
pub fn build_input(
    panel: OverlayPosition,
    offset: Option<(i32, i32)>,
    chords: &[String],
) -> Result<SyntheticInput, KeybindError> {
    let mut input = SyntheticInput::new();

    if let Some((dx, dy)) = offset {
        let x = panel.x.saturating_add(HANDLE_GRAB.0);
        let y = panel.y.saturating_add(HANDLE_GRAB.1);
        let (to_x, to_y) = (x.saturating_add(dx), y.saturating_add(dy));
        input = input
            .pointer(PointerEvent::down(PointerTarget::DragHandle, x, y))
            .pointer(PointerEvent::moved(to_x, to_y))
            .pointer(PointerEvent::up(to_x, to_y));
    }

    for chord in chords {
        input = input.key(KeyEvent::from_chord(chord.trim())?);
    }
    Ok(input)
}
