//! Pointer-driven drag geometry for the overlay panel.
//!
//! The state machine calls into this module when the handle is pressed,
//! on every pointer move while dragging, and on release.

use peek_common::{OverlayPosition, Point, Size};

// =============================================================================
// TYPES
// =============================================================================

/// Active drag, captured when the handle is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    /// Pointer position when the drag started.
    pub start_pointer: Point,
    /// Panel position when the drag started.
    pub start_pos: OverlayPosition,
}

// =============================================================================
// OPERATIONS
// =============================================================================

pub fn begin(pointer: Point, current: OverlayPosition) -> DragSession {
    DragSession {
        start_pointer: pointer,
        start_pos: current,
    }
}

/// Panel position for the current pointer, kept inside the viewport.
///
/// Each axis lands in `[0, viewport - panel]`, or on 0 when the panel is
/// larger than the viewport.
pub fn update(
    session: &DragSession,
    pointer: Point,
    viewport: Size,
    panel: Size,
) -> OverlayPosition {
    OverlayPosition::new(
        clamp_axis(
            session.start_pos.x,
            session.start_pointer.x,
            pointer.x,
            viewport.width,
            panel.width,
        ),
        clamp_axis(
            session.start_pos.y,
            session.start_pointer.y,
            pointer.y,
            viewport.height,
            panel.height,
        ),
    )
}

/// Finish a drag. Taking the session by value means it cannot be updated
/// again afterwards.
pub fn end(_session: DragSession) {}

fn clamp_axis(start_pos: i32, start_pointer: i32, pointer: i32, viewport: i32, panel: i32) -> i32 {
    let raw = i64::from(start_pos) + i64::from(pointer) - i64::from(start_pointer);
    let max = (i64::from(viewport) - i64::from(panel)).max(0);
    // max fits in i32 since viewport does
    raw.clamp(0, max) as i32
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(1280, 720);
    const PANEL: Size = Size::new(480, 300);

    #[test]
    fn begin_captures_start() {
        let s = begin(Point::new(30, 40), OverlayPosition::new(20, 20));
        assert_eq!(s.start_pointer, Point::new(30, 40));
        assert_eq!(s.start_pos, OverlayPosition::new(20, 20));
    }

    #[test]
    fn update_applies_delta() {
        let s = begin(Point::new(30, 40), OverlayPosition::new(20, 20));
        let pos = update(&s, Point::new(130, 90), VIEWPORT, PANEL);
        assert_eq!(pos, OverlayPosition::new(120, 70));
    }

    #[test]
    fn update_clamps_low() {
        let s = begin(Point::new(30, 40), OverlayPosition::new(20, 20));
        let pos = update(&s, Point::new(-500, -500), VIEWPORT, PANEL);
        assert_eq!(pos, OverlayPosition::new(0, 0));
    }

    #[test]
    fn update_clamps_high() {
        let s = begin(Point::new(0, 0), OverlayPosition::new(20, 20));
        let pos = update(&s, Point::new(5000, 5000), VIEWPORT, PANEL);
        assert_eq!(pos, OverlayPosition::new(800, 420));
    }

    #[test]
    fn update_is_idempotent() {
        let s = begin(Point::new(10, 10), OverlayPosition::new(100, 100));
        let a = update(&s, Point::new(55, 66), VIEWPORT, PANEL);
        let b = update(&s, Point::new(55, 66), VIEWPORT, PANEL);
        assert_eq!(a, b);
    }

    #[test]
    fn oversized_panel_pins_to_zero() {
        let s = begin(Point::new(0, 0), OverlayPosition::new(0, 0));
        let pos = update(&s, Point::new(300, 300), Size::new(200, 100), PANEL);
        assert_eq!(pos, OverlayPosition::new(0, 0));
    }

    #[test]
    fn extreme_deltas_stay_in_bounds() {
        let extremes = [i32::MIN, -1, 0, 1, i32::MAX];
        for &sx in &extremes {
            for &px in &extremes {
                for &py in &extremes {
                    let s = begin(Point::new(sx, sx), OverlayPosition::new(400, 200));
                    let pos = update(&s, Point::new(px, py), VIEWPORT, PANEL);
                    assert!(pos.is_within(VIEWPORT, PANEL), "{pos:?}");
                }
            }
        }
    }

    #[test]
    fn end_consumes_session() {
        let s = begin(Point::new(0, 0), OverlayPosition::new(0, 0));
        end(s);
    }
}
