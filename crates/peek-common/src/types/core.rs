use serde::{Deserialize, Serialize};
use std::fmt;

/// Pointer coordinates in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Width and height in pixels (viewport or panel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Top-left corner of the overlay panel, kept inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OverlayPosition {
    pub x: i32,
    pub y: i32,
}

impl OverlayPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether the panel fits `[0, viewport - panel]` on both axes.
    ///
    /// An axis where the panel is larger than the viewport only accepts 0.
    pub fn is_within(&self, viewport: Size, panel: Size) -> bool {
        let max_x = (viewport.width - panel.width).max(0);
        let max_y = (viewport.height - panel.height).max(0);
        (0..=max_x).contains(&self.x) && (0..=max_y).contains(&self.y)
    }
}

/// Identifies one host page context (one tab).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContextId(pub u32);

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "context-{}", self.0)
    }
}
