//! Overlay panel geometry.

use peek_common::{OverlayPosition, Size};
use serde::{Deserialize, Serialize};

/// Initial placement and size of the overlay panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Left edge when the overlay is first created (px).
    pub initial_x: u32,
    /// Top edge when the overlay is first created (px).
    pub initial_y: u32,
    /// Panel width including the drag handle (valid range: 120-4000).
    pub panel_width: u32,
    /// Panel height including the drag handle (valid range: 80-4000).
    pub panel_height: u32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            initial_x: 20,
            initial_y: 20,
            panel_width: 480,
            panel_height: 300,
        }
    }
}

impl OverlayConfig {
    pub fn initial_position(&self) -> OverlayPosition {
        OverlayPosition::new(clamp_px(self.initial_x), clamp_px(self.initial_y))
    }

    pub fn panel_size(&self) -> Size {
        Size::new(clamp_px(self.panel_width), clamp_px(self.panel_height))
    }
}

fn clamp_px(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
