//! Validation for overlay panel geometry.

use crate::schema::PeekConfig;

use super::helpers::validate_range;

/// Validate overlay placement and size.
pub(crate) fn validate_overlay(errors: &mut Vec<String>, config: &PeekConfig) {
    let overlay = &config.overlay;
    validate_range(errors, "overlay.initial_x", overlay.initial_x, 0, 10_000);
    validate_range(errors, "overlay.initial_y", overlay.initial_y, 0, 10_000);
    validate_range(errors, "overlay.panel_width", overlay.panel_width, 120, 4000);
    validate_range(errors, "overlay.panel_height", overlay.panel_height, 80, 4000);
}
