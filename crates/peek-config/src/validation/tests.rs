//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = PeekConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_panel_width_too_small() {
    let mut config = PeekConfig::default();
    config.overlay.panel_width = 50;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("overlay.panel_width"));
}

#[test]
fn catches_panel_height_too_large() {
    let mut config = PeekConfig::default();
    config.overlay.panel_height = 5000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("overlay.panel_height"));
}

#[test]
fn catches_initial_position_out_of_range() {
    let mut config = PeekConfig::default();
    config.overlay.initial_x = 20_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("overlay.initial_x"));
}

#[test]
fn catches_probe_timeout_too_small() {
    let mut config = PeekConfig::default();
    config.bridge.probe_timeout_ms = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("bridge.probe_timeout_ms"));
}

#[test]
fn zero_settle_delay_is_allowed() {
    let mut config = PeekConfig::default();
    config.bridge.settle_delay_ms = 0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_delivery_timeout_too_large() {
    let mut config = PeekConfig::default();
    config.bridge.delivery_timeout_ms = 120_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("bridge.delivery_timeout_ms"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = PeekConfig::default();
    config.overlay.panel_width = 1;
    config.bridge.probe_timeout_ms = 1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("overlay.panel_width"));
    assert!(err.contains("bridge.probe_timeout_ms"));
    assert!(err.contains("; "));
}
