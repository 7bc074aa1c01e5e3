//! Configuration schema types for peek.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod bridge;
mod overlay;
mod system;

pub use bridge::*;
pub use overlay::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PeekConfig {
    pub overlay: OverlayConfig,
    pub bridge: BridgeConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn default_config_has_correct_overlay() {
        let config = PeekConfig::default();
        assert_eq!(config.overlay.initial_x, 20);
        assert_eq!(config.overlay.initial_y, 20);
        assert_eq!(config.overlay.panel_width, 480);
        assert_eq!(config.overlay.panel_height, 300);
    }

    #[test]
    fn default_config_has_correct_bridge() {
        let config = PeekConfig::default();
        assert_eq!(config.bridge.probe_timeout(), Duration::from_millis(500));
        assert_eq!(config.bridge.settle_delay(), Duration::from_millis(100));
        assert_eq!(config.bridge.delivery_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn default_config_has_correct_logging() {
        let config = PeekConfig::default();
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.level.directive(), "peek=info");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: PeekConfig = toml::from_str(
            r#"
[bridge]
settle_delay_ms = 250
"#,
        )
        .unwrap();
        assert_eq!(config.bridge.settle_delay_ms, 250);
        assert_eq!(config.bridge.probe_timeout_ms, 500);
        assert_eq!(config.overlay.panel_width, 480);
    }

    #[test]
    fn log_level_parses_uppercase() {
        let config: PeekConfig = toml::from_str(
            r#"
[logging]
level = "WARNING"
"#,
        )
        .unwrap();
        assert_eq!(config.logging.level, LogLevel::Warning);
        assert_eq!(config.logging.level.directive(), "peek=warn");
    }

    #[test]
    fn unknown_log_level_is_a_parse_error() {
        let res = toml::from_str::<PeekConfig>(
            r#"
[logging]
level = "LOUD"
"#,
        );
        assert!(res.is_err());
    }
}
