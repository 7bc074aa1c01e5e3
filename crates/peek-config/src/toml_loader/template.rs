//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# peek configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[overlay]
# initial_x = 20         # 0-10000
# initial_y = 20         # 0-10000
# panel_width = 480      # 120-4000
# panel_height = 300     # 80-4000

[bridge]
# probe_timeout_ms = 500       # 10-30000
# settle_delay_ms = 100        # 0-10000
# delivery_timeout_ms = 5000   # 10-60000

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
}
