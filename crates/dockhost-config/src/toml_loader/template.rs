//! Default TOML config template with inline documentation comments.

pub(crate) fn default_config_toml() -> &'static str {
    r##"# dockhost configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[display]
# show_header = true
# header_border_width = 5.0   # 0-20, used when headers are shown
# bare_border_width = 2.0     # 0-20, used when headers are hidden

[persistence]
# storage_key = "golden_layout"
# directory = "/path/to/layouts"

[logging]
# level = "info"              # trace, debug, info, warn, error
"##
}
