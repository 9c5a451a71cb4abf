//! Panel decoration settings.

use dockhost_layout::DisplayPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Draw tab headers on top of each stack.
    pub show_header: bool,
    /// Border width in pixels when headers are shown (valid range: 0-20).
    pub header_border_width: f64,
    /// Border width in pixels when headers are hidden (valid range: 0-20).
    pub bare_border_width: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let policy = DisplayPolicy::default();
        Self {
            show_header: policy.show_header,
            header_border_width: policy.header_border_width,
            bare_border_width: policy.bare_border_width,
        }
    }
}

impl DisplayConfig {
    pub fn policy(&self) -> DisplayPolicy {
        DisplayPolicy {
            show_header: self.show_header,
            header_border_width: self.header_border_width,
            bare_border_width: self.bare_border_width,
        }
    }
}
