//! Display-mode policy stamped onto every layout before it is loaded.

use crate::tree::{DimensionSettings, HeaderSettings, HeaderShow, LayoutConfig};

/// How stacks are decorated. Headers are drawn on top or not at all;
/// maximise and popout are always off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayPolicy {
    pub show_header: bool,
    /// Border width when headers are shown.
    pub header_border_width: f64,
    /// Border width when headers are hidden.
    pub bare_border_width: f64,
}

impl Default for DisplayPolicy {
    fn default() -> Self {
        Self {
            show_header: true,
            header_border_width: 5.0,
            bare_border_width: 2.0,
        }
    }
}

impl DisplayPolicy {
    pub fn border_width(&self) -> f64 {
        if self.show_header {
            self.header_border_width
        } else {
            self.bare_border_width
        }
    }

    pub fn apply(&self, mut config: LayoutConfig) -> LayoutConfig {
        let header = config.header.get_or_insert_with(HeaderSettings::default);
        header.show = Some(if self.show_header {
            HeaderShow::Top
        } else {
            HeaderShow::Hidden
        });
        header.maximise = Some(false);
        header.popout = Some(false);

        let dimensions = config
            .dimensions
            .get_or_insert_with(DimensionSettings::default);
        dimensions.border_width = Some(self.border_width());
        config
    }
}
