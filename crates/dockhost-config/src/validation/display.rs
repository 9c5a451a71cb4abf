use crate::schema::DockConfig;

use super::helpers::validate_range_f64;

pub(crate) fn validate_display(errors: &mut Vec<String>, config: &DockConfig) {
    validate_range_f64(
        errors,
        "display.header_border_width",
        config.display.header_border_width,
        0.0,
        20.0,
    );
    validate_range_f64(
        errors,
        "display.bare_border_width",
        config.display.bare_border_width,
        0.0,
        20.0,
    );
}
