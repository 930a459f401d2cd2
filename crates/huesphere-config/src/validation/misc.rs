//! Validation for window and render sections.

use huesphere_common::Color;

use crate::schema::HuesphereConfig;

use super::helpers::validate_range;

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &HuesphereConfig) {
    validate_range(errors, "window.width", config.window.width, 1, 16384);
    validate_range(errors, "window.height", config.window.height, 1, 16384);
}

pub(crate) fn validate_render(errors: &mut Vec<String>, config: &HuesphereConfig) {
    if Color::from_hex(&config.render.clear_color).is_none() {
        errors.push(format!(
            "render.clear_color = {:?} is not a #rrggbb or #rrggbbaa color",
            config.render.clear_color
        ));
    }
}
