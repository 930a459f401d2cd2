//! Sphere and texture parameter validation.

use crate::schema::HuesphereConfig;

use super::helpers::validate_range;

pub(crate) fn validate_scene(errors: &mut Vec<String>, config: &HuesphereConfig) {
    validate_range(
        errors,
        "sphere.tessellation",
        config.sphere.tessellation,
        1,
        1024,
    );
    validate_range(errors, "texture.width", config.texture.width, 1, 8192);
    validate_range(errors, "texture.height", config.texture.height, 1, 8192);
}
