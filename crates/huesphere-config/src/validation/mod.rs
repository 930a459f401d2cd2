//! Full configuration validation.
//!
//! Validates numeric ranges, the camera basis, and color formats. Each
//! domain has its own submodule; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod camera;
mod helpers;
mod misc;
mod scene;


use crate::schema::HuesphereConfig;
use huesphere_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &HuesphereConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    scene::validate_scene(&mut errors, config);
    camera::validate_camera(&mut errors, config);
    misc::validate_window(&mut errors, config);
    misc::validate_render(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
