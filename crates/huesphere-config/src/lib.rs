//! Huesphere configuration system.
//!
//! TOML-based configuration with full validation. All config sections use
//! sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use huesphere_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("tessellation = {}", config.sphere.tessellation);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::HuesphereConfig;

use huesphere_common::ConfigError;
use std::path::Path;

/// Load and validate config from the platform default path.
///
/// Creates a commented default `config.toml` if none exists.
pub fn load_config() -> Result<HuesphereConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit file.
pub fn load_config_from(path: &Path) -> Result<HuesphereConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_json() {
        let json = serde_json::to_string(&HuesphereConfig::default()).unwrap();
        let parsed: HuesphereConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.sphere.tessellation, 32);
        assert_eq!(parsed.render.clear_color, "#000000");
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[texture]\nwidth = 0\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_from_accepts_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[sphere]\ntessellation = 16\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.sphere.tessellation, 16);
    }
}
