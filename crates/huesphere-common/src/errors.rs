use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Rejected parameters for the procedural mesh and texture generators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("sphere tessellation must be at least 1 (got {0})")]
    InvalidTessellation(u32),

    #[error("sphere tessellation {0} needs more indices than a u32 draw count can address")]
    TessellationTooLarge(u32),

    #[error("texture size must be at least 1x1 (got {width}x{height})")]
    InvalidTextureSize { width: u32, height: u32 },
}

/// Host-side failures outside the GPU renderer.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("image export error: {0}")]
    ExportError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("sphere.tessellation = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: sphere.tessellation = 0"
        );
    }

    #[test]
    fn generate_error_display() {
        let err = GenerateError::InvalidTessellation(0);
        assert_eq!(
            err.to_string(),
            "sphere tessellation must be at least 1 (got 0)"
        );

        let err = GenerateError::InvalidTextureSize {
            width: 0,
            height: 16,
        };
        assert_eq!(err.to_string(), "texture size must be at least 1x1 (got 0x16)");
    }

    #[test]
    fn tessellation_too_large_display() {
        let err = GenerateError::TessellationTooLarge(u32::MAX);
        assert!(err.to_string().contains("4294967295"));
        assert!(err.to_string().contains("u32"));
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::ExportError("disk full".into());
        assert_eq!(err.to_string(), "image export error: disk full");
    }
}
