mod app_state;
mod cli;
mod export;

use std::path::Path;
use std::process::ExitCode;

use huesphere_common::ConfigError;
use huesphere_config::HuesphereConfig;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

/// Default filter when neither the CLI nor the config names a level.
const DEFAULT_DIRECTIVE: &str = "huesphere=info";

fn main() -> ExitCode {
    let args = cli::parse();

    // Config is read before logging starts so its level can seed the filter;
    // a load failure is reported once the subscriber is up.
    let (mut config, load_error) = match load_config(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (HuesphereConfig::default(), Some(e)),
    };

    let filter_spec = log_directive(args.log_level.as_deref(), &config);
    let filter = match filter_spec
        .parse::<Directive>()
        .or_else(|_| DEFAULT_DIRECTIVE.parse())
    {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Huesphere v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    if let Some(e) = load_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    apply_overrides(&mut config, args.tessellation, args.texture_size);
    if let Err(e) = huesphere_config::validation::validate(&config) {
        tracing::error!("Invalid command-line override: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!(
        tessellation = config.sphere.tessellation,
        texture_width = config.texture.width,
        texture_height = config.texture.height,
        "Config loaded"
    );

    if let Some(ref path) = args.export_texture {
        return run_export(&config, Path::new(path));
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut app = app_state::HuesphereApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!("Shutdown complete");

    if app.init_failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn load_config(path: Option<&str>) -> Result<HuesphereConfig, ConfigError> {
    match path {
        Some(path) => huesphere_config::load_config_from(Path::new(path)),
        None => huesphere_config::load_config(),
    }
}

/// `--log-level` wins; a bare level name is scoped to the huesphere crates.
fn log_directive(cli_level: Option<&str>, config: &HuesphereConfig) -> String {
    match cli_level {
        Some(level) if level.contains('=') => level.to_string(),
        Some(level) => format!("huesphere={level}"),
        None => config.logging.level.directive().to_string(),
    }
}

fn apply_overrides(
    config: &mut HuesphereConfig,
    tessellation: Option<u32>,
    texture_size: Option<(u32, u32)>,
) {
    if let Some(n) = tessellation {
        config.sphere.tessellation = n;
    }
    if let Some((width, height)) = texture_size {
        config.texture.width = width;
        config.texture.height = height;
    }
}

fn run_export(config: &HuesphereConfig, path: &Path) -> ExitCode {
    let texture =
        match huesphere_procgen::generate_hue_texture(config.texture.width, config.texture.height)
        {
            Ok(texture) => texture,
            Err(e) => {
                tracing::error!("Texture generation failed: {e}");
                return ExitCode::FAILURE;
            }
        };
    match export::export_texture_png(&texture, path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huesphere_config::schema::LogLevel;

    #[test]
    fn cli_level_overrides_config() {
        let mut config = HuesphereConfig::default();
        config.logging.level = LogLevel::Error;
        assert_eq!(log_directive(Some("debug"), &config), "huesphere=debug");
    }

    #[test]
    fn full_directive_passes_through() {
        let config = HuesphereConfig::default();
        assert_eq!(
            log_directive(Some("wgpu_core=warn"), &config),
            "wgpu_core=warn"
        );
    }

    #[test]
    fn config_level_used_without_cli() {
        let mut config = HuesphereConfig::default();
        assert_eq!(log_directive(None, &config), DEFAULT_DIRECTIVE);
        config.logging.level = LogLevel::Debug;
        assert_eq!(log_directive(None, &config), "huesphere=debug");
    }

    #[test]
    fn overrides_replace_scene_sizes() {
        let mut config = HuesphereConfig::default();
        apply_overrides(&mut config, Some(8), Some((64, 16)));
        assert_eq!(config.sphere.tessellation, 8);
        assert_eq!((config.texture.width, config.texture.height), (64, 16));
    }

    #[test]
    fn missing_overrides_keep_config() {
        let mut config = HuesphereConfig::default();
        apply_overrides(&mut config, None, None);
        assert_eq!(config.sphere.tessellation, 32);
        assert_eq!(config.texture.width, 256);
    }

    #[test]
    fn zero_tessellation_override_fails_validation() {
        let mut config = HuesphereConfig::default();
        apply_overrides(&mut config, Some(0), None);
        assert!(huesphere_config::validation::validate(&config).is_err());
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = load_config(path.to_str()).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn export_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hue.png");
        let mut config = HuesphereConfig::default();
        apply_overrides(&mut config, None, Some((8, 2)));
        run_export(&config, &path);
        assert!(path.exists());
    }
}
