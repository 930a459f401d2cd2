use clap::Parser;

/// Huesphere: a unit sphere wrapped in a procedural hue gradient.
#[derive(Parser, Debug)]
#[command(name = "huesphere", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error) or a full filter directive.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Sphere tessellation (latitude and longitude segment count).
    #[arg(long)]
    pub tessellation: Option<u32>,

    /// Texture size as WIDTHxHEIGHT, e.g. 512x256.
    #[arg(long, value_parser = parse_texture_size)]
    pub texture_size: Option<(u32, u32)>,

    /// Write the generated hue texture to a PNG file and exit.
    #[arg(long, value_name = "PATH")]
    pub export_texture: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

/// Parse `WIDTHxHEIGHT` into a pair of non-zero dimensions.
pub fn parse_texture_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let width: u32 = w
        .trim()
        .parse()
        .map_err(|_| format!("invalid width '{w}'"))?;
    let height: u32 = h
        .trim()
        .parse()
        .map_err(|_| format!("invalid height '{h}'"))?;
    if width == 0 || height == 0 {
        return Err(format!("texture size must be at least 1x1, got {width}x{height}"));
    }
    Ok((width, height))
}
