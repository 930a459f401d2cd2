//! `--export-texture`: write the generated hue texture to disk.

use std::path::Path;

use huesphere_common::PlatformError;
use huesphere_procgen::HueTexture;

/// Save `texture` as an 8-bit RGBA PNG.
pub fn export_texture_png(texture: &HueTexture, path: &Path) -> Result<(), PlatformError> {
    let image = image::RgbaImage::from_raw(texture.width, texture.height, texture.to_rgba8())
        .ok_or_else(|| {
            PlatformError::ExportError(format!(
                "pixel buffer does not match {}x{}",
                texture.width, texture.height
            ))
        })?;

    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| PlatformError::ExportError(format!("{}: {e}", path.display())))?;

    tracing::info!(
        path = %path.display(),
        width = texture.width,
        height = texture.height,
        "hue texture exported"
    );
    Ok(())
}
