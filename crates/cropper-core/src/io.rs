use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};
use tracing::debug;

use crate::error::Result;

/// Load any supported image file as 8-bit RGBA.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)?;
    debug!(path = %path.display(), width = img.width(), height = img.height(), "Image loaded");
    Ok(img.to_rgba8())
}

/// Save a snapshot, choosing the format from the file extension.
///
/// Formats without an alpha channel (JPEG, BMP) get the RGB channels only.
/// Unknown extensions are written as PNG.
pub fn save_image(img: &RgbaImage, path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg" | "jpeg") => {
            DynamicImage::ImageRgba8(img.clone())
                .to_rgb8()
                .save_with_format(path, ImageFormat::Jpeg)?;
        }
        Some("bmp") => {
            DynamicImage::ImageRgba8(img.clone())
                .to_rgb8()
                .save_with_format(path, ImageFormat::Bmp)?;
        }
        Some("tiff" | "tif") => img.save_with_format(path, ImageFormat::Tiff)?,
        _ => img.save_with_format(path, ImageFormat::Png)?,
    }
    debug!(path = %path.display(), "Image saved");
    Ok(())
}
