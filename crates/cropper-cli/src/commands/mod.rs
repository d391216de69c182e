pub mod batch;
pub mod config;
pub mod crop;
pub mod info;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use cropper_core::config::CropperConfig;
use cropper_core::image::RgbaImage;
use cropper_core::ratio::AspectRatio;
use cropper_core::surface::RasterSurface;
use cropper_core::ImageCropper;

/// Options shared by every command that builds a cropper.
#[derive(Args, Clone)]
pub struct ViewArgs {
    /// Crop aspect ratio as W:H
    #[arg(short, long, default_value = "1:1")]
    pub ratio: AspectRatio,

    /// Zoom slider value (0-100, scale 1.0-2.0), applied before panning
    #[arg(short, long, default_value = "0")]
    pub zoom: f64,

    /// Horizontal pan in preview units (positive moves the image right)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub pan_x: f64,

    /// Vertical pan in preview units (positive moves the image down)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub pan_y: f64,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ViewArgs {
    pub fn load_config(&self) -> Result<CropperConfig> {
        match &self.config {
            Some(path) => CropperConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display())),
            None => Ok(CropperConfig::default()),
        }
    }

    /// Build a cropper and replay the requested zoom and pan.
    pub fn build(
        &self,
        source: &RgbaImage,
        config: CropperConfig,
    ) -> Result<ImageCropper<RasterSurface>> {
        let mut cropper = ImageCropper::raster(source, self.ratio, config)?;
        cropper.set_zoom(self.zoom);
        cropper.pan_by(self.pan_x, self.pan_y);
        Ok(cropper)
    }
}

pub fn load_source(path: &Path) -> Result<RgbaImage> {
    cropper_core::io::load_image(path)
        .with_context(|| format!("Failed to load image {}", path.display()))
}

/// `photo.jpg` -> `photo_crop.png` next to the input.
pub fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    input.with_file_name(format!("{stem}_crop.png"))
}
