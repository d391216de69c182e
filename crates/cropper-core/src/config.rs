use std::path::Path;

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_MASK_ALPHA, DEFAULT_PREVIEW_HEIGHT, DEFAULT_PREVIEW_WIDTH, DEFAULT_STROKE_WIDTH,
    MAX_PREVIEW_DIMENSION,
};
use crate::error::{CropperError, Result};
use crate::geometry::Size;
use crate::surface::Color;

/// Settings shared by every cropper instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropperConfig {
    /// Width of the preview bounding box.
    pub preview_width: f64,
    /// Height of the preview bounding box.
    pub preview_height: f64,
    pub overlay: OverlayStyle,
    /// Filter used when pre-scaling the source and rendering snapshots.
    pub resample: Resample,
}

impl Default for CropperConfig {
    fn default() -> Self {
        Self {
            preview_width: DEFAULT_PREVIEW_WIDTH,
            preview_height: DEFAULT_PREVIEW_HEIGHT,
            overlay: OverlayStyle::default(),
            resample: Resample::default(),
        }
    }
}

impl CropperConfig {
    pub fn preview_size(&self) -> Size {
        Size::new(self.preview_width, self.preview_height)
    }

    pub fn validate(&self) -> Result<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.preview_width) || !positive(self.preview_height) {
            return Err(CropperError::Config(format!(
                "preview box must be positive, got {}x{}",
                self.preview_width, self.preview_height
            )));
        }
        let max = MAX_PREVIEW_DIMENSION;
        if self.preview_width > max || self.preview_height > max {
            return Err(CropperError::Config(format!(
                "preview box {}x{} exceeds the {MAX_PREVIEW_DIMENSION} limit",
                self.preview_width, self.preview_height
            )));
        }
        if !positive(self.overlay.stroke_width) {
            return Err(CropperError::Config(format!(
                "stroke width must be positive, got {}",
                self.overlay.stroke_width
            )));
        }
        Ok(())
    }

    /// Read and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CropperConfig =
            toml::from_str(content).map_err(|e| CropperError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CropperError::Config(e.to_string()))
    }
}

/// Colours and line width of the crop overlay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    pub mask_color: Color,
    pub stroke_color: Color,
    pub stroke_width: f64,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            mask_color: Color::rgba(0, 0, 0, DEFAULT_MASK_ALPHA),
            stroke_color: Color::WHITE,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resample {
    Nearest,
    #[default]
    Triangle,
    CatmullRom,
    Lanczos3,
}

impl Resample {
    pub fn filter(self) -> FilterType {
        match self {
            Self::Nearest => FilterType::Nearest,
            Self::Triangle => FilterType::Triangle,
            Self::CatmullRom => FilterType::CatmullRom,
            Self::Lanczos3 => FilterType::Lanczos3,
        }
    }
}
