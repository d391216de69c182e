use thiserror::Error;

#[derive(Error, Debug)]
pub enum CropperError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid aspect ratio: {width}:{height} (both components must be > 0)")]
    InvalidRatio { width: f64, height: f64 },

    #[error("Cannot parse aspect ratio '{0}' (expected W:H)")]
    ParseRatio(String),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Snapshot capture failed: {0}")]
    Capture(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, CropperError>;
