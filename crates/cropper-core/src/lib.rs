pub mod config;
pub mod consts;
pub mod cropper;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod io;
pub mod overlay;
pub mod ratio;
pub mod snapshot;
pub mod surface;
pub mod view;

pub use cropper::ImageCropper;
pub use error::{CropperError, Result};

pub use image;
