/// Default width of the preview bounding box, in display units.
pub const DEFAULT_PREVIEW_WIDTH: f64 = 580.0;

/// Default height of the preview bounding box, in display units.
pub const DEFAULT_PREVIEW_HEIGHT: f64 = 400.0;

/// Lowest zoom slider value (scale 1.0).
pub const ZOOM_SLIDER_MIN: f64 = 0.0;

/// Highest zoom slider value (scale 2.0).
pub const ZOOM_SLIDER_MAX: f64 = 100.0;

/// Width of the outline drawn around the crop window.
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

/// Alpha of the mask painted outside the crop window (0.6 opacity).
pub const DEFAULT_MASK_ALPHA: u8 = 153;

/// Largest accepted preview width or height. The overlay is rasterised at
/// this size, so it bounds the surface allocation.
pub const MAX_PREVIEW_DIMENSION: f64 = 16384.0;
