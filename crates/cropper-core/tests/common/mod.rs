#![allow(dead_code)]

use image::{Rgba, RgbaImage};

use cropper_core::geometry::Rect;
use cropper_core::view::ViewState;

pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

/// Opaque image filled with a single colour.
pub fn solid_image(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(width, height, color)
}

/// Left half `left`, right half `right`.
pub fn split_image(width: u32, height: u32, left: Rgba<u8>, right: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, _| if x < width / 2 { left } else { right })
}

/// Tiny deterministic generator so property-style tests are reproducible.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Uniform value in `[lo, hi)`.
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let unit = (self.0 >> 11) as f64 / (1u64 << 53) as f64;
        lo + unit * (hi - lo)
    }
}

/// Assert the four clamp inequalities with a small float tolerance.
pub fn assert_covers(view: &ViewState, window: &Rect) {
    let b = view.bounds();
    let eps = 1e-9;
    assert!(b.min_x() <= window.min_x() + eps, "left gap: {b:?} vs {window:?}");
    assert!(b.min_y() <= window.min_y() + eps, "top gap: {b:?} vs {window:?}");
    assert!(b.max_x() >= window.max_x() - eps, "right gap: {b:?} vs {window:?}");
    assert!(b.max_y() >= window.max_y() - eps, "bottom gap: {b:?} vs {window:?}");
}
