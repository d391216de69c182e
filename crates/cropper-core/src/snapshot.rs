//! Capturing the crop viewport of the layered preview.

use std::ops::Deref;

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::config::Resample;
use crate::error::Result;
use crate::geometry::{snap_to_grid, Rect};
use crate::overlay::CropOverlay;
use crate::surface::DrawSurface;

/// The layered preview: base image at its view transform, overlay on top.
pub struct Scene<'a> {
    pub image: &'a RgbaImage,
    /// Where the image is displayed, in preview coordinates.
    pub image_rect: Rect,
    /// Rasterised overlay layer covering the preview from its origin.
    pub overlay: Option<&'a RgbaImage>,
}

/// Renders a sub-region of a scene into a pixel buffer.
pub trait SceneCapture {
    /// Capture `viewport` (preview coordinates) into a `width` x `height`
    /// buffer. Pixels not covered by any layer stay fully transparent.
    fn capture(
        &mut self,
        scene: &Scene<'_>,
        viewport: Rect,
        width: u32,
        height: u32,
    ) -> Result<RgbaImage>;
}

/// Software compositor built on `image::imageops`.
#[derive(Clone, Copy, Debug)]
pub struct RasterCapture {
    filter: FilterType,
}

impl RasterCapture {
    pub fn new(resample: Resample) -> Self {
        Self {
            filter: resample.filter(),
        }
    }
}

impl Default for RasterCapture {
    fn default() -> Self {
        Self::new(Resample::default())
    }
}

impl SceneCapture for RasterCapture {
    fn capture(
        &mut self,
        scene: &Scene<'_>,
        viewport: Rect,
        width: u32,
        height: u32,
    ) -> Result<RgbaImage> {
        let mut canvas = RgbaImage::new(width, height);
        let origin_x = snap_to_grid(viewport.min_x());
        let origin_y = snap_to_grid(viewport.min_y());

        let rect = scene.image_rect;
        let left = snap_to_grid(rect.min_x());
        let top = snap_to_grid(rect.min_y());
        let target_w = (snap_to_grid(rect.max_x()) - left).max(0) as u32;
        let target_h = (snap_to_grid(rect.max_y()) - top).max(0) as u32;

        if target_w > 0 && target_h > 0 {
            let (x, y) = (left - origin_x, top - origin_y);
            if scene.image.dimensions() == (target_w, target_h) {
                imageops::overlay(&mut canvas, scene.image, x, y);
            } else {
                let resized = imageops::resize(scene.image, target_w, target_h, self.filter);
                imageops::overlay(&mut canvas, &resized, x, y);
            }
        }

        if let Some(overlay) = scene.overlay {
            imageops::overlay(&mut canvas, overlay, -origin_x, -origin_y);
        }

        Ok(canvas)
    }
}

/// Hides the overlay stroke for as long as it lives and restores the
/// previous state on drop, including on error and unwind paths.
pub struct StrokeGuard<'a, S: DrawSurface> {
    overlay: &'a mut CropOverlay<S>,
    previous: bool,
}

impl<'a, S: DrawSurface> StrokeGuard<'a, S> {
    pub fn hide(overlay: &'a mut CropOverlay<S>) -> Self {
        let previous = overlay.draw_stroke();
        overlay.set_draw_stroke(false);
        Self { overlay, previous }
    }
}

impl<S: DrawSurface> Deref for StrokeGuard<'_, S> {
    type Target = CropOverlay<S>;

    fn deref(&self) -> &Self::Target {
        self.overlay
    }
}

impl<S: DrawSurface> Drop for StrokeGuard<'_, S> {
    fn drop(&mut self) {
        self.overlay.set_draw_stroke(self.previous);
    }
}
