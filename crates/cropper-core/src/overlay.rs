//! Darkened mask with a transparent, centred crop window.

use tracing::debug;

use crate::config::OverlayStyle;
use crate::geometry::{centered_in, Point, Rect, Size};
use crate::surface::DrawSurface;

/// Renders the mask and crop window onto a drawing surface.
///
/// The window size is fixed at construction and always centred in the
/// overlay. The overlay never takes pointer input.
pub struct CropOverlay<S> {
    overlay_size: Size,
    crop_size: Size,
    style: OverlayStyle,
    draw_stroke: bool,
    redraws: u64,
    surface: S,
}

impl<S: DrawSurface> CropOverlay<S> {
    pub fn new(overlay_size: Size, crop_size: Size, surface: S) -> Self {
        Self::with_style(overlay_size, crop_size, surface, OverlayStyle::default())
    }

    pub fn with_style(
        overlay_size: Size,
        crop_size: Size,
        surface: S,
        style: OverlayStyle,
    ) -> Self {
        let mut overlay = Self {
            overlay_size,
            crop_size,
            style,
            draw_stroke: true,
            redraws: 0,
            surface,
        };
        overlay.draw();
        overlay
    }

    /// The crop window, centred in the overlay.
    pub fn crop_rect(&self) -> Rect {
        centered_in(self.overlay_size, self.crop_size)
    }

    pub fn overlay_size(&self) -> Size {
        self.overlay_size
    }

    pub fn draw_stroke(&self) -> bool {
        self.draw_stroke
    }

    /// Show or hide the window outline. Returns whether a redraw happened.
    pub fn set_draw_stroke(&mut self, draw: bool) -> bool {
        if self.draw_stroke == draw {
            return false;
        }
        self.draw_stroke = draw;
        self.draw();
        true
    }

    /// The overlay is transparent to hit-testing.
    pub fn hit_test(&self, _point: Point) -> bool {
        false
    }

    /// Number of times the surface has been redrawn. Hosts compare this to
    /// know when an uploaded copy of the surface is stale.
    pub fn redraw_count(&self) -> u64 {
        self.redraws
    }

    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    // Stroke goes last so the hole punch does not erase it.
    fn draw(&mut self) {
        let full = Rect::from_origin_size(Point::default(), self.overlay_size);
        let crop = self.crop_rect();

        self.surface.clear_rect(full);
        self.surface.fill_rect(full, self.style.mask_color);
        self.surface.clear_rect(crop);
        if self.draw_stroke {
            self.surface
                .stroke_rect(crop, self.style.stroke_color, self.style.stroke_width);
        }

        self.redraws += 1;
        debug!(stroke = self.draw_stroke, redraws = self.redraws, "Overlay redrawn");
    }
}
