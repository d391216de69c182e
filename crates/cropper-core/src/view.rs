use crate::consts::{ZOOM_SLIDER_MAX, ZOOM_SLIDER_MIN};
use crate::geometry::{Point, Rect, Size};

const COVER_TOLERANCE: f64 = 1e-9;

/// Position and displayed size of the image inside the preview.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewState {
    pub layout_x: f64,
    pub layout_y: f64,
    pub fit_width: f64,
    pub fit_height: f64,
}

impl ViewState {
    pub fn new(bounds: Rect) -> Self {
        Self {
            layout_x: bounds.x,
            layout_y: bounds.y,
            fit_width: bounds.width,
            fit_height: bounds.height,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.layout_x, self.layout_y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.fit_width, self.fit_height)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.layout_x, self.layout_y, self.fit_width, self.fit_height)
    }

    pub fn set_position(&mut self, p: Point) {
        self.layout_x = p.x;
        self.layout_y = p.y;
    }

    pub fn set_size(&mut self, size: Size) {
        self.fit_width = size.width;
        self.fit_height = size.height;
    }

    /// True when the displayed image fully covers `window`, up to float
    /// rounding.
    pub fn covers(&self, window: &Rect) -> bool {
        let b = self.bounds();
        b.min_x() <= window.min_x() + COVER_TOLERANCE
            && b.min_y() <= window.min_y() + COVER_TOLERANCE
            && b.max_x() >= window.max_x() - COVER_TOLERANCE
            && b.max_y() >= window.max_y() - COVER_TOLERANCE
    }
}

/// Correct a proposed image position so an image of `size` covers `window`.
///
/// The four checks run unconditionally and in order. When the image is
/// smaller than the window on an axis the far-edge check wins and the window
/// is left partially uncovered.
pub fn clamp_position(proposed: Point, size: Size, window: &Rect) -> Point {
    let mut x = proposed.x;
    let mut y = proposed.y;

    if x > window.min_x() {
        x = window.min_x();
    }
    if y > window.min_y() {
        y = window.min_y();
    }
    if x + size.width < window.max_x() {
        x = window.max_x() - size.width;
    }
    if y + size.height < window.max_y() {
        y = window.max_y() - size.height;
    }

    Point::new(x, y)
}

/// Map a zoom slider value to a display scale: `[0, 100]` -> `[1.0, 2.0]`.
/// Values outside the slider range are clamped first.
pub fn zoom_scale(slider: f64) -> f64 {
    1.0 + slider.clamp(ZOOM_SLIDER_MIN, ZOOM_SLIDER_MAX) / 100.0
}
