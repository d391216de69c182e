//! Plain 2D geometry in display units.
//!
//! All coordinates share the preview's coordinate space: origin at the
//! top-left corner of the preview bounding box, y growing downwards.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn scaled(&self, factor: f64) -> Size {
        Size::new(self.width * factor, self.height * factor)
    }

    /// Width over height.
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }
}

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x() && p.x <= self.max_x() && p.y >= self.min_y() && p.y <= self.max_y()
    }

    /// True when `other` lies entirely inside (or on the border of) `self`.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.min_x() <= other.min_x()
            && self.min_y() <= other.min_y()
            && self.max_x() >= other.max_x()
            && self.max_y() >= other.max_y()
    }
}

/// Uniform scale factor that fits `content` inside `container` while
/// preserving its aspect ratio.
pub fn fit_scale(container: Size, content: Size) -> f64 {
    (container.width / content.width).min(container.height / content.height)
}

/// Rectangle of the given size centred in `container`.
pub fn centered_in(container: Size, size: Size) -> Rect {
    Rect::new(
        (container.width - size.width) / 2.0,
        (container.height - size.height) / 2.0,
        size.width,
        size.height,
    )
}

/// Largest `ratio`-shaped size that fits inside `display`.
///
/// A ratio wider than the display keeps the display width; otherwise the
/// display height is kept.
pub fn crop_window_size(display: Size, ratio: f64) -> Size {
    if ratio > display.aspect() {
        Size::new(display.width, display.width / ratio)
    } else {
        Size::new(display.height * ratio, display.height)
    }
}

/// Pixel index of the first pixel whose centre lies at or after `v`.
///
/// Raster backends use this to snap fractional edges to the pixel grid, so
/// a rectangle covers exactly the pixels whose centres it contains.
pub fn snap_to_grid(v: f64) -> i64 {
    (v - 0.5).ceil() as i64
}
