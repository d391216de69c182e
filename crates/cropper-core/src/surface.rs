//! Immediate-mode drawing surfaces used by the crop overlay.

use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::geometry::{snap_to_grid, Rect, Size};

/// Straight (non-premultiplied) 8-bit RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }
}

impl From<[u8; 4]> for Color {
    fn from(c: [u8; 4]) -> Self {
        Color::rgba(c[0], c[1], c[2], c[3])
    }
}

impl From<Color> for [u8; 4] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

/// A 2D drawing capability supplied by the host toolkit.
pub trait DrawSurface {
    /// Drawable area in display units.
    fn size(&self) -> Size;

    /// Reset the rectangle to fully transparent.
    fn clear_rect(&mut self, rect: Rect);

    /// Paint the rectangle with `color`, blended over existing content.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Outline the rectangle with a line of `line_width` centred on its border.
    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f64);

    /// Rasterised contents, for surfaces that keep a pixel buffer.
    fn pixels(&self) -> Option<&RgbaImage> {
        None
    }
}

/// One recorded drawing command.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(Rect),
    Fill(Rect, Color),
    Stroke {
        rect: Rect,
        color: Color,
        line_width: f64,
    },
}

/// Surface that records commands instead of drawing them.
///
/// Useful for hosts that replay a display list, and for inspecting what the
/// overlay drew.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    size: Size,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::Clear(rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::Fill(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f64) {
        self.ops.push(DrawOp::Stroke {
            rect,
            color,
            line_width,
        });
    }
}

/// Software surface backed by an RGBA pixel buffer, one pixel per unit.
#[derive(Clone, Debug)]
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// Surface large enough to cover `size`, rounding partial pixels up.
    pub fn with_size(size: Size) -> Self {
        Self::new(size.width.ceil() as u32, size.height.ceil() as u32)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Pixel span `[x0, x1) x [y0, y1)` covered by `rect`, clipped to the buffer.
    fn pixel_span(&self, rect: Rect) -> Option<(u32, u32, u32, u32)> {
        let (w, h) = (self.image.width() as i64, self.image.height() as i64);
        let x0 = snap_to_grid(rect.min_x()).clamp(0, w);
        let y0 = snap_to_grid(rect.min_y()).clamp(0, h);
        let x1 = snap_to_grid(rect.max_x()).clamp(0, w);
        let y1 = snap_to_grid(rect.max_y()).clamp(0, h);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}

impl DrawSurface for RasterSurface {
    fn size(&self) -> Size {
        Size::new(self.image.width() as f64, self.image.height() as f64)
    }

    fn clear_rect(&mut self, rect: Rect) {
        let Some((x0, y0, x1, y1)) = self.pixel_span(rect) else {
            return;
        };
        for y in y0..y1 {
            for x in x0..x1 {
                self.image.put_pixel(x, y, Color::TRANSPARENT.to_rgba());
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some((x0, y0, x1, y1)) = self.pixel_span(rect) else {
            return;
        };
        for y in y0..y1 {
            for x in x0..x1 {
                let dst = self.image.get_pixel_mut(x, y);
                *dst = blend_over(*dst, color);
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f64) {
        let half = line_width / 2.0;
        let outer = Rect::new(
            rect.x - half,
            rect.y - half,
            rect.width + line_width,
            rect.height + line_width,
        );

        // Top and bottom bands span the full outer width; the side bands
        // fill the gap between them so no pixel is blended twice.
        self.fill_rect(Rect::new(outer.x, outer.y, outer.width, line_width), color);
        self.fill_rect(
            Rect::new(outer.x, rect.max_y() - half, outer.width, line_width),
            color,
        );
        let side_height = rect.height - line_width;
        if side_height > 0.0 {
            self.fill_rect(Rect::new(outer.x, rect.y + half, line_width, side_height), color);
            self.fill_rect(
                Rect::new(rect.max_x() - half, rect.y + half, line_width, side_height),
                color,
            );
        }
    }

    fn pixels(&self) -> Option<&RgbaImage> {
        Some(&self.image)
    }
}

/// Porter-Duff source-over of a straight-alpha colour onto a pixel.
fn blend_over(dst: Rgba<u8>, src: Color) -> Rgba<u8> {
    let sa = src.a as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Color::TRANSPARENT.to_rgba();
    }
    let channel = |s: u8, d: u8| {
        let v = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
        v.round().clamp(0.0, 255.0) as u8
    };
    Rgba([
        channel(src.r, dst[0]),
        channel(src.g, dst[1]),
        channel(src.b, dst[2]),
        (out_a * 255.0).round() as u8,
    ])
}
