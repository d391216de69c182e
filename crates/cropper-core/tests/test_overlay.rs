use image::Rgba;

use cropper_core::config::OverlayStyle;
use cropper_core::geometry::{Point, Rect, Size};
use cropper_core::overlay::CropOverlay;
use cropper_core::surface::{Color, DrawOp, DrawSurface, RasterSurface, RecordingSurface};

fn recording_overlay() -> CropOverlay<RecordingSurface> {
    let size = Size::new(580.0, 400.0);
    CropOverlay::new(size, Size::new(400.0, 225.0), RecordingSurface::new(size))
}

#[test]
fn test_crop_rect_is_centered() {
    let overlay = recording_overlay();
    assert_eq!(overlay.crop_rect(), Rect::new(90.0, 87.5, 400.0, 225.0));
}

#[test]
fn test_redraw_order() {
    let overlay = recording_overlay();
    let full = Rect::new(0.0, 0.0, 580.0, 400.0);
    let crop = overlay.crop_rect();
    let style = OverlayStyle::default();

    assert_eq!(
        overlay.surface().ops(),
        &[
            DrawOp::Clear(full),
            DrawOp::Fill(full, style.mask_color),
            DrawOp::Clear(crop),
            DrawOp::Stroke {
                rect: crop,
                color: Color::WHITE,
                line_width: 2.0,
            },
        ]
    );
}

#[test]
fn test_set_draw_stroke_is_idempotent() {
    let mut overlay = recording_overlay();
    assert!(overlay.draw_stroke());
    assert_eq!(overlay.redraw_count(), 1);

    assert!(!overlay.set_draw_stroke(true));
    assert!(!overlay.set_draw_stroke(true));
    assert_eq!(overlay.redraw_count(), 1);
    assert_eq!(overlay.surface().ops().len(), 4);
}

#[test]
fn test_hidden_stroke_redraw_has_no_stroke() {
    let mut overlay = recording_overlay();
    assert!(overlay.set_draw_stroke(false));
    assert_eq!(overlay.redraw_count(), 2);

    let ops = &overlay.surface().ops()[4..];
    assert_eq!(ops.len(), 3);
    assert!(!ops.iter().any(|op| matches!(op, DrawOp::Stroke { .. })));

    // Second identical call is a no-op.
    assert!(!overlay.set_draw_stroke(false));
    assert_eq!(overlay.surface().ops().len(), 7);
}

#[test]
fn test_overlay_ignores_pointer() {
    let overlay = recording_overlay();
    assert!(!overlay.hit_test(Point::new(10.0, 10.0)));
    assert!(!overlay.hit_test(overlay.crop_rect().center()));
}

#[test]
fn test_raster_overlay_pixels() {
    let overlay = CropOverlay::new(
        Size::new(580.0, 400.0),
        Size::new(400.0, 225.0),
        RasterSurface::new(580, 400),
    );
    let img = overlay.surface().image();

    // Mask outside the window.
    assert_eq!(*img.get_pixel(10, 10), Rgba([0, 0, 0, 153]));
    // Hole inside the window.
    assert_eq!(*img.get_pixel(290, 200), Rgba([0, 0, 0, 0]));
    // 2-unit stroke centred on the top border (y = 87.5 -> rows 86 and 87).
    assert_eq!(*img.get_pixel(290, 86), Rgba([255, 255, 255, 255]));
    assert_eq!(*img.get_pixel(290, 87), Rgba([255, 255, 255, 255]));
    assert_eq!(*img.get_pixel(290, 88), Rgba([0, 0, 0, 0]));
    // Left border at x = 90 -> columns 89 and 90.
    assert_eq!(*img.get_pixel(89, 200), Rgba([255, 255, 255, 255]));
    assert_eq!(*img.get_pixel(90, 200), Rgba([255, 255, 255, 255]));
    assert_eq!(*img.get_pixel(91, 200), Rgba([0, 0, 0, 0]));
}

#[test]
fn test_raster_overlay_stroke_toggle_restores_pixels() {
    let mut overlay = CropOverlay::new(
        Size::new(580.0, 400.0),
        Size::new(400.0, 225.0),
        RasterSurface::new(580, 400),
    );
    let with_stroke = overlay.surface().image().clone();

    overlay.set_draw_stroke(false);
    assert_eq!(*overlay.surface().image().get_pixel(290, 87), Rgba([0, 0, 0, 0]));

    overlay.set_draw_stroke(true);
    assert_eq!(overlay.surface().image(), &with_stroke);
}

#[test]
fn test_custom_style() {
    let style = OverlayStyle {
        mask_color: Color::rgba(20, 40, 60, 255),
        stroke_color: Color::rgba(255, 0, 0, 255),
        stroke_width: 4.0,
    };
    let size = Size::new(100.0, 100.0);
    let overlay = CropOverlay::with_style(
        size,
        Size::new(50.0, 50.0),
        RasterSurface::with_size(size),
        style,
    );
    let img = overlay.surface().image();
    assert_eq!(overlay.surface().size(), size);
    assert_eq!(*img.get_pixel(2, 2), Rgba([20, 40, 60, 255]));
    // Border at x = 25, width 4 -> columns 23..27.
    assert_eq!(*img.get_pixel(23, 50), Rgba([255, 0, 0, 255]));
    assert_eq!(*img.get_pixel(26, 50), Rgba([255, 0, 0, 255]));
    assert_eq!(*img.get_pixel(27, 50), Rgba([0, 0, 0, 0]));
}
