mod common;

use approx::assert_relative_eq;
use image::RgbaImage;

use common::{assert_covers, solid_image, Lcg, RED};
use cropper_core::config::CropperConfig;
use cropper_core::geometry::{Point, Size};
use cropper_core::ratio::AspectRatio;
use cropper_core::surface::{RasterSurface, RecordingSurface};
use cropper_core::{CropperError, ImageCropper};

fn cropper(src: &RgbaImage, rw: f64, rh: f64) -> ImageCropper<RecordingSurface> {
    let ratio = AspectRatio::new(rw, rh).unwrap();
    ImageCropper::new(src, ratio, RecordingSurface::new(Size::new(580.0, 400.0))).unwrap()
}

#[test]
fn test_square_source_sixteen_by_nine() {
    let src = solid_image(1000, 1000, RED);
    let c = cropper(&src, 16.0, 9.0);

    assert_eq!(c.base_image().dimensions(), (400, 400));
    assert_eq!(c.natural_size(), Size::new(400.0, 400.0));
    assert_eq!(c.view().position(), Point::new(90.0, 0.0));

    let rect = c.crop_rect();
    assert_relative_eq!(rect.x, 90.0);
    assert_relative_eq!(rect.y, 87.5);
    assert_relative_eq!(rect.width, 400.0);
    assert_relative_eq!(rect.height, 225.0);
    assert_covers(c.view(), &rect);
}

#[test]
fn test_default_ratio_is_square() {
    let src = solid_image(800, 400, RED);
    let c = ImageCropper::new(
        &src,
        AspectRatio::default(),
        RecordingSurface::new(Size::new(580.0, 400.0)),
    )
    .unwrap();

    // 800x400 -> 580x290 fitted, window keeps the display height.
    assert_eq!(c.base_image().dimensions(), (580, 290));
    let rect = c.crop_rect();
    assert_relative_eq!(rect.width, 290.0);
    assert_relative_eq!(rect.height, 290.0);
    assert_relative_eq!(rect.x, 145.0);
    assert_relative_eq!(rect.y, 55.0);
}

#[test]
fn test_small_source_is_scaled_up() {
    let src = solid_image(100, 50, RED);
    let c = cropper(&src, 1.0, 1.0);
    assert_eq!(c.base_image().dimensions(), (580, 290));
    assert_eq!(c.view().position(), Point::new(0.0, 55.0));
}

#[test]
fn test_custom_preview_box() {
    let config = CropperConfig {
        preview_width: 200.0,
        preview_height: 100.0,
        ..CropperConfig::default()
    };
    let src = solid_image(400, 400, RED);
    let c = ImageCropper::raster(&src, AspectRatio::SQUARE, config).unwrap();

    assert_eq!(c.base_image().dimensions(), (100, 100));
    assert_eq!(c.view().position(), Point::new(50.0, 0.0));
    assert_eq!(c.overlay().surface().image().dimensions(), (200, 100));
}

#[test]
fn test_rejects_zero_dimension_source() {
    let src = RgbaImage::new(0, 10);
    let err = ImageCropper::new(
        &src,
        AspectRatio::SQUARE,
        RecordingSurface::new(Size::new(580.0, 400.0)),
    )
    .err()
    .unwrap();
    assert!(matches!(err, CropperError::InvalidDimensions { width: 0, height: 10 }));
}

#[test]
fn test_rejects_source_that_scales_to_nothing() {
    let src = RgbaImage::new(10_000, 1);
    let result = ImageCropper::new(
        &src,
        AspectRatio::SQUARE,
        RecordingSurface::new(Size::new(580.0, 400.0)),
    );
    assert!(matches!(result, Err(CropperError::InvalidDimensions { .. })));
}

#[test]
fn test_rejects_invalid_config() {
    let config = CropperConfig {
        preview_width: 0.0,
        ..CropperConfig::default()
    };
    let src = solid_image(10, 10, RED);
    let result = ImageCropper::raster(&src, AspectRatio::SQUARE, config);
    assert!(matches!(result, Err(CropperError::Config(_))));
}

#[test]
fn test_drag_on_exactly_covering_image_stays_covered() {
    let src = solid_image(1000, 1000, RED);
    let mut c = cropper(&src, 16.0, 9.0);

    assert!(c.pointer_pressed(Point::new(290.0, 200.0)));
    c.pointer_dragged(Point::new(340.0, 250.0));

    // Horizontal edge already flush with the window: pulled back to x = 90.
    assert_eq!(c.view().position(), Point::new(90.0, 50.0));
    assert_covers(c.view(), &c.crop_rect());
}

#[test]
fn test_drag_deltas_are_incremental() {
    let src = solid_image(1000, 1000, RED);
    let mut c = cropper(&src, 16.0, 9.0);
    c.set_zoom(100.0);
    let start = c.view().position();

    c.pointer_pressed(Point::new(290.0, 200.0));
    c.pointer_dragged(Point::new(300.0, 205.0));
    c.pointer_dragged(Point::new(310.0, 210.0));

    assert_eq!(c.view().position(), Point::new(start.x + 20.0, start.y + 10.0));
}

#[test]
fn test_drag_requires_press_on_image() {
    let src = solid_image(1000, 1000, RED);
    let mut c = cropper(&src, 16.0, 9.0);
    let start = c.view().position();

    // Left of the image (image spans x 90..490).
    assert!(!c.pointer_pressed(Point::new(20.0, 200.0)));
    assert!(!c.is_dragging());
    c.pointer_dragged(Point::new(60.0, 260.0));
    assert_eq!(c.view().position(), start);
}

#[test]
fn test_press_outside_image_ends_stale_drag() {
    let src = solid_image(1000, 1000, RED);
    let mut c = cropper(&src, 16.0, 9.0);
    c.set_zoom(100.0);

    assert!(c.pointer_pressed(Point::new(290.0, 200.0)));
    // Release was never delivered; the next press lands outside the image.
    assert!(!c.pointer_pressed(Point::new(5.0, 5.0)));
    assert!(!c.is_dragging());

    let before = c.view().position();
    c.pointer_dragged(Point::new(320.0, 230.0));
    assert_eq!(c.view().position(), before);
}

#[test]
fn test_press_on_mask_passes_through_to_image() {
    let src = solid_image(1000, 1000, RED);
    let mut c = cropper(&src, 16.0, 9.0);
    c.set_zoom(100.0);

    // Over the dimmed mask, above the crop window, but still on the image.
    let at = Point::new(100.0, 20.0);
    assert!(!c.crop_rect().contains(at));
    assert!(!c.overlay().hit_test(at));
    assert!(c.pointer_pressed(at));

    let start = c.view().position();
    c.pointer_dragged(Point::new(110.0, 30.0));
    assert_eq!(c.view().position(), Point::new(start.x + 10.0, start.y + 10.0));
}

#[test]
fn test_release_ends_drag() {
    let src = solid_image(1000, 1000, RED);
    let mut c = cropper(&src, 16.0, 9.0);
    c.set_zoom(50.0);

    c.pointer_pressed(Point::new(290.0, 200.0));
    assert!(c.is_dragging());
    c.pointer_released();
    assert!(!c.is_dragging());

    let before = c.view().position();
    c.pointer_dragged(Point::new(300.0, 220.0));
    assert_eq!(c.view().position(), before);
}

#[test]
fn test_zoom_max_doubles_and_recenters() {
    let src = solid_image(1000, 1000, RED);
    let mut c = cropper(&src, 16.0, 9.0);
    let center = c.view().bounds().center();

    c.set_zoom(100.0);

    assert_relative_eq!(c.zoom_scale(), 2.0);
    assert_eq!(c.view().size(), Size::new(800.0, 800.0));
    assert_eq!(c.view().position(), Point::new(-110.0, -200.0));
    assert_eq!(c.view().bounds().center(), center);
    assert_covers(c.view(), &c.crop_rect());
}

#[test]
fn test_zoom_centering_without_drag() {
    let src = solid_image(1200, 700, RED);
    let mut c = cropper(&src, 4.0, 3.0);
    let center = c.view().bounds().center();

    for v in [10.0, 35.0, 80.0, 100.0, 60.0, 0.0] {
        c.set_zoom(v);
        let now = c.view().bounds().center();
        assert_relative_eq!(now.x, center.x, epsilon = 1e-9);
        assert_relative_eq!(now.y, center.y, epsilon = 1e-9);
        assert_covers(c.view(), &c.crop_rect());
    }
}

#[test]
fn test_zoom_out_after_drag_is_clamped() {
    let src = solid_image(1000, 1000, RED);
    let mut c = cropper(&src, 16.0, 9.0);
    c.set_zoom(100.0);
    // Push the image as far down-right as the window allows.
    c.pan_by(1000.0, 1000.0);
    assert_eq!(c.view().position(), Point::new(90.0, 87.5));

    // Centre-anchored shrink would open a gap on the left/top; clamp closes it.
    c.set_zoom(0.0);
    assert_eq!(c.view().size(), Size::new(400.0, 400.0));
    assert_eq!(c.view().position(), Point::new(90.0, 87.5));
    assert_covers(c.view(), &c.crop_rect());
}

#[test]
fn test_zoom_value_is_clamped_to_slider_range() {
    let src = solid_image(1000, 1000, RED);
    let mut c = cropper(&src, 1.0, 1.0);
    c.set_zoom(250.0);
    assert_relative_eq!(c.zoom(), 100.0);
    assert_eq!(c.view().size(), Size::new(800.0, 800.0));
    c.set_zoom(-5.0);
    assert_relative_eq!(c.zoom(), 0.0);
    assert_eq!(c.view().size(), Size::new(400.0, 400.0));
}

#[test]
fn test_non_finite_zoom_and_pan_are_ignored() {
    let src = solid_image(1000, 1000, RED);
    let mut c = cropper(&src, 16.0, 9.0);
    c.set_zoom(50.0);
    let view = *c.view();

    c.set_zoom(f64::NAN);
    assert_eq!(*c.view(), view);
    assert_relative_eq!(c.zoom(), 50.0);

    c.pan_by(f64::NAN, 0.0);
    c.pan_by(10.0, f64::INFINITY);
    assert_eq!(*c.view(), view);

    c.pointer_pressed(Point::new(290.0, 200.0));
    c.pointer_dragged(Point::new(f64::NAN, 210.0));
    assert_eq!(*c.view(), view);
    // The baseline survives the dropped event.
    c.pointer_dragged(Point::new(300.0, 210.0));
    let expected = Point::new(view.position().x + 10.0, view.position().y + 10.0);
    assert_eq!(c.view().position(), expected);

    c.set_zoom(f64::INFINITY);
    assert_relative_eq!(c.zoom(), 100.0);
    assert_eq!(c.view().size(), Size::new(800.0, 800.0));
    assert_covers(c.view(), &c.crop_rect());
}

#[test]
fn test_clamp_invariant_over_random_interactions() {
    let sources = [(1000, 1000), (1920, 1080), (600, 2000), (37, 53)];
    let ratios = [(1.0, 1.0), (16.0, 9.0), (9.0, 16.0), (4.0, 3.0), (2.35, 1.0)];
    let mut rng = Lcg::new(7);

    for &(w, h) in &sources {
        for &(rw, rh) in &ratios {
            let src = solid_image(w, h, RED);
            let mut c = cropper(&src, rw, rh);
            let window = c.crop_rect();

            for _ in 0..200 {
                if rng.range(0.0, 1.0) < 0.3 {
                    c.set_zoom(rng.range(0.0, 100.0));
                } else {
                    let press = c.view().bounds().center();
                    c.pointer_pressed(press);
                    let to = Point::new(
                        press.x + rng.range(-300.0, 300.0),
                        press.y + rng.range(-300.0, 300.0),
                    );
                    c.pointer_dragged(to);
                    c.pointer_released();
                }
                assert_covers(c.view(), &window);
                assert_eq!(c.crop_rect(), window);
            }
        }
    }
}

#[test]
fn test_raster_constructor_matches_preview() {
    let src = solid_image(300, 300, RED);
    let c: ImageCropper<RasterSurface> =
        ImageCropper::raster(&src, AspectRatio::SQUARE, CropperConfig::default()).unwrap();
    assert_eq!(c.preview_size(), Size::new(580.0, 400.0));
    assert_eq!(c.ratio(), AspectRatio::SQUARE);
    assert!(c.overlay().draw_stroke());
}
