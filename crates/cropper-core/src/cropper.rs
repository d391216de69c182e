//! The interactive cropper: pan, zoom and snapshot over a fixed crop window.

use image::RgbaImage;
use tracing::{debug, info, warn};

use crate::config::CropperConfig;
use crate::consts::{ZOOM_SLIDER_MAX, ZOOM_SLIDER_MIN};
use crate::drag::DragSession;
use crate::error::{CropperError, Result};
use crate::geometry::{centered_in, crop_window_size, fit_scale, Point, Rect, Size};
use crate::overlay::CropOverlay;
use crate::ratio::AspectRatio;
use crate::snapshot::{Scene, SceneCapture, StrokeGuard};
use crate::surface::{DrawSurface, RasterSurface};
use crate::view::{clamp_position, zoom_scale, ViewState};

/// Image cropping panel with a fixed-ratio crop window.
///
/// The source is pre-scaled into the preview box once. The user then pans
/// the image with pointer drags and scales it with a zoom slider; the image
/// is kept covering the crop window after every change. [`snap`] renders the
/// window's contents.
///
/// [`snap`]: ImageCropper::snap
pub struct ImageCropper<S> {
    config: CropperConfig,
    ratio: AspectRatio,
    base: RgbaImage,
    natural: Size,
    view: ViewState,
    overlay: CropOverlay<S>,
    drag: DragSession,
    zoom: f64,
}

impl ImageCropper<RasterSurface> {
    /// Cropper drawing its overlay into a software raster surface the size of
    /// the preview box.
    pub fn raster(source: &RgbaImage, ratio: AspectRatio, config: CropperConfig) -> Result<Self> {
        let surface = RasterSurface::with_size(config.preview_size());
        Self::with_config(source, ratio, surface, config)
    }
}

impl<S: DrawSurface> ImageCropper<S> {
    pub fn new(source: &RgbaImage, ratio: AspectRatio, surface: S) -> Result<Self> {
        Self::with_config(source, ratio, surface, CropperConfig::default())
    }

    pub fn with_config(
        source: &RgbaImage,
        ratio: AspectRatio,
        surface: S,
        config: CropperConfig,
    ) -> Result<Self> {
        config.validate()?;
        let preview = config.preview_size();

        let base = scale_to_fit(source, preview, &config)?;
        let base_size = Size::new(base.width() as f64, base.height() as f64);
        let natural = base_size.scaled(fit_scale(preview, base_size));
        let view = ViewState::new(centered_in(preview, natural));

        let crop_size = crop_window_size(natural, ratio.value());
        if surface.size() != preview {
            warn!(
                surface = ?surface.size(),
                preview = ?preview,
                "Overlay surface does not match the preview box"
            );
        }
        let overlay = CropOverlay::with_style(preview, crop_size, surface, config.overlay.clone());

        debug!(
            source_w = source.width(),
            source_h = source.height(),
            base_w = base.width(),
            base_h = base.height(),
            natural = ?natural,
            crop = ?overlay.crop_rect(),
            %ratio,
            "Cropper initialised"
        );

        Ok(Self {
            config,
            ratio,
            base,
            natural,
            view,
            overlay,
            drag: DragSession::Idle,
            zoom: ZOOM_SLIDER_MIN,
        })
    }

    /// Begin a drag at `at` (preview coordinates). A press outside the image
    /// ends any drag still in progress. Returns whether a drag started.
    pub fn pointer_pressed(&mut self, at: Point) -> bool {
        if !self.view.bounds().contains(at) {
            self.drag.release();
            return false;
        }
        self.drag.press(at);
        true
    }

    /// Move the image by the pointer's movement since the previous event.
    /// Non-finite positions are dropped and keep the previous baseline.
    pub fn pointer_dragged(&mut self, to: Point) {
        if !to.x.is_finite() || !to.y.is_finite() {
            return;
        }
        if let Some((dx, dy)) = self.drag.advance(to) {
            self.pan_by(dx, dy);
        }
    }

    pub fn pointer_released(&mut self) {
        self.drag.release();
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Translate the image, keeping it over the crop window. Non-finite
    /// offsets are ignored.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        if !dx.is_finite() || !dy.is_finite() {
            warn!(dx, dy, "Ignoring non-finite pan");
            return;
        }
        let p = self.view.position();
        self.move_to(Point::new(p.x + dx, p.y + dy));
    }

    /// Apply a zoom slider value in `[0, 100]`, anchored at the image centre.
    /// NaN is ignored; infinities clamp to the slider ends.
    pub fn set_zoom(&mut self, value: f64) {
        if value.is_nan() {
            warn!("Ignoring NaN zoom value");
            return;
        }
        let old = self.view.size();
        let scale = zoom_scale(value);
        self.zoom = value.clamp(ZOOM_SLIDER_MIN, ZOOM_SLIDER_MAX);

        let new = self.natural.scaled(scale);
        self.view.set_size(new);

        let p = self.view.position();
        self.move_to(Point::new(
            p.x - (new.width - old.width) / 2.0,
            p.y - (new.height - old.height) / 2.0,
        ));
        debug!(zoom = self.zoom, scale, view = ?self.view, "Zoom applied");
    }

    /// Current zoom slider value.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn zoom_scale(&self) -> f64 {
        zoom_scale(self.zoom)
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Displayed image size at zoom 1.0.
    pub fn natural_size(&self) -> Size {
        self.natural
    }

    pub fn crop_rect(&self) -> Rect {
        self.overlay.crop_rect()
    }

    pub fn preview_size(&self) -> Size {
        self.config.preview_size()
    }

    pub fn ratio(&self) -> AspectRatio {
        self.ratio
    }

    pub fn config(&self) -> &CropperConfig {
        &self.config
    }

    /// The pre-scaled source shown in the preview.
    pub fn base_image(&self) -> &RgbaImage {
        &self.base
    }

    pub fn overlay(&self) -> &CropOverlay<S> {
        &self.overlay
    }

    pub fn overlay_mut(&mut self) -> &mut CropOverlay<S> {
        &mut self.overlay
    }

    /// Render the crop window's contents with the stroke hidden.
    ///
    /// The returned buffer is the crop rectangle's size truncated to whole
    /// pixels. The stroke state is restored whether or not capture succeeds.
    pub fn snap<C>(&mut self, capture: &mut C) -> Result<RgbaImage>
    where
        C: SceneCapture + ?Sized,
    {
        let rect = self.overlay.crop_rect();
        let (width, height) = (rect.width as u32, rect.height as u32);
        if width == 0 || height == 0 {
            return Err(CropperError::InvalidDimensions { width, height });
        }

        let guard = StrokeGuard::hide(&mut self.overlay);
        let scene = Scene {
            image: &self.base,
            image_rect: self.view.bounds(),
            overlay: guard.surface().pixels(),
        };
        let snapshot = capture.capture(&scene, rect, width, height)?;
        drop(guard);

        if snapshot.dimensions() != (width, height) {
            return Err(CropperError::Capture(format!(
                "expected {width}x{height} snapshot, got {}x{}",
                snapshot.width(),
                snapshot.height()
            )));
        }

        info!(width, height, zoom = self.zoom, "Snapshot captured");
        Ok(snapshot)
    }

    fn move_to(&mut self, proposed: Point) {
        let window = self.overlay.crop_rect();
        let clamped = clamp_position(proposed, self.view.size(), &window);
        self.view.set_position(clamped);
        if !self.view.covers(&window) {
            warn!(view = ?self.view, window = ?window, "Image is smaller than the crop window");
        }
    }
}

/// Pre-scale `source` so it fits the preview box, truncating to whole pixels.
fn scale_to_fit(source: &RgbaImage, preview: Size, config: &CropperConfig) -> Result<RgbaImage> {
    let (src_w, src_h) = source.dimensions();
    if src_w == 0 || src_h == 0 {
        return Err(CropperError::InvalidDimensions {
            width: src_w,
            height: src_h,
        });
    }

    let ratio = fit_scale(preview, Size::new(src_w as f64, src_h as f64));
    let w = (src_w as f64 * ratio) as u32;
    let h = (src_h as f64 * ratio) as u32;
    if w == 0 || h == 0 {
        return Err(CropperError::InvalidDimensions {
            width: src_w,
            height: src_h,
        });
    }

    if (w, h) == (src_w, src_h) {
        return Ok(source.clone());
    }
    Ok(image::imageops::resize(source, w, h, config.resample.filter()))
}
