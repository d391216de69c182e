use std::path::PathBuf;

use anyhow::{Context, Result};
use cropper_core::config::CropperConfig;
use cropper_core::image::RgbaImage;
use cropper_core::io::{load_image, save_image};
use cropper_core::ratio::AspectRatio;
use cropper_core::snapshot::RasterCapture;
use cropper_core::surface::RasterSurface;
use cropper_core::ImageCropper;

use crate::panels;
use crate::state::{PreviewTextures, UIState};

pub struct CropperApp {
    pub config: CropperConfig,
    pub ratio: AspectRatio,
    pub source: Option<RgbaImage>,
    pub cropper: Option<ImageCropper<RasterSurface>>,
    pub textures: PreviewTextures,
    pub ui_state: UIState,
}

impl CropperApp {
    pub fn new(config: CropperConfig, ratio: AspectRatio) -> Self {
        Self {
            config,
            ratio,
            source: None,
            cropper: None,
            textures: PreviewTextures::default(),
            ui_state: UIState::default(),
        }
    }

    /// Load an image and build a fresh cropper for it.
    pub fn open(&mut self, path: PathBuf) {
        match load_image(&path) {
            Ok(image) => {
                self.ui_state.add_log(format!(
                    "Opened: {} ({}x{})",
                    path.display(),
                    image.width(),
                    image.height()
                ));
                self.ui_state.source_size = Some(image.dimensions());
                self.ui_state.source_path = Some(path);
                self.source = Some(image);
                self.rebuild();
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {}: {e}", path.display())),
        }
    }

    pub fn set_ratio(&mut self, ratio: AspectRatio) {
        if ratio != self.ratio {
            self.ratio = ratio;
            self.rebuild();
        }
    }

    /// The crop window is fixed per cropper, so a new ratio or image needs a
    /// new instance.
    fn rebuild(&mut self) {
        self.textures.invalidate();
        self.ui_state.zoom = 0.0;
        self.cropper = None;

        let Some(source) = self.source.as_ref() else {
            return;
        };
        match ImageCropper::raster(source, self.ratio, self.config.clone()) {
            Ok(cropper) => self.cropper = Some(cropper),
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    pub fn apply_zoom(&mut self) {
        if let Some(cropper) = self.cropper.as_mut() {
            cropper.set_zoom(self.ui_state.zoom);
        }
    }

    /// Snapshot the crop window and write it to `path`.
    pub fn save_crop(&mut self, path: PathBuf) {
        match self.snap_to(&path) {
            Ok((w, h)) => self
                .ui_state
                .add_log(format!("Saved: {} ({w}x{h})", path.display())),
            Err(e) => self.ui_state.add_log(format!("ERROR: {e:#}")),
        }
    }

    fn snap_to(&mut self, path: &std::path::Path) -> Result<(u32, u32)> {
        let cropper = self.cropper.as_mut().context("No image loaded")?;
        let snapshot = cropper.snap(&mut RasterCapture::new(self.config.resample))?;
        save_image(&snapshot, path)
            .with_context(|| format!("Failed to save {}", path.display()))?;
        Ok(snapshot.dimensions())
    }
}

impl eframe::App for CropperApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::controls::show(ctx, self);
        panels::status::show(ctx, self);
        panels::preview::show(ctx, self);
    }
}
