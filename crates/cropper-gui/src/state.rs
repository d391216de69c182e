use std::path::PathBuf;

use cropper_core::surface::RasterSurface;
use cropper_core::ImageCropper;

use crate::convert::rgba_to_color_image;

/// GPU copies of the two preview layers.
#[derive(Default)]
pub struct PreviewTextures {
    pub image: Option<egui::TextureHandle>,
    pub overlay: Option<egui::TextureHandle>,
    /// Overlay redraw count the uploaded overlay texture reflects.
    overlay_generation: u64,
}

impl PreviewTextures {
    /// Forget both textures, e.g. after the cropper was rebuilt.
    pub fn invalidate(&mut self) {
        self.image = None;
        self.overlay = None;
        self.overlay_generation = 0;
    }

    /// Upload whatever is missing or stale.
    pub fn sync(&mut self, ctx: &egui::Context, cropper: &ImageCropper<RasterSurface>) {
        if self.image.is_none() {
            let image = rgba_to_color_image(cropper.base_image());
            let texture = ctx.load_texture("preview_image", image, egui::TextureOptions::LINEAR);
            self.image = Some(texture);
        }

        let overlay = cropper.overlay();
        if self.overlay.is_none() || self.overlay_generation != overlay.redraw_count() {
            let image = rgba_to_color_image(overlay.surface().image());
            let texture = ctx.load_texture("crop_overlay", image, egui::TextureOptions::NEAREST);
            self.overlay = Some(texture);
            self.overlay_generation = overlay.redraw_count();
        }
    }
}

/// Everything shown around the preview.
#[derive(Default)]
pub struct UIState {
    pub source_path: Option<PathBuf>,
    pub source_size: Option<(u32, u32)>,
    /// Zoom slider value, 0-100.
    pub zoom: f64,
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
