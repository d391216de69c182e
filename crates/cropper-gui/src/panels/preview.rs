use cropper_core::geometry::{Point, Rect};
use cropper_core::surface::RasterSurface;
use cropper_core::ImageCropper;

use crate::app::CropperApp;

pub fn show(ctx: &egui::Context, app: &mut CropperApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let Some(cropper) = app.cropper.as_mut() else {
            show_placeholder(ui);
            return;
        };

        let preview = cropper.preview_size();
        let size = egui::vec2(preview.width as f32, preview.height as f32);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::drag());

        handle_drag(ctx, &response, cropper, rect.min);
        app.textures.sync(ctx, cropper);

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, egui::Color32::from_gray(30));

        if let Some(texture) = &app.textures.image {
            let img_rect = to_screen(cropper.view().bounds(), rect.min);
            painter.image(texture.id(), img_rect, full_uv(), egui::Color32::WHITE);
        }
        if let Some(texture) = &app.textures.overlay {
            let overlay_rect = egui::Rect::from_min_size(
                rect.min,
                egui::vec2(texture.size()[0] as f32, texture.size()[1] as f32),
            );
            painter.image(texture.id(), overlay_rect, full_uv(), egui::Color32::WHITE);
        }
    });
}

/// Route pointer events on the preview to the cropper.
fn handle_drag(
    ctx: &egui::Context,
    response: &egui::Response,
    cropper: &mut ImageCropper<RasterSurface>,
    origin: egui::Pos2,
) {
    if response.drag_started_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            let local = to_local(pos, origin);
            // Presses the overlay claims never reach the image.
            if !cropper.overlay().hit_test(local) {
                cropper.pointer_pressed(local);
            }
        }
    }

    if response.dragged_by(egui::PointerButton::Primary) && cropper.is_dragging() {
        if let Some(pos) = response.interact_pointer_pos() {
            cropper.pointer_dragged(to_local(pos, origin));
        }
        ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
    } else if response.hovered() {
        ctx.set_cursor_icon(egui::CursorIcon::Grab);
    }

    if response.drag_stopped() {
        cropper.pointer_released();
    }
}

fn to_local(pos: egui::Pos2, origin: egui::Pos2) -> Point {
    Point::new((pos.x - origin.x) as f64, (pos.y - origin.y) as f64)
}

fn to_screen(r: Rect, origin: egui::Pos2) -> egui::Rect {
    egui::Rect::from_min_size(
        origin + egui::vec2(r.x as f32, r.y as f32),
        egui::vec2(r.width as f32, r.height as f32),
    )
}

fn full_uv() -> egui::Rect {
    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0))
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open an image to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
