use crate::app::CropperApp;

pub fn show(ctx: &egui::Context, app: &mut CropperApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area: fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve the space so the layout does not jump.
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            if let Some((w, h)) = app.ui_state.source_size {
                ui.label(format!("{w}x{h}"));
                ui.separator();
            }
            if let Some(cropper) = app.cropper.as_ref() {
                let crop = cropper.crop_rect();
                ui.label(format!("Crop: {}x{}", crop.width as u32, crop.height as u32));
                ui.separator();
                ui.label(format!("Zoom: {:.0}%", cropper.zoom_scale() * 100.0));
                ui.separator();
            }
            ui.label(format!("Ratio: {}", app.ratio));
        });

        ui.add_space(2.0);
    });
}
