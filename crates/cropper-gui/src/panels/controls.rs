use cropper_core::consts::{ZOOM_SLIDER_MAX, ZOOM_SLIDER_MIN};
use cropper_core::ratio::CropAspect;

use crate::app::CropperApp;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp"];

pub fn show(ctx: &egui::Context, app: &mut CropperApp) {
    egui::TopBottomPanel::top("controls").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.button("Open\u{2026}").clicked() {
                open_file(app);
            }

            ui.separator();
            ratio_picker(ui, app);

            ui.separator();
            let loaded = app.cropper.is_some();
            if ui
                .add_enabled(loaded, egui::Button::new("Save crop\u{2026}"))
                .clicked()
            {
                save_file(app);
            }
        });

        ui.add_enabled_ui(app.cropper.is_some(), |ui| {
            let range = ZOOM_SLIDER_MIN..=ZOOM_SLIDER_MAX;
            let slider = egui::Slider::new(&mut app.ui_state.zoom, range)
                .text("Zoom")
                .fixed_decimals(0);
            if ui.add(slider).changed() {
                app.apply_zoom();
            }
        });
        ui.add_space(4.0);

        let open = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
        let save = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
        if ctx.input_mut(|i| i.consume_shortcut(&open)) {
            open_file(app);
        }
        if app.cropper.is_some() && ctx.input_mut(|i| i.consume_shortcut(&save)) {
            save_file(app);
        }
    });
}

fn ratio_picker(ui: &mut egui::Ui, app: &mut CropperApp) {
    ui.label("Ratio:");
    let mut selected = app.ratio;
    let is_preset = CropAspect::ALL.iter().any(|a| a.ratio() == selected);
    let text = if is_preset {
        selected.to_string()
    } else {
        format!("{selected} (custom)")
    };

    egui::ComboBox::from_id_salt("crop_aspect_ratio")
        .selected_text(text)
        .width(100.0)
        .show_ui(ui, |ui| {
            for &aspect in CropAspect::ALL {
                ui.selectable_value(&mut selected, aspect.ratio(), aspect.to_string());
            }
        });

    app.set_ratio(selected);
}

fn open_file(app: &mut CropperApp) {
    if let Some(path) = rfd::FileDialog::new()
        .add_filter("Images", IMAGE_EXTENSIONS)
        .add_filter("All files", &["*"])
        .pick_file()
    {
        app.open(path);
    }
}

fn save_file(app: &mut CropperApp) {
    let file_name = app
        .ui_state
        .source_path
        .as_ref()
        .and_then(|p| p.file_stem())
        .map(|s| format!("{}_crop.png", s.to_string_lossy()))
        .unwrap_or_else(|| "crop.png".to_string());

    if let Some(path) = rfd::FileDialog::new()
        .add_filter("PNG", &["png"])
        .add_filter("TIFF", &["tiff", "tif"])
        .add_filter("JPEG", &["jpg", "jpeg"])
        .set_file_name(file_name)
        .save_file()
    {
        app.save_crop(path);
    }
}
