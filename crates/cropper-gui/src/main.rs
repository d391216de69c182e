mod app;
mod convert;
mod panels;
mod state;

use std::path::PathBuf;

use clap::Parser;
use cropper_core::config::CropperConfig;
use cropper_core::ratio::AspectRatio;

#[derive(Parser)]
#[command(name = "cropper-gui", about = "Interactive fixed-ratio image cropper")]
#[command(version)]
struct GuiArgs {
    /// Image to open on startup
    image: Option<PathBuf>,

    /// Crop aspect ratio as W:H
    #[arg(short, long, default_value = "1:1")]
    ratio: AspectRatio,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = GuiArgs::parse();
    let config = match &args.config {
        Some(path) => CropperConfig::load(path).unwrap_or_else(|e| {
            tracing::error!(path = %path.display(), "Ignoring config: {e}");
            CropperConfig::default()
        }),
        None => CropperConfig::default(),
    };

    let width = config.preview_width as f32 + 40.0;
    let height = config.preview_height as f32 + 220.0;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width.max(640.0), height])
            .with_min_inner_size([480.0, 400.0])
            .with_title("Image Cropper"),
        ..Default::default()
    };

    eframe::run_native(
        "ImageCropper",
        options,
        Box::new(move |_cc| {
            let mut app = app::CropperApp::new(config, args.ratio);
            if let Some(path) = args.image {
                app.open(path);
            }
            Ok(Box::new(app))
        }),
    )
}
