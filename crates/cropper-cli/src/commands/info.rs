use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::{load_source, ViewArgs};

#[derive(Args)]
pub struct InfoArgs {
    /// Input image
    pub file: PathBuf,

    #[command(flatten)]
    pub view: ViewArgs,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let config = args.view.load_config()?;
    let source = load_source(&args.file)?;
    let cropper = args.view.build(&source, config)?;

    let preview = cropper.preview_size();
    let natural = cropper.natural_size();
    let (base_w, base_h) = cropper.base_image().dimensions();
    let view = cropper.view();
    let crop = cropper.crop_rect();

    println!("File:        {}", args.file.display());
    println!("Source:      {}x{}", source.width(), source.height());
    println!("Preview box: {}x{}", preview.width, preview.height);
    println!("Pre-scaled:  {base_w}x{base_h}");
    println!("Natural:     {:.1}x{:.1}", natural.width, natural.height);
    println!("Ratio:       {}", cropper.ratio());
    println!(
        "Crop window: {:.1}x{:.1} at ({:.1}, {:.1})",
        crop.width, crop.height, crop.x, crop.y
    );
    println!(
        "View:        {:.1}x{:.1} at ({:.1}, {:.1}), zoom {:.0} (x{:.2})",
        view.fit_width,
        view.fit_height,
        view.layout_x,
        view.layout_y,
        cropper.zoom(),
        cropper.zoom_scale()
    );
    println!("Output size: {}x{}", crop.width as u32, crop.height as u32);

    Ok(())
}
