use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use cropper_core::io::save_image;
use cropper_core::snapshot::RasterCapture;

use super::{default_output, load_source, ViewArgs};
use crate::summary::print_crop_summary;

#[derive(Args)]
pub struct CropArgs {
    /// Input image
    pub file: PathBuf,

    /// Output image (defaults to <input>_crop.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub view: ViewArgs,
}

pub fn run(args: &CropArgs) -> Result<()> {
    let config = args.view.load_config()?;
    let source = load_source(&args.file)?;
    let mut cropper = args.view.build(&source, config)?;

    let mut capture = RasterCapture::new(cropper.config().resample);
    let snapshot = cropper.snap(&mut capture)?;

    let output = args.output.clone().unwrap_or_else(|| default_output(&args.file));
    save_image(&snapshot, &output)
        .with_context(|| format!("Failed to save {}", output.display()))?;

    print_crop_summary(&args.file, &output, &cropper, source.dimensions());
    Ok(())
}
