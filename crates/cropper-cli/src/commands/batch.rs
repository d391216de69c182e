use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use cropper_core::config::CropperConfig;
use cropper_core::image::ImageFormat;
use cropper_core::io::save_image;
use cropper_core::snapshot::RasterCapture;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::warn;

use super::{load_source, ViewArgs};

#[derive(Args)]
pub struct BatchArgs {
    /// Directory of input images
    pub input_dir: PathBuf,

    /// Directory for the cropped images (created if missing)
    #[arg(short, long)]
    pub output_dir: PathBuf,

    /// Output file extension
    #[arg(long, default_value = "png")]
    pub ext: String,

    #[command(flatten)]
    pub view: ViewArgs,
}

pub fn run(args: &BatchArgs) -> Result<()> {
    let config = args.view.load_config()?;
    let inputs = collect_images(&args.input_dir)?;
    if inputs.is_empty() {
        bail!("No images found in {}", args.input_dir.display());
    }

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("Failed to create {}", args.output_dir.display()))?;

    println!("Cropping {} images (ratio {})...", inputs.len(), args.view.ratio);

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Cropping [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    let failures: Vec<(PathBuf, anyhow::Error)> = inputs
        .par_iter()
        .filter_map(|input| {
            let result = crop_one(input, args, &config);
            pb.inc(1);
            result.err().map(|e| (input.clone(), e))
        })
        .collect();
    pb.finish_and_clear();

    for (path, err) in &failures {
        warn!(path = %path.display(), "{err:#}");
        eprintln!("  failed: {} ({err:#})", path.display());
    }

    let done = inputs.len() - failures.len();
    println!("Saved {done} crops to {}", args.output_dir.display());
    if !failures.is_empty() {
        bail!("{} of {} images failed", failures.len(), inputs.len());
    }
    Ok(())
}

fn crop_one(input: &Path, args: &BatchArgs, config: &CropperConfig) -> Result<()> {
    let source = load_source(input)?;
    let mut cropper = args.view.build(&source, config.clone())?;
    let snapshot = cropper.snap(&mut RasterCapture::new(config.resample))?;

    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let output = args.output_dir.join(format!("{stem}.{}", args.ext));
    save_image(&snapshot, &output)
        .with_context(|| format!("Failed to save {}", output.display()))?;
    Ok(())
}

/// Files in `dir` whose extension names a known image format, sorted.
fn collect_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut images = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && ImageFormat::from_path(&path).is_ok() {
            images.push(path);
        }
    }
    images.sort();
    Ok(images)
}
