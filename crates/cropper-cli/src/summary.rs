use std::path::Path;

use console::Style;
use cropper_core::surface::DrawSurface;
use cropper_core::ImageCropper;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_crop_summary<S: DrawSurface>(
    input: &Path,
    output: &Path,
    cropper: &ImageCropper<S>,
    source_size: (u32, u32),
) {
    let s = Styles::new();
    let crop = cropper.crop_rect();

    println!();
    println!("  {}", s.title.apply_to("Crop"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();

    println!("  {:<14}{}", s.label.apply_to("Input"), s.path.apply_to(input.display()));
    println!("  {:<14}{}", s.label.apply_to("Output"), s.path.apply_to(output.display()));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Source"),
        s.value.apply_to(format!("{}x{}", source_size.0, source_size.1))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Ratio"),
        s.value.apply_to(cropper.ratio())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Zoom"),
        s.value.apply_to(format!("{:.0} (x{:.2})", cropper.zoom(), cropper.zoom_scale()))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Result"),
        s.value.apply_to(format!("{}x{}", crop.width as u32, crop.height as u32))
    );
    println!();
}
