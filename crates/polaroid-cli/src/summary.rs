use std::path::PathBuf;

use console::Style;
use polaroid_core::config::CollageConfig;
use polaroid_core::consts::COLLAGE_IMAGE_COUNT;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    warning: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            warning: Style::new().yellow().bold(),
            path: Style::new().underlined(),
        }
    }
}

/// Advisory shown when the request does not carry exactly four photos.
pub fn print_intake_warning(count: usize) {
    let s = Styles::new();
    eprintln!(
        "{} Please provide exactly {COLLAGE_IMAGE_COUNT} images (got {count}).",
        s.warning.apply_to("warning:")
    );
}

pub fn print_collage_summary(config: &CollageConfig, inputs: &[PathBuf]) {
    let s = Styles::new();
    let layout = &config.layout;
    let frame = &layout.polaroid;

    println!();
    println!("  {}", s.title.apply_to("Polaroid Collage"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(16)));
    println!();

    println!("  {}", s.header.apply_to("Photos"));
    for (i, (path, slot)) in inputs.iter().zip(&layout.slot_positions).enumerate() {
        println!(
            "    {}. {:<10}{}",
            s.label.apply_to(i + 1),
            s.value.apply_to(slot.to_string()),
            s.path.apply_to(path.display())
        );
    }
    println!();

    println!("  {}", s.header.apply_to("Layout"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Page"),
        s.value.apply_to(layout.canvas_size)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Polaroid"),
        s.value.apply_to(frame.output_size)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Frame"),
        s.value.apply_to(format!(
            "{} px, bottom {} px",
            frame.frame_width, frame.bottom_frame_height
        ))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Colours"),
        s.value
            .apply_to(format!(
                "page {}, card {}, border {}",
                layout.background, frame.background, frame.border
            ))
    );
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.path.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Quality"),
        s.value.apply_to(config.output.jpeg_quality)
    );
    println!();
}
