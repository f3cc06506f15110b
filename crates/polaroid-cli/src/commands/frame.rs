use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use polaroid_core::framer::make_polaroid;
use polaroid_core::io::image_io::{load_photo, save_image};

#[derive(Args)]
pub struct FrameArgs {
    /// Input photo (JPEG or PNG)
    pub file: PathBuf,

    /// Collage config file (TOML); only the polaroid geometry is used
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output file path (.png for lossless, anything else is JPEG)
    #[arg(short, long, default_value = "polaroid.jpg")]
    pub output: PathBuf,
}

pub fn run(args: &FrameArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let geometry = &config.layout.polaroid;

    let source = load_photo(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    println!("Loaded {}x{} image", source.width(), source.height());

    let polaroid = make_polaroid(&source, geometry)?;
    let content = polaroid.content();
    println!(
        "Framed into {} card, photo {}x{} at ({}, {})",
        polaroid.size(),
        content.width,
        content.height,
        content.x,
        content.y
    );

    save_image(polaroid.image(), &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!("Output saved to {}", args.output.display());

    Ok(())
}
