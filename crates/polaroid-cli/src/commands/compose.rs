use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use polaroid_core::composer::make_collage_reported;
use polaroid_core::consts::COLLAGE_IMAGE_COUNT;
use polaroid_core::io::image_io::{load_photo, save_jpeg};
use polaroid_core::progress::{CollageStage, ProgressReporter};
use tracing::info;

use crate::summary::{print_collage_summary, print_intake_warning};

#[derive(Args)]
pub struct ComposeArgs {
    /// Input photos (JPEG or PNG), exactly four
    pub images: Vec<PathBuf>,

    /// Collage config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JPEG quality (1-100), overrides the config
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: Option<u8>,

    /// Output file path, overrides the config
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &ComposeArgs) -> Result<()> {
    if args.images.len() != COLLAGE_IMAGE_COUNT {
        print_intake_warning(args.images.len());
        return Ok(());
    }

    let mut config = super::load_config(args.config.as_deref())?;
    if let Some(ref output) = args.output {
        config.output.path = output.clone();
    }
    if let Some(quality) = args.quality {
        config.output.jpeg_quality = quality;
    }

    print_collage_summary(&config, &args.images);

    let sources = args
        .images
        .iter()
        .map(|path| {
            load_photo(path).with_context(|| format!("Failed to load {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    let pb = ProgressBar::new(COLLAGE_IMAGE_COUNT as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:20} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    let reporter = BarReporter { bar: pb };

    let collage = make_collage_reported(&sources, &config.layout, &reporter)?;

    reporter.bar.set_message("Writing output");
    save_jpeg(collage.image(), &config.output.path, config.output.jpeg_quality)
        .with_context(|| format!("Failed to write {}", config.output.path.display()))?;
    reporter.bar.finish_with_message("Done");

    info!(output = %config.output.path.display(), "Collage saved");
    println!("\nOutput saved to {}", config.output.path.display());

    Ok(())
}

/// Drives an indicatif bar from the composer's stage events.
struct BarReporter {
    bar: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin_stage(&self, stage: CollageStage, total_items: Option<usize>) {
        self.bar.set_message(stage.to_string());
        self.bar.set_length(total_items.unwrap_or(1) as u64);
        self.bar.set_position(0);
    }

    fn advance(&self, items_done: usize) {
        self.bar.set_position(items_done as u64);
    }

    fn finish_stage(&self) {
        if let Some(len) = self.bar.length() {
            self.bar.set_position(len);
        }
    }
}
