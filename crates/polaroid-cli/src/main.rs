mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "polaroid", about = "Polaroid-style A4 photo collage generator")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose exactly four photos into a print-ready A4 page
    Compose(commands::compose::ComposeArgs),
    /// Frame a single photo as a polaroid
    Frame(commands::frame::FrameArgs),
    /// Print or save the default layout config as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Compose(args) => commands::compose::run(args),
        Commands::Frame(args) => commands::frame::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
