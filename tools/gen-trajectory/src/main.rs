//! gen-trajectory - write a synthetic camera path for dataset rendering

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gen-trajectory")]
#[command(about = "Generate trajectory.txt, a half-turn camera arc")]
#[command(version)]
struct Cli {
    /// Output directory
    #[arg(short, long)]
    output: PathBuf,

    /// Number of points
    #[arg(short = 'n', default_value_t = 1)]
    count: usize,

    /// Distance from the camera to the center
    #[arg(short = 'd', default_value_t = 1.0)]
    distance: f64,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let samples = gen_trajectory::half_turn_arc(cli.count, cli.distance)?;
    gen_trajectory::write_trajectory(&cli.output, &samples)
        .with_context(|| format!("Failed to write trajectory into {:?}", cli.output))?;

    Ok(())
}
