//! shader-header-gen - embed GLSL sources into a C header
//!
//! Every file of the input directory becomes a `static const GLchar` array in
//! `<output>/shader_sources.h`.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use shader_header_gen::HeaderOptions;

#[derive(Parser)]
#[command(name = "shader-header-gen")]
#[command(about = "Convert a directory of GLSL sources into shader_sources.h")]
#[command(version)]
struct Cli {
    /// Input directory
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory
    #[arg(short, long)]
    output: PathBuf,
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

    tracing::info!("Embedding shaders {:?} -> {:?}", cli.input, cli.output);
    shader_header_gen::generate(&cli.input, &cli.output, &HeaderOptions::default())
        .with_context(|| format!("Failed to generate shader header from {:?}", cli.input))?;

    Ok(())
}
