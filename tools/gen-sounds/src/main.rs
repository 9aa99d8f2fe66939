//! gen-sounds - procedural sound effects for nq-towers
//!
//! Synthesizes the game's three built-in WAV clips (background drone, shoot
//! blip, enemy-death tone) into the assets directory and prints the absolute
//! path of every file written.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod sounds;

#[derive(Parser)]
#[command(name = "gen-sounds")]
#[command(about = "Generate procedural sound effects for nq-towers")]
#[command(version)]
struct Cli {
    /// Output directory for generated audio
    #[arg(short, long, default_value = "assets")]
    output: PathBuf,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let written = sounds::generate_all(&cli.output)?;

    println!("Wrote:");
    for path in &written {
        println!(" - {}", path.display());
    }

    Ok(())
}
