//! Alien invasion simulator CLI
//!
//! Loads a world map, unleashes a number of aliens on it and prints every
//! destroyed city followed by what is left of the map.
//!
//! # Example
//!
//! ```bash
//! alien-invasion map.txt 10 --seed 42
//! RUST_LOG=alien_invasion=debug alien-invasion map.txt 10 --output-dir out/
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use alien_invasion::flush::flush_to_jsonl;
use alien_invasion::{MAX_ROUNDS, SimConfig, load_map, simulate, write_world};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Alien invasion simulator
///
/// Single-threaded and reproducible when the same seed is used.
#[derive(Parser, Debug)]
#[command(name = "alien-invasion")]
#[command(version, about, long_about = None)]
struct Args {
    /// World map file, one city per line
    map: PathBuf,

    /// Number of aliens to place
    aliens: u64,

    /// Random seed for reproducible results. When omitted, a random seed is used.
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of rounds to simulate (at most 10000)
    #[arg(
        long,
        default_value_t = MAX_ROUNDS,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_ROUNDS))
    )]
    max_rounds: u32,

    /// Also write cities.jsonl and destructions.jsonl into this directory
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,alien_invasion=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);

    let mut world = load_map(&args.map)
        .with_context(|| format!("could not load world map {}", args.map.display()))?;

    info!(
        map = %args.map.display(),
        cities = world.len(),
        aliens = args.aliens,
        seed,
        max_rounds = args.max_rounds,
        "starting simulation"
    );

    let config = SimConfig {
        aliens: args.aliens,
        seed,
        max_rounds: args.max_rounds,
    };
    let report = simulate(&mut world, &config).context("simulation failed")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for event in &report.events {
        writeln!(out, "{}", event.destruction)?;
    }
    write_world(&world, &mut out)?;
    out.flush()?;

    if let Some(dir) = &args.output_dir {
        flush_to_jsonl(&world, &report, dir)
            .with_context(|| format!("could not write output to {}", dir.display()))?;
    }

    Ok(())
}
