//! Lodestone command-line entry point.
//!
//! Generates a world from a seed (and optional JSON5 config file) and reports
//! placement statistics. The placement stream goes into a collecting builder
//! here; an engine integration substitutes its own
//! [`WorldBuilder`](lodestone_core::worldgen::WorldBuilder) sink.
//!
//! ```text
//! lodestone [SEED] [CONFIG_PATH]
//! ```

use std::time::Instant;

use anyhow::{Context, Result};
use lodestone_core::config::WorldConfig;
use lodestone_core::worldgen::{CollectingBuilder, WorldGenerator};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let seed_arg = args.next();
    let config_path = args.next();

    let mut config = match &config_path {
        Some(path) => load_config(path)?,
        None => WorldConfig::default(),
    };
    if let Some(seed) = &seed_arg {
        config.seed = WorldConfig::parse_seed(seed)?;
    }

    let generator = WorldGenerator::new(config)?;
    let mut builder = CollectingBuilder::default();

    let start = Instant::now();
    let summary = generator.generate(&mut builder, &CancellationToken::new())?;
    log::info!(
        "generated {} placements across {} columns in {:?}",
        summary.placements,
        summary.columns,
        start.elapsed()
    );

    Ok(())
}

/// Load a [`WorldConfig`] from a JSON5 file, filling unset options with
/// defaults.
fn load_config(path: &str) -> Result<WorldConfig> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading config file {path}"))?;
    serde_json5::from_str(&text).with_context(|| format!("parsing config file {path}"))
}
