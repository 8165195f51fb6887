//! Where the demo's road network and traffic model come from.
//!
//! With no arguments the demo runs on the 10 × 10 synthetic grid around
//! central Jakarta.  `--graph FILE` loads a raw graph from JSON instead (see
//! `data/menteng.json`), and `--config FILE` overrides the traffic model from
//! TOML (see `config.toml`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use rc_closure::SessionBuilder;
use rc_core::TrafficConfig;
use rc_network::{GridSpec, RawGraph, synthetic_grid};

/// Parsed command line.
#[derive(Parser, Debug)]
#[command(about = "Close the busiest roads of a network and export the result", long_about = None)]
pub struct Args {
    /// Traffic model overrides (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Raw graph to load (JSON) instead of the synthetic grid
    #[arg(short, long)]
    pub graph: Option<PathBuf>,

    /// Output folder; `closed/` and `reset/` are written below it
    #[arg(short, long, default_value = "output/grid")]
    pub out: PathBuf,
}

pub fn load_config(path: Option<&Path>) -> Result<TrafficConfig> {
    let Some(path) = path else {
        return Ok(TrafficConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

pub fn load_graph(path: &Path) -> Result<RawGraph> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading graph {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing graph {}", path.display()))
}

/// Session builder for the selected network.
pub fn session_builder(graph: Option<&Path>) -> Result<SessionBuilder> {
    match graph {
        Some(path) => Ok(SessionBuilder::new(load_graph(path)?)),
        None => Ok(SessionBuilder::from_network(synthetic_grid(&GridSpec::default())?)),
    }
}
