//! grid: end-to-end demo of the road-closure traffic simulator.
//!
//! Loads a network (synthetic Jakarta grid by default), synthesizes
//! traffic, closes the three busiest roads plus one of them a second time,
//! writes the closed state, resets, and writes the reset state.
//!
//! ```text
//! RUST_LOG=debug cargo run -p grid -- --graph demos/grid/data/menteng.json
//! ```

mod network;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rc_closure::{SessionRegistry, SessionResult};
use rc_core::{EdgeKey, SessionId};
use rc_export::{CsvWriter, ExportOptions, GeoJsonWriter, SnapshotWriter};
use rc_network::GridSpec;

use network::{Args, load_config, session_builder};

/// How many of the busiest roads to close.
const CLOSURES: usize = 3;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    println!("=== grid: road closure simulator ===");
    println!(
        "Seed: {}  |  base volume {}..={}  |  clamp {}..={}",
        config.seed,
        config.base_volume.min,
        config.base_volume.max,
        config.volume_clamp.min,
        config.volume_clamp.max
    );
    println!();

    // 1. Network + first traffic draw.
    let registry: SessionRegistry = SessionRegistry::new();
    let t0 = Instant::now();
    let id = registry.create(session_builder(args.graph.as_deref())?.config(config))?;
    let targets = registry.with_session(id, |s| {
        println!(
            "Road network: {} nodes, {} edges, total traffic {}{}",
            s.network().node_count(),
            s.network().edge_count(),
            s.traffic().total(),
            if s.centrality_fallback() { " (uniform centrality)" } else { "" }
        );
        if let Some(center) = s.network().nearest_node(GridSpec::DEFAULT_CENTER) {
            println!("Node nearest the map centre: {center}");
        }
        Ok(busiest(s.traffic().iter(), CLOSURES))
    })?;
    println!();

    // 2. Close the busiest roads, then one of them again.
    println!("{:<20} {:>9}  {}", "Edge", "Displaced", "Outcome");
    println!("{}", "-".repeat(60));
    let repeat = targets.first().copied();
    for edge in targets.into_iter().chain(repeat) {
        let report = registry.close_edge(id, edge)?;
        println!("{:<20} {:>9}  {}", report.edge.to_string(), report.displaced, report.status);
    }
    println!();

    let options = ExportOptions::default();
    write_state(&registry, id, &options, &args.out.join("closed"))?;

    // 3. Reopen everything with a fresh traffic draw.
    registry.reset(id)?;
    write_state(&registry, id, &options, &args.out.join("reset"))?;

    info!(elapsed_ms = t0.elapsed().as_millis() as u64, "demo complete");
    println!("Output written to {}", args.out.display());
    Ok(())
}

/// The `n` highest-volume edges, busiest first; ties go to the lower key.
fn busiest(traffic: impl Iterator<Item = (EdgeKey, u64)>, n: usize) -> Vec<EdgeKey> {
    let mut edges: Vec<(EdgeKey, u64)> = traffic.collect();
    edges.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    edges.into_iter().take(n).map(|(e, _)| e).collect()
}

fn write_state(registry: &SessionRegistry, id: SessionId, options: &ExportOptions, dir: &Path) -> Result<()> {
    let snapshot = registry.snapshot(id, options)?;
    std::fs::create_dir_all(dir)?;

    let mut geojson = GeoJsonWriter::new(dir)?;
    geojson.write_snapshot(&snapshot)?;
    geojson.finish()?;

    let mut csv = CsvWriter::new(dir)?;
    csv.write_snapshot(&snapshot)?;
    csv.finish()?;

    let edges = registry.with_session(id, |s| -> SessionResult<usize> { Ok(s.network().edge_count()) })?;
    println!(
        "{:<8} {} edges, total traffic {}  → {}",
        dir.file_name().and_then(|n| n.to_str()).unwrap_or("state"),
        edges,
        snapshot.total_traffic(),
        dir.display()
    );
    Ok(())
}
