//! traffic — a vertiport traffic episode under the goal-seeking policy.
//!
//! ```text
//! cargo run -p traffic -- [config.json] [vertiports.csv]
//! ```
//!
//! Without arguments the built-in reference configuration is used (five
//! vertiports in an 800×800 world).  A JSON file overrides any subset of the
//! configuration; a CSV file (`id,x,y`) replaces the vertiport layout.  The
//! episode summary is printed as JSON on stdout; progress goes through
//! `tracing` (`RUST_LOG=debug` for every spawn and removal).

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use vs_core::AirspaceConfig;
use vs_policy::SeekGoalPolicy;
use vs_sim::{AirspaceBuilder, EpisodePlan, TracingObserver, run_planned};
use vs_spawn::load_vertiports_csv;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:            u64 = 7;
const EPISODES:        u64 = 3;
const MAX_TICKS:       u64 = 3_000;
const CLOSING_TICKS:   u64 = 300;
const REPORT_INTERVAL: u64 = 500;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => AirspaceConfig::from_json_path(Path::new(&path))
            .with_context(|| format!("loading configuration from {path}"))?,
        None => AirspaceConfig::default(),
    };

    let mut builder = AirspaceBuilder::new(config.clone()).seed(SEED);
    if let Some(path) = args.next() {
        let ports = load_vertiports_csv(Path::new(&path))
            .with_context(|| format!("loading vertiports from {path}"))?;
        info!(count = ports.len(), %path, "vertiport layout loaded");
        builder = builder.vertiports(ports);
    }
    let mut airspace = builder.build()?;

    let mut policy = SeekGoalPolicy::new(config.flight.heading_step)?;
    let mut observer = TracingObserver::new(REPORT_INTERVAL);
    let plan = EpisodePlan::new(MAX_TICKS).closing(CLOSING_TICKS);

    let started = Instant::now();
    let mut summaries = Vec::with_capacity(EPISODES as usize);
    for episode in 0..EPISODES {
        airspace.reset(SEED + episode);
        summaries.push(run_planned(&mut airspace, &mut policy, plan, &mut observer)?);
    }
    info!(episodes = EPISODES, elapsed_ms = started.elapsed().as_millis() as u64, "done");

    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(())
}
