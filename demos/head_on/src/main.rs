//! head_on — two aircraft on opposite sides of a ring, flying at each other.
//!
//! Both aircraft start 390 units from the centre of an 800×800 world with
//! their goals at each other's start, and hold their heading every tick.
//! Spawning is closed so nothing else enters.  The run prints the reward
//! each tick until the registry empties: the step penalty while separated,
//! then the conflict penalty, then the near-miss that removes both.
//!
//! `RUST_LOG=debug cargo run -p head_on` shows conflict entries and removals.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use vs_core::AirspaceConfig;
use vs_kinematics::Controls;
use vs_sim::Airspace;
use vs_spawn::SpawnPhase;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:      u64 = 42;
const MAX_TICKS: u64 = 200;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config = AirspaceConfig::default();
    config.world.num_aircraft = 2;

    println!("=== head_on — vertisim ===");
    println!(
        "World: {}×{}  |  Separation: {}  |  NMAC: {}  |  Seed: {SEED}",
        config.world.width,
        config.world.height,
        config.separation.minimum_separation,
        config.separation.nmac_distance,
    );
    println!();

    let mut airspace = Airspace::new(config, SEED)?;
    let start = airspace.reset_ring(SEED)?;
    for (id, row) in start.ids.iter().zip(&start.rows) {
        println!("{id}: start ({:.1}, {:.1}) → goal ({:.1}, {:.1})", row[0], row[1], row[6], row[7]);
    }
    println!();

    let hold = Controls::default();
    let mut total = 0.0;
    for _ in 0..MAX_TICKS {
        let tick = airspace.now();
        let step = airspace.tick_with_phase(&hold, SpawnPhase::Closed)?;
        total += step.reward;

        let gap = step.diagnostics.first().copied().unwrap_or(f64::INFINITY);
        println!("T{:<5} gap {gap:>7.2}  reward {:>7.2}", tick.0, step.reward);
        for (id, outcome) in &step.removed {
            println!("       {id} removed: {outcome}");
        }
        if airspace.registry().is_empty() {
            break;
        }
    }

    let stats = airspace.stats();
    println!();
    println!(
        "Ticks: {}  |  Total reward: {total:.2}  |  Conflicts: {}  |  Near misses: {}  |  Goals: {}",
        stats.ticks, stats.conflicts, stats.near_misses, stats.goals,
    );
    Ok(())
}
