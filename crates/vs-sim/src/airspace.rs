//! The `Airspace` root and its tick pipeline.

use std::f64::consts::TAU;

use tracing::{debug, info, trace};

use vs_conflict::{ConflictEngine, EpisodeStats};
use vs_core::{AircraftId, AirspaceConfig, IdGenerator, SimRng, Tick, Vec2};
use vs_fleet::{Aircraft, Registry};
use vs_kinematics::{Controls, KinematicsEngine};
use vs_spawn::{SpawnPhase, SpawnScheduler, Vertiport};

use crate::{Observation, SimResult, StepResult};

/// The simulation root.
///
/// Owns every piece of episode state: the registry, the vertiports (through
/// the spawn scheduler), the identity counter, the RNG, and the counters.
/// Each [`tick`](Self::tick) runs four phases in a fixed order:
///
/// 1. **Motion**: every live aircraft, in registry order, under its control.
/// 2. **Spawn**: every vertiport, in layout order, may admit one aircraft.
/// 3. **Score**: distances, conflict sets, outcomes, rewards.
/// 4. **Remove**: terminated aircraft leave the registry.
///
/// Create via [`AirspaceBuilder`][crate::AirspaceBuilder] or
/// [`Airspace::new`].
pub struct Airspace {
    pub(crate) config:     AirspaceConfig,
    pub(crate) rng:        SimRng,
    pub(crate) ids:        IdGenerator,
    pub(crate) registry:   Registry,
    pub(crate) kinematics: KinematicsEngine,
    pub(crate) scheduler:  SpawnScheduler,
    pub(crate) conflicts:  ConflictEngine,
    pub(crate) stats:      EpisodeStats,
    pub(crate) now:        Tick,
}

impl Airspace {
    /// Validate `config` and build an airspace seeded with `seed`.
    pub fn new(config: AirspaceConfig, seed: u64) -> SimResult<Self> {
        crate::AirspaceBuilder::new(config).seed(seed).build()
    }

    // ── Episode control ───────────────────────────────────────────────────

    /// Start a new, empty episode.
    ///
    /// Reseeds the RNG, clears the registry, zeroes the counters, rewinds the
    /// identity counter, and restarts every vertiport clock with a freshly
    /// drawn first interval.  The returned observation has no rows.
    pub fn reset(&mut self, seed: u64) -> Observation {
        self.rng.reseed(seed);
        self.registry.clear();
        self.ids.reset();
        self.stats.reset();
        self.now = Tick::ZERO;
        self.scheduler.reset(&mut self.rng);
        info!(seed, vertiports = self.scheduler.vertiports().len(), "episode reset");
        self.observe()
    }

    /// [`reset`](Self::reset), then place `world.num_aircraft` aircraft
    /// evenly on a circle of radius `width / 2 − 10` about the world centre,
    /// each bound for the diametrically opposite point.
    ///
    /// Identities run `0..n` and the counter continues at `n`.  Placement
    /// draws nothing from the RNG.
    pub fn reset_ring(&mut self, seed: u64) -> SimResult<Observation> {
        self.reset(seed);

        let n = self.config.world.num_aircraft;
        let centre = Vec2::new(self.config.world.width / 2.0, self.config.world.height / 2.0);
        let radius = self.config.world.width / 2.0 - 10.0;
        let speed = self.config.flight.init_speed;

        for i in 0..n {
            let offset = Vec2::from_polar(radius, TAU * i as f64 / n as f64);
            let start = centre + offset;
            let goal = centre - offset;
            self.registry.add(Aircraft::new(self.ids.next(), start, speed, goal))?;
        }
        self.stats.spawned += n as u64;
        info!(seed, aircraft = n, radius, "ring placed");
        Ok(self.observe())
    }

    /// One tick with spawning open.
    pub fn tick(&mut self, controls: &Controls) -> SimResult<StepResult> {
        self.tick_with_phase(controls, SpawnPhase::Open)
    }

    /// One tick; `phase` decides whether due vertiports may spawn.
    ///
    /// Live aircraft missing from `controls` hold; entries for identities that
    /// are not live are ignored.
    pub fn tick_with_phase(&mut self, controls: &Controls, phase: SpawnPhase) -> SimResult<StepResult> {
        // ── Phase 1: motion ───────────────────────────────────────────────
        let commanded = self.kinematics.step_all(&mut self.registry, controls, &mut self.rng);
        if commanded < controls.len() {
            debug!(tick = %self.now, ignored = controls.len() - commanded, "controls for aircraft not live");
        }

        // ── Phase 2: spawn ────────────────────────────────────────────────
        let spawns = self.scheduler.step(&mut self.registry, &mut self.ids, &mut self.rng, phase)?;
        self.stats.spawned += spawns.admitted.len() as u64;
        self.stats.rejected_spawns += spawns.rejected as u64;

        // ── Phases 3–4: score and remove ──────────────────────────────────
        let score = self.conflicts.score(&mut self.registry, &mut self.stats);

        self.stats.ticks += 1;
        let tick = self.now;
        self.now.advance();

        trace!(
            %tick,
            live = self.registry.len(),
            reward = score.reward,
            spawned = spawns.admitted.len(),
            removed = score.removed.len(),
            "tick complete"
        );

        Ok(StepResult {
            observation: self.observe(),
            reward:      score.reward,
            terminal:    false,
            diagnostics: score.min_distances,
            spawned:     spawns.admitted,
            removed:     score.removed,
        })
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// Current observation without advancing.
    pub fn observe(&self) -> Observation {
        Observation::from_registry(&self.registry)
    }

    /// # Errors
    ///
    /// [`vs_fleet::FleetError::AircraftNotFound`] if `id` is not live.
    pub fn aircraft(&self, id: AircraftId) -> SimResult<&Aircraft> {
        Ok(self.registry.get(id)?)
    }

    #[inline]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[inline]
    pub fn vertiports(&self) -> &[Vertiport] {
        self.scheduler.vertiports()
    }

    #[inline]
    pub fn stats(&self) -> &EpisodeStats {
        &self.stats
    }

    /// Ticks run since the last reset.
    #[inline]
    pub fn now(&self) -> Tick {
        self.now
    }

    #[inline]
    pub fn config(&self) -> &AirspaceConfig {
        &self.config
    }

    /// Seed of the current episode.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl std::fmt::Debug for Airspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Airspace")
            .field("now", &self.now)
            .field("live", &self.registry.len())
            .field("stats", &self.stats)
            .field("rng", &self.rng)
            .finish_non_exhaustive()
    }
}
