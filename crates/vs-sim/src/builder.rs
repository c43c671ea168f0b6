//! Fluent builder for constructing an [`Airspace`].

use vs_conflict::{ConflictEngine, EpisodeStats};
use vs_core::{AirspaceConfig, IdGenerator, SimRng, Tick, Vec2};
use vs_fleet::Registry;
use vs_kinematics::KinematicsEngine;
use vs_spawn::{AdmissionPolicy, SpawnScheduler};

use crate::{Airspace, SimResult};

/// Fluent builder for [`Airspace`].
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                                         |
/// |--------------------|-------------------------------------------------|
/// | `.seed(s)`         | `0`                                             |
/// | `.vertiports(v)`   | `config.vertiports`                             |
/// | `.admission(p)`    | separation at `3 × minimum_separation`, plus the `max_aircraft` cap |
///
/// # Example
///
/// ```rust,ignore
/// let ports = load_vertiports_csv(Path::new("ports.csv"))?;
/// let mut airspace = AirspaceBuilder::new(config)
///     .seed(7)
///     .vertiports(ports)
///     .build()?;
/// let obs = airspace.reset(7);
/// ```
pub struct AirspaceBuilder {
    config:     AirspaceConfig,
    seed:       u64,
    vertiports: Option<Vec<Vec2>>,
    admission:  Option<Box<dyn AdmissionPolicy>>,
}

impl AirspaceBuilder {
    pub fn new(config: AirspaceConfig) -> Self {
        Self { config, seed: 0, vertiports: None, admission: None }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the configured vertiport layout (e.g. with one loaded from
    /// CSV).  Validated together with the rest of the configuration.
    pub fn vertiports(mut self, vertiports: Vec<Vec2>) -> Self {
        self.vertiports = Some(vertiports);
        self
    }

    /// Replace the default admission policy.
    pub fn admission<P: AdmissionPolicy + 'static>(mut self, policy: P) -> Self {
        self.admission = Some(Box::new(policy));
        self
    }

    /// Validate the configuration, seed the RNG, draw every vertiport's first
    /// interval, and return an empty airspace at tick 0.
    pub fn build(self) -> SimResult<Airspace> {
        let mut config = self.config;
        if let Some(vertiports) = self.vertiports {
            config.vertiports = vertiports;
        }
        config.validate()?;

        let mut rng = SimRng::new(self.seed);
        let kinematics = KinematicsEngine::new(&config.flight)?;
        let mut scheduler = SpawnScheduler::new(&config, &mut rng)?;
        if let Some(policy) = self.admission {
            scheduler = scheduler.with_policy(policy);
        }
        let conflicts = ConflictEngine::new(&config);

        Ok(Airspace {
            config,
            rng,
            ids: IdGenerator::new(),
            registry: Registry::new(),
            kinematics,
            scheduler,
            conflicts,
            stats: EpisodeStats::default(),
            now: Tick::ZERO,
        })
    }
}
