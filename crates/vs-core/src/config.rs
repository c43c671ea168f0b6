//! Airspace configuration.
//!
//! `AirspaceConfig` is injected into the simulation root at construction.
//! The binaries load it from JSON; every section carries `#[serde(default)]`
//! so a file only needs the fields it overrides.
//!
//! ```json
//! {
//!   "world":      { "width": 800.0, "height": 800.0, "num_aircraft": 10 },
//!   "separation": { "minimum_separation": 40.0, "nmac_distance": 10.0, "goal_radius": 20.0 },
//!   "spawn":      { "interval_lower": 60.0, "interval_upper": 150.0, "max_aircraft": null },
//!   "vertiports": [ { "x": 100.0, "y": 100.0 }, { "x": 700.0, "y": 700.0 } ]
//! }
//! ```

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult, Vec2};

// ── Sections ──────────────────────────────────────────────────────────────────

/// Bounded world and population target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width:  f64,
    pub height: f64,
    /// Aircraft placed by a ring reset.  Vertiport spawning is not bounded by
    /// this value (see [`SpawnConfig::max_aircraft`]).
    pub num_aircraft: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self { width: 800.0, height: 800.0, num_aircraft: 10 }
    }
}

/// Distance thresholds used by conflict scoring and spawn admission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeparationConfig {
    /// Pairs closer than this are in conflict.
    pub minimum_separation: f64,
    /// Pairs closer than this are a near mid-air collision (NMAC).
    pub nmac_distance:      f64,
    /// An aircraft closer than this to its goal has arrived.
    pub goal_radius:        f64,
}

impl Default for SeparationConfig {
    fn default() -> Self {
        Self { minimum_separation: 40.0, nmac_distance: 10.0, goal_radius: 20.0 }
    }
}

impl SeparationConfig {
    /// Clearance a spawn candidate needs from every live aircraft.
    #[inline]
    pub fn admission_distance(&self) -> f64 {
        3.0 * self.minimum_separation
    }
}

/// Aircraft performance and control authority.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub init_speed:   f64,
    pub min_speed:    f64,
    pub max_speed:    f64,
    /// Standard deviation of the per-tick Gaussian speed perturbation.
    pub speed_sigma:  f64,
    /// Heading change (radians) per control unit.
    pub heading_step: f64,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            init_speed:   6.0,
            min_speed:    4.0,
            max_speed:    8.0,
            speed_sigma:  0.1,
            heading_step: 5f64.to_radians(),
        }
    }
}

/// Vertiport spawn clocks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Bounds for the interval redrawn after every successful spawn.
    pub interval_lower: f64,
    pub interval_upper: f64,
    /// Bounds for each vertiport's first interval after a reset.
    pub initial_lower:  f64,
    pub initial_upper:  f64,
    /// Optional cap on concurrently live aircraft, applied on top of the
    /// separation test.  `None` = no cap.
    pub max_aircraft:   Option<usize>,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            interval_lower: 60.0,
            interval_upper: 150.0,
            initial_lower:  0.0,
            initial_upper:  60.0,
            max_aircraft:   None,
        }
    }
}

/// Per-aircraft reward magnitudes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    pub step_penalty:     f64,
    pub conflict_penalty: f64,
    pub nmac_penalty:     f64,
    pub wall_penalty:     f64,
    pub goal_reward:      f64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            step_penalty:     -0.01,
            conflict_penalty: -1.0,
            nmac_penalty:     -10.0,
            wall_penalty:     -5.0,
            goal_reward:      10.0,
        }
    }
}

// ── AirspaceConfig ────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirspaceConfig {
    pub world:      WorldConfig,
    pub separation: SeparationConfig,
    pub flight:     FlightConfig,
    pub spawn:      SpawnConfig,
    pub reward:     RewardConfig,
    /// Vertiport positions; a vertiport's id is its index here.
    pub vertiports: Vec<Vec2>,
}

impl Default for AirspaceConfig {
    fn default() -> Self {
        Self {
            world:      WorldConfig::default(),
            separation: SeparationConfig::default(),
            flight:     FlightConfig::default(),
            spawn:      SpawnConfig::default(),
            reward:     RewardConfig::default(),
            vertiports: vec![
                Vec2::new(100.0, 100.0),
                Vec2::new(700.0, 100.0),
                Vec2::new(400.0, 400.0),
                Vec2::new(100.0, 700.0),
                Vec2::new(700.0, 700.0),
            ],
        }
    }
}

impl AirspaceConfig {
    /// Parse from any JSON source and validate.
    pub fn from_json_reader<R: Read>(reader: R) -> CoreResult<Self> {
        let config: AirspaceConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse from a JSON file and validate.
    pub fn from_json_path(path: &Path) -> CoreResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    /// Reject configurations the simulation cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        let w = &self.world;
        if !(w.width > 0.0 && w.height > 0.0) {
            return Err(config_err(format!(
                "world size must be positive, got {}×{}", w.width, w.height
            )));
        }

        let s = &self.separation;
        if !(s.nmac_distance > 0.0 && s.nmac_distance < s.minimum_separation) {
            return Err(config_err(format!(
                "need 0 < nmac_distance ({}) < minimum_separation ({})",
                s.nmac_distance, s.minimum_separation
            )));
        }
        if s.goal_radius <= 0.0 {
            return Err(config_err(format!("goal_radius must be positive, got {}", s.goal_radius)));
        }

        let f = &self.flight;
        if !(f.min_speed <= f.max_speed) {
            return Err(config_err(format!(
                "min_speed ({}) exceeds max_speed ({})", f.min_speed, f.max_speed
            )));
        }
        if !(f.speed_sigma >= 0.0 && f.speed_sigma.is_finite()) {
            return Err(config_err(format!(
                "speed_sigma must be finite and non-negative, got {}", f.speed_sigma
            )));
        }

        let sp = &self.spawn;
        check_interval("spawn interval", sp.interval_lower, sp.interval_upper)?;
        check_interval("initial spawn interval", sp.initial_lower, sp.initial_upper)?;

        if self.vertiports.len() < 2 {
            return Err(config_err(format!(
                "at least two vertiports are required, got {}", self.vertiports.len()
            )));
        }
        if self.vertiports.len() > usize::from(u16::MAX) {
            return Err(config_err(format!("too many vertiports: {}", self.vertiports.len())));
        }
        Ok(())
    }
}

fn check_interval(what: &str, lower: f64, upper: f64) -> CoreResult<()> {
    if lower.is_finite() && upper.is_finite() && 0.0 <= lower && lower <= upper {
        Ok(())
    } else {
        Err(config_err(format!("{what} bounds [{lower}, {upper}] are invalid")))
    }
}

fn config_err(msg: String) -> CoreError {
    CoreError::Config(msg)
}
