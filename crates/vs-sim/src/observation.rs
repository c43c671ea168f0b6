//! What a tick hands back to the caller.

use vs_conflict::Outcome;
use vs_core::AircraftId;
use vs_fleet::Registry;
use vs_spawn::SpawnEvent;

/// Columns per observation row.
pub const OBS_WIDTH: usize = 8;

/// One row per live aircraft, in registry order, with the parallel identity
/// list so rows can be matched to aircraft across ticks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Observation {
    pub rows: Vec<[f64; OBS_WIDTH]>,
    pub ids:  Vec<AircraftId>,
}

impl Observation {
    /// Column names, in row order.
    pub const COLUMNS: [&'static str; OBS_WIDTH] =
        ["pos_x", "pos_y", "vel_x", "vel_y", "speed", "heading", "goal_x", "goal_y"];

    pub fn from_registry(registry: &Registry) -> Self {
        let (ids, rows): (Vec<_>, Vec<_>) =
            registry.iter().map(|(id, ac)| (id, ac.state_row())).unzip();
        Self { rows, ids }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row-major `len × OBS_WIDTH` buffer.
    pub fn flat(&self) -> Vec<f64> {
        self.rows.iter().flatten().copied().collect()
    }

    /// The row for `id`, if that aircraft is in this observation.
    pub fn row(&self, id: AircraftId) -> Option<&[f64; OBS_WIDTH]> {
        self.ids.iter().position(|&i| i == id).map(|slot| &self.rows[slot])
    }
}

/// Result of one [`Airspace::tick`][crate::Airspace::tick].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepResult {
    /// Airspace after removals.
    pub observation: Observation,
    /// Sum of every scored aircraft's reward.
    pub reward:      f64,
    /// Always `false`: ending an episode is the caller's decision.
    pub terminal:    bool,
    /// Nearest-neighbour distance of every scored aircraft, in scoring
    /// order (includes aircraft removed this tick).
    pub diagnostics: Vec<f64>,
    pub spawned:     Vec<SpawnEvent>,
    pub removed:     Vec<(AircraftId, Outcome)>,
}
