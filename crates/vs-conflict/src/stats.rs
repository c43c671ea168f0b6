//! Episode-level counters.

use serde::{Deserialize, Serialize};

/// Running totals for the current episode.  Zeroed by an episode reset.
///
/// `conflicts` counts conflict *entries* per aircraft: a single pair coming
/// within the minimum separation adds 2, one for each side, and stays at
/// that value however long the pair remains close.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeStats {
    pub conflicts:       u64,
    pub near_misses:     u64,
    pub goals:           u64,
    pub wall_exits:      u64,
    pub spawned:         u64,
    pub rejected_spawns: u64,
    pub ticks:           u64,
}

impl EpisodeStats {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Aircraft that left the airspace for any reason.
    #[inline]
    pub fn terminated(&self) -> u64 {
        self.near_misses + self.wall_exits + self.goals
    }
}
