//! The scoring pass: distances, conflict sets, outcomes, rewards, removal.

use tracing::debug;

use vs_core::{AircraftId, AirspaceConfig, RewardConfig, SeparationConfig, UNCONSTRAINED, Vec2};
use vs_fleet::Registry;

use crate::{EpisodeStats, Outcome};

// ── TickScore ─────────────────────────────────────────────────────────────────

/// Result of one scoring pass.
///
/// `min_distances` and `outcomes` are parallel to the registry order at the
/// moment of scoring, i.e. they still include the aircraft listed in
/// `removed`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickScore {
    /// Sum of every aircraft's reward this tick.
    pub reward:        f64,
    /// Each aircraft's distance to its nearest neighbour
    /// ([`UNCONSTRAINED`] when alone).
    pub min_distances: Vec<f64>,
    pub outcomes:      Vec<(AircraftId, Outcome)>,
    /// Aircraft dropped from the registry at the end of the pass.
    pub removed:       Vec<(AircraftId, Outcome)>,
}

// ── ConflictEngine ────────────────────────────────────────────────────────────

/// Classifies and rewards every live aircraft, then removes the terminated
/// ones.
#[derive(Debug, Clone)]
pub struct ConflictEngine {
    separation: SeparationConfig,
    reward:     RewardConfig,
    width:      f64,
    height:     f64,
}

impl ConflictEngine {
    pub fn new(config: &AirspaceConfig) -> Self {
        Self {
            separation: config.separation.clone(),
            reward:     config.reward.clone(),
            width:      config.world.width,
            height:     config.world.height,
        }
    }

    /// Score the registry as it stands and remove terminated aircraft.
    ///
    /// Counters in `stats` (conflicts, near misses, goals, wall exits) are
    /// incremented in place.
    pub fn score(&self, registry: &mut Registry, stats: &mut EpisodeStats) -> TickScore {
        // ── Phase 1: snapshot ─────────────────────────────────────────────
        let snapshot: Vec<(AircraftId, Vec2)> = registry.positions();
        let sep = self.separation.minimum_separation;

        let mut score = TickScore {
            min_distances: Vec::with_capacity(snapshot.len()),
            outcomes:      Vec::with_capacity(snapshot.len()),
            ..TickScore::default()
        };

        // ── Phase 2: score against the snapshot ───────────────────────────
        for (i, (id, aircraft)) in registry.iter_mut().enumerate() {
            let here = snapshot[i].1;
            let mut min_dist = UNCONSTRAINED;
            let mut in_conflict = false;

            for (j, &(other, there)) in snapshot.iter().enumerate() {
                if i == j {
                    continue;
                }
                let d = here.distance(there);
                min_dist = min_dist.min(d);

                if d >= sep {
                    aircraft.clear_conflict(other);
                } else {
                    in_conflict = true;
                    if aircraft.enter_conflict(other) {
                        stats.conflicts += 1;
                        debug!(%id, %other, distance = d, "conflict entered");
                    }
                }
            }

            let (outcome, reward) = if min_dist < self.separation.nmac_distance {
                stats.near_misses += 1;
                (Outcome::NearMiss, self.reward.nmac_penalty)
            } else if !here.within(self.width, self.height) {
                stats.wall_exits += 1;
                (Outcome::OutOfBounds, self.reward.wall_penalty)
            } else if aircraft.distance_to_goal() < self.separation.goal_radius {
                stats.goals += 1;
                (Outcome::GoalReached, self.reward.goal_reward)
            } else if in_conflict {
                (Outcome::Conflict, self.reward.conflict_penalty)
            } else {
                (Outcome::Nominal, self.reward.step_penalty)
            };

            aircraft.set_reward(reward);
            score.reward += reward;
            score.min_distances.push(min_dist);
            score.outcomes.push((id, outcome));
        }

        // ── Phase 3: deferred removal ─────────────────────────────────────
        for &(id, outcome) in &score.outcomes {
            if outcome.is_terminal() && registry.remove(id).is_some() {
                debug!(%id, %outcome, "aircraft removed");
                score.removed.push((id, outcome));
            }
        }

        score
    }
}
