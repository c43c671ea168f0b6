//! Unit tests for vs-conflict.

use std::f64::consts::PI;

use vs_core::{AircraftId, AirspaceConfig, UNCONSTRAINED, Vec2};
use vs_fleet::{Aircraft, Registry};

use crate::{ConflictEngine, EpisodeStats, Outcome};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Far-away goal so nothing arrives by accident.
const FAR_GOAL: Vec2 = Vec2 { x: 790.0, y: 790.0 };

fn engine() -> (ConflictEngine, AirspaceConfig) {
    let config = AirspaceConfig::default();
    (ConflictEngine::new(&config), config)
}

fn add(registry: &mut Registry, id: u32, x: f64, y: f64, goal: Vec2) {
    registry.add(Aircraft::new(AircraftId(id), Vec2::new(x, y), 6.0, goal)).unwrap();
}

// ── Distances and sentinel ────────────────────────────────────────────────────

#[cfg(test)]
mod distances {
    use super::*;

    #[test]
    fn lone_aircraft_is_unconstrained() {
        let (engine, config) = engine();
        let mut registry = Registry::new();
        add(&mut registry, 0, 400.0, 400.0, FAR_GOAL);

        let score = engine.score(&mut registry, &mut EpisodeStats::default());
        assert_eq!(score.min_distances, vec![UNCONSTRAINED]);
        assert_eq!(score.outcomes, vec![(AircraftId(0), Outcome::Nominal)]);
        assert_eq!(score.reward, config.reward.step_penalty);
        assert!(score.removed.is_empty());
    }

    #[test]
    fn empty_registry_scores_zero() {
        let (engine, _) = engine();
        let score = engine.score(&mut Registry::new(), &mut EpisodeStats::default());
        assert_eq!(score.reward, 0.0);
        assert!(score.min_distances.is_empty());
    }

    #[test]
    fn min_distance_per_aircraft() {
        let (engine, _) = engine();
        let mut registry = Registry::new();
        add(&mut registry, 0, 100.0, 100.0, FAR_GOAL);
        add(&mut registry, 1, 200.0, 100.0, FAR_GOAL);
        add(&mut registry, 2, 500.0, 100.0, FAR_GOAL);

        let score = engine.score(&mut registry, &mut EpisodeStats::default());
        assert_eq!(score.min_distances, vec![100.0, 100.0, 300.0]);
    }
}

// ── Outcomes and priority ─────────────────────────────────────────────────────

#[cfg(test)]
mod outcomes {
    use super::*;

    #[test]
    fn near_miss_beats_goal_and_removes_once() {
        let (engine, config) = engine();
        let mut registry = Registry::new();
        // Both aircraft sit inside their own goal radius and 5 apart.
        add(&mut registry, 0, 400.0, 400.0, Vec2::new(401.0, 400.0));
        add(&mut registry, 1, 405.0, 400.0, Vec2::new(404.0, 400.0));

        let mut stats = EpisodeStats::default();
        let score = engine.score(&mut registry, &mut stats);

        assert_eq!(
            score.removed,
            vec![(AircraftId(0), Outcome::NearMiss), (AircraftId(1), Outcome::NearMiss)]
        );
        assert_eq!(stats.near_misses, 2);
        assert_eq!(stats.goals, 0);
        assert_eq!(score.reward, 2.0 * config.reward.nmac_penalty);
        assert!(registry.is_empty());
    }

    #[test]
    fn wall_beats_goal() {
        let (engine, config) = engine();
        let mut registry = Registry::new();
        add(&mut registry, 0, -1.0, 400.0, Vec2::new(-5.0, 400.0));

        let mut stats = EpisodeStats::default();
        let score = engine.score(&mut registry, &mut stats);
        assert_eq!(score.removed, vec![(AircraftId(0), Outcome::OutOfBounds)]);
        assert_eq!(score.reward, config.reward.wall_penalty);
        assert_eq!(stats.wall_exits, 1);
        assert_eq!(stats.goals, 0);
    }

    #[test]
    fn boundary_is_inside() {
        let (engine, _) = engine();
        let mut registry = Registry::new();
        add(&mut registry, 0, 0.0, 800.0, FAR_GOAL);

        let score = engine.score(&mut registry, &mut EpisodeStats::default());
        assert_eq!(score.outcomes[0].1, Outcome::Nominal);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn goal_reached_is_removed() {
        let (engine, config) = engine();
        let mut registry = Registry::new();
        add(&mut registry, 0, 100.0, 100.0, Vec2::new(110.0, 100.0));
        add(&mut registry, 1, 600.0, 600.0, FAR_GOAL);

        let mut stats = EpisodeStats::default();
        let score = engine.score(&mut registry, &mut stats);
        assert_eq!(score.removed, vec![(AircraftId(0), Outcome::GoalReached)]);
        assert_eq!(stats.goals, 1);
        assert_eq!(score.reward, config.reward.goal_reward + config.reward.step_penalty);
        assert_eq!(registry.ids(), vec![AircraftId(1)]);
    }

    #[test]
    fn conflict_pays_conflict_penalty_and_stays() {
        let (engine, config) = engine();
        let mut registry = Registry::new();
        add(&mut registry, 0, 300.0, 300.0, FAR_GOAL);
        add(&mut registry, 1, 330.0, 300.0, FAR_GOAL);

        let score = engine.score(&mut registry, &mut EpisodeStats::default());
        assert!(score.outcomes.iter().all(|&(_, o)| o == Outcome::Conflict));
        assert_eq!(score.reward, 2.0 * config.reward.conflict_penalty);
        assert_eq!(registry.get(AircraftId(0)).unwrap().reward(), config.reward.conflict_penalty);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn terminal_flags() {
        assert!(Outcome::NearMiss.is_terminal());
        assert!(Outcome::OutOfBounds.is_terminal());
        assert!(Outcome::GoalReached.is_terminal());
        assert!(!Outcome::Conflict.is_terminal());
        assert!(!Outcome::Nominal.is_terminal());
        assert_eq!(Outcome::GoalReached.to_string(), "goal_reached");
    }
}

// ── Conflict-set hysteresis ───────────────────────────────────────────────────

#[cfg(test)]
mod hysteresis {
    use super::*;

    #[test]
    fn sustained_proximity_counts_once_per_side() {
        let (engine, _) = engine();
        let mut registry = Registry::new();
        add(&mut registry, 0, 300.0, 300.0, FAR_GOAL);
        add(&mut registry, 1, 330.0, 300.0, FAR_GOAL);

        let mut stats = EpisodeStats::default();
        for _ in 0..3 {
            engine.score(&mut registry, &mut stats);
        }
        assert_eq!(stats.conflicts, 2);
        assert!(registry.get(AircraftId(0)).unwrap().in_conflict_with(AircraftId(1)));
        assert!(registry.get(AircraftId(1)).unwrap().in_conflict_with(AircraftId(0)));

        // Separate the pair: sets clear, counter unchanged.
        registry.get_mut(AircraftId(0)).unwrap().fly(100.0, PI);
        let score = engine.score(&mut registry, &mut stats);
        assert!(score.outcomes.iter().all(|&(_, o)| o == Outcome::Nominal));
        assert_eq!(stats.conflicts, 2);
        assert_eq!(registry.get(AircraftId(0)).unwrap().conflict_count(), 0);
        assert_eq!(registry.get(AircraftId(1)).unwrap().conflict_count(), 0);

        // Re-entry is a new event on both sides.
        registry.get_mut(AircraftId(0)).unwrap().fly(100.0, 0.0);
        engine.score(&mut registry, &mut stats);
        assert_eq!(stats.conflicts, 4);
    }

    #[test]
    fn stats_reset_zeroes_everything() {
        let mut stats = EpisodeStats { conflicts: 3, goals: 1, ticks: 9, ..Default::default() };
        assert_eq!(stats.terminated(), 1);
        stats.reset();
        assert_eq!(stats, EpisodeStats::default());
    }
}
