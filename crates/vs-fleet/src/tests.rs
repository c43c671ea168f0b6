//! Unit tests for vs-fleet.

use vs_core::{AircraftId, Vec2};

use crate::Aircraft;

fn aircraft_at(id: u32, x: f64, y: f64) -> Aircraft {
    Aircraft::new(AircraftId(id), Vec2::new(x, y), 6.0, Vec2::new(400.0, 400.0))
}

#[cfg(test)]
mod aircraft {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    #[test]
    fn heading_points_at_goal() {
        let ac = Aircraft::new(AircraftId(0), Vec2::new(10.0, 10.0), 5.0, Vec2::new(10.0, 90.0));
        assert!((ac.heading() - FRAC_PI_2).abs() < 1e-12);

        let pos = Vec2::new(123.0, 456.0);
        let goal = Vec2::new(-7.0, 20.0);
        let ac = Aircraft::new(AircraftId(1), pos, 5.0, goal);
        assert_eq!(ac.heading(), (goal.y - pos.y).atan2(goal.x - pos.x));
    }

    #[test]
    fn velocity_derived_from_speed_and_heading() {
        let ac = Aircraft::new(AircraftId(0), Vec2::new(50.0, 0.0), 4.0, Vec2::new(0.0, 0.0));
        assert!((ac.heading() - PI).abs() < 1e-12);
        assert!((ac.velocity().x + 4.0).abs() < 1e-12);
        assert!(ac.velocity().y.abs() < 1e-9);
    }

    #[test]
    fn spawn_velocity_follows_requested_heading() {
        let pos = Vec2::new(100.0, 100.0);
        let goal = Vec2::new(100.0, 500.0);
        let mut ac = Aircraft::spawn(AircraftId(3), pos, 6.0, PI, goal);
        assert!((ac.heading() - FRAC_PI_2).abs() < 1e-12);
        let row = ac.state_row();
        assert_eq!(Vec2::new(row[2], row[3]), Vec2::from_polar(6.0, PI));
        assert_eq!(row[5], ac.heading());

        // First motion step realigns velocity with heading.
        ac.fly(6.0, ac.heading());
        assert!(ac.velocity().x.abs() < 1e-9);
        assert!((ac.velocity().y - 6.0).abs() < 1e-12);
    }

    #[test]
    fn fly_recomputes_velocity_and_integrates() {
        let mut ac = aircraft_at(0, 0.0, 0.0);
        ac.fly(2.0, 0.0);
        assert_eq!(ac.velocity(), Vec2::new(2.0, 0.0));
        assert_eq!(ac.position(), Vec2::new(2.0, 0.0));
        ac.fly(3.0, FRAC_PI_2);
        assert!((ac.position().y - 3.0).abs() < 1e-12);
        assert_eq!(ac.speed(), 3.0);
    }

    #[test]
    fn conflict_set_reports_new_entries_once() {
        let mut ac = aircraft_at(0, 0.0, 0.0);
        assert!(ac.enter_conflict(AircraftId(5)));
        assert!(!ac.enter_conflict(AircraftId(5)));
        assert!(ac.in_conflict_with(AircraftId(5)));
        ac.clear_conflict(AircraftId(5));
        ac.clear_conflict(AircraftId(9)); // absent: no-op
        assert_eq!(ac.conflict_count(), 0);
        assert!(ac.enter_conflict(AircraftId(5)));
    }

    #[test]
    fn state_row_column_order() {
        let ac = Aircraft::new(AircraftId(0), Vec2::new(1.0, 2.0), 3.0, Vec2::new(1.0, 10.0));
        let row = ac.state_row();
        assert_eq!(row[0], 1.0);
        assert_eq!(row[1], 2.0);
        assert_eq!(row[4], 3.0);
        assert_eq!(row[5], ac.heading());
        assert_eq!(&row[6..], &[1.0, 10.0]);
    }

    #[test]
    fn reward_is_overwritten() {
        let mut ac = aircraft_at(0, 0.0, 0.0);
        ac.set_reward(-1.0);
        ac.set_reward(-0.5);
        assert_eq!(ac.reward(), -0.5);
    }
}

#[cfg(test)]
mod registry {
    use vs_core::UNCONSTRAINED;

    use super::*;
    use crate::{FleetError, Registry};

    #[test]
    fn duplicate_add_fails() {
        let mut reg = Registry::new();
        reg.add(aircraft_at(3, 0.0, 0.0)).unwrap();
        let err = reg.add(aircraft_at(3, 9.0, 9.0)).unwrap_err();
        assert!(matches!(err, FleetError::DuplicateAircraft(AircraftId(3))));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get(AircraftId(3)).unwrap().position(), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut reg = Registry::new();
        reg.add(aircraft_at(0, 0.0, 0.0)).unwrap();
        assert!(reg.remove(AircraftId(42)).is_none());
        assert_eq!(reg.len(), 1);
        assert!(reg.remove(AircraftId(0)).is_some());
        assert!(reg.remove(AircraftId(0)).is_none());
        assert!(reg.is_empty());
    }

    #[test]
    fn get_absent_fails() {
        let reg = Registry::new();
        assert!(matches!(reg.get(AircraftId(1)), Err(FleetError::AircraftNotFound(AircraftId(1)))));
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut reg = Registry::new();
        for id in [5, 1, 9, 3] {
            reg.add(aircraft_at(id, 0.0, 0.0)).unwrap();
        }
        let ids: Vec<u32> = reg.iter().map(|(id, _)| id.0).collect();
        assert_eq!(ids, vec![5, 1, 9, 3]);
    }

    #[test]
    fn order_survives_interleaved_add_remove() {
        let mut reg = Registry::new();
        for id in 0..6 {
            reg.add(aircraft_at(id, id as f64, 0.0)).unwrap();
        }
        reg.remove(AircraftId(1));
        reg.remove(AircraftId(4));
        reg.add(aircraft_at(10, 0.0, 0.0)).unwrap();
        reg.remove(AircraftId(0));
        reg.add(aircraft_at(11, 0.0, 0.0)).unwrap();

        assert_eq!(
            reg.ids(),
            vec![AircraftId(2), AircraftId(3), AircraftId(5), AircraftId(10), AircraftId(11)]
        );
        // Slot bookkeeping still resolves every survivor.
        assert_eq!(reg.get(AircraftId(5)).unwrap().position(), Vec2::new(5.0, 0.0));
        assert_eq!(reg.get_mut(AircraftId(11)).unwrap().id(), AircraftId(11));
    }

    #[test]
    fn min_distance_sentinel_when_empty() {
        let mut reg = Registry::new();
        assert_eq!(reg.min_distance_to(Vec2::new(1.0, 1.0)), UNCONSTRAINED);
        reg.add(aircraft_at(0, 0.0, 0.0)).unwrap();
        reg.add(aircraft_at(1, 30.0, 40.0)).unwrap();
        assert_eq!(reg.min_distance_to(Vec2::new(30.0, 0.0)), 30.0);
    }

    #[test]
    fn clear_empties() {
        let mut reg = Registry::new();
        reg.add(aircraft_at(0, 0.0, 0.0)).unwrap();
        reg.clear();
        assert!(reg.is_empty());
        reg.add(aircraft_at(0, 0.0, 0.0)).unwrap();
    }
}
