//! Unit tests for vs-policy.

use std::f64::consts::{FRAC_PI_2, PI};

use vs_core::{AircraftId, Control, Tick, Vec2};
use vs_fleet::{Aircraft, Registry};

use crate::{ControlPolicy, HoldPolicy, PolicyContext, RandomPolicy, SeekGoalPolicy};

// ── Helpers ───────────────────────────────────────────────────────────────────

const STEP: f64 = 5.0 * PI / 180.0;

fn registry_of(aircraft: Vec<Aircraft>) -> Registry {
    let mut registry = Registry::new();
    for ac in aircraft {
        registry.add(ac).unwrap();
    }
    registry
}

/// Aircraft whose goal lies due east, with its heading turned `turn` radians
/// off the bearing.
fn east_bound(id: u32, turn: f64) -> Aircraft {
    let mut ac = Aircraft::new(AircraftId(id), Vec2::new(100.0, 100.0), 0.0, Vec2::new(500.0, 100.0));
    // Zero speed: only the heading changes.
    ac.fly(0.0, ac.heading() + turn);
    ac
}

// ── HoldPolicy ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod hold {
    use super::*;

    #[test]
    fn decide_yields_empty_map() {
        let registry = registry_of(vec![east_bound(0, 1.0), east_bound(1, -1.0)]);
        let ctx = PolicyContext::new(Tick(3), &registry);
        assert!(HoldPolicy.decide(&ctx).is_empty());
    }
}

// ── SeekGoalPolicy ────────────────────────────────────────────────────────────

#[cfg(test)]
mod seek_goal {
    use super::*;
    use crate::reference::wrap_angle;

    #[test]
    fn rejects_bad_step() {
        assert!(SeekGoalPolicy::new(0.0).is_err());
        assert!(SeekGoalPolicy::new(f64::NAN).is_err());
        assert!(SeekGoalPolicy::new(STEP).is_ok());
    }

    #[test]
    fn turns_toward_goal() {
        let registry = registry_of(vec![
            east_bound(0, 0.0),
            east_bound(1, -FRAC_PI_2),
            east_bound(2, FRAC_PI_2),
        ]);
        let ctx = PolicyContext::new(Tick(0), &registry);
        let mut policy = SeekGoalPolicy::new(STEP).unwrap();

        let controls = policy.decide(&ctx);
        assert!(!controls.contains_key(&AircraftId(0)));
        // Heading below the bearing: raise it.
        assert_eq!(controls[&AircraftId(1)], Control::TurnRight);
        assert_eq!(controls[&AircraftId(2)], Control::TurnLeft);
    }

    #[test]
    fn unbounded_heading_is_wrapped() {
        // Ten full turns plus a small offset still reads as a small error.
        let registry = registry_of(vec![east_bound(0, 20.0 * PI + 0.3)]);
        let ctx = PolicyContext::new(Tick(0), &registry);
        let controls = SeekGoalPolicy::new(STEP).unwrap().decide(&ctx);
        assert_eq!(controls[&AircraftId(0)], Control::TurnLeft);
    }

    #[test]
    fn wrap_angle_range() {
        assert!((wrap_angle(2.5 * PI) - FRAC_PI_2).abs() < 1e-9);
        assert!((wrap_angle(-0.5) + 0.5).abs() < 1e-12);
        assert!((wrap_angle(PI + 0.5) - (0.5 - PI)).abs() < 1e-9);
    }
}

// ── RandomPolicy ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod random {
    use super::*;

    #[test]
    fn same_seed_same_controls() {
        let registry = registry_of((0..20).map(|i| east_bound(i, 0.0)).collect());
        let ctx = PolicyContext::new(Tick(0), &registry);
        let mut a = RandomPolicy::new(8);
        let mut b = RandomPolicy::new(8);
        for _ in 0..10 {
            assert_eq!(a.decide(&ctx), b.decide(&ctx));
        }
    }

    #[test]
    fn uses_every_control() {
        let ac = east_bound(0, 0.0);
        let registry = Registry::new();
        let ctx = PolicyContext::new(Tick(0), &registry);
        let mut policy = RandomPolicy::new(1);
        let seen: Vec<Control> = (0..300).map(|_| policy.control(&ac, &ctx)).collect();
        for c in Control::ALL {
            assert!(seen.contains(&c), "{c} never chosen");
        }
    }

    #[test]
    fn boxed_policy_delegates() {
        let registry = registry_of(vec![east_bound(0, FRAC_PI_2)]);
        let ctx = PolicyContext::new(Tick(0), &registry);
        let mut boxed: Box<dyn ControlPolicy> = Box::new(SeekGoalPolicy::new(STEP).unwrap());
        assert_eq!(boxed.decide(&ctx)[&AircraftId(0)], Control::TurnLeft);
    }
}
