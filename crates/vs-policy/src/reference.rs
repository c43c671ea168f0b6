//! Reference policies: hold, steer to goal, and uniform random.

use std::f64::consts::{PI, TAU};

use vs_core::{Control, SimRng};
use vs_fleet::Aircraft;

use crate::{ControlPolicy, PolicyContext, PolicyError, PolicyResult};

// ── HoldPolicy ────────────────────────────────────────────────────────────────

/// Never turns.  Aircraft fly the heading they were spawned with.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoldPolicy;

impl ControlPolicy for HoldPolicy {
    #[inline]
    fn control(&mut self, _aircraft: &Aircraft, _ctx: &PolicyContext<'_>) -> Control {
        Control::Hold
    }
}

// ── SeekGoalPolicy ────────────────────────────────────────────────────────────

/// Turns toward the goal whenever the heading error exceeds half a step.
///
/// `TurnRight` raises the heading and `TurnLeft` lowers it, so the policy
/// picks whichever shrinks the wrapped error `bearing − heading`.
#[derive(Debug, Clone, Copy)]
pub struct SeekGoalPolicy {
    deadband: f64,
}

impl SeekGoalPolicy {
    /// `heading_step` must match the flight configuration.
    ///
    /// # Errors
    ///
    /// [`PolicyError::Config`] unless `heading_step` is positive and finite.
    pub fn new(heading_step: f64) -> PolicyResult<Self> {
        if !(heading_step > 0.0 && heading_step.is_finite()) {
            return Err(PolicyError::Config(format!(
                "heading_step must be positive and finite, got {heading_step}"
            )));
        }
        Ok(Self { deadband: heading_step / 2.0 })
    }
}

impl ControlPolicy for SeekGoalPolicy {
    fn control(&mut self, aircraft: &Aircraft, _ctx: &PolicyContext<'_>) -> Control {
        let bearing = aircraft.position().bearing_to(aircraft.goal().position());
        let error = wrap_angle(bearing - aircraft.heading());
        if error > self.deadband {
            Control::TurnRight
        } else if error < -self.deadband {
            Control::TurnLeft
        } else {
            Control::Hold
        }
    }
}

/// Wrap to `(−π, π]`.  Heading accumulates without bound, so the raw
/// difference can be many turns off.
pub(crate) fn wrap_angle(a: f64) -> f64 {
    let r = a.rem_euclid(TAU);
    if r > PI { r - TAU } else { r }
}

// ── RandomPolicy ──────────────────────────────────────────────────────────────

/// Picks each control uniformly at random.
///
/// Owns its RNG so it never shifts the simulation's own draw order.
#[derive(Debug)]
pub struct RandomPolicy {
    rng: SimRng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self { rng: SimRng::new(seed) }
    }
}

impl ControlPolicy for RandomPolicy {
    fn control(&mut self, _aircraft: &Aircraft, _ctx: &PolicyContext<'_>) -> Control {
        self.rng.choose(&Control::ALL).copied().unwrap_or_default()
    }
}
