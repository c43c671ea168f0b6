//! `SpawnScheduler` — per-vertiport countdowns gated by an admission policy.
//!
//! # Draw order
//!
//! Within one call to [`SpawnScheduler::step`] vertiports are visited in
//! layout order.  A due vertiport in an open phase draws, in this order:
//!
//! 1. the destination index (uniform over the *other* vertiports),
//! 2. a requested heading, uniform in `[0, 2π)`.  It sets the candidate's
//!    initial velocity; the heading itself points at the destination,
//! 3. on admission only, the next interval, uniform in
//!    `[interval_lower, interval_upper]`.
//!
//! A rejected candidate draws nothing after step 2 and leaves the clock
//! running, so the vertiport retries on the next tick.

use std::f64::consts::TAU;

use tracing::debug;

use vs_core::{AirspaceConfig, AircraftId, IdGenerator, SimRng, Vec2, VertiportId};
use vs_fleet::{Aircraft, Registry};

use crate::admission::{
    AdmissionContext, AdmissionPolicy, AdmissionPolicyExt, CapacityLimit, SeparationAdmission,
};
use crate::{SpawnError, SpawnResult, Vertiport};

// ── Phase ─────────────────────────────────────────────────────────────────────

/// Whether due vertiports may offer candidates this tick.
///
/// `Closed` is the end-of-episode "no more spawns" phase: clocks keep
/// counting but nothing is offered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SpawnPhase {
    #[default]
    Open,
    Closed,
}

// ── Report ────────────────────────────────────────────────────────────────────

/// One admitted aircraft.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SpawnEvent {
    pub id:   AircraftId,
    pub from: VertiportId,
    pub to:   VertiportId,
}

/// What one scheduler step did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpawnReport {
    /// Admitted aircraft, in vertiport order.
    pub admitted: Vec<SpawnEvent>,
    /// Candidates the admission policy refused.
    pub rejected: usize,
}

// ── SpawnScheduler ────────────────────────────────────────────────────────────

pub struct SpawnScheduler {
    vertiports:     Vec<Vertiport>,
    interval_lower: f64,
    interval_upper: f64,
    initial_lower:  f64,
    initial_upper:  f64,
    init_speed:     f64,
    policy:         Box<dyn AdmissionPolicy>,
}

impl SpawnScheduler {
    /// Build one vertiport per configured position and draw each one's first
    /// interval from `[initial_lower, initial_upper]`.
    ///
    /// The admission policy is the separation test at
    /// `3 × minimum_separation` chained with the optional capacity cap.
    ///
    /// # Errors
    ///
    /// [`SpawnError::Layout`] if fewer than two vertiports are configured
    /// (a spawn needs a destination other than its source).
    pub fn new(config: &AirspaceConfig, rng: &mut SimRng) -> SpawnResult<Self> {
        if config.vertiports.len() < 2 {
            return Err(SpawnError::Layout(format!(
                "need at least two vertiports, got {}",
                config.vertiports.len()
            )));
        }

        let vertiports = config
            .vertiports
            .iter()
            .enumerate()
            .map(|(i, &pos)| {
                let id = VertiportId::try_from(i)
                    .map_err(|_| SpawnError::Layout(format!("vertiport index {i} overflows u16")))?;
                Ok(Vertiport::new(id, pos, 0.0))
            })
            .collect::<SpawnResult<Vec<_>>>()?;

        let policy = SeparationAdmission::new(config.separation.admission_distance())
            .then(CapacityLimit::new(config.spawn.max_aircraft));

        let mut scheduler = Self {
            vertiports,
            interval_lower: config.spawn.interval_lower,
            interval_upper: config.spawn.interval_upper,
            initial_lower:  config.spawn.initial_lower,
            initial_upper:  config.spawn.initial_upper,
            init_speed:     config.flight.init_speed,
            policy:         Box::new(policy),
        };
        scheduler.reset(rng);
        Ok(scheduler)
    }

    /// Replace the admission policy.
    pub fn with_policy<P: AdmissionPolicy + 'static>(mut self, policy: P) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Zero every clock and redraw every first interval, in layout order.
    pub fn reset(&mut self, rng: &mut SimRng) {
        for vp in &mut self.vertiports {
            let first = rng.gen_range(self.initial_lower..=self.initial_upper);
            vp.rearm(first);
        }
    }

    #[inline]
    pub fn vertiports(&self) -> &[Vertiport] {
        &self.vertiports
    }

    /// Advance every vertiport clock by one tick and offer a candidate from
    /// each due vertiport.
    ///
    /// Admitted aircraft are added to `registry` immediately, so a later
    /// vertiport in the same step sees them when measuring clearance.
    ///
    /// # Errors
    ///
    /// Propagates [`SpawnError::Fleet`] if the registry already holds the
    /// identity `ids` hands out, which means the counter was rewound without
    /// clearing the registry.
    pub fn step(
        &mut self,
        registry: &mut Registry,
        ids:      &mut IdGenerator,
        rng:      &mut SimRng,
        phase:    SpawnPhase,
    ) -> SpawnResult<SpawnReport> {
        let mut report = SpawnReport::default();
        let count = self.vertiports.len();

        for src in 0..count {
            self.vertiports[src].tick();
            if phase == SpawnPhase::Closed || !self.vertiports[src].is_due() {
                continue;
            }

            let dst = pick_other(src, count, rng);
            let requested_heading: f64 = rng.gen_range(0.0..TAU);

            let origin = self.vertiports[src].position();
            let goal: Vec2 = self.vertiports[dst].position();
            let candidate =
                Aircraft::spawn(ids.peek(), origin, self.init_speed, requested_heading, goal);

            let nearest = registry.min_distance_to(origin);
            let ctx = AdmissionContext { candidate: &candidate, nearest, live: registry.len() };
            let from = self.vertiports[src].id();
            let to = self.vertiports[dst].id();

            if self.policy.admit(&ctx) {
                let id = candidate.id();
                registry.add(candidate)?;
                ids.next();
                let next = rng.gen_range(self.interval_lower..=self.interval_upper);
                self.vertiports[src].rearm(next);
                debug!(%id, %from, %to, nearest, next_interval = next, "spawn admitted");
                report.admitted.push(SpawnEvent { id, from, to });
            } else {
                debug!(%from, %to, nearest, requested_heading, "spawn rejected");
                report.rejected += 1;
            }
        }

        Ok(report)
    }
}

impl std::fmt::Debug for SpawnScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpawnScheduler")
            .field("vertiports", &self.vertiports)
            .field("interval", &(self.interval_lower, self.interval_upper))
            .finish_non_exhaustive()
    }
}

/// Uniform index in `0..count` excluding `src`.  One draw.
fn pick_other(src: usize, count: usize, rng: &mut SimRng) -> usize {
    let k = rng.gen_range(0..count - 1);
    if k >= src { k + 1 } else { k }
}
