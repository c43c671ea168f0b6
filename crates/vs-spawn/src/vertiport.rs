//! A vertiport: fixed position plus a spawn countdown.

use vs_core::{Vec2, VertiportId};

/// A fixed take-off point that periodically offers a new aircraft.
///
/// `clock` counts ticks since the last successful spawn (or since reset);
/// the vertiport is due once `clock >= time_next`.  Only a successful spawn
/// rearms it, which is what makes a rejected candidate retry every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertiport {
    id:        VertiportId,
    position:  Vec2,
    clock:     u64,
    time_next: f64,
}

impl Vertiport {
    pub fn new(id: VertiportId, position: Vec2, time_next: f64) -> Self {
        Self { id, position, clock: 0, time_next }
    }

    #[inline]
    pub fn id(&self) -> VertiportId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Ticks since the last successful spawn or rearm.
    #[inline]
    pub fn clock(&self) -> u64 {
        self.clock
    }

    /// Threshold the clock must reach before the next spawn attempt.
    #[inline]
    pub fn time_next(&self) -> f64 {
        self.time_next
    }

    /// Count one tick.
    #[inline]
    pub fn tick(&mut self) {
        self.clock += 1;
    }

    /// `true` once the clock has reached the threshold.
    #[inline]
    pub fn is_due(&self) -> bool {
        self.clock as f64 >= self.time_next
    }

    /// Start a fresh countdown to `time_next`.
    pub fn rearm(&mut self, time_next: f64) {
        self.time_next = time_next;
        self.clock = 0;
    }
}
