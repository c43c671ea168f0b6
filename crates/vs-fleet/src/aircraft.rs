//! A single aircraft and its goal.

use rustc_hash::FxHashSet;
use vs_core::{AircraftId, Vec2};

/// Target position an aircraft is flying to.  Immutable once created.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Goal {
    position: Vec2,
}

impl Goal {
    #[inline]
    pub fn new(position: Vec2) -> Self {
        Self { position }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }
}

/// One aircraft.
///
/// Velocity is derived state: it is recomputed from `speed` and `heading`
/// every time either changes and has no setter.  The one exception is a
/// fresh [`spawn`](Self::spawn), whose velocity follows the requested heading
/// until it first moves.  Heading is unbounded (no
/// wraparound) and speed is only soft-clamped by the kinematics engine, so
/// neither is range-checked here.
#[derive(Clone, Debug)]
pub struct Aircraft {
    id:       AircraftId,
    position: Vec2,
    velocity: Vec2,
    speed:    f64,
    /// Radians.
    heading:  f64,
    goal:     Goal,
    /// Neighbours currently inside the minimum separation, as seen from this
    /// aircraft.  A neighbour entering the set is one conflict event.
    conflict_ids: FxHashSet<AircraftId>,
    /// Reward assigned by the most recent scoring pass.
    reward:   f64,
}

impl Aircraft {
    /// Create an aircraft at `position` bound for `goal`.
    ///
    /// The heading always starts pointed straight at the goal,
    /// `atan2(goal.y − pos.y, goal.x − pos.x)`, and so does the velocity.
    pub fn new(id: AircraftId, position: Vec2, speed: f64, goal: Vec2) -> Self {
        Self::spawn(id, position, speed, position.bearing_to(goal), goal)
    }

    /// Create an aircraft whose velocity follows `requested_heading` while its
    /// heading is overridden to the goal bearing.
    ///
    /// The two disagree until the first motion step recomputes velocity, so
    /// the row observed on the spawn tick carries the requested direction.
    pub fn spawn(
        id: AircraftId,
        position: Vec2,
        speed: f64,
        requested_heading: f64,
        goal: Vec2,
    ) -> Self {
        Self {
            id,
            position,
            velocity: Vec2::from_polar(speed, requested_heading),
            speed,
            heading: position.bearing_to(goal),
            goal: Goal::new(goal),
            conflict_ids: FxHashSet::default(),
            reward: 0.0,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AircraftId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[inline]
    pub fn heading(&self) -> f64 {
        self.heading
    }

    #[inline]
    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    #[inline]
    pub fn reward(&self) -> f64 {
        self.reward
    }

    /// Distance from the current position to the goal.
    #[inline]
    pub fn distance_to_goal(&self) -> f64 {
        self.position.distance(self.goal.position())
    }

    /// Observation row: `[pos_x, pos_y, vel_x, vel_y, speed, heading, goal_x, goal_y]`.
    pub fn state_row(&self) -> [f64; 8] {
        let goal = self.goal.position();
        [
            self.position.x,
            self.position.y,
            self.velocity.x,
            self.velocity.y,
            self.speed,
            self.heading,
            goal.x,
            goal.y,
        ]
    }

    // ── Motion ────────────────────────────────────────────────────────────

    /// Adopt `speed` and `heading`, recompute velocity, and integrate one
    /// unit tick of motion.
    pub fn fly(&mut self, speed: f64, heading: f64) {
        self.speed = speed;
        self.heading = heading;
        self.velocity = Vec2::from_polar(speed, heading);
        self.position += self.velocity;
    }

    // ── Scoring state ─────────────────────────────────────────────────────

    /// Overwrite this tick's reward.
    #[inline]
    pub fn set_reward(&mut self, reward: f64) {
        self.reward = reward;
    }

    /// Record `other` as inside the minimum separation.  Returns `true` if
    /// this is a newly entered conflict (the pair was not already tracked).
    #[inline]
    pub fn enter_conflict(&mut self, other: AircraftId) -> bool {
        self.conflict_ids.insert(other)
    }

    /// Forget `other`; no-op if it was not tracked.
    #[inline]
    pub fn clear_conflict(&mut self, other: AircraftId) {
        self.conflict_ids.remove(&other);
    }

    #[inline]
    pub fn in_conflict_with(&self, other: AircraftId) -> bool {
        self.conflict_ids.contains(&other)
    }

    /// Number of neighbours currently tracked as in conflict.
    #[inline]
    pub fn conflict_count(&self) -> usize {
        self.conflict_ids.len()
    }
}
