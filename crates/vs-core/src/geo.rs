//! World-coordinate vector type and distance helpers.
//!
//! The airspace is a flat rectangle `[0, width] × [0, height]`; all positions,
//! velocities, and goals are `Vec2` in those world units.  `f64` throughout so
//! that long-lived aircraft with large accumulated headings keep precision.

use serde::{Deserialize, Serialize};

/// Minimum-distance value reported when there is nothing to measure against
/// (an aircraft alone in the registry, or a spawn candidate with an empty
/// airspace).  Larger than any finite distance, so every threshold comparison
/// treats it as unconstrained.
pub const UNCONSTRAINED: f64 = f64::INFINITY;

/// A 2-D point or vector in world units.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit-free polar construction: `(r·cos θ, r·sin θ)`.
    #[inline]
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self { x: r * theta.cos(), y: r * theta.sin() }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Bearing from `self` toward `target`, in radians (`atan2(dy, dx)`).
    #[inline]
    pub fn bearing_to(self, target: Vec2) -> f64 {
        (target.y - self.y).atan2(target.x - self.x)
    }

    #[inline]
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Inclusive bounds check against `[0, width] × [0, height]`.
    #[inline]
    pub fn within(self, width: f64, height: f64) -> bool {
        (0.0..=width).contains(&self.x) && (0.0..=height).contains(&self.y)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
