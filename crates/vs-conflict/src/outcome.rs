use std::fmt;

use serde::{Deserialize, Serialize};

/// How one aircraft was classified by a scoring pass.
///
/// Variants are listed in priority order: when several conditions hold at
/// once, the first one listed wins.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Nearest neighbour inside the NMAC distance.  Terminal.
    NearMiss,
    /// Left the world rectangle.  Terminal.
    OutOfBounds,
    /// Inside the goal radius.  Terminal.
    GoalReached,
    /// Inside the minimum separation of at least one neighbour.
    Conflict,
    /// Nothing to report; pays the step penalty.
    Nominal,
}

impl Outcome {
    /// `true` if the aircraft leaves the airspace at the end of the tick.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Outcome::NearMiss | Outcome::OutOfBounds | Outcome::GoalReached)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::NearMiss    => "near_miss",
            Outcome::OutOfBounds => "out_of_bounds",
            Outcome::GoalReached => "goal_reached",
            Outcome::Conflict    => "conflict",
            Outcome::Nominal     => "nominal",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
