//! The discrete heading command shared by policies and the kinematics engine.
//!
//! Controls are a three-valued action: `0 = turn_left`, `1 = hold`,
//! `2 = turn_right`.  The heading delta applied per tick is
//! `(value − 1) × heading_step`, so `hold` is the neutral element.

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// One aircraft's control input for a single tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    TurnLeft,
    /// Keep the current heading (default for aircraft with no supplied control).
    #[default]
    Hold,
    TurnRight,
}

impl Control {
    /// All controls in discrete-action order.
    pub const ALL: [Control; 3] = [Control::TurnLeft, Control::Hold, Control::TurnRight];

    /// The discrete action value (`0`, `1`, `2`).
    #[inline]
    pub fn value(self) -> u8 {
        match self {
            Control::TurnLeft  => 0,
            Control::Hold      => 1,
            Control::TurnRight => 2,
        }
    }

    /// Signed heading multiplier: `value − 1`.
    #[inline]
    pub fn heading_sign(self) -> f64 {
        f64::from(self.value()) - 1.0
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Control::TurnLeft  => "turn_left",
            Control::Hold      => "hold",
            Control::TurnRight => "turn_right",
        }
    }
}

impl TryFrom<u8> for Control {
    type Error = CoreError;

    /// Reject anything outside `{0, 1, 2}`.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Control::TurnLeft),
            1 => Ok(Control::Hold),
            2 => Ok(Control::TurnRight),
            v => Err(CoreError::InvalidControl(i64::from(v))),
        }
    }
}

impl TryFrom<i64> for Control {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| CoreError::InvalidControl(value))
            .and_then(Control::try_from)
    }
}

impl std::fmt::Display for Control {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
