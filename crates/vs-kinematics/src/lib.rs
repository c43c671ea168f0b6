//! `vs-kinematics` — advances aircraft by one tick.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`engine`]  | `KinematicsEngine`, `Controls` (per-id control map)       |
//! | [`error`]   | `KinematicsError`, `KinematicsResult<T>`                  |
//!
//! # Motion model (per tick, per aircraft)
//!
//! 1. Soft-clamp speed into `[min_speed, max_speed]`.
//! 2. Add `N(0, speed_sigma)` to speed.  No clamp afterwards: speed may leave
//!    the configured range until the next tick's clamp.
//! 3. `heading += (control − 1) × heading_step`, no wraparound.
//! 4. `velocity = speed · (cos heading, sin heading)`.
//! 5. `position += velocity` (unit tick).

pub mod engine;
pub mod error;


pub use engine::{Controls, KinematicsEngine};
pub use error::{KinematicsError, KinematicsResult};
