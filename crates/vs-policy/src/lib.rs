//! `vs-policy` — controllers that turn airspace state into per-aircraft controls.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`context`]   | `PolicyContext<'a>` — read-only tick view shared by decisions |
//! | [`model`]     | `ControlPolicy` trait                                         |
//! | [`reference`] | `HoldPolicy`, `SeekGoalPolicy`, `RandomPolicy`                |
//! | [`error`]     | `PolicyError`, `PolicyResult<T>`                              |
//!
//! # Decide, then move
//!
//! Each tick the episode runner builds a `PolicyContext` over the registry,
//! asks the policy for a `Controls` map, drops the borrow, and only then
//! hands the map to `Airspace::tick`.  Policies never touch the simulation
//! RNG.

pub mod context;
pub mod error;
pub mod model;
pub mod reference;

#[cfg(test)]
mod tests;

pub use context::PolicyContext;
pub use error::{PolicyError, PolicyResult};
pub use model::ControlPolicy;
pub use reference::{HoldPolicy, RandomPolicy, SeekGoalPolicy};
