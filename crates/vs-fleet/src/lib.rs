//! `vs-fleet` — aircraft state and the live-aircraft registry.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`aircraft`]   | `Goal`, `Aircraft` (position, derived velocity, conflict set) |
//! | [`registry`]   | `Registry` — insertion-ordered `AircraftId → Aircraft`     |
//! | [`error`]      | `FleetError`, `FleetResult<T>`                             |
//!
//! The registry is the sole owner of aircraft lifetime.  Its iteration order
//! is insertion order, which fixes the row order of every observation and the
//! draw order of per-aircraft speed noise.

pub mod aircraft;
pub mod error;
pub mod registry;

#[cfg(test)]
mod tests;

pub use aircraft::{Aircraft, Goal};
pub use error::{FleetError, FleetResult};
pub use registry::Registry;
