//! `vs-conflict` — scores the airspace after motion and spawning.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`outcome`]  | `Outcome` — per-aircraft classification for one tick     |
//! | [`stats`]    | `EpisodeStats` — counters accumulated across an episode   |
//! | [`engine`]   | `ConflictEngine`, `TickScore`                             |
//!
//! # Two-phase scoring
//!
//! ```text
//! snapshot  = registry positions (insertion order)
//! score     : for each aircraft A, compare against every other snapshot entry,
//!             update A's conflict set, pick A's outcome, set A's reward
//! remove    : drop every aircraft whose outcome is terminal
//! ```
//!
//! Scoring reads only the snapshot and never adds or removes aircraft, so
//! every aircraft is judged against the same configuration.  Removal happens
//! once, after the scan.

pub mod engine;
pub mod outcome;
pub mod stats;

#[cfg(test)]
mod tests;

pub use engine::{ConflictEngine, TickScore};
pub use outcome::Outcome;
pub use stats::EpisodeStats;
