//! `vs-core` — foundational types for the `vertisim` airspace simulator.
//!
//! This crate is a dependency of every other `vs-*` crate.  It has no `vs-*`
//! dependencies and a small external footprint (`rand`,
//! `thiserror`, `serde`, `serde_json`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AircraftId`, `VertiportId`, `IdGenerator`            |
//! | [`geo`]         | `Vec2` world coordinates, `UNCONSTRAINED` sentinel    |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `SimRng` (simulation-wide stream)                     |
//! | [`control`]     | `Control` — the three-valued heading command          |
//! | [`config`]      | `AirspaceConfig` and its sections                     |
//! | [`error`]       | `CoreError`, `CoreResult`                             |

pub mod config;
pub mod control;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    AirspaceConfig, FlightConfig, RewardConfig, SeparationConfig, SpawnConfig, WorldConfig,
};
pub use control::Control;
pub use error::{CoreError, CoreResult};
pub use geo::{UNCONSTRAINED, Vec2};
pub use ids::{AircraftId, IdGenerator, VertiportId};
pub use rng::SimRng;
pub use time::Tick;
