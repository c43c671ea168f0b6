//! `vs-spawn` — vertiports and the admission-controlled spawn scheduler.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`vertiport`]   | `Vertiport` — position plus a spawn countdown clock       |
//! | [`admission`]   | `AdmissionPolicy` trait, `SeparationAdmission`, `CapacityLimit`, `ChainedAdmission` |
//! | [`scheduler`]   | `SpawnScheduler`, `SpawnPhase`, `SpawnReport`             |
//! | [`loader`]      | `load_vertiports_csv`, `load_vertiports_reader`           |
//! | [`error`]       | `SpawnError`, `SpawnResult<T>`                            |
//!
//! # Clock model (summary)
//!
//! Every vertiport counts ticks since its last successful spawn.  Once the
//! count reaches its drawn threshold it offers one candidate aircraft per
//! tick until the admission policy accepts one:
//!
//! ```text
//! clock += 1
//! if clock >= time_next && phase is open:
//!     candidate = aircraft at vertiport, goal = random other vertiport
//!     if admitted: register, clock = 0, time_next ~ U[lower, upper]
//!     else:        leave clock alone (retry next tick)
//! ```

pub mod admission;
pub mod error;
pub mod loader;
pub mod scheduler;
pub mod vertiport;


pub use admission::{
    AdmissionContext, AdmissionPolicy, AdmissionPolicyExt, CapacityLimit, ChainedAdmission,
    SeparationAdmission,
};
pub use error::{SpawnError, SpawnResult};
pub use loader::{load_vertiports_csv, load_vertiports_reader};
pub use scheduler::{SpawnEvent, SpawnPhase, SpawnReport, SpawnScheduler};
pub use vertiport::Vertiport;
