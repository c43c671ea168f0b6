//! `vs-sim` — the airspace simulation root for the vertisim workspace.
//!
//! # Tick pipeline
//!
//! ```text
//! tick(controls):
//!   ① Motion — KinematicsEngine::step_all over the registry (registry order)
//!   ② Spawn  — SpawnScheduler::step over the vertiports (layout order);
//!              admitted aircraft are registered immediately
//!   ③ Score  — ConflictEngine scores a position snapshot: conflict sets,
//!              outcomes, per-aircraft rewards
//!   ④ Remove — terminated aircraft leave the registry
//!   → StepResult { observation, reward, terminal: false, diagnostics, .. }
//! ```
//!
//! All randomness comes from one `SimRng` in the order above, so a seed plus
//! a control sequence reproduces an episode exactly.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use vs_core::AirspaceConfig;
//! use vs_policy::SeekGoalPolicy;
//! use vs_sim::{Airspace, TracingObserver, run_episode};
//!
//! let config = AirspaceConfig::default();
//! let mut airspace = Airspace::new(config.clone(), 42)?;
//! airspace.reset(42);
//! let mut policy = SeekGoalPolicy::new(config.flight.heading_step)?;
//! let summary = run_episode(&mut airspace, &mut policy, 2_000, &mut TracingObserver::new(100))?;
//! ```

pub mod airspace;
pub mod builder;
pub mod episode;
pub mod error;
pub mod observation;
pub mod observer;


pub use airspace::Airspace;
pub use builder::AirspaceBuilder;
pub use episode::{EpisodePlan, EpisodeSummary, run_episode, run_planned};
pub use error::{SimError, SimResult};
pub use observation::{OBS_WIDTH, Observation, StepResult};
pub use observer::{NoopObserver, SimObserver, TracingObserver};
