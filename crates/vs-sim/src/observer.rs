//! Episode observer trait for progress reporting and data collection.

use tracing::{debug, info};

use vs_core::Tick;

use crate::{EpisodeSummary, Observation, StepResult};

/// Callbacks invoked by [`run_episode`][crate::run_episode].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — reward collector
///
/// ```rust,ignore
/// struct Rewards(Vec<f64>);
///
/// impl SimObserver for Rewards {
///     fn on_tick_end(&mut self, _tick: Tick, step: &StepResult) {
///         self.0.push(step.reward);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first tick with the starting observation.
    fn on_episode_start(&mut self, _observation: &Observation) {}

    /// Called after each tick with everything that tick produced.
    fn on_tick_end(&mut self, _tick: Tick, _step: &StepResult) {}

    /// Called once after the final tick.
    fn on_episode_end(&mut self, _summary: &EpisodeSummary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Logs a summary line every `interval` ticks and the episode totals at the
/// end, through `tracing`.
#[derive(Debug, Clone)]
pub struct TracingObserver {
    interval:   u64,
    reward_sum: f64,
}

impl TracingObserver {
    /// `interval` of 0 disables the per-tick lines.
    pub fn new(interval: u64) -> Self {
        Self { interval, reward_sum: 0.0 }
    }
}

impl SimObserver for TracingObserver {
    fn on_episode_start(&mut self, observation: &Observation) {
        self.reward_sum = 0.0;
        debug!(live = observation.len(), "episode start");
    }

    fn on_tick_end(&mut self, tick: Tick, step: &StepResult) {
        self.reward_sum += step.reward;
        if self.interval > 0 && tick.0.is_multiple_of(self.interval) {
            let nearest = step.diagnostics.iter().copied().fold(f64::INFINITY, f64::min);
            info!(
                %tick,
                live = step.observation.len(),
                reward = step.reward,
                reward_sum = self.reward_sum,
                nearest,
                "progress"
            );
        }
    }

    fn on_episode_end(&mut self, summary: &EpisodeSummary) {
        info!(
            ticks = summary.ticks,
            total_reward = summary.total_reward,
            conflicts = summary.stats.conflicts,
            near_misses = summary.stats.near_misses,
            goals = summary.stats.goals,
            wall_exits = summary.stats.wall_exits,
            spawned = summary.stats.spawned,
            "episode summary"
        );
    }
}
