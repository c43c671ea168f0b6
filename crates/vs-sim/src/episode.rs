//! Tick-budgeted episode runner.

use serde::Serialize;
use tracing::info;

use vs_conflict::EpisodeStats;
use vs_policy::{ControlPolicy, PolicyContext};
use vs_spawn::SpawnPhase;

use crate::{Airspace, SimObserver, SimResult};

/// How an episode is driven.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EpisodePlan {
    /// Tick budget.  The episode ends after this many ticks.
    pub max_ticks:     u64,
    /// Spawning closes for this many ticks at the end of the budget.
    pub closing_ticks: u64,
}

impl EpisodePlan {
    pub fn new(max_ticks: u64) -> Self {
        Self { max_ticks, closing_ticks: 0 }
    }

    pub fn closing(mut self, closing_ticks: u64) -> Self {
        self.closing_ticks = closing_ticks;
        self
    }

    /// Phase for the tick `elapsed` ticks into the episode.
    fn phase_at(&self, elapsed: u64) -> SpawnPhase {
        if elapsed + self.closing_ticks >= self.max_ticks {
            SpawnPhase::Closed
        } else {
            SpawnPhase::Open
        }
    }
}

/// Totals for one finished episode.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EpisodeSummary {
    pub seed:         u64,
    pub ticks:        u64,
    pub total_reward: f64,
    /// Aircraft still live when the budget ran out.
    pub live_at_end:  usize,
    pub stats:        EpisodeStats,
}

/// Drive `airspace` from its current state for `max_ticks` ticks under
/// `policy`.  The caller resets the airspace first.
pub fn run_episode<P, O>(
    airspace: &mut Airspace,
    policy:   &mut P,
    max_ticks: u64,
    observer: &mut O,
) -> SimResult<EpisodeSummary>
where
    P: ControlPolicy + ?Sized,
    O: SimObserver + ?Sized,
{
    run_planned(airspace, policy, EpisodePlan::new(max_ticks), observer)
}

/// Like [`run_episode`], with a spawn-closing window at the end.
pub fn run_planned<P, O>(
    airspace: &mut Airspace,
    policy:   &mut P,
    plan:     EpisodePlan,
    observer: &mut O,
) -> SimResult<EpisodeSummary>
where
    P: ControlPolicy + ?Sized,
    O: SimObserver + ?Sized,
{
    observer.on_episode_start(&airspace.observe());

    let mut total_reward = 0.0;
    for elapsed in 0..plan.max_ticks {
        let controls = {
            let ctx = PolicyContext::new(airspace.now(), airspace.registry());
            policy.decide(&ctx)
        };
        let tick = airspace.now();
        let step = airspace.tick_with_phase(&controls, plan.phase_at(elapsed))?;
        total_reward += step.reward;
        observer.on_tick_end(tick, &step);
    }

    let summary = EpisodeSummary {
        seed: airspace.seed(),
        ticks: plan.max_ticks,
        total_reward,
        live_at_end: airspace.registry().len(),
        stats: airspace.stats().clone(),
    };
    info!(
        seed = summary.seed,
        ticks = summary.ticks,
        total_reward,
        live = summary.live_at_end,
        "episode finished"
    );
    observer.on_episode_end(&summary);
    Ok(summary)
}
