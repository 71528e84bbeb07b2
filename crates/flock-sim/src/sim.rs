//! The `Sim` struct and its tick loop.

use flock_behavior::{Agent, BehaviorResult, Staged, StepContext, commit, stage};
use flock_core::{FlockParams, SimClock, SimConfig, SimRng};
use flock_spatial::Space;

use crate::{SimObserver, SimResult, TickSummary};

/// The main simulation runner.
///
/// Holds the whole world and drives the synchronous tick loop:
///
/// 1. **Stage**: every agent computes its next state from the same
///    start-of-tick snapshot.  The shared [`SimRng`] is drawn from in
///    ascending `AgentId` order.
/// 2. **Record**: on recording ticks the observer sees every agent's pre-tick
///    position and heading.
/// 3. **Commit**: staged states are applied in ascending `AgentId` order.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Total ticks, seed and recording interval.
    pub config: SimConfig,

    /// Tracks the current tick.
    pub clock: SimClock,

    pub params: FlockParams,

    /// Agent positions and the neighbor index.
    pub space: Space,

    /// Agent records, indexed by `AgentId`.
    pub agents: Vec<Agent>,

    /// The single random source shared by every agent.
    pub rng: SimRng,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Process exactly one tick and advance the clock.
    ///
    /// If any agent fails to stage, the error is returned before anything is
    /// committed and the clock stays put.  The random source has still been
    /// drawn from.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<TickSummary> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        // ── Phase 1: stage ────────────────────────────────────────────────
        let staged: Vec<Staged> = {
            let ctx = StepContext::new(now, &self.space, &self.agents, &self.params);
            let rng = &mut self.rng;
            self.agents
                .iter()
                .map(|agent| stage(agent, &ctx, &mut *rng))
                .collect::<BehaviorResult<_>>()?
        };

        // ── Phase 2: record pre-tick state ────────────────────────────────
        if self.config.records(now) {
            for agent in &self.agents {
                let pos = self.space.position(agent.id)?;
                observer.on_record(now, agent.id, pos, agent.heading);
            }
        }

        // ── Phase 3: commit ───────────────────────────────────────────────
        for (agent, next) in self.agents.iter_mut().zip(&staged) {
            commit(agent, next, &mut self.space)?;
        }

        let summary = TickSummary::measure(now, &self.agents);
        self.clock.advance();
        observer.on_tick_end(&summary);
        Ok(summary)
    }

    /// Number of agents.
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }
}
