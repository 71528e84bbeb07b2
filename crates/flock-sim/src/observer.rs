//! Simulation observer trait for progress reporting and data collection.

use flock_core::{AgentId, Tick, Vec2};

use crate::TickSummary;

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  The loop itself never logs; attach a
/// [`TracingObserver`] to get log output.
pub trait SimObserver {
    /// Called at the very start of each tick, before any agent is staged.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per agent on recording ticks (every
    /// `config.output_interval_ticks`), after staging and before commit.
    ///
    /// `position` and `heading` are the agent's state at the start of `tick`.
    fn on_record(&mut self, _tick: Tick, _agent: AgentId, _position: Vec2, _heading: Vec2) {}

    /// Called after every agent has committed.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

impl<O: SimObserver + ?Sized> SimObserver for &mut O {
    fn on_tick_start(&mut self, tick: Tick) {
        (**self).on_tick_start(tick);
    }
    fn on_record(&mut self, tick: Tick, agent: AgentId, position: Vec2, heading: Vec2) {
        (**self).on_record(tick, agent, position, heading);
    }
    fn on_tick_end(&mut self, summary: &TickSummary) {
        (**self).on_tick_end(summary);
    }
    fn on_sim_end(&mut self, final_tick: Tick) {
        (**self).on_sim_end(final_tick);
    }
}

/// Fan every callback out to two observers, left first.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_tick_start(&mut self, tick: Tick) {
        self.0.on_tick_start(tick);
        self.1.on_tick_start(tick);
    }
    fn on_record(&mut self, tick: Tick, agent: AgentId, position: Vec2, heading: Vec2) {
        self.0.on_record(tick, agent, position, heading);
        self.1.on_record(tick, agent, position, heading);
    }
    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.0.on_tick_end(summary);
        self.1.on_tick_end(summary);
    }
    fn on_sim_end(&mut self, final_tick: Tick) {
        self.0.on_sim_end(final_tick);
        self.1.on_sim_end(final_tick);
    }
}

/// Forwards loop events to `tracing`.
///
/// Tick summaries go out at `INFO` every `summary_interval` ticks (and at
/// `DEBUG` otherwise); individual records at `TRACE`.
pub struct TracingObserver {
    summary_interval: u64,
}

impl TracingObserver {
    pub fn new(summary_interval: u64) -> Self {
        Self { summary_interval }
    }
}

impl Default for TracingObserver {
    fn default() -> Self {
        Self::new(1)
    }
}

impl SimObserver for TracingObserver {
    fn on_tick_start(&mut self, tick: Tick) {
        tracing::trace!(tick = tick.0, "tick start");
    }

    fn on_record(&mut self, tick: Tick, agent: AgentId, position: Vec2, heading: Vec2) {
        tracing::trace!(
            tick = tick.0,
            agent = agent.0,
            x = position.x,
            y = position.y,
            heading_x = heading.x,
            heading_y = heading.y,
            "record"
        );
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        let loud = self.summary_interval > 0 && summary.tick.0.is_multiple_of(self.summary_interval);
        if loud {
            tracing::info!(
                tick = summary.tick.0,
                agents = summary.agent_count,
                mean_speed = summary.mean_speed,
                polarization = summary.polarization,
                "tick complete"
            );
        } else {
            tracing::debug!(
                tick = summary.tick.0,
                mean_speed = summary.mean_speed,
                polarization = summary.polarization,
                "tick complete"
            );
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        tracing::info!(final_tick = final_tick.0, "simulation finished");
    }
}
