//! `SimOutputObserver<W>` bridges `SimObserver` to an `OutputWriter`.

use flock_core::{AgentId, Tick, Vec2};
use flock_sim::{SimObserver, TickSummary};

use crate::row::{TickSummaryRow, TrajectoryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes trajectories and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Records arriving during a tick are buffered and written as one batch when
/// the tick ends.  Errors from the writer are stored internally because
/// `SimObserver` methods have no return value.  After `sim.run()` returns,
/// check for errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    pending:    Vec<TrajectoryRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, pending: Vec::new(), last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Borrow the inner writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Unwrap the inner writer (e.g. to inspect rows after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_record(&mut self, tick: Tick, agent: AgentId, position: Vec2, heading: Vec2) {
        self.pending.push(TrajectoryRow {
            tick:      tick.0,
            agent_id:  agent.0,
            x:         position.x,
            y:         position.y,
            heading_x: heading.x,
            heading_y: heading.y,
        });
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        if !self.pending.is_empty() {
            let rows = std::mem::take(&mut self.pending);
            let result = self.writer.write_trajectories(&rows);
            self.store_err(result);
        }

        let row = TickSummaryRow {
            tick:         summary.tick.0,
            agent_count:  summary.agent_count as u64,
            mean_speed:   summary.mean_speed,
            polarization: summary.polarization,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
