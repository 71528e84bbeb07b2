//! In-memory output backend.

use crate::writer::OutputWriter;
use crate::{OutputResult, TickSummaryRow, TrajectoryRow};

/// Keeps every row in memory.  Never fails.
#[derive(Debug, Default, Clone)]
pub struct MemoryWriter {
    pub trajectories: Vec<TrajectoryRow>,
    pub summaries:    Vec<TickSummaryRow>,
    pub finished:     bool,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// One agent's recorded rows, in tick order.
    pub fn trajectory_of(&self, agent_id: u32) -> Vec<TrajectoryRow> {
        self.trajectories.iter().filter(|r| r.agent_id == agent_id).copied().collect()
    }

    /// Every agent's row recorded at `tick`.
    pub fn at_tick(&self, tick: u64) -> Vec<TrajectoryRow> {
        self.trajectories.iter().filter(|r| r.tick == tick).copied().collect()
    }
}

impl OutputWriter for MemoryWriter {
    fn write_trajectories(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()> {
        self.trajectories.extend_from_slice(rows);
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.push(*row);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.finished = true;
        Ok(())
    }
}
