//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, TickSummaryRow, TrajectoryRow};

/// Trait implemented by [`CsvWriter`][crate::CsvWriter] and
/// [`MemoryWriter`][crate::MemoryWriter].
///
/// Errors are returned to [`SimOutputObserver`][crate::SimOutputObserver],
/// which stores the first one for [`take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one tick's batch of trajectory rows.
    fn write_trajectories(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
