//! `flock-output`: trajectory and summary writers for the flock simulation.
//!
//! | Writer           | Destination                                     |
//! |------------------|-------------------------------------------------|
//! | [`CsvWriter`]    | `trajectories.csv`, `tick_summaries.csv`        |
//! | [`MemoryWriter`] | in-memory row vectors (tests, post-processing)  |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `flock_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use flock_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod memory;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use memory::MemoryWriter;
pub use observer::SimOutputObserver;
pub use row::{TickSummaryRow, TrajectoryRow};
pub use writer::OutputWriter;
