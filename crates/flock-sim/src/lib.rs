//! `flock-sim`: tick loop orchestrator for the flock simulation.
//!
//! # Two-phase tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Stage   : stage(agent) for every agent against the unmodified world.
//!               Any error aborts the tick; nothing has been written yet.
//!   ② Record  : on recording ticks, observer.on_record(tick, id, pos, heading)
//!               with the pre-tick state of every agent.
//!   ③ Commit  : commit(agent, staged) in ascending AgentId order.
//!   ④ Summary : TickSummary { mean_speed, polarization } → on_tick_end.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use flock_core::{Boundary, Bounds, FlockParams, SimConfig};
//! use flock_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(
//!     SimConfig::default(),
//!     FlockParams::default(),
//!     Bounds::from_size(5.0, 5.0),
//!     Boundary::Toroidal,
//!     10,
//! )
//! .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod summary;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TracingObserver};
pub use sim::Sim;
pub use summary::TickSummary;
