//! `flock-behavior`: what one agent does in one tick.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`agent`]   | `Agent`: id, heading, speed (position lives in the `Space`)       |
//! | [`context`] | `StepContext<'a>`: read-only tick snapshot shared by all agents   |
//! | [`rules`]   | `Rule`, `group`, `align`, `cohese`, `separate`, `contain`, …      |
//! | [`step`]    | `Forces`, `Staged`, `stage`, `commit`                             |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`                              |
//!
//! # Two-phase update
//!
//! 1. **Stage**: [`stage`] reads the agent, its neighbors and the parameters
//!    through `&StepContext` and returns a [`Staged`] value.  Nothing in the
//!    world changes.
//!
//! 2. **Commit**: [`commit`] moves the agent in the `Space` and overwrites its
//!    heading and speed with the staged values.
//!
//! Callers stage every agent before committing any, so every stage
//! sees the same start-of-tick world.

pub mod agent;
pub mod context;
pub mod error;
pub mod rules;
pub mod step;


pub use agent::Agent;
pub use context::StepContext;
pub use error::{BehaviorError, BehaviorResult};
pub use rules::{Rule, align, avoid_border, cohese, contain, group, noise, relax_speed, separate};
pub use step::{Forces, Staged, commit, stage};
