//! `flock-core`: foundational types for the flocking simulation.
//!
//! This crate is a dependency of every other `flock-*` crate.  It has no
//! `flock-*` dependencies and only a few external ones (`rand`, `rand_distr`
//! and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`vector`]      | `Vec2`, `unit`, `angle`, `wrap_to_2pi`, force helpers |
//! | [`geo`]         | `Bounds`, `Boundary`                                  |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]         | `RandomSource` trait, `SimRng` (run-wide, seedable)   |
//! | [`params`]      | `FlockParams`, per-run behavior parameters            |
//! | [`error`]       | `FlockError`, `FlockResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and value types.  |

pub mod error;
pub mod geo;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;
pub mod vector;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{FlockError, FlockResult};
pub use geo::{Boundary, Bounds};
pub use ids::AgentId;
pub use params::FlockParams;
pub use rng::{RandomSource, SimRng};
pub use time::{SimClock, SimConfig, Tick};
pub use vector::{Vec2, angle, direction_toward_centroid, unit, weighted_force, wrap_to_2pi};
