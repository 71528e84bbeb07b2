//! `flock-spatial`: the world agents move in.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                      |
//! |-----------|---------------------------------------------------------------|
//! | [`space`] | `Space`: positions, R-tree index, boundary handling           |
//! | [`query`] | `NeighborQuery`, field-of-view filter (`in_blind_spot`)       |
//! | [`error`] | `SpatialError`, `SpatialResult<T>`                            |
//!
//! # Neighbor queries
//!
//! A query is a three-stage filter: distance (wrapped on a torus), then field
//! of view (a blind wedge behind the focal heading, optionally another in
//! front), then the self filter (anything at distance zero).  See
//! [`Space::neighbors`].

pub mod error;
pub mod query;
pub mod space;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use query::{NeighborQuery, in_blind_spot};
pub use space::Space;
