//! Base error type.
//!
//! Sub-crates define their own error enums and convert `FlockError` into them
//! via `From` where it crosses a crate boundary.

use thiserror::Error;

use crate::AgentId;

#[derive(Debug, Error)]
pub enum FlockError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `flock-core`.
pub type FlockResult<T> = Result<T, FlockError>;
