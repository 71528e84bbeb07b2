//! Spatial-subsystem error type.

use thiserror::Error;

use flock_core::{AgentId, Bounds, Vec2};

/// Errors produced by `flock-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("position {pos} is outside bounded world {bounds}")]
    OutOfBounds { pos: Vec2, bounds: Bounds },

    #[error("position {0} is not finite")]
    NonFinite(Vec2),

    #[error("agent {0} has not been placed in the space")]
    AgentNotFound(AgentId),

    #[error("agent {got} placed out of order (expected {expected})")]
    OutOfOrderPlacement { expected: AgentId, got: AgentId },

    #[error("invalid world bounds {0}")]
    InvalidBounds(Bounds),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
