use flock_behavior::BehaviorError;
use flock_core::FlockError;
use flock_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("invalid parameters: {0}")]
    Params(#[from] FlockError),

    #[error("behavior error: {0}")]
    Behavior(#[from] BehaviorError),

    #[error("spatial error: {0}")]
    Spatial(#[from] SpatialError),
}

pub type SimResult<T> = Result<T, SimError>;
