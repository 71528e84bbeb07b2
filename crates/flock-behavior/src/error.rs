use flock_core::AgentId;
use flock_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    /// A staged quantity became NaN or infinite.  Fatal: the tick must not
    /// commit.
    #[error("numeric divergence for {agent}: {quantity} = {value}")]
    NumericDivergence {
        agent:    AgentId,
        quantity: &'static str,
        value:    f64,
    },

    #[error("agent {0} missing from the step context")]
    AgentNotFound(AgentId),

    #[error("spatial error: {0}")]
    Spatial(#[from] SpatialError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
