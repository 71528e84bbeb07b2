//! Read-only simulation state passed to every stage call.

use flock_core::{AgentId, FlockParams, Tick};
use flock_spatial::Space;

use crate::{Agent, BehaviorError, BehaviorResult};

/// A read-only snapshot of the world for one tick's stage phase.
///
/// Built once per tick by the simulation loop and shared by every agent.
/// The borrows guarantee nothing can move while stages are running.
pub struct StepContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// Positions and neighbor queries.
    pub space: &'a Space,

    /// Every agent, indexed by `AgentId`.
    pub agents: &'a [Agent],

    /// Run parameters.
    pub params: &'a FlockParams,
}

impl<'a> StepContext<'a> {
    #[inline]
    pub fn new(tick: Tick, space: &'a Space, agents: &'a [Agent], params: &'a FlockParams) -> Self {
        Self { tick, space, agents, params }
    }

    /// Look up another agent's committed state.
    #[inline]
    pub fn agent(&self, id: AgentId) -> BehaviorResult<&'a Agent> {
        self.agents.get(id.index()).ok_or(BehaviorError::AgentNotFound(id))
    }
}
