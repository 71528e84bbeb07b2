//! The per-agent state record.

use flock_core::{AgentId, Vec2};

/// One flocking agent.
///
/// Plain data: behavior lives in free functions ([`stage`][crate::stage],
/// [`commit`][crate::commit]).  The position is owned by the
/// [`Space`][flock_spatial::Space] the agent was placed in.
#[derive(Clone, Debug, PartialEq)]
pub struct Agent {
    pub id: AgentId,
    /// Direction of travel; its magnitude is the last staged speed.
    pub heading: Vec2,
    /// Finite, non-negative.
    pub speed: f64,
}

impl Agent {
    pub fn new(id: AgentId, heading: Vec2, speed: f64) -> Self {
        Self { id, heading, speed }
    }
}
