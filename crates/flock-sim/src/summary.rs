//! Per-tick aggregate measurements.

use flock_behavior::Agent;
use flock_core::{Tick, Vec2, unit};

/// Population-level state after one tick has been committed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickSummary {
    /// The tick that was just processed.
    pub tick: Tick,
    pub agent_count: usize,
    pub mean_speed: f64,
    /// `|Σ unit(heading)| / N`, in `[0, 1]`.  1 means everyone heads the same
    /// way.
    pub polarization: f64,
}

impl TickSummary {
    /// Measure `agents`.  An empty population reports zeros.
    pub fn measure(tick: Tick, agents: &[Agent]) -> Self {
        let n = agents.len();
        if n == 0 {
            return Self { tick, agent_count: 0, mean_speed: 0.0, polarization: 0.0 };
        }
        let total_speed: f64 = agents.iter().map(|a| a.speed).sum();
        let alignment: Vec2 = agents.iter().map(|a| unit(a.heading)).sum();
        Self {
            tick,
            agent_count: n,
            mean_speed: total_speed / n as f64,
            polarization: alignment.magnitude() / n as f64,
        }
    }
}
