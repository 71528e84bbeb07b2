//! Fluent builder for constructing a [`Sim`].

use std::f64::consts::TAU;

use flock_behavior::Agent;
use flock_core::{AgentId, Boundary, Bounds, FlockParams, RandomSource, SimClock, SimConfig, SimRng, Vec2};
use flock_spatial::Space;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: total ticks, seed, recording interval
/// - [`FlockParams`]: radii, blind angles, weights, dynamics constants
/// - [`Bounds`] + [`Boundary`]: the world rectangle and its edge policy
/// - `agent_count`
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                                         |
/// |-------------------------|-------------------------------------------------|
/// | `.initial_states(v)`    | Uniform random positions, random unit headings  |
///
/// Every agent starts at `params.cruise_speed`.  Random draws come from the
/// run's own [`SimRng`], so the same seed reproduces the same start.
pub struct SimBuilder {
    config:      SimConfig,
    params:      FlockParams,
    bounds:      Bounds,
    boundary:    Boundary,
    agent_count: usize,
    states:      Option<Vec<(Vec2, Vec2)>>,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(
        config:      SimConfig,
        params:      FlockParams,
        bounds:      Bounds,
        boundary:    Boundary,
        agent_count: usize,
    ) -> Self {
        Self { config, params, bounds, boundary, agent_count, states: None }
    }

    /// Supply `(position, heading)` for each agent (must be length
    /// `agent_count`).  Positions go through the world's boundary policy.
    pub fn initial_states(mut self, states: Vec<(Vec2, Vec2)>) -> Self {
        self.states = Some(states);
        self
    }

    /// Validate inputs, place every agent and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.params.validate()?;
        if AgentId::try_from(self.agent_count).is_err() {
            return Err(SimError::Config(format!(
                "agent_count {} exceeds the AgentId range",
                self.agent_count
            )));
        }

        let mut space = Space::new(self.bounds, self.boundary)?;
        let mut rng = SimRng::new(self.config.seed);

        let states = match self.states {
            Some(s) => {
                if s.len() != self.agent_count {
                    return Err(SimError::AgentCountMismatch {
                        expected: self.agent_count,
                        got:      s.len(),
                        what:     "initial states",
                    });
                }
                s
            }
            None => random_states(self.bounds, self.agent_count, &mut rng),
        };

        let mut agents = Vec::with_capacity(self.agent_count);
        for (i, (pos, heading)) in states.into_iter().enumerate() {
            let id = AgentId(i as u32);
            if !heading.is_finite() {
                return Err(SimError::Config(format!("{id} has non-finite heading {heading}")));
            }
            space.place(id, pos)?;
            agents.push(Agent::new(id, heading, self.params.cruise_speed));
        }

        Ok(Sim {
            config: self.config,
            clock: SimClock::new(),
            params: self.params,
            space,
            agents,
            rng,
        })
    }
}

/// Uniform positions inside `bounds` and uniformly random unit headings.
fn random_states<R: RandomSource>(bounds: Bounds, n: usize, rng: &mut R) -> Vec<(Vec2, Vec2)> {
    let max = bounds.max();
    (0..n)
        .map(|_| {
            let pos = Vec2::new(
                rng.uniform(bounds.min.x, max.x),
                rng.uniform(bounds.min.y, max.y),
            );
            let heading = Vec2::from_angle(rng.uniform(0.0, TAU));
            (pos, heading)
        })
        .collect()
}
