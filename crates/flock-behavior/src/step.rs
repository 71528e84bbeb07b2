//! Stage and commit: the two halves of one agent's tick.

use flock_core::{AgentId, RandomSource, Vec2};
use flock_spatial::Space;

use crate::rules::{align, avoid_border, cohese, contain, noise, relax_speed, separate};
use crate::{Agent, BehaviorError, BehaviorResult, StepContext};

/// The additive contributions that make up a staged heading.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Forces {
    pub alignment:  Vec2,
    pub cohesion:   Vec2,
    pub separation: Vec2,
    pub noise:      Vec2,
    pub relaxation: Vec2,
    pub border:     Vec2,
}

impl Forces {
    pub fn total(&self) -> Vec2 {
        self.alignment + self.cohesion + self.separation + self.noise + self.relaxation + self.border
    }
}

/// An agent's next state, computed but not yet applied.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Staged {
    /// `forces.total()`, reflected off any wall it would cross.
    pub heading:  Vec2,
    pub speed:    f64,
    /// Already passed through the space's boundary policy.
    pub position: Vec2,
    pub forces:   Forces,
}

/// Compute `agent`'s next heading, speed and position from the
/// start-of-tick snapshot.
///
/// Draws from `rng` in a fixed order (alignment jitter when alone, then
/// noise), so a cloned source replays the same result.
///
/// # Errors
///
/// - [`BehaviorError::NumericDivergence`] if the heading, speed or position
///   comes out NaN or infinite.
/// - [`BehaviorError::Spatial`] if the new position leaves a bounded world
///   (only reachable with `border_strength == 0`).
pub fn stage<R: RandomSource>(agent: &Agent, ctx: &StepContext<'_>, rng: &mut R) -> BehaviorResult<Staged> {
    let pos = ctx.space.position(agent.id)?;

    let forces = Forces {
        alignment:  align(agent, ctx, rng)?,
        cohesion:   cohese(agent, ctx)?,
        separation: separate(agent, ctx)?,
        noise:      noise(ctx.params, rng),
        relaxation: relax_speed(agent, ctx.params),
        border:     avoid_border(pos, ctx),
    };

    let proposed = forces.total();
    check_finite(agent.id, "speed", proposed.magnitude())?;
    check_finite(agent.id, "heading.x", proposed.x)?;
    check_finite(agent.id, "heading.y", proposed.y)?;

    let heading = contain(pos, proposed, ctx);
    let speed = heading.magnitude();
    let raw = pos + heading;
    check_finite(agent.id, "position.x", raw.x)?;
    check_finite(agent.id, "position.y", raw.y)?;
    let position = ctx.space.resolve_boundary(raw)?;

    Ok(Staged { heading, speed, position, forces })
}

/// Apply a staged state: move the agent in `space`, then overwrite its
/// heading and speed.  Returns the committed position.
///
/// On error the agent and the space are unchanged.
pub fn commit(agent: &mut Agent, staged: &Staged, space: &mut Space) -> BehaviorResult<Vec2> {
    let pos = space.move_agent(agent.id, staged.position)?;
    agent.heading = staged.heading;
    agent.speed = staged.speed;
    Ok(pos)
}

#[inline]
fn check_finite(agent: AgentId, quantity: &'static str, value: f64) -> BehaviorResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(BehaviorError::NumericDivergence { agent, quantity, value })
    }
}
