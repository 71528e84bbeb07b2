//! The individual flocking forces.
//!
//! Each function computes one additive contribution to an agent's next
//! heading from the start-of-tick snapshot in [`StepContext`].  None of them
//! mutate anything except the random source.

use flock_core::{AgentId, FlockParams, RandomSource, Vec2, direction_toward_centroid, unit, weighted_force};
use flock_spatial::NeighborQuery;

use crate::{Agent, BehaviorResult, StepContext};

/// The neighbor-based rules.  Each one perceives its own radius and blind
/// angle from [`FlockParams`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    Alignment,
    Cohesion,
    Separation,
}

impl Rule {
    pub const ALL: [Rule; 3] = [Rule::Alignment, Rule::Cohesion, Rule::Separation];

    pub fn radius(self, params: &FlockParams) -> f64 {
        match self {
            Rule::Alignment => params.alignment_radius,
            Rule::Cohesion => params.cohesion_radius,
            Rule::Separation => params.separation_radius,
        }
    }

    /// Blind angle in degrees.
    pub fn blind_angle(self, params: &FlockParams) -> f64 {
        match self {
            Rule::Alignment => params.alignment_angle,
            Rule::Cohesion => params.cohesion_angle,
            Rule::Separation => params.separation_angle,
        }
    }

    pub fn weight(self, params: &FlockParams) -> f64 {
        match self {
            Rule::Alignment => params.alignment_weight,
            Rule::Cohesion => params.cohesion_weight,
            Rule::Separation => params.separation_weight,
        }
    }

    /// Build the neighbor query this rule issues for `agent` at `pos`.
    ///
    /// Every rule sees straight ahead; only the rear wedge is blind.
    pub fn query(self, agent: &Agent, pos: Vec2, params: &FlockParams) -> NeighborQuery {
        NeighborQuery::new(pos, self.radius(params))
            .heading(agent.heading)
            .blind_angle(self.blind_angle(params))
            .include_front(true)
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Rule::Alignment => "alignment",
            Rule::Cohesion => "cohesion",
            Rule::Separation => "separation",
        })
    }
}

/// Positions of the agents `rule` perceives around `agent`, paired with
/// their ids.  Excludes the agent itself.
pub fn group(agent: &Agent, ctx: &StepContext<'_>, rule: Rule) -> BehaviorResult<Vec<(AgentId, Vec2)>> {
    let pos = ctx.space.position(agent.id)?;
    let query = rule.query(agent, pos, ctx.params);
    ctx.space
        .neighbors(&query)
        .into_iter()
        .map(|id| Ok((id, ctx.space.position(id)?)))
        .collect()
}

/// Steer toward the mean heading of the alignment group.
///
/// With nobody in view the agent keeps its heading plus a unit Gaussian
/// jitter on each axis.
pub fn align<R: RandomSource>(agent: &Agent, ctx: &StepContext<'_>, rng: &mut R) -> BehaviorResult<Vec2> {
    let members = group(agent, ctx, Rule::Alignment)?;
    if members.is_empty() {
        let jitter = Vec2::new(rng.gaussian(0.0, 1.0), rng.gaussian(0.0, 1.0));
        return Ok(agent.heading + jitter);
    }

    let mut sum = Vec2::ZERO;
    for (id, _) in &members {
        sum += ctx.agent(*id)?.heading;
    }
    let toward = direction_toward_centroid(sum, members.len());
    Ok(unit(toward - agent.heading) * ctx.params.alignment_weight)
}

/// Pull toward the cohesion group.  Magnitude is `cohesion_weight` unless
/// the offsets cancel out exactly.
pub fn cohese(agent: &Agent, ctx: &StepContext<'_>) -> BehaviorResult<Vec2> {
    let pos = ctx.space.position(agent.id)?;
    let members = group(agent, ctx, Rule::Cohesion)?;
    if members.is_empty() {
        return Ok(Vec2::ZERO);
    }

    // Offsets run neighbor -> self, so their negated mean points at the group.
    let sum: Vec2 = members
        .iter()
        .map(|&(_, other)| unit(ctx.space.displacement(other, pos)))
        .sum();
    Ok(weighted_force(ctx.params.cohesion_weight, sum, members.len()))
}

/// Push away from the separation group, closer neighbors weighing more
/// (inverse distance).
pub fn separate(agent: &Agent, ctx: &StepContext<'_>) -> BehaviorResult<Vec2> {
    let pos = ctx.space.position(agent.id)?;
    let members = group(agent, ctx, Rule::Separation)?;
    if members.is_empty() {
        return Ok(Vec2::ZERO);
    }

    let sum: Vec2 = members
        .iter()
        .map(|&(_, other)| {
            let d = ctx.space.displacement(pos, other);
            d / d.magnitude_squared()
        })
        .sum();
    Ok(weighted_force(ctx.params.separation_weight, sum, members.len()))
}

/// Independent Gaussian perturbation on each axis.
pub fn noise<R: RandomSource>(params: &FlockParams, rng: &mut R) -> Vec2 {
    let sd = params.noise_std_dev;
    Vec2::new(rng.gaussian(0.0, sd), rng.gaussian(0.0, sd))
}

/// Relax speed toward `cruise_speed` with time constant `relaxation_time`.
///
/// The correction is scaled by `heading.x` and lands on the x component
/// only; y is untouched.
pub fn relax_speed(agent: &Agent, params: &FlockParams) -> Vec2 {
    let gain = (params.cruise_speed - agent.speed) / params.relaxation_time;
    Vec2::new(gain * agent.heading.x, 0.0)
}

/// Turn away from walls closer than `border_distance`.
///
/// Each near wall contributes its inward normal scaled by how deep into the
/// margin `pos` is; the sum is normalised to `border_strength`.  Zero in a
/// toroidal world.
pub fn avoid_border(pos: Vec2, ctx: &StepContext<'_>) -> Vec2 {
    let margin = ctx.params.border_distance;
    if !ctx.space.is_near_boundary(pos, margin) {
        return Vec2::ZERO;
    }

    const INWARD: [Vec2; 4] = [
        Vec2 { x: 1.0, y: 0.0 },  // left
        Vec2 { x: -1.0, y: 0.0 }, // right
        Vec2 { x: 0.0, y: 1.0 },  // bottom
        Vec2 { x: 0.0, y: -1.0 }, // top
    ];
    let push: Vec2 = ctx
        .space
        .bounds()
        .wall_distances(pos)
        .into_iter()
        .zip(INWARD)
        .filter(|&(d, _)| d < margin)
        .map(|(d, normal)| normal * ((margin - d) / margin))
        .sum();
    unit(push) * ctx.params.border_strength
}

/// Keep a bounded-world step inside the walls.
///
/// Per axis, a step that would cross a wall is reflected; if the reflected
/// step crosses the opposite wall too, that axis is zeroed.  `heading` must be
/// finite.  Toroidal worlds and `border_strength == 0` pass `heading` through.
pub fn contain(pos: Vec2, heading: Vec2, ctx: &StepContext<'_>) -> Vec2 {
    if ctx.space.boundary().is_toroidal() || ctx.params.border_strength == 0.0 {
        return heading;
    }

    let bounds = ctx.space.bounds();
    let max = bounds.max();
    Vec2::new(
        contain_axis(pos.x, heading.x, bounds.min.x, max.x),
        contain_axis(pos.y, heading.y, bounds.min.y, max.y),
    )
}

#[inline]
fn contain_axis(p: f64, step: f64, lo: f64, hi: f64) -> f64 {
    let lands_inside = |s: f64| {
        let q = p + s;
        q >= lo && q < hi
    };
    if lands_inside(step) {
        step
    } else if lands_inside(-step) {
        -step
    } else {
        0.0
    }
}
