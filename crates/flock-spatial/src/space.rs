//! The continuous world: agent positions, an R-tree index over them, and the
//! boundary policy.
//!
//! # Data layout
//!
//! Positions live in a dense `Vec<Vec2>` indexed by `AgentId`, mirrored in an
//! `rstar::RTree` of point entries.  Every mutation goes through
//! [`Space::place`] or [`Space::move_agent`], which keep the two in sync.
//!
//! # Toroidal lookups
//!
//! The R-tree only knows plain Euclidean distance.  On a torus a query circle
//! that crosses an edge is answered by also querying the eight images of the
//! centre shifted by `±width`/`±height`.  When the radius covers half the
//! world or more the index is skipped and every agent is a candidate.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use flock_core::{AgentId, Boundary, Bounds, Vec2};

use crate::query::in_blind_spot;
use crate::{NeighborQuery, SpatialError, SpatialResult};

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
struct AgentEntry {
    point: [f64; 2],
    id: AgentId,
}

impl RTreeObject for AgentEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for AgentEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── Space ─────────────────────────────────────────────────────────────────────

/// Agent positions in a rectangular world with a toroidal or bounded edge.
pub struct Space {
    bounds: Bounds,
    boundary: Boundary,
    positions: Vec<Vec2>,
    index: RTree<AgentEntry>,
}

impl Space {
    /// Create an empty space.
    ///
    /// # Errors
    ///
    /// [`SpatialError::InvalidBounds`] if either extent is non-positive or
    /// non-finite.
    pub fn new(bounds: Bounds, boundary: Boundary) -> SpatialResult<Self> {
        if !bounds.is_valid() {
            return Err(SpatialError::InvalidBounds(bounds));
        }
        Ok(Self {
            bounds,
            boundary,
            positions: Vec::new(),
            index: RTree::new(),
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Number of placed agents.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterator over all placed `AgentId`s in ascending order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.positions.len() as u32).map(AgentId)
    }

    // ── Placement and movement ────────────────────────────────────────────

    /// Add `agent` at `pos` and return its resolved position.
    ///
    /// Agents must be placed in ascending id order starting at 0, so the id
    /// is also the index into the position vector.
    pub fn place(&mut self, agent: AgentId, pos: Vec2) -> SpatialResult<Vec2> {
        let expected = AgentId(self.positions.len() as u32);
        if agent != expected {
            return Err(SpatialError::OutOfOrderPlacement { expected, got: agent });
        }
        let pos = self.resolve_boundary(pos)?;
        self.positions.push(pos);
        self.index.insert(AgentEntry { point: pos.to_array(), id: agent });
        Ok(pos)
    }

    /// Current position of `agent`.
    #[inline]
    pub fn position(&self, agent: AgentId) -> SpatialResult<Vec2> {
        self.positions
            .get(agent.index())
            .copied()
            .ok_or(SpatialError::AgentNotFound(agent))
    }

    /// All positions, indexed by `AgentId`.
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    /// Commit a new position for `agent`, updating the index.
    ///
    /// The position is passed through [`resolve_boundary`](Self::resolve_boundary)
    /// first; the resolved value is returned.  On error nothing changes.
    pub fn move_agent(&mut self, agent: AgentId, new_pos: Vec2) -> SpatialResult<Vec2> {
        let old = self.position(agent)?;
        let new = self.resolve_boundary(new_pos)?;
        self.index.remove(&AgentEntry { point: old.to_array(), id: agent });
        self.index.insert(AgentEntry { point: new.to_array(), id: agent });
        self.positions[agent.index()] = new;
        Ok(new)
    }

    // ── Geometry ──────────────────────────────────────────────────────────

    /// Map `pos` into the world.
    ///
    /// Toroidal worlds wrap each axis with modulo arithmetic anchored at the
    /// minimum bound.  Bounded worlds never clamp: a position outside the
    /// rectangle is [`SpatialError::OutOfBounds`].
    pub fn resolve_boundary(&self, pos: Vec2) -> SpatialResult<Vec2> {
        if !pos.is_finite() {
            return Err(SpatialError::NonFinite(pos));
        }
        match self.boundary {
            Boundary::Toroidal => Ok(Vec2::new(
                wrap_axis(pos.x, self.bounds.min.x, self.bounds.width),
                wrap_axis(pos.y, self.bounds.min.y, self.bounds.height),
            )),
            Boundary::Bounded if self.bounds.contains(pos) => Ok(pos),
            Boundary::Bounded => Err(SpatialError::OutOfBounds { pos, bounds: self.bounds }),
        }
    }

    /// `true` if `pos` is closer than `max_distance` to any wall.
    ///
    /// Always `false` in a toroidal world, which has no walls.
    pub fn is_near_boundary(&self, pos: Vec2, max_distance: f64) -> bool {
        !self.boundary.is_toroidal()
            && self
                .bounds
                .wall_distances(pos)
                .iter()
                .any(|&d| d < max_distance)
    }

    /// Shortest displacement from `from` to `to`.  On a torus each component
    /// is folded into `[-size/2, size/2]`.
    #[inline]
    pub fn displacement(&self, from: Vec2, to: Vec2) -> Vec2 {
        let d = to - from;
        match self.boundary {
            Boundary::Toroidal => Vec2::new(
                fold_axis(d.x, self.bounds.width),
                fold_axis(d.y, self.bounds.height),
            ),
            Boundary::Bounded => d,
        }
    }

    /// Squared (wrapped) distance between two points.
    #[inline]
    pub fn distance_squared(&self, a: Vec2, b: Vec2) -> f64 {
        self.displacement(a, b).magnitude_squared()
    }

    // ── Neighbor queries ──────────────────────────────────────────────────

    /// Agents within `query.radius` of `query.pos` that are outside the blind
    /// wedge(s) and, unless `include_center`, not at distance zero.
    ///
    /// Candidates at distance zero have no bearing, so the field-of-view
    /// filter does not apply to them; only `include_center` decides.
    ///
    /// The result order is unspecified.
    pub fn neighbors(&self, query: &NeighborQuery) -> Vec<AgentId> {
        if query.radius.is_nan() || query.radius < 0.0 || !query.pos.is_finite() {
            return Vec::new();
        }
        let r2 = query.radius * query.radius;

        self.candidates(query.pos, query.radius)
            .into_iter()
            .filter(|&id| {
                let offset = self.displacement(query.pos, self.positions[id.index()]);
                let d2 = offset.magnitude_squared();
                if d2 > r2 {
                    return false;
                }
                if d2 == 0.0 {
                    return query.include_center;
                }
                !in_blind_spot(query.heading, offset, query.blind_angle_deg, query.include_front)
            })
            .collect()
    }

    /// Superset of the agents within `radius` of `pos`.
    fn candidates(&self, pos: Vec2, radius: f64) -> Vec<AgentId> {
        let toroidal = self.boundary.is_toroidal();
        let covers_world = !radius.is_finite()
            || (toroidal
                && (2.0 * radius >= self.bounds.width || 2.0 * radius >= self.bounds.height));
        if covers_world {
            return self.agent_ids().collect();
        }

        // Padded so rounding never drops a point sitting exactly on the
        // radius; `neighbors` applies the exact test.
        let padded = radius * (1.0 + 1e-9) + 1e-12;
        let r2 = padded * padded;
        if !toroidal {
            return self
                .index
                .locate_within_distance(pos.to_array(), r2)
                .map(|e| e.id)
                .collect();
        }

        let center = Vec2::new(
            wrap_axis(pos.x, self.bounds.min.x, self.bounds.width),
            wrap_axis(pos.y, self.bounds.min.y, self.bounds.height),
        );
        let (w, h) = (self.bounds.width, self.bounds.height);
        let mut ids = Vec::new();
        for dx in [-w, 0.0, w] {
            for dy in [-h, 0.0, h] {
                let image = center + Vec2::new(dx, dy);
                ids.extend(
                    self.index
                        .locate_within_distance(image.to_array(), r2)
                        .map(|e| e.id),
                );
            }
        }
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

/// `min + (v - min) mod size`, guarded against rounding up to the open end.
#[inline]
fn wrap_axis(v: f64, min: f64, size: f64) -> f64 {
    let w = min + (v - min).rem_euclid(size);
    if w >= min + size { min } else { w }
}

/// Fold a signed axis delta onto the shorter way round a ring of `size`.
#[inline]
fn fold_axis(d: f64, size: f64) -> f64 {
    d - size * (d / size).round()
}
