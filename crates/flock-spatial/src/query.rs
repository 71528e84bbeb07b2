//! Neighbor query description and the field-of-view filter.

use std::f64::consts::{PI, TAU};

use flock_core::{Vec2, angle, wrap_to_2pi};

/// Parameters of one [`Space::neighbors`][crate::Space::neighbors] call.
///
/// Built fluently from a position and radius; every other field defaults to
/// "see everything except yourself":
///
/// ```
/// use flock_core::Vec2;
/// use flock_spatial::NeighborQuery;
///
/// let q = NeighborQuery::new(Vec2::new(1.0, 1.0), 5.0)
///     .heading(Vec2::new(1.0, 0.0))
///     .blind_angle(60.0);
/// assert!(q.include_front);
/// assert!(!q.include_center);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NeighborQuery {
    /// Centre of the search.
    pub pos: Vec2,
    /// Inclusive search radius.
    pub radius: f64,
    /// Heading of the focal agent; orients the blind wedge.
    pub heading: Vec2,
    /// Full width of the blind wedge in degrees (reduced modulo 360).
    pub blind_angle_deg: f64,
    /// Keep candidates at distance zero (the focal agent itself).
    pub include_center: bool,
    /// When `false`, a second blind wedge of the same width is centred
    /// straight ahead.
    pub include_front: bool,
}

impl NeighborQuery {
    pub fn new(pos: Vec2, radius: f64) -> Self {
        Self {
            pos,
            radius,
            heading: Vec2::ZERO,
            blind_angle_deg: 0.0,
            include_center: false,
            include_front: true,
        }
    }

    pub fn heading(mut self, heading: Vec2) -> Self {
        self.heading = heading;
        self
    }

    pub fn blind_angle(mut self, degrees: f64) -> Self {
        self.blind_angle_deg = degrees;
        self
    }

    pub fn include_center(mut self, include: bool) -> Self {
        self.include_center = include;
        self
    }

    pub fn include_front(mut self, include: bool) -> Self {
        self.include_front = include;
        self
    }
}

/// `true` if a candidate at `offset` from the focal agent falls strictly
/// inside the blind wedge of width `blind_angle_deg` centred behind
/// `heading` (and, when `include_front` is `false`, the mirrored wedge ahead).
///
/// Angles are compared on the circle, so wedges that straddle the 0/2π seam
/// behave like any other.  Wedges of 180° or more overlap the side bearings
/// and, with `include_front == false`, each other; the result stays
/// well-defined but has only been validated for widths below 180°.
///
/// A zero `heading` orients along +x (its `atan2` is 0).
pub fn in_blind_spot(heading: Vec2, offset: Vec2, blind_angle_deg: f64, include_front: bool) -> bool {
    let alpha = blind_angle_deg.rem_euclid(360.0).to_radians();
    if alpha == 0.0 {
        return false;
    }
    let half = alpha / 2.0;
    let beta = wrap_to_2pi(angle(heading));
    let gamma = wrap_to_2pi(angle(offset));

    if angular_distance(gamma, beta + PI) < half {
        return true;
    }
    !include_front && angular_distance(gamma, beta) < half
}

/// Unsigned separation of two angles on the circle, in `[0, π]`.
#[inline]
fn angular_distance(a: f64, b: f64) -> f64 {
    let d = wrap_to_2pi(a - b);
    d.min(TAU - d)
}
