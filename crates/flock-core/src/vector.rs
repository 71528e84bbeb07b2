//! Two-dimensional vector math used by every other layer.
//!
//! `Vec2` is a plain `f64` pair with the arithmetic operators a force sum
//! needs.  The free functions mirror the vocabulary of the behavior rules:
//! [`unit`], [`angle`], [`wrap_to_2pi`], [`direction_toward_centroid`] and
//! [`weighted_force`].
//!
//! # Degenerate vectors
//!
//! [`unit`] of a zero-length vector is the zero vector.  Rules that normalise
//! an empty or cancelled-out sum therefore contribute nothing instead of
//! producing NaN.

use std::f64::consts::TAU;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A 2-D vector or point in continuous space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing at `theta` radians from the positive x-axis.
    #[inline]
    pub fn from_angle(theta: f64) -> Self {
        Self::new(theta.cos(), theta.sin())
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean norm.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// See [`unit`].
    #[inline]
    pub fn unit(self) -> Vec2 {
        unit(self)
    }

    /// See [`angle`].
    #[inline]
    pub fn angle(self) -> f64 {
        angle(self)
    }

    /// `true` if neither component is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

// ── Free functions ────────────────────────────────────────────────────────────

/// `v / |v|`, or the zero vector when `|v| == 0`.
#[inline]
pub fn unit(v: Vec2) -> Vec2 {
    let mag = v.magnitude();
    if mag == 0.0 { Vec2::ZERO } else { v / mag }
}

/// Signed angle of `v` from the positive x-axis, in `[-π, π]`.
///
/// Argument order to `atan2` is `(y, x)`.
#[inline]
pub fn angle(v: Vec2) -> f64 {
    v.y.atan2(v.x)
}

/// Map any real angle into `[0, 2π)` by reducing `2π + theta` modulo 2π.
#[inline]
pub fn wrap_to_2pi(theta: f64) -> f64 {
    let wrapped = (TAU + theta).rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// `-(1/n) * sum`, the direction back toward the centroid implied by a sum
/// of `n` contributions.
///
/// `n` must be non-zero; callers only reach this with a non-empty group.
#[inline]
pub fn direction_toward_centroid(sum: Vec2, n: usize) -> Vec2 {
    -(sum / n as f64)
}

/// `weight * unit(direction_toward_centroid(sum, n))`.
#[inline]
pub fn weighted_force(weight: f64, sum: Vec2, n: usize) -> Vec2 {
    unit(direction_toward_centroid(sum, n)) * weight
}

// ── Operators ─────────────────────────────────────────────────────────────────

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Sum for Vec2 {
    fn sum<I: Iterator<Item = Vec2>>(iter: I) -> Vec2 {
        iter.fold(Vec2::ZERO, Add::add)
    }
}

impl From<[f64; 2]> for Vec2 {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Vec2 {
        Vec2::new(x, y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}
