//! World extent and boundary policy.
//!
//! `Bounds` is the half-open rectangle `[min.x, min.x + width) ×
//! [min.y, min.y + height)`.  Toroidal worlds wrap coordinates back into it;
//! bounded worlds treat anything outside it as an error.

use std::fmt;

use crate::Vec2;

/// What happens at the edge of the world.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Boundary {
    /// Each axis wraps around; distances use the shorter way round.
    #[default]
    Toroidal,
    /// Hard walls.  Agents are steered away by a border-avoidance force and
    /// steps that would cross a wall are reflected.  A position outside the
    /// rectangle is still a fatal error, never clamped.
    Bounded,
}

impl Boundary {
    #[inline]
    pub fn is_toroidal(self) -> bool {
        matches!(self, Boundary::Toroidal)
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Boundary::Toroidal => "toroidal",
            Boundary::Bounded => "bounded",
        };
        f.write_str(s)
    }
}

/// Axis-aligned rectangular extent of the world.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Lower-left corner (inclusive).
    pub min: Vec2,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[inline]
    pub fn new(min: Vec2, width: f64, height: f64) -> Self {
        Self { min, width, height }
    }

    /// `[0, width) × [0, height)`.
    #[inline]
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(Vec2::ZERO, width, height)
    }

    /// Upper-right corner (exclusive).
    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.min.x + self.width, self.min.y + self.height)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// `true` if both extents are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Half-open containment test.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.min.x && p.x < max.x && p.y >= self.min.y && p.y < max.y
    }

    /// Distances from `p` to the left, right, bottom and top walls.
    #[inline]
    pub fn wall_distances(&self, p: Vec2) -> [f64; 4] {
        let max = self.max();
        [p.x - self.min.x, max.x - p.x, p.y - self.min.y, max.y - p.y]
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.min, self.max())
    }
}
