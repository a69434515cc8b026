//! Basic value types shared by every test in the crate.
//!
//! - `Vec2`: single-precision 2D vector (nalgebra).
//! - `Range`: projection interval on a candidate axis.
//! - `Rect` / `CenteredRect`: the two rectangle conventions. Conversions are
//!   explicit so the overlap sign never depends on which one a caller holds.
//! - `CollideCfg`: knobs for the generalized shape dispatcher.

use nalgebra::Vector2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 2D vector used for points, positions, sizes and overlap vectors.
pub type Vec2 = Vector2<f32>;

/// Projection interval `[min, max]` of a vertex set on an axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    /// Empty interval; any `include` replaces both ends.
    pub const EMPTY: Range = Range {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    #[inline]
    pub fn include(self, v: f32) -> Range {
        Range {
            min: self.min.min(v),
            max: self.max.max(v),
        }
    }

    #[inline]
    pub fn shifted(self, by: f32) -> Range {
        Range {
            min: self.min + by,
            max: self.max + by,
        }
    }

    /// Touching intervals count as separated: overlapping needs positive depth.
    #[inline]
    pub fn is_disjoint(&self, other: &Range) -> bool {
        self.max <= other.min || self.min >= other.max
    }

    /// Overlap depth `min(max) - max(min)`; negative when disjoint.
    #[inline]
    pub fn overlap(&self, other: &Range) -> f32 {
        self.max.min(other.max) - self.min.max(other.min)
    }
}

/// Axis-aligned rectangle given by its top-left (minimum) corner and full size.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn to_centered(self) -> CenteredRect {
        let half = self.size / 2.0;
        CenteredRect {
            center: self.pos + half,
            half,
        }
    }
}

/// Axis-aligned rectangle given by its center and half-extents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CenteredRect {
    pub center: Vec2,
    pub half: Vec2,
}

impl CenteredRect {
    #[inline]
    pub fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    #[inline]
    pub fn to_rect(self) -> Rect {
        Rect {
            pos: self.center - self.half,
            size: self.half * 2.0,
        }
    }
}

/// Configuration for `Shape::collide`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CollideCfg {
    /// Side count of the regular polygon standing in for a circle whenever a
    /// circle meets a non-rectangular polygon. Values below 3 are raised to 3.
    pub circle_sides: usize,
}

impl Default for CollideCfg {
    fn default() -> Self {
        Self { circle_sides: 12 }
    }
}

impl CollideCfg {
    #[inline]
    pub fn circle_sides(&self) -> usize {
        self.circle_sides.max(3)
    }
}
