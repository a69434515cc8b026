//! Convex polygons in local space and their pure transforms.
//!
//! Conventions
//! - Vertices are stored counter-clockwise (y up) around the local origin,
//!   at unit scale. `Polygon::regular` produces this winding.
//! - World placement is `rotate → scale → translate`, see [`Polygon::to_world`].
//! - Every transform returns a new polygon; nothing mutates in place.
//! - A polygon needs at least 3 vertices to be closed. Shorter ones are
//!   representable but every overlap test treats them as empty.

use nalgebra::Rotation2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{Range, Rect, Vec2};

/// Ordered vertex list of a convex polygon.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    pub verts: Vec<Vec2>,
}

impl Polygon {
    #[inline]
    pub fn new(verts: Vec<Vec2>) -> Self {
        Self { verts }
    }

    /// Regular `sides`-gon on the unit circle, first vertex at angle 0,
    /// counter-clockwise.
    pub fn regular(sides: usize) -> Self {
        let step = std::f32::consts::TAU / sides as f32;
        let verts = (0..sides)
            .map(|k| {
                let th = k as f32 * step;
                Vec2::new(th.cos(), th.sin())
            })
            .collect();
        Self { verts }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// At least 3 vertices.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.verts.len() >= 3
    }

    #[must_use]
    pub fn scaled(&self, factor: f32) -> Polygon {
        Polygon {
            verts: self.verts.iter().map(|v| *v * factor).collect(),
        }
    }

    #[must_use]
    pub fn translated(&self, by: Vec2) -> Polygon {
        Polygon {
            verts: self.verts.iter().map(|v| *v + by).collect(),
        }
    }

    /// Rotate about the local origin by `degrees` (counter-clockwise, y up).
    /// Zero degrees returns an exact copy.
    #[must_use]
    pub fn rotated(&self, degrees: f32) -> Polygon {
        if degrees == 0.0 {
            return self.clone();
        }
        let rot = Rotation2::new(degrees.to_radians());
        Polygon {
            verts: self.verts.iter().map(|v| rot * *v).collect(),
        }
    }

    /// Local → world: rotate, then scale, then translate to `position`.
    #[must_use]
    pub fn to_world(&self, position: Vec2, scale: f32, rotation: f32) -> Polygon {
        self.rotated(rotation).scaled(scale).translated(position)
    }

    /// Edge vectors, see [`edges`].
    #[inline]
    pub fn edges(&self) -> impl Iterator<Item = Vec2> + '_ {
        edges(&self.verts)
    }

    /// Interval of `dot(axis, v)` over all vertices.
    #[inline]
    pub fn project(&self, axis: Vec2) -> Range {
        project(&self.verts, axis)
    }

    /// Axis-aligned rectangle (top-left + size) centered on `position`.
    ///
    /// Precondition: a quadrilateral whose vertices 0 and 2 are opposite
    /// corners, e.g. `Polygon::regular(4).rotated(45.0)` scaled. Other vertex
    /// counts log a warning and still use vertices 0 and 2; fewer than 3
    /// vertices give a zero-size rectangle.
    pub fn bounding_rect(&self, position: Vec2) -> Rect {
        if self.verts.len() != 4 {
            tracing::warn!(
                verts = self.verts.len(),
                "bounding rectangle from a polygon that is not a quadrilateral"
            );
        }
        if self.verts.len() < 3 {
            return Rect::new(position, Vec2::zeros());
        }
        let d = self.verts[2] - self.verts[0];
        let size = Vec2::new(d.x.abs(), d.y.abs());
        Rect::new(position - size / 2.0, size)
    }
}

/// Edge vectors `v[i+1] - v[i]`, wrapping from the last vertex to the first.
pub fn edges(verts: &[Vec2]) -> impl Iterator<Item = Vec2> + '_ {
    let n = verts.len();
    (0..n).map(move |i| verts[(i + 1) % n] - verts[i])
}

/// Interval of `dot(axis, v)` over `verts`; `Range::EMPTY` for no vertices.
#[inline]
pub fn project(verts: &[Vec2], axis: Vec2) -> Range {
    verts
        .iter()
        .fold(Range::EMPTY, |r, v| r.include(axis.dot(v)))
}
