//! Shapes with a world placement and the generalized pairwise dispatcher.
//!
//! Purpose
//! - Wrap the primitives behind one `Shape` sum type so callers never write
//!   the 3×3 type-pair matrix themselves.
//!
//! Routing
//! - Every shape is first reduced to a `Body`: a circle, or a convex polygon
//!   in local space (optionally flagged as an axis-aligned rectangle).
//! - Three canonical routines cover all pairs: circle–circle, circle–polygon
//!   and polygon–polygon. Unrotated rectangles take the AABB fast paths
//!   (`circle_rect`, `rect_rect`) inside the last two. Everything else goes
//!   through the separating-axis test, with circles approximated by a
//!   `CollideCfg::circle_sides`-gon.
//! - The returned vector always points from `self` toward `other`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::pair::{circle_circle, circle_rect, rect_rect};
use crate::point::{point_in_circle, point_in_convex_polygon};
use crate::polygon::Polygon;
use crate::sat::polygon_overlap;
use crate::types::{CollideCfg, Rect, Vec2};

/// Local geometry of a shape, before scale, rotation and placement.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum ShapeKind {
    Circle { radius: f32 },
    Rectangle { width: f32, height: f32 },
    Polygon(Polygon),
}

/// A shape placed in the world.
///
/// World geometry is the local geometry rotated by `rotation` degrees about
/// the local origin, scaled by `scale`, then moved to `position`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shape {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: ShapeKind,
    pub position: Vec2,
    #[cfg_attr(feature = "serde", serde(default = "unit_scale"))]
    pub scale: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rotation: f32,
}

#[cfg(feature = "serde")]
fn unit_scale() -> f32 {
    1.0
}

/// A shape reduced to what the canonical routines consume.
#[derive(Clone, Debug)]
enum Body {
    Circle { center: Vec2, radius: f32 },
    Poly(PolyBody),
}

#[derive(Clone, Debug)]
struct PolyBody {
    position: Vec2,
    /// Rotated and scaled, still relative to `position`.
    local: Polygon,
    /// Set for unrotated rectangles.
    aabb: Option<Rect>,
}

impl Shape {
    pub fn new(kind: ShapeKind, position: Vec2) -> Self {
        Self {
            kind,
            position,
            scale: 1.0,
            rotation: 0.0,
        }
    }

    pub fn circle(position: Vec2, radius: f32) -> Self {
        Self::new(ShapeKind::Circle { radius }, position)
    }

    pub fn rectangle(position: Vec2, width: f32, height: f32) -> Self {
        Self::new(ShapeKind::Rectangle { width, height }, position)
    }

    pub fn polygon(position: Vec2, polygon: Polygon) -> Self {
        Self::new(ShapeKind::Polygon(polygon), position)
    }

    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    /// Short lowercase name of the variant, for logs and reports.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            ShapeKind::Circle { .. } => "circle",
            ShapeKind::Rectangle { .. } => "rectangle",
            ShapeKind::Polygon(_) => "polygon",
        }
    }

    /// Local polygon at unit scale and no rotation. Circles become a regular
    /// `cfg.circle_sides()`-gon of their radius.
    pub fn local_polygon(&self, cfg: &CollideCfg) -> Polygon {
        match &self.kind {
            ShapeKind::Circle { radius } => Polygon::regular(cfg.circle_sides()).scaled(*radius),
            ShapeKind::Rectangle { width, height } => rectangle_polygon(*width, *height),
            ShapeKind::Polygon(p) => p.clone(),
        }
    }

    /// World-space vertices, e.g. for drawing.
    pub fn world_polygon(&self, cfg: &CollideCfg) -> Polygon {
        self.local_polygon(cfg)
            .to_world(self.position, self.scale, self.rotation)
    }

    /// Axis-aligned rectangle (top-left + size) of an unrotated rectangle.
    pub fn aabb(&self) -> Option<Rect> {
        match self.kind {
            ShapeKind::Rectangle { width, height } if self.rotation == 0.0 => Some(
                rectangle_polygon(width, height)
                    .scaled(self.scale)
                    .bounding_rect(self.position),
            ),
            _ => None,
        }
    }

    /// Hit test used for picking a shape under a cursor.
    pub fn contains_point(&self, p: Vec2) -> bool {
        match self.kind {
            ShapeKind::Circle { radius } => {
                point_in_circle(p, self.position, radius * self.scale).is_some()
            }
            _ => point_in_convex_polygon(p, &self.world_polygon(&CollideCfg::default()).verts),
        }
    }

    /// Overlap of `self` with `other`; `Some(v)` with `v` pointing from `self`
    /// toward `other`. Move `self` by `-v` (or `other` by `+v`) to separate.
    pub fn collide(&self, other: &Shape, cfg: &CollideCfg) -> Option<Vec2> {
        let hit = match (self.body(), other.body()) {
            (
                Body::Circle {
                    center: c1,
                    radius: r1,
                },
                Body::Circle {
                    center: c2,
                    radius: r2,
                },
            ) => circle_circle(c1, r1, c2, r2),
            (Body::Circle { center, radius }, Body::Poly(p)) => {
                circle_polygon(center, radius, &p, cfg)
            }
            (Body::Poly(p), Body::Circle { center, radius }) => {
                circle_polygon(center, radius, &p, cfg).map(|v| -v)
            }
            (Body::Poly(a), Body::Poly(b)) => polygon_polygon(&a, &b),
        };
        if let Some(v) = hit {
            tracing::trace!(a = self.kind_name(), b = other.kind_name(), x = v.x, y = v.y, "hit");
        }
        hit
    }

    fn body(&self) -> Body {
        match &self.kind {
            ShapeKind::Circle { radius } => Body::Circle {
                center: self.position,
                radius: radius * self.scale,
            },
            ShapeKind::Rectangle { width, height } => Body::Poly(PolyBody {
                position: self.position,
                local: rectangle_polygon(*width, *height)
                    .rotated(self.rotation)
                    .scaled(self.scale),
                aabb: self.aabb(),
            }),
            ShapeKind::Polygon(p) => Body::Poly(PolyBody {
                position: self.position,
                local: p.rotated(self.rotation).scaled(self.scale),
                aabb: None,
            }),
        }
    }
}

/// Counter-clockwise rectangle centered on the origin; vertices 0 and 2 are
/// opposite corners.
fn rectangle_polygon(width: f32, height: f32) -> Polygon {
    let (hw, hh) = (width / 2.0, height / 2.0);
    Polygon::new(vec![
        Vec2::new(hw, hh),
        Vec2::new(-hw, hh),
        Vec2::new(-hw, -hh),
        Vec2::new(hw, -hh),
    ])
}

fn circle_polygon(center: Vec2, radius: f32, p: &PolyBody, cfg: &CollideCfg) -> Option<Vec2> {
    if let Some(rect) = p.aabb {
        return circle_rect(center, radius, rect);
    }
    let approx = Polygon::regular(cfg.circle_sides()).scaled(radius);
    polygon_overlap(center, &approx.verts, p.position, &p.local.verts)
}

fn polygon_polygon(a: &PolyBody, b: &PolyBody) -> Option<Vec2> {
    if let (Some(ra), Some(rb)) = (a.aabb, b.aabb) {
        return rect_rect(ra, rb);
    }
    polygon_overlap(a.position, &a.local.verts, b.position, &b.local.verts)
}
