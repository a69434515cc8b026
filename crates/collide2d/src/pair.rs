//! Pairwise circle/rectangle primitives.
//!
//! Every routine returns `Some(overlap)` on a hit, with `overlap` pointing
//! from shape 1 toward shape 2. Shape 1 moves by `-overlap` (or shape 2 by
//! `+overlap`) to separate. Comparisons are strict: touching is not a hit.

use crate::types::{CenteredRect, Rect, Vec2};

/// Circle against circle. Hit iff `r1 + r2 > distance(c1, c2)`.
///
/// Coincident centers report the full depth along `+x`.
pub fn circle_circle(c1: Vec2, r1: f32, c2: Vec2, r2: f32) -> Option<Vec2> {
    let delta = c2 - c1;
    let dist = delta.x.hypot(delta.y);
    let depth = (r1 + r2) - dist;
    if depth <= 0.0 {
        return None;
    }
    if dist == 0.0 {
        return Some(Vec2::new(depth, 0.0));
    }
    Some(delta / dist * depth)
}

/// Axis-aligned rectangle against rectangle (both top-left + size).
///
/// The result is a single-axis push: the component with the larger magnitude
/// is zeroed. On an exact tie x is zeroed, so y wins.
pub fn rect_rect(a: Rect, b: Rect) -> Option<Vec2> {
    let mut ox = if a.pos.x < b.pos.x {
        (a.pos.x + a.size.x) - b.pos.x
    } else {
        (b.pos.x + b.size.x) - a.pos.x
    };
    let mut oy = if a.pos.y < b.pos.y {
        (a.pos.y + a.size.y) - b.pos.y
    } else {
        (b.pos.y + b.size.y) - a.pos.y
    };
    if !(ox > 0.0 && oy > 0.0) {
        return None;
    }
    if b.pos.x < a.pos.x {
        ox = -ox;
    }
    if b.pos.y < a.pos.y {
        oy = -oy;
    }
    if ox.abs() < oy.abs() {
        Some(Vec2::new(ox, 0.0))
    } else {
        Some(Vec2::new(0.0, oy))
    }
}

/// Circle against centered rectangle.
///
/// The circle-to-rectangle delta is clamped to the half-extents to find the
/// nearest point of the rectangle; the circle hits when that point is closer
/// than `r`. A circle whose center lies inside the rectangle has a zero
/// nearest-point vector. That magnitude is replaced by 1, which yields a hit
/// with a zero overlap when `r > 1` and a miss otherwise. Resolving
/// containment is out of scope.
pub fn circle_centered_rect(c: Vec2, r: f32, rect: CenteredRect) -> Option<Vec2> {
    let delta = c - rect.center;
    if delta.x.abs() > r + rect.half.x || delta.y.abs() > r + rect.half.y {
        return None;
    }
    let clamped = Vec2::new(
        delta.x.max(-rect.half.x).min(rect.half.x),
        delta.y.max(-rect.half.y).min(rect.half.y),
    );
    // circle center -> nearest point on the rectangle
    let to_nearest = clamped - delta;
    let mut mag = to_nearest.x.hypot(to_nearest.y);
    if mag == 0.0 {
        mag = 1.0;
    }
    if mag < r {
        Some(to_nearest / mag * (r - mag))
    } else {
        None
    }
}

/// Circle against top-left rectangle; converts and defers to
/// [`circle_centered_rect`].
#[inline]
pub fn circle_rect(c: Vec2, r: f32, rect: Rect) -> Option<Vec2> {
    circle_centered_rect(c, r, rect.to_centered())
}
