//! Point-in-shape tests.
//!
//! Overlap vectors point from the point toward the shape's center: moving the
//! point by `-overlap` (or the shape by `+overlap`) separates the two.

use crate::types::{Rect, Vec2};
use crate::util::angle_of;

/// Point against circle. Hit iff `distance(p, center) < radius`.
///
/// The overlap has magnitude `radius - distance` along `p → center`. A point
/// exactly at the center has no direction to speak of; it reports the full
/// radius along `+x`.
pub fn point_in_circle(p: Vec2, center: Vec2, radius: f32) -> Option<Vec2> {
    let delta = center - p;
    let dist = delta.x.hypot(delta.y);
    let depth = radius - dist;
    if depth <= 0.0 {
        return None;
    }
    if dist == 0.0 {
        return Some(Vec2::new(depth, 0.0));
    }
    Some(delta / dist * depth)
}

/// Point against axis-aligned rectangle (top-left + size).
///
/// Only the axis of least penetration is kept; the other component is zero.
/// On an exact tie the y axis is kept.
pub fn point_in_rect(p: Vec2, rect: Rect) -> Option<Vec2> {
    let c = rect.to_centered();
    let delta = c.center - p;
    if !(delta.x.abs() < c.half.x && delta.y.abs() < c.half.y) {
        return None;
    }
    let ox = c.half.x - delta.x.abs();
    let oy = c.half.y - delta.y.abs();
    if ox < oy {
        Some(Vec2::new(signed(ox, delta.x), 0.0))
    } else {
        Some(Vec2::new(0.0, signed(oy, delta.y)))
    }
}

/// Even-odd crossing test of `p` against a closed polygon in world space.
///
/// Fewer than 3 vertices never contain anything. Works for any simple
/// polygon, though callers only rely on it for convex ones.
pub fn point_in_convex_polygon(p: Vec2, verts: &[Vec2]) -> bool {
    if verts.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = verts.len() - 1;
    for (i, vi) in verts.iter().enumerate() {
        let vj = verts[j];
        if (vi.y >= p.y) != (vj.y >= p.y) {
            let x_cross = (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Is `p` on the line through `start` and `end`?
///
/// Collinearity compares `atan2` angles for exact equality, so points that
/// are off by a rounding error are rejected. With `segment` the point must
/// also lie in the direction of `end` no farther than the segment length;
/// without it both directions from `start` match. `p == start` is always on.
pub fn point_on_line(p: Vec2, start: Vec2, end: Vec2, segment: bool) -> bool {
    let line = end - start;
    let delta = p - start;
    if delta == Vec2::zeros() {
        return true;
    }
    let point_angle = angle_of(delta);
    if angle_of(line) == point_angle {
        if segment {
            return delta.x.hypot(delta.y) <= line.x.hypot(line.y);
        }
        return true;
    }
    // `-line` would turn a zero component into -0.0, which atan2 maps to -π
    !segment && angle_of(start - end) == point_angle
}

#[inline]
fn signed(v: f32, toward: f32) -> f32 {
    if toward < 0.0 {
        -v
    } else {
        v
    }
}
