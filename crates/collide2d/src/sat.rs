//! Separating-axis test for two convex polygons with minimum translation.
//!
//! Purpose
//! - Decide overlap of two convex polygons and, on a hit, return the minimum
//!   translation vector (MTV) separating them.
//!
//! Conventions
//! - Vertices are local to each polygon's reference position; the polygons
//!   are never translated into world space here.
//! - Candidate axes are the unit counter-clockwise perpendiculars `(-e.y, e.x)`
//!   of every edge of polygon 1, then every edge of polygon 2. Zero-length
//!   edges are skipped.
//! - `offset = dot(axis, pos2 - pos1)`. Polygon 1's interval is shifted by
//!   `-offset`, which puts both intervals in polygon 2's frame.
//! - Depth ties keep the earlier axis. The MTV points from polygon 1 toward
//!   polygon 2 (axis flipped when `offset < 0`).
//! - Touching intervals separate, so exactly-touching polygons do not collide.
//! - Convexity is a precondition and is not checked. Concave input gives
//!   meaningless results.

use crate::polygon::{edges, project};
use crate::types::Vec2;
use crate::util::{normalize_or_none, perp_ccw};

/// Overlap of two convex polygons placed at `pos1` / `pos2`.
///
/// Returns `Some(mtv)` iff the polygons overlap on every candidate axis.
/// Exits on the first separating axis. Either polygon having fewer than 3
/// vertices (or only zero-length edges) is a miss.
pub fn polygon_overlap(pos1: Vec2, verts1: &[Vec2], pos2: Vec2, verts2: &[Vec2]) -> Option<Vec2> {
    if verts1.len() < 3 || verts2.len() < 3 {
        return None;
    }
    let delta = pos2 - pos1;
    let mut best: Option<(f32, Vec2)> = None;
    for axis in edge_normals(verts1).chain(edge_normals(verts2)) {
        let offset = axis.dot(&delta);
        let r1 = project(verts1, axis).shifted(-offset);
        let r2 = project(verts2, axis);
        if r1.is_disjoint(&r2) {
            return None;
        }
        let depth = r1.overlap(&r2);
        if best.is_none_or(|(d, _)| depth < d) {
            let dir = if offset < 0.0 { -axis } else { axis };
            best = Some((depth, dir));
        }
    }
    best.map(|(depth, dir)| dir * depth)
}

/// Unit counter-clockwise edge normals, wrapping at the last vertex.
pub fn edge_normals(verts: &[Vec2]) -> impl Iterator<Item = Vec2> + '_ {
    edges(verts).filter_map(|e| normalize_or_none(perp_ccw(e)))
}
