use crate::types::Vec2;

#[inline]
pub fn angle_of(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}

/// Unit vector along `v`, or `None` for zero-length / non-finite input.
#[inline]
pub fn normalize_or_none(v: Vec2) -> Option<Vec2> {
    let norm = v.x.hypot(v.y);
    if !(norm.is_finite()) || norm <= 0.0 {
        return None;
    }
    Some(v / norm)
}

/// Counter-clockwise perpendicular `(-y, x)`.
#[inline]
pub fn perp_ccw(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Z component of `(b - a) × (c - a)`; positive for a counter-clockwise turn.
#[inline]
pub fn cross(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Wrap degrees into `[0, 360]`. Values already in range (360 included)
/// are returned unchanged.
pub fn normalize_degrees(degrees: f32) -> f32 {
    if (0.0..=360.0).contains(&degrees) {
        return degrees;
    }
    degrees.rem_euclid(360.0)
}
