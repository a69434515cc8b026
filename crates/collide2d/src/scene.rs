//! Ordered shape collections: validation, pair queries and overlap settling.
//!
//! The settling step mirrors a per-frame loop: shapes are visited in order,
//! each is tested against every other shape, and every hit immediately moves
//! the visited shape by `-overlap`. Later tests see the updated positions.
//! There is no broad phase; cost is quadratic in the shape count.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::shape::{Shape, ShapeKind};
use crate::types::{CollideCfg, Vec2};

/// Error type for scene validation.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    NonFinite { index: usize, field: &'static str },
    NonPositive { index: usize, field: &'static str },
    OpenPolygon { index: usize, verts: usize },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { index, field } => write!(f, "shape {index}: {field} is not finite"),
            Self::NonPositive { index, field } => write!(f, "shape {index}: {field} must be > 0"),
            Self::OpenPolygon { index, verts } => {
                write!(f, "shape {index}: polygon needs at least 3 vertices, got {verts}")
            }
        }
    }
}

impl std::error::Error for SceneError {}

/// One colliding pair, `a < b`, with the overlap pointing from `a` to `b`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Contact {
    pub a: usize,
    pub b: usize,
    pub overlap: Vec2,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scene {
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    /// Reject shapes the overlap tests would silently treat as empty or NaN.
    ///
    /// Convexity is not checked.
    pub fn validate(&self) -> Result<(), SceneError> {
        for (index, s) in self.shapes.iter().enumerate() {
            if !(s.position.x.is_finite() && s.position.y.is_finite()) {
                return Err(SceneError::NonFinite {
                    index,
                    field: "position",
                });
            }
            if !s.rotation.is_finite() {
                return Err(SceneError::NonFinite {
                    index,
                    field: "rotation",
                });
            }
            positive(index, "scale", s.scale)?;
            match &s.kind {
                ShapeKind::Circle { radius } => positive(index, "radius", *radius)?,
                ShapeKind::Rectangle { width, height } => {
                    positive(index, "width", *width)?;
                    positive(index, "height", *height)?;
                }
                ShapeKind::Polygon(p) => {
                    if !p.is_closed() {
                        return Err(SceneError::OpenPolygon {
                            index,
                            verts: p.len(),
                        });
                    }
                    if p.verts.iter().any(|v| !(v.x.is_finite() && v.y.is_finite())) {
                        return Err(SceneError::NonFinite {
                            index,
                            field: "vertex",
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Every colliding unordered pair, in index order.
    pub fn contacts(&self, cfg: &CollideCfg) -> Vec<Contact> {
        let mut out = Vec::new();
        for (a, sa) in self.shapes.iter().enumerate() {
            for (b, sb) in self.shapes.iter().enumerate().skip(a + 1) {
                if let Some(overlap) = sa.collide(sb, cfg) {
                    out.push(Contact { a, b, overlap });
                }
            }
        }
        out
    }

    /// Index of the first shape containing `p`, if any.
    pub fn pick(&self, p: Vec2) -> Option<usize> {
        self.shapes.iter().position(|s| s.contains_point(p))
    }

    /// One settling pass. `pinned` is never moved (a shape being dragged).
    /// Returns the number of hits that moved a shape; zero-vector hits (a
    /// circle contained in a rectangle) move nothing and are not counted.
    pub fn resolve_step(&mut self, cfg: &CollideCfg, pinned: Option<usize>) -> usize {
        let mut moved = 0;
        for i in 0..self.shapes.len() {
            if pinned == Some(i) {
                continue;
            }
            for j in 0..self.shapes.len() {
                if i == j {
                    continue;
                }
                match self.shapes[i].collide(&self.shapes[j], cfg) {
                    Some(overlap) if overlap != Vec2::zeros() => {
                        self.shapes[i].position -= overlap;
                        moved += 1;
                    }
                    _ => {}
                }
            }
        }
        tracing::debug!(moved, shapes = self.shapes.len(), "resolve step");
        moved
    }

    /// Run up to `max_steps` settling passes, stopping early once a pass
    /// moves nothing. Returns the number of passes run.
    pub fn settle(&mut self, cfg: &CollideCfg, pinned: Option<usize>, max_steps: usize) -> usize {
        for step in 0..max_steps {
            if self.resolve_step(cfg, pinned) == 0 {
                return step + 1;
            }
        }
        max_steps
    }
}

fn positive(index: usize, field: &'static str, v: f32) -> Result<(), SceneError> {
    if !v.is_finite() {
        return Err(SceneError::NonFinite { index, field });
    }
    if v <= 0.0 {
        return Err(SceneError::NonPositive { index, field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::Polygon;
    use nalgebra::vector;

    fn crowded() -> Scene {
        Scene::new(vec![
            Shape::circle(vector![0.0, 0.0], 1.0),
            Shape::circle(vector![1.5, 0.0], 1.0),
            Shape::rectangle(vector![0.0, 1.5], 2.0, 2.0),
            Shape::polygon(vector![10.0, 10.0], Polygon::regular(6)),
        ])
    }

    #[test]
    fn contacts_lists_pairs_in_order() {
        let cfg = CollideCfg::default();
        let c = crowded().contacts(&cfg);
        let pairs: Vec<_> = c.iter().map(|c| (c.a, c.b)).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
        assert!((c[0].overlap - vector![0.5, 0.0]).norm() < 1e-6);
    }

    #[test]
    fn settle_separates_everything() {
        let cfg = CollideCfg::default();
        let mut s = crowded();
        s.settle(&cfg, None, 100);
        // rounding can leave a contact at touching distance
        for c in s.contacts(&cfg) {
            assert!(c.overlap.norm() < 1e-4, "{c:?}");
        }
    }

    #[test]
    fn pinned_shape_stays_put() {
        let cfg = CollideCfg::default();
        let mut s = crowded();
        let before = s.shapes[0].position;
        s.settle(&cfg, Some(0), 50);
        assert_eq!(s.shapes[0].position, before);
        assert!(s.shapes[1].position.x > 1.5);
    }

    #[test]
    fn contained_circle_does_not_keep_settling() {
        let cfg = CollideCfg::default();
        let mut s = Scene::new(vec![
            Shape::circle(Vec2::zeros(), 2.0),
            Shape::rectangle(Vec2::zeros(), 10.0, 10.0),
        ]);
        // the pair still reports a hit, with a zero vector
        assert_eq!(s.contacts(&cfg).len(), 1);
        assert_eq!(s.resolve_step(&cfg, None), 0);
        assert_eq!(s.settle(&cfg, None, 50), 1);
        assert_eq!(s.shapes[0].position, Vec2::zeros());
    }

    #[test]
    fn pick_returns_first_hit() {
        let s = crowded();
        assert_eq!(s.pick(vector![0.9, 0.0]), Some(0));
        assert_eq!(s.pick(vector![2.3, 0.0]), Some(1));
        assert_eq!(s.pick(vector![10.0, 10.0]), Some(3));
        assert_eq!(s.pick(vector![-5.0, -5.0]), None);
    }

    #[test]
    fn validate_reports_first_problem() {
        assert!(crowded().validate().is_ok());
        let mut s = crowded();
        s.shapes[1] = Shape::circle(vector![0.0, 0.0], 0.0);
        assert_eq!(
            s.validate(),
            Err(SceneError::NonPositive {
                index: 1,
                field: "radius"
            })
        );
        let s = Scene::new(vec![Shape::polygon(
            Vec2::zeros(),
            Polygon::new(vec![Vec2::zeros(), vector![1.0, 0.0]]),
        )]);
        let err = s.validate().unwrap_err();
        assert_eq!(err.to_string(), "shape 0: polygon needs at least 3 vertices, got 2");
        let s = Scene::new(vec![Shape::circle(vector![f32::NAN, 0.0], 1.0)]);
        assert!(matches!(s.validate(), Err(SceneError::NonFinite { .. })));
    }
}
