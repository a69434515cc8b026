//! 2D collision primitives.
//!
//! Pure overlap tests between points, circles, axis-aligned rectangles and
//! convex polygons. Every test that can produce one returns the minimum
//! translation vector (MTV) as `Option<Vec2>`: `Some(v)` on a hit, with `v`
//! pointing from the first shape toward the second. The first shape moves by
//! `-v` (or the second by `+v`) to separate them.
//!
//! Numerics
//! - Single precision throughout. Comparisons are strict and have no epsilon:
//!   exactly touching shapes do not collide.
//! - Degenerate inputs (zero-length vectors, polygons with fewer than 3
//!   vertices) are guarded locally and never produce NaN or panic.
//! - Convexity is a precondition of the polygon tests and is not checked.
//!
//! Layout
//! - `point`, `pair`, `sat`: the primitive tests.
//! - `polygon`: polygon value type and transforms.
//! - `shape`, `scene`: a `Shape` sum type with one dispatcher, and ordered
//!   shape collections.
//! - `rand`: reproducible random shapes and scenes.

pub mod pair;
pub mod point;
pub mod polygon;
pub mod rand;
pub mod sat;
pub mod scene;
pub mod shape;
pub mod types;
pub mod util;

pub use pair::{circle_centered_rect, circle_circle, circle_rect, rect_rect};
pub use point::{point_in_circle, point_in_convex_polygon, point_in_rect, point_on_line};
pub use polygon::Polygon;
pub use sat::polygon_overlap;
pub use scene::{Contact, Scene, SceneError};
pub use shape::{Shape, ShapeKind};
pub use types::{CenteredRect, CollideCfg, Range, Rect, Vec2};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::pair::{circle_centered_rect, circle_circle, circle_rect, rect_rect};
    pub use crate::point::{
        point_in_circle, point_in_convex_polygon, point_in_rect, point_on_line,
    };
    pub use crate::polygon::Polygon;
    pub use crate::rand::{draw_demo_scene, draw_scene, ReplayToken, SceneCfg, ShapeCfg};
    pub use crate::sat::polygon_overlap;
    pub use crate::scene::{Contact, Scene, SceneError};
    pub use crate::shape::{Shape, ShapeKind};
    pub use crate::types::{CenteredRect, CollideCfg, Range, Rect, Vec2};
}
