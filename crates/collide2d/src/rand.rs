//! Random shapes and scenes (replay tokens for reproducibility).
//!
//! Purpose
//! - Seed benches, tests and the demo scene with reproducible layouts.
//!
//! Model
//! - `draw_demo_scene` places a fixed cast (two circles, a triangle, two
//!   squares used as rectangles, a pentagon, a hexagon, an octagon) at
//!   uniform random positions inside `bounds`.
//! - `draw_shape` samples a single shape of random kind, size and rotation.
//! - Determinism uses a replay token `(seed, index)` mixed into one RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::polygon::Polygon;
use crate::scene::Scene;
use crate::shape::Shape;
use crate::types::Vec2;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Area and base size for generated scenes.
#[derive(Clone, Copy, Debug)]
pub struct SceneCfg {
    /// Positions are drawn from `[0, bounds.x] × [0, bounds.y]`.
    pub bounds: Vec2,
    /// Scale of the unit-sized shapes.
    pub base_scale: f32,
}

impl Default for SceneCfg {
    fn default() -> Self {
        Self {
            bounds: Vec2::new(1280.0, 720.0),
            base_scale: 20.0,
        }
    }
}

/// Ranges for `draw_shape`.
#[derive(Clone, Copy, Debug)]
pub struct ShapeCfg {
    pub bounds: Vec2,
    pub scale_min: f32,
    pub scale_max: f32,
    /// Polygon side counts are drawn from `3..=max_sides`.
    pub max_sides: usize,
}

impl Default for ShapeCfg {
    fn default() -> Self {
        Self {
            bounds: Vec2::new(100.0, 100.0),
            scale_min: 1.0,
            scale_max: 10.0,
            max_sides: 12,
        }
    }
}

/// The fixed demo cast at random positions.
pub fn draw_demo_scene(cfg: SceneCfg, tok: ReplayToken) -> Scene {
    let mut rng = tok.to_std_rng();
    let s = cfg.base_scale;
    // regular(4) turned by 45° has vertices 0 and 2 on opposite corners
    let side = std::f32::consts::SQRT_2;
    let cast = vec![
        Shape::circle(Vec2::zeros(), 1.0).with_scale(s),
        Shape::circle(Vec2::zeros(), 1.0).with_scale(s * 1.5),
        Shape::polygon(Vec2::zeros(), Polygon::regular(3)).with_scale(s),
        Shape::rectangle(Vec2::zeros(), side, side).with_scale(s),
        Shape::rectangle(Vec2::zeros(), side, side).with_scale(s * 4.0),
        Shape::polygon(Vec2::zeros(), Polygon::regular(5).rotated(-90.0)).with_scale(s),
        Shape::polygon(Vec2::zeros(), Polygon::regular(6)).with_scale(s),
        Shape::polygon(Vec2::zeros(), Polygon::regular(8)).with_scale(s),
    ];
    let shapes = cast
        .into_iter()
        .map(|mut shape| {
            shape.position = random_point(&mut rng, cfg.bounds);
            shape
        })
        .collect();
    Scene::new(shapes)
}

/// One shape of random kind, placement, scale and rotation.
pub fn draw_shape<R: Rng>(rng: &mut R, cfg: ShapeCfg) -> Shape {
    let position = random_point(rng, cfg.bounds);
    let lo = cfg.scale_min.max(f32::MIN_POSITIVE);
    let hi = cfg.scale_max.max(lo);
    let scale = if hi > lo { rng.gen_range(lo..hi) } else { lo };
    let rotation = rng.gen_range(0.0..360.0);
    match rng.gen_range(0..3) {
        0 => Shape::circle(position, 1.0).with_scale(scale),
        1 => {
            let w = rng.gen_range(0.5..2.0);
            let h = rng.gen_range(0.5..2.0);
            let shape = Shape::rectangle(position, w, h).with_scale(scale);
            // half of the rectangles stay axis-aligned
            if rng.gen::<bool>() {
                shape
            } else {
                shape.with_rotation(rotation)
            }
        }
        _ => {
            let sides = rng.gen_range(3..=cfg.max_sides.max(3));
            Shape::polygon(position, Polygon::regular(sides))
                .with_scale(scale)
                .with_rotation(rotation)
        }
    }
}

/// `n` shapes from one replay token.
pub fn draw_scene(n: usize, cfg: ShapeCfg, tok: ReplayToken) -> Scene {
    let mut rng = tok.to_std_rng();
    Scene::new((0..n).map(|_| draw_shape(&mut rng, cfg)).collect())
}

fn random_point<R: Rng>(rng: &mut R, bounds: Vec2) -> Vec2 {
    Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y)
}
