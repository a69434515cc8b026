//! Settle the demo scene and print the contacts before and after.
//!
//! Usage:
//!   cargo run -p collide2d --example settle_demo -- [seed]
//!
//! Prints one line per colliding pair with the overlap vector, then the
//! number of settling passes and whatever contacts remain.

use collide2d::rand::{draw_demo_scene, ReplayToken, SceneCfg};
use collide2d::{CollideCfg, Scene};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2025);
    // a small area so the demo cast actually overlaps
    let cfg = SceneCfg {
        bounds: collide2d::Vec2::new(160.0, 120.0),
        ..SceneCfg::default()
    };
    let mut scene = draw_demo_scene(cfg, ReplayToken { seed, index: 0 });
    let collide = CollideCfg::default();
    println!("seed {seed}: {} shapes", scene.shapes.len());
    print_contacts(&scene, &collide);
    let passes = scene.settle(&collide, None, 200);
    println!("settled after {passes} passes");
    print_contacts(&scene, &collide);
}

fn print_contacts(scene: &Scene, cfg: &CollideCfg) {
    let contacts = scene.contacts(cfg);
    if contacts.is_empty() {
        println!("  no contacts");
    }
    for c in contacts {
        println!(
            "  {} {} / {} {}: overlap ({:.3}, {:.3})",
            scene.shapes[c.a].kind_name(),
            c.a,
            scene.shapes[c.b].kind_name(),
            c.b,
            c.overlap.x,
            c.overlap.y
        );
    }
}
