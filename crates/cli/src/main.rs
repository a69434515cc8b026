use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use collide2d::rand::{draw_demo_scene, ReplayToken, SceneCfg};
use collide2d::{CollideCfg, Contact, Scene};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod scene_io;

#[derive(Parser)]
#[command(name = "collide2d-cli")]
#[command(about = "Headless runner for 2D collision scenes")]
struct Cmd {
    /// Log at debug level
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print every colliding pair of a scene as JSON
    Check {
        #[arg(long)]
        scene: PathBuf,
        /// Sides of the polygon standing in for circles in SAT
        #[arg(long, default_value_t = CollideCfg::default().circle_sides)]
        cfg_sides: usize,
    },
    /// Push overlapping shapes apart and write the resulting scene
    Settle {
        #[arg(long)]
        scene: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 100)]
        steps: usize,
        /// Index of a shape that is never moved
        #[arg(long)]
        pin: Option<usize>,
    },
    /// Write the demo scene at random positions
    Demo {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Print library version JSON
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Check { scene, cfg_sides } => {
            let contacts = check(&scene, CollideCfg { circle_sides: cfg_sides })?;
            println!("{}", serde_json::to_string_pretty(&contacts)?);
            Ok(())
        }
        Action::Settle {
            scene,
            out,
            steps,
            pin,
        } => settle(&scene, &out, steps, pin),
        Action::Demo { out, seed } => demo(&out, seed),
        Action::Report => report(),
    }
}

fn check(path: &Path, cfg: CollideCfg) -> Result<Vec<Contact>> {
    let scene = scene_io::read_scene(path)?;
    let contacts = scene.contacts(&cfg);
    tracing::info!(shapes = scene.shapes.len(), contacts = contacts.len(), "check");
    Ok(contacts)
}

fn settle(path: &Path, out: &Path, steps: usize, pin: Option<usize>) -> Result<()> {
    let mut scene = scene_io::read_scene(path)?;
    if let Some(i) = pin {
        if i >= scene.shapes.len() {
            bail!("--pin {i} out of range for {} shapes", scene.shapes.len());
        }
    }
    let cfg = CollideCfg::default();
    let ran = scene.settle(&cfg, pin, steps);
    let left = scene.contacts(&cfg).len();
    tracing::info!(steps = ran, contacts_left = left, out = %out.display(), "settle");
    scene_io::write_scene(out, &scene)?;
    scene_io::write_sidecar(
        out,
        serde_json::json!({
            "command": "settle",
            "scene": path.to_string_lossy(),
            "steps": steps,
            "pin": pin,
            "steps_run": ran,
        }),
    )?;
    Ok(())
}

fn demo(out: &Path, seed: u64) -> Result<()> {
    let scene: Scene = draw_demo_scene(SceneCfg::default(), ReplayToken { seed, index: 0 });
    tracing::info!(seed, shapes = scene.shapes.len(), out = %out.display(), "demo");
    scene_io::write_scene(out, &scene)?;
    scene_io::write_sidecar(out, serde_json::json!({ "command": "demo", "seed": seed }))?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "name": "collide2d",
        "version": collide2d::VERSION,
        "code_rev": scene_io::current_git_rev(),
        "circle_sides": CollideCfg::default().circle_sides,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use collide2d::{Shape, Vec2};
    use tempfile::tempdir;

    fn overlapping() -> Scene {
        Scene::new(vec![
            Shape::circle(Vec2::new(0.0, 0.0), 1.0),
            Shape::circle(Vec2::new(1.5, 0.0), 1.0),
            Shape::rectangle(Vec2::new(20.0, 0.0), 2.0, 2.0),
        ])
    }

    #[test]
    fn check_lists_contacts() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scene.json");
        scene_io::write_scene(&path, &overlapping()).unwrap();
        let contacts = check(&path, CollideCfg::default()).unwrap();
        assert_eq!(contacts.len(), 1);
        assert_eq!((contacts[0].a, contacts[0].b), (0, 1));
        let json = serde_json::to_value(&contacts).unwrap();
        assert!((json[0]["overlap"][0].as_f64().unwrap() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn settle_writes_separated_scene_and_sidecar() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scene.json");
        let out = dir.path().join("out/settled.json");
        scene_io::write_scene(&path, &overlapping()).unwrap();
        settle(&path, &out, 50, Some(0)).unwrap();
        let settled = scene_io::read_scene(&out).unwrap();
        assert_eq!(settled.shapes[0].position, Vec2::new(0.0, 0.0));
        assert!(settled.contacts(&CollideCfg::default()).is_empty());
        assert!(dir.path().join("out/settled.provenance.json").exists());
    }

    #[test]
    fn settle_rejects_bad_pin() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scene.json");
        scene_io::write_scene(&path, &overlapping()).unwrap();
        let err = settle(&path, &dir.path().join("o.json"), 5, Some(9)).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn demo_is_reproducible() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        demo(&a, 7).unwrap();
        demo(&b, 7).unwrap();
        let sa = scene_io::read_scene(&a).unwrap();
        assert_eq!(sa, scene_io::read_scene(&b).unwrap());
        assert_eq!(sa.shapes.len(), 8);
    }
}
