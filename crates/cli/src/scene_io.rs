use anyhow::{Context, Result};
use collide2d::Scene;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Read a scene JSON file and reject shapes the overlap tests cannot use.
pub fn read_scene<P: AsRef<Path>>(path: P) -> Result<Scene> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let scene: Scene = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing scene {}", path.display()))?;
    scene
        .validate()
        .with_context(|| format!("invalid scene {}", path.display()))?;
    tracing::debug!(path = %path.display(), shapes = scene.shapes.len(), "scene loaded");
    Ok(scene)
}

/// Write `scene` as pretty JSON, creating parent directories.
pub fn write_scene<P: AsRef<Path>>(path: P, scene: &Scene) -> Result<()> {
    let path = path.as_ref();
    create_parent(path)?;
    fs::write(path, serde_json::to_vec_pretty(scene)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Write `<artifact>.provenance.json` with the git commit, the command
/// parameters and the output path.
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, params: Value) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    create_parent(&provenance_path)?;
    let doc = json!({
        "code_rev": current_git_rev(),
        "version": collide2d::VERSION,
        "params": params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}

/// `out/settled.json` -> `out/settled.provenance.json`.
fn provenance_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `GIT_COMMIT` from the environment, else `git rev-parse --short HEAD`,
/// else `"unknown"`.
pub fn current_git_rev() -> String {
    git_rev_or(std::env::var("GIT_COMMIT").ok())
}

fn git_rev_or(from_env: Option<String>) -> String {
    if let Some(rev) = from_env.filter(|r| !r.is_empty()) {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
