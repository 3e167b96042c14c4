use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use crate::schema::Scene;

pub fn load_and_validate_scene(path: &Path) -> Result<Scene> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read scene {}", path.display()))?;
    let scene: Scene = serde_yaml::from_str(&contents).map_err(|error| {
        let location = error
            .location()
            .map(|location| format!("line {}, column {}", location.line(), location.column()))
            .unwrap_or_else(|| "unknown location".to_owned());
        anyhow!(
            "failed to parse yaml in {} at {}: {}",
            path.display(),
            location,
            error
        )
    })?;

    scene
        .validate()
        .with_context(|| format!("invalid scene {}", path.display()))?;
    Ok(scene)
}

/// Loads the scene at `path`, or the built-in defaults when no path is given.
pub fn load_scene_or_default(path: Option<&Path>) -> Result<Scene> {
    match path {
        Some(path) => load_and_validate_scene(path),
        None => Ok(Scene::default()),
    }
}
