use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tempfile::TempDir;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    cameras: HashMap<String, String>,
    bundles: HashMap<String, String>,
    #[serde(rename = "model-trees")]
    model_trees: HashMap<String, Vec<String>>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

/// Camera files as the loader would find them on disk.
pub mod cameras {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.cameras.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        let rel = lookup(&MANIFEST.cameras, "camera", name)?;
        read_to_string(rel)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let rel = lookup(&MANIFEST.cameras, "camera", name)?;
        Ok(resolve_path(rel))
    }
}

/// Values sent by the viewer widget.
pub mod bundles {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.bundles.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        let rel = lookup(&MANIFEST.bundles, "bundle", name)?;
        read_to_string(rel)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let rel = lookup(&MANIFEST.bundles, "bundle", name)?;
        super::load_json(rel)
    }
}

/// Throwaway host input folders populated with empty files.
pub mod model_trees {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.model_trees.keys().cloned().collect()
    }

    /// Files listed for `name`, relative to the input root.
    pub fn files(name: &str) -> Result<Vec<String>> {
        lookup(&MANIFEST.model_trees, "model tree", name).cloned()
    }

    /// Create a temporary input root containing every file listed for `name`.
    pub fn materialize(name: &str) -> Result<TempDir> {
        let files = files(name)?;
        let root = tempfile::tempdir().context("failed to create temp input root")?;
        for rel in files {
            write_empty(root.path(), &rel)?;
        }
        Ok(root)
    }

    pub fn write_empty(root: &Path, rel: &str) -> Result<PathBuf> {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&path, b"").with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }
}
