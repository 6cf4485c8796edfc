//! Lists the 3D models a loader node can offer.

use std::fs;
use std::path::{Component, Path};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::error::NodeError;

/// Model formats a loader accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFormats {
    /// Static meshes.
    Mesh,
    /// Formats able to carry animation data.
    Animated,
}

const MESH_EXTENSIONS: &[&str] = &["gltf", "glb", "obj", "fbx", "stl"];
const ANIMATED_EXTENSIONS: &[&str] = &["gltf", "glb", "fbx"];

impl ModelFormats {
    /// Lower-case extensions, without the dot.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            ModelFormats::Mesh => MESH_EXTENSIONS,
            ModelFormats::Animated => ANIMATED_EXTENSIONS,
        }
    }

    /// Case-insensitive extension check.
    pub fn accepts(self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.extensions()
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            })
            .unwrap_or(false)
    }
}

/// `/`-joined form of a relative path, whatever the platform separator.
/// `None` when a component is not valid UTF-8.
pub fn normalize_relative(path: &Path) -> Option<String> {
    let mut parts = Vec::new();
    for component in path.components() {
        if let Component::Normal(part) = component {
            parts.push(part.to_str()?);
        }
    }
    Some(parts.join("/"))
}

/// Every model under `<input_root>/<subdir>` accepted by `formats`, as sorted
/// `input_root`-relative paths.
///
/// The subdirectory is created when missing, so a fresh host yields an empty list.
/// Entries that cannot be read are skipped.
pub fn enumerate_models(
    input_root: &Path,
    subdir: &str,
    formats: ModelFormats,
) -> Result<Vec<String>, NodeError> {
    let models_dir = input_root.join(subdir);
    fs::create_dir_all(&models_dir).map_err(|source| NodeError::ModelFolder {
        path: models_dir.clone(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in WalkDir::new(&models_dir) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable entry under {}: {e}", models_dir.display());
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() || !formats.accepts(path) {
            continue;
        }
        let Ok(rel) = path.strip_prefix(input_root) else {
            continue;
        };
        match normalize_relative(rel) {
            Some(name) => files.push(name),
            None => warn!("skipping model with a non-UTF-8 name: {}", path.display()),
        }
    }
    files.sort();

    debug!(
        "found {} {:?} models under {}",
        files.len(),
        formats,
        models_dir.display()
    );
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_formats_accept_any_case() {
        for name in ["a.gltf", "b.GLB", "c.Obj", "d.fbx", "e.STL"] {
            assert!(ModelFormats::Mesh.accepts(Path::new(name)), "{name}");
        }
        assert!(!ModelFormats::Mesh.accepts(Path::new("f.txt")));
        assert!(!ModelFormats::Mesh.accepts(Path::new("glb")));
    }

    #[test]
    fn animated_formats_are_a_subset() {
        assert!(ModelFormats::Animated.accepts(Path::new("walk.FBX")));
        assert!(!ModelFormats::Animated.accepts(Path::new("crate.obj")));
        assert!(!ModelFormats::Animated.accepts(Path::new("part.stl")));
        for ext in ModelFormats::Animated.extensions() {
            assert!(ModelFormats::Mesh.extensions().contains(ext));
        }
    }

    #[test]
    fn normalizes_separators() {
        let rel = Path::new("3d").join("props").join("lamp.gltf");
        assert_eq!(normalize_relative(&rel).as_deref(), Some("3d/props/lamp.gltf"));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_names_do_not_normalize() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let rel = Path::new("3d").join(OsStr::from_bytes(b"bad\xffname.glb"));
        assert_eq!(normalize_relative(&rel), None);
    }
}
