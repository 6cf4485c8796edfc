//! Host folder layout the nodes read from.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Where the host keeps its input, output and scratch files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub temp_dir: PathBuf,
    /// Subdirectory of `input_dir` scanned for 3D models.
    pub models_subdir: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self::with_root(".")
    }
}

impl HostConfig {
    pub const DEFAULT_MODELS_SUBDIR: &'static str = "3d";

    /// Conventional layout: `<root>/input`, `<root>/output`, `<root>/temp`.
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            input_dir: root.join("input"),
            output_dir: root.join("output"),
            temp_dir: root.join("temp"),
            models_subdir: Self::DEFAULT_MODELS_SUBDIR.to_string(),
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Directory holding the 3D models offered by the loader nodes.
    pub fn models_dir(&self) -> PathBuf {
        self.input_dir.join(&self.models_subdir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_root_uses_conventional_folders() {
        let cfg = HostConfig::with_root("/srv/host");
        assert_eq!(cfg.input_dir, PathBuf::from("/srv/host/input"));
        assert_eq!(cfg.output_dir, PathBuf::from("/srv/host/output"));
        assert_eq!(cfg.temp_dir, PathBuf::from("/srv/host/temp"));
        assert_eq!(cfg.models_dir(), PathBuf::from("/srv/host/input/3d"));
    }

    #[test]
    fn json_fields_are_individually_optional() {
        let cfg = HostConfig::from_json_str(r#"{ "input_dir": "/data/in" }"#).unwrap();
        assert_eq!(cfg.input_dir, PathBuf::from("/data/in"));
        assert_eq!(cfg.output_dir, HostConfig::default().output_dir);
        assert_eq!(cfg.models_subdir, "3d");
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            HostConfig::from_json_str("{ input_dir: 1 }"),
            Err(ConfigError::Parse(_))
        ));
    }
}
