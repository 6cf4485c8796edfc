//! AssetRef parsing and formatting.
//!
//! Grammar (mirrors the host's annotated file names):
//!   name[ \[folder\]]
//! - `name` is a path relative to a host folder, `/` separated
//! - the optional trailing annotation selects the folder: `[input]`, `[output]` or `[temp]`
//!   Examples:
//!   "render.png"              -> folder=None (host default), name="render.png"
//!   "clips/take1.webm [temp]" -> folder=Temp, name="clips/take1.webm"
//!   "out_0001.png [output]"   -> folder=Output, name="out_0001.png"
//!
//! AssetRef only validates the shape of the reference; turning it into a concrete
//! path is the job of the host's resolver.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::{Component, Path};
use std::str::FromStr;
use thiserror::Error;

/// Host folder selected by an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Folder {
    Input,
    Output,
    Temp,
}

impl Folder {
    pub fn annotation(self) -> &'static str {
        match self {
            Folder::Input => "[input]",
            Folder::Output => "[output]",
            Folder::Temp => "[temp]",
        }
    }

    const ALL: [Folder; 3] = [Folder::Input, Folder::Output, Folder::Temp];
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetRefError {
    #[error("empty asset reference")]
    Empty,
    #[error("asset reference '{0}' must be relative")]
    Absolute(String),
    #[error("asset reference '{0}' escapes its folder")]
    EscapesFolder(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetRef {
    /// Folder named by the annotation, `None` when the host default applies.
    pub folder: Option<Folder>,
    /// Folder-relative name with `/` separators.
    pub name: String,
}

impl AssetRef {
    pub fn new(folder: Option<Folder>, name: impl Into<String>) -> Self {
        Self {
            folder,
            name: name.into(),
        }
    }

    /// Parse an annotated reference according to the grammar described above.
    pub fn parse(s: &str) -> Result<Self, AssetRefError> {
        let trimmed = s.trim();
        let (folder, name) = Folder::ALL
            .iter()
            .find_map(|folder| {
                trimmed
                    .strip_suffix(folder.annotation())
                    .map(|rest| (Some(*folder), rest.trim_end()))
            })
            .unwrap_or((None, trimmed));

        if name.is_empty() {
            return Err(AssetRefError::Empty);
        }
        let name = name.replace('\\', "/");
        for component in Path::new(&name).components() {
            match component {
                Component::ParentDir => return Err(AssetRefError::EscapesFolder(name)),
                Component::RootDir | Component::Prefix(_) => {
                    return Err(AssetRefError::Absolute(name))
                }
                Component::CurDir | Component::Normal(_) => {}
            }
        }

        Ok(AssetRef { folder, name })
    }

    /// The folder-relative name as a path.
    pub fn relative_path(&self) -> &Path {
        Path::new(&self.name)
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.folder {
            Some(folder) => write!(f, "{} {}", self.name, folder.annotation()),
            None => f.write_str(&self.name),
        }
    }
}

impl FromStr for AssetRef {
    type Err = AssetRefError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetRef::parse(s)
    }
}

// Serde support: serialize as string, deserialize from string
impl Serialize for AssetRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AssetRef {
    fn deserialize<D>(deserializer: D) -> Result<AssetRef, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AssetRef::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_name() {
        let r = AssetRef::parse("default_image.png").unwrap();
        assert_eq!(r.folder, None);
        assert_eq!(r.name, "default_image.png");
        assert_eq!(r.to_string(), "default_image.png");
    }

    #[test]
    fn parse_annotated_names() {
        let r = AssetRef::parse("out_0001.png [output]").unwrap();
        assert_eq!(r.folder, Some(Folder::Output));
        assert_eq!(r.name, "out_0001.png");
        assert_eq!(r.to_string(), "out_0001.png [output]");

        let r = AssetRef::parse("clips/take1.webm [temp]").unwrap();
        assert_eq!(r.folder, Some(Folder::Temp));
        assert_eq!(r.name, "clips/take1.webm");

        let r = AssetRef::parse("a.png[input]").unwrap();
        assert_eq!(r.folder, Some(Folder::Input));
        assert_eq!(r.name, "a.png");
    }

    #[test]
    fn normalizes_backslashes() {
        let r = AssetRef::parse("renders\\mask.png").unwrap();
        assert_eq!(r.name, "renders/mask.png");
    }

    #[test]
    fn parse_rejects_bad_references() {
        assert_eq!(AssetRef::parse(""), Err(AssetRefError::Empty));
        assert_eq!(AssetRef::parse("  [temp]"), Err(AssetRefError::Empty));
        assert!(matches!(
            AssetRef::parse("../secret.png"),
            Err(AssetRefError::EscapesFolder(_))
        ));
        assert!(matches!(
            AssetRef::parse("/etc/passwd"),
            Err(AssetRefError::Absolute(_))
        ));
    }

    #[test]
    fn serde_uses_annotated_string() {
        let r: AssetRef = serde_json::from_str(r#""mask.png [output]""#).unwrap();
        assert_eq!(r, AssetRef::new(Some(Folder::Output), "mask.png"));
        assert_eq!(
            serde_json::to_string(&r).unwrap(),
            r#""mask.png [output]""#
        );
    }
}
