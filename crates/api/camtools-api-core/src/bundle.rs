//! The viewer widget's value: references to the images it rendered plus its camera.
//!
//! The widget ships a loosely typed JSON object. [`ImageBundle::from_json`] validates
//! it once, at the point the node receives it, so the rest of the code works with
//! named fields instead of key lookups.

use serde::Deserialize;
use serde_json::{json, Map, Value as JsonValue};
use thiserror::Error;

use crate::{AssetRef, AssetRefError, CameraInfo};

/// Errors produced while validating a widget bundle.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("image bundle must be a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("image bundle is missing '{0}'")]
    MissingKey(&'static str),
    #[error("image bundle key '{key}' must be a string")]
    NotAString { key: &'static str },
    #[error("image bundle key '{key}': {source}")]
    InvalidReference {
        key: &'static str,
        #[source]
        source: AssetRefError,
    },
    #[error("image bundle camera_info: {0}")]
    InvalidCamera(#[source] serde_json::Error),
    #[error("image bundle is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageBundle {
    pub image: AssetRef,
    pub mask: AssetRef,
    pub normal: AssetRef,
    /// Line-art pass; only the mesh viewer renders one.
    pub lineart: Option<AssetRef>,
    /// Viewport recording; empty in the widget means none.
    pub recording: Option<AssetRef>,
    pub camera_info: CameraInfo,
}

impl Default for ImageBundle {
    /// The value the widget sends before it has rendered anything.
    fn default() -> Self {
        Self {
            image: AssetRef::new(None, "default_image.png"),
            mask: AssetRef::new(None, "default_mask.png"),
            normal: AssetRef::new(None, "default_normal.png"),
            lineart: Some(AssetRef::new(None, "default_lineart.png")),
            recording: None,
            camera_info: CameraInfo::default(),
        }
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

fn optional_str<'a>(
    obj: &'a Map<String, JsonValue>,
    key: &'static str,
) -> Result<Option<&'a str>, BundleError> {
    match obj.get(key) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(BundleError::NotAString { key }),
    }
}

fn required_ref(obj: &Map<String, JsonValue>, key: &'static str) -> Result<AssetRef, BundleError> {
    let raw = optional_str(obj, key)?.ok_or(BundleError::MissingKey(key))?;
    AssetRef::parse(raw).map_err(|source| BundleError::InvalidReference { key, source })
}

fn optional_ref(
    obj: &Map<String, JsonValue>,
    key: &'static str,
) -> Result<Option<AssetRef>, BundleError> {
    match optional_str(obj, key)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => AssetRef::parse(raw)
            .map(Some)
            .map_err(|source| BundleError::InvalidReference { key, source }),
    }
}

impl ImageBundle {
    /// Validate a widget value. Unknown keys are ignored.
    pub fn from_json(value: &JsonValue) -> Result<Self, BundleError> {
        let obj = value
            .as_object()
            .ok_or_else(|| BundleError::NotAnObject(json_kind(value)))?;

        let image = required_ref(obj, "image")?;
        let mask = required_ref(obj, "mask")?;
        let normal = required_ref(obj, "normal")?;
        let lineart = optional_ref(obj, "lineart")?;
        let recording = optional_ref(obj, "recording")?;
        let camera_info = match obj.get("camera_info") {
            None | Some(JsonValue::Null) => return Err(BundleError::MissingKey("camera_info")),
            Some(cam) => CameraInfo::deserialize(cam).map_err(BundleError::InvalidCamera)?,
        };

        Ok(ImageBundle {
            image,
            mask,
            normal,
            lineart,
            recording,
            camera_info,
        })
    }

    pub fn from_json_str(s: &str) -> Result<Self, BundleError> {
        let value: JsonValue = serde_json::from_str(s).map_err(BundleError::Parse)?;
        Self::from_json(&value)
    }

    /// Render back into the widget's JSON shape.
    pub fn to_json(&self) -> JsonValue {
        let opt = |r: &Option<AssetRef>| r.as_ref().map(|r| r.to_string()).unwrap_or_default();
        json!({
            "image": self.image.to_string(),
            "mask": self.mask.to_string(),
            "normal": self.normal.to_string(),
            "lineart": opt(&self.lineart),
            "recording": opt(&self.recording),
            "camera_info": self.camera_info,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Folder;

    #[test]
    fn default_round_trips_through_json() {
        let bundle = ImageBundle::default();
        let parsed = ImageBundle::from_json(&bundle.to_json()).unwrap();
        assert_eq!(parsed, bundle);
        assert_eq!(parsed.recording, None);
    }

    #[test]
    fn empty_optional_references_are_absent() {
        let bundle = ImageBundle::from_json(&json!({
            "image": "a.png",
            "mask": "b.png [temp]",
            "normal": "c.png",
            "lineart": "",
            "recording": "   ",
            "camera_info": {}
        }))
        .unwrap();
        assert_eq!(bundle.mask.folder, Some(Folder::Temp));
        assert_eq!(bundle.lineart, None);
        assert_eq!(bundle.recording, None);
        assert_eq!(bundle.camera_info, CameraInfo::default());
    }

    #[test]
    fn rejects_missing_required_keys() {
        let err = ImageBundle::from_json(&json!({
            "image": "a.png",
            "normal": "c.png",
            "camera_info": {}
        }))
        .unwrap_err();
        assert!(matches!(err, BundleError::MissingKey("mask")));

        let err = ImageBundle::from_json(&json!({
            "image": "a.png",
            "mask": "b.png",
            "normal": "c.png"
        }))
        .unwrap_err();
        assert!(matches!(err, BundleError::MissingKey("camera_info")));
    }

    #[test]
    fn rejects_non_object_and_wrong_types() {
        let err = ImageBundle::from_json(&json!(["a.png"])).unwrap_err();
        assert!(matches!(err, BundleError::NotAnObject("an array")));

        let err = ImageBundle::from_json(&json!({
            "image": 3,
            "mask": "b.png",
            "normal": "c.png",
            "camera_info": {}
        }))
        .unwrap_err();
        assert!(matches!(err, BundleError::NotAString { key: "image" }));

        let err = ImageBundle::from_json(&json!({
            "image": "a.png",
            "mask": "b.png",
            "normal": "c.png",
            "camera_info": { "zoom": "far" }
        }))
        .unwrap_err();
        assert!(matches!(err, BundleError::InvalidCamera(_)));
    }

    #[test]
    fn rejects_camera_numbers_beyond_f32() {
        let err = ImageBundle::from_json(&json!({
            "image": "a.png",
            "mask": "b.png",
            "normal": "c.png",
            "camera_info": { "zoom": 1e39 }
        }))
        .unwrap_err();
        assert!(matches!(err, BundleError::InvalidCamera(_)));
    }

    #[test]
    fn rejects_escaping_references() {
        let err = ImageBundle::from_json(&json!({
            "image": "../../etc/shadow",
            "mask": "b.png",
            "normal": "c.png",
            "camera_info": {}
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            BundleError::InvalidReference { key: "image", .. }
        ));
    }
}
