//! Camera file loader: JSON on disk to a fully populated [`CameraInfo`].
//!
//! Recovery rules:
//! - missing file, unreadable file, invalid JSON or a non-object document: the whole
//!   default record, anything partially read is discarded;
//! - a valid object: each of `position`, `target`, `zoom` comes from the file when present
//!   and well-formed, otherwise from the default. Absent keys are silent, malformed
//!   ones are reported.

use std::fs;
use std::path::Path;

use camtools_api_core::{CameraInfo, Diagnostic, Recovered};
use log::{error, info, warn};
use serde_json::{Map, Value as JsonValue};

/// Load a camera record from `path`. Never fails.
pub fn load_camera(path: &Path) -> Recovered<CameraInfo> {
    if !path.exists() {
        warn!(
            "camera file not found at {}; using default values",
            path.display()
        );
        return Recovered::degraded(
            CameraInfo::default(),
            Diagnostic::NotFound {
                path: path.to_path_buf(),
            },
        );
    }

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            error!(
                "error reading camera file {}: {e}; using default values",
                path.display()
            );
            return Recovered::degraded(
                CameraInfo::default(),
                Diagnostic::Unreadable {
                    path: path.to_path_buf(),
                    error: e.to_string(),
                },
            );
        }
    };

    let parsed = serde_json::from_str::<JsonValue>(&text)
        .map_err(|e| e.to_string())
        .and_then(|doc| match doc {
            JsonValue::Object(obj) => Ok(obj),
            _ => Err("expected a JSON object".to_string()),
        });
    let obj = match parsed {
        Ok(obj) => obj,
        Err(e) => {
            error!(
                "error parsing camera file {}: {e}; using default values",
                path.display()
            );
            return Recovered::degraded(
                CameraInfo::default(),
                Diagnostic::Malformed {
                    path: path.to_path_buf(),
                    error: e,
                },
            );
        }
    };

    let (camera, defaulted) = merge_fields(&obj);
    if defaulted.is_empty() {
        info!("loaded camera data from {}", path.display());
        Recovered::clean(camera)
    } else {
        warn!(
            "camera file {} has malformed fields [{}]; defaulted them",
            path.display(),
            defaulted.join(", ")
        );
        Recovered::degraded(
            camera,
            Diagnostic::FieldsDefaulted {
                path: path.to_path_buf(),
                fields: defaulted,
            },
        )
    }
}

/// Overlay the fields present in `obj` on the default record.
/// Returns the record and the names of fields that were present but malformed.
pub fn merge_fields(obj: &Map<String, JsonValue>) -> (CameraInfo, Vec<String>) {
    let mut camera = CameraInfo::default();
    let mut defaulted = Vec::new();

    for (key, slot) in [
        ("position", &mut camera.position),
        ("target", &mut camera.target),
    ] {
        if let Some(raw) = obj.get(key) {
            match as_vec3(raw) {
                Some(v) => *slot = v,
                None => defaulted.push(key.to_string()),
            }
        }
    }

    if let Some(raw) = obj.get("zoom") {
        match as_f32(raw) {
            Some(z) => camera.zoom = z,
            None => defaulted.push("zoom".to_string()),
        }
    }

    (camera, defaulted)
}

/// A JSON number that survives narrowing to `f32`.
fn as_f32(value: &JsonValue) -> Option<f32> {
    let v = value.as_f64()? as f32;
    v.is_finite().then_some(v)
}

fn as_vec3(value: &JsonValue) -> Option<[f32; 3]> {
    match value.as_array()?.as_slice() {
        [x, y, z] => Some([as_f32(x)?, as_f32(y)?, as_f32(z)?]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: JsonValue) -> Map<String, JsonValue> {
        value.as_object().cloned().expect("object literal")
    }

    #[test]
    fn zoom_only_keeps_default_position_and_target() {
        let (cam, defaulted) = merge_fields(&obj(json!({ "zoom": 2.5 })));
        assert_eq!(cam, CameraInfo::new([0.0, 0.0, -10.0], [0.0, 0.0, 0.0], 2.5));
        assert!(defaulted.is_empty());
    }

    #[test]
    fn malformed_fields_are_defaulted_individually() {
        let (cam, defaulted) = merge_fields(&obj(json!({
            "position": [1, 2],
            "target": [3, 4, 5],
            "zoom": null
        })));
        assert_eq!(cam.position, CameraInfo::default().position);
        assert_eq!(cam.target, [3.0, 4.0, 5.0]);
        assert_eq!(cam.zoom, CameraInfo::default().zoom);
        assert_eq!(defaulted, vec!["position".to_string(), "zoom".to_string()]);
    }

    #[test]
    fn integer_components_are_accepted() {
        let (cam, _) = merge_fields(&obj(json!({ "position": [1, -2, 3], "zoom": 4 })));
        assert_eq!(cam.position, [1.0, -2.0, 3.0]);
        assert_eq!(cam.zoom, 4.0);
    }

    #[test]
    fn out_of_range_numbers_are_malformed() {
        let (cam, defaulted) = merge_fields(&obj(json!({ "zoom": 1e39 })));
        assert_eq!(cam, CameraInfo::default());
        assert_eq!(defaulted, ["zoom"]);

        let (cam, defaulted) = merge_fields(&obj(json!({
            "position": [1e40, 0, 0],
            "target": [0, 2, 0],
            "zoom": 1e39
        })));
        assert_eq!(cam.position, CameraInfo::default().position);
        assert_eq!(cam.target, [0.0, 2.0, 0.0]);
        assert!(cam.zoom.is_finite());
        assert_eq!(defaulted, ["position", "zoom"]);
    }

    #[test]
    fn empty_object_is_the_default() {
        let (cam, defaulted) = merge_fields(&Map::new());
        assert_eq!(cam, CameraInfo::default());
        assert!(defaulted.is_empty());
    }
}
