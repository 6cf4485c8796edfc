use serde_json::Value as JsonValue;

use crate::types::UiResult;

/// Republish the model path and camera to the host UI unchanged.
/// The camera is not validated; whatever the host sent is sent back.
pub fn preview(model_file: String, camera_info: Option<JsonValue>) -> UiResult {
    UiResult::new(model_file, camera_info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn publishes_path_and_camera() {
        let cam = json!({ "position": [0.0, 0.0, -10.0], "target": [0.0, 0.0, 0.0], "zoom": 3.0 });
        let ui = preview("3d/scene.glb".into(), Some(cam.clone()));
        assert_eq!(ui.model_file(), "3d/scene.glb");
        assert_eq!(ui.camera_info(), Some(&cam));
        assert_eq!(
            serde_json::to_value(&ui).unwrap(),
            json!({ "ui": { "result": ["3d/scene.glb", cam] } })
        );
    }

    #[test]
    fn partial_camera_is_not_completed() {
        let ui = preview("a.glb".into(), Some(json!({ "zoom": 0.5 })));
        assert_eq!(
            serde_json::to_string(&ui).unwrap(),
            r#"{"ui":{"result":["a.glb",{"zoom":0.5}]}}"#
        );
    }

    #[test]
    fn missing_camera_is_null() {
        let ui = preview(String::new(), None);
        assert_eq!(
            serde_json::to_value(&ui).unwrap(),
            json!({ "ui": { "result": ["", null] } })
        );
    }
}
