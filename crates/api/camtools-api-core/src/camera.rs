//! Camera record shared by the file loader, the viewer widget and the preview nodes.

use serde::{de, Deserialize, Deserializer, Serialize};

pub const DEFAULT_POSITION: [f32; 3] = [0.0, 0.0, -10.0];
pub const DEFAULT_TARGET: [f32; 3] = [0.0, 0.0, 0.0];
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Camera placement: where it sits, what it looks at and how far it is zoomed.
///
/// Every field is always populated. When deserialised, a missing field takes its
/// default on its own; the other fields keep whatever the source provided. Numbers
/// that do not fit in an `f32` are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraInfo {
    #[serde(default = "default_position", deserialize_with = "finite_vec3")]
    pub position: [f32; 3],
    #[serde(default = "default_target", deserialize_with = "finite_vec3")]
    pub target: [f32; 3],
    #[serde(default = "default_zoom", deserialize_with = "finite_scalar")]
    pub zoom: f32,
}

fn default_position() -> [f32; 3] {
    DEFAULT_POSITION
}

fn default_target() -> [f32; 3] {
    DEFAULT_TARGET
}

fn default_zoom() -> f32 {
    DEFAULT_ZOOM
}

fn finite_scalar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
    let v = f32::deserialize(deserializer)?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(de::Error::custom(format!("camera value {v} is out of range")))
    }
}

fn finite_vec3<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[f32; 3], D::Error> {
    let v = <[f32; 3]>::deserialize(deserializer)?;
    match v.iter().find(|c| !c.is_finite()) {
        Some(c) => Err(de::Error::custom(format!("camera value {c} is out of range"))),
        None => Ok(v),
    }
}

impl Default for CameraInfo {
    fn default() -> Self {
        Self {
            position: DEFAULT_POSITION,
            target: DEFAULT_TARGET,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl CameraInfo {
    pub fn new(position: [f32; 3], target: [f32; 3], zoom: f32) -> Self {
        Self {
            position,
            target,
            zoom,
        }
    }

    pub fn with_position(mut self, position: [f32; 3]) -> Self {
        self.position = position;
        self
    }

    pub fn with_target(mut self, target: [f32; 3]) -> Self {
        self.target = target;
        self
    }

    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }
}
