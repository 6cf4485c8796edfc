//! PortValue: what a node hands back to the host on one output slot.

use serde::{Deserialize, Serialize};

use crate::{CameraInfo, ImageTensor, MaskTensor, VideoHandle};

/// Host-visible slot types. The serialized names are the identifiers the host
/// uses to match outputs to inputs, so they must not change.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortType {
    #[serde(rename = "IMAGE")]
    Image,
    #[serde(rename = "MASK")]
    Mask,
    #[serde(rename = "STRING")]
    String,
    #[serde(rename = "INT")]
    Int,
    /// Camera record produced by the file loader.
    #[serde(rename = "CAMERA_INFO")]
    CameraInfo,
    /// Camera record produced by the viewer widget.
    #[serde(rename = "LOAD3D_CAMERA")]
    Load3dCamera,
    #[serde(rename = "VIDEO")]
    Video,
    /// Viewer widget for mesh models.
    #[serde(rename = "LOAD_3D")]
    Load3dWidget,
    /// Viewer widget for animated models.
    #[serde(rename = "LOAD_3D_ANIMATION")]
    Load3dAnimationWidget,
}

impl PortType {
    pub fn as_str(self) -> &'static str {
        match self {
            PortType::Image => "IMAGE",
            PortType::Mask => "MASK",
            PortType::String => "STRING",
            PortType::Int => "INT",
            PortType::CameraInfo => "CAMERA_INFO",
            PortType::Load3dCamera => "LOAD3D_CAMERA",
            PortType::Video => "VIDEO",
            PortType::Load3dWidget => "LOAD_3D",
            PortType::Load3dAnimationWidget => "LOAD_3D_ANIMATION",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum PortValue {
    /// Decoded image, `None` when decoding failed.
    Image(Option<ImageTensor>),

    /// Decoded mask, `None` when decoding failed.
    Mask(Option<MaskTensor>),

    /// Plain string (model paths).
    Text(String),

    /// Camera record, always populated.
    Camera(CameraInfo),

    /// Recorded clip, `None` when nothing was recorded.
    Video(Option<VideoHandle>),
}

impl PortValue {
    /// True when the slot carries no payload.
    pub fn is_null(&self) -> bool {
        match self {
            PortValue::Image(v) => v.is_none(),
            PortValue::Mask(v) => v.is_none(),
            PortValue::Video(v) => v.is_none(),
            PortValue::Text(_) | PortValue::Camera(_) => false,
        }
    }

    /// Whether this value can travel on a slot of type `ty`.
    pub fn fits(&self, ty: PortType) -> bool {
        matches!(
            (self, ty),
            (PortValue::Image(_), PortType::Image)
                | (PortValue::Mask(_), PortType::Mask)
                | (PortValue::Text(_), PortType::String)
                | (PortValue::Camera(_), PortType::CameraInfo)
                | (PortValue::Camera(_), PortType::Load3dCamera)
                | (PortValue::Video(_), PortType::Video)
        )
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PortValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_camera(&self) -> Option<&CameraInfo> {
        match self {
            PortValue::Camera(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageTensor> {
        match self {
            PortValue::Image(Some(img)) => Some(img),
            _ => None,
        }
    }

    pub fn as_mask(&self) -> Option<&MaskTensor> {
        match self {
            PortValue::Mask(Some(mask)) => Some(mask),
            _ => None,
        }
    }
}
