use camtools_api_core::PortType;
use serde::Serialize;
use serde_json::json;

use crate::config::HostConfig;
use crate::error::NodeError;
use crate::nodes::model_enumerator::enumerate_models;
use crate::nodes::viewer::ViewerVariant;
use crate::types::NodeType;

/// Either a slot type or, for selectors, the list of allowed values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InputType {
    Port(PortType),
    Options(Vec<String>),
}

#[derive(Debug, Clone, Serialize)]
pub struct InputSpec {
    pub id: &'static str,
    pub ty: InputType,
    pub label: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub doc: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_json: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub multiline: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub file_upload: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PortSpec {
    pub id: &'static str,
    pub ty: PortType,
    pub label: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub doc: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeSignature {
    pub type_id: NodeType,
    pub name: &'static str,
    pub category: &'static str,
    /// Entry point name the host invokes.
    pub function: &'static str,
    pub inputs: Vec<InputSpec>,
    pub optional_inputs: Vec<InputSpec>,
    pub outputs: Vec<PortSpec>,
    /// Publishes to the UI rather than to downstream nodes.
    pub output_node: bool,
    pub experimental: bool,
}

impl NodeSignature {
    pub fn input(&self, id: &str) -> Option<&InputSpec> {
        self.inputs
            .iter()
            .chain(self.optional_inputs.iter())
            .find(|spec| spec.id == id)
    }

    pub fn output_ids(&self) -> Vec<&'static str> {
        self.outputs.iter().map(|p| p.id).collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Registry {
    pub version: &'static str,
    pub nodes: Vec<NodeSignature>,
}

impl Registry {
    pub fn node(&self, ty: NodeType) -> Option<&NodeSignature> {
        self.nodes.iter().find(|n| n.type_id == ty)
    }
}

pub const MAX_DIMENSION: f64 = 4096.0;
pub const DEFAULT_DIMENSION: i64 = 1024;
pub const DEFAULT_CAMERA_PATH: &str = "D:/camera.json";

// Helpers
fn input(id: &'static str, ty: PortType, label: &'static str) -> InputSpec {
    InputSpec {
        id,
        ty: InputType::Port(ty),
        label,
        doc: "",
        default_json: None,
        min: None,
        max: None,
        step: None,
        multiline: false,
        file_upload: false,
    }
}

fn dimension_input(id: &'static str, label: &'static str) -> InputSpec {
    InputSpec {
        default_json: Some(json!(DEFAULT_DIMENSION)),
        min: Some(1.0),
        max: Some(MAX_DIMENSION),
        step: Some(1.0),
        ..input(id, PortType::Int, label)
    }
}

fn model_path_input() -> InputSpec {
    InputSpec {
        default_json: Some(json!("")),
        doc: "Input-relative path of the model to preview.",
        ..input("model_file", PortType::String, "Model File")
    }
}

fn output(id: &'static str, ty: PortType) -> PortSpec {
    PortSpec {
        id,
        ty,
        label: id,
        doc: "",
    }
}

fn camera_loader_signature() -> NodeSignature {
    NodeSignature {
        type_id: NodeType::LoadCameraFromFile,
        name: NodeType::LoadCameraFromFile.display_name(),
        category: "3D Camera",
        function: "load_camera",
        inputs: vec![InputSpec {
            default_json: Some(json!(DEFAULT_CAMERA_PATH)),
            doc: "JSON file with optional position, target and zoom keys.",
            ..input("json_path", PortType::String, "JSON Path")
        }],
        optional_inputs: vec![],
        outputs: vec![PortSpec {
            doc: "Camera record; defaults fill anything the file lacks.",
            ..output("camera_info", PortType::CameraInfo)
        }],
        output_node: false,
        experimental: false,
    }
}

fn viewer_signature(variant: ViewerVariant, models: Vec<String>) -> NodeSignature {
    let ty = variant.node_type();
    NodeSignature {
        type_id: ty,
        name: ty.display_name(),
        category: "3d",
        function: "process",
        inputs: vec![
            InputSpec {
                ty: InputType::Options(models),
                file_upload: true,
                doc: "Model picked from the host's 3D input folder.",
                ..input("model_file", PortType::String, "Model File")
            },
            InputSpec {
                doc: "Render bundle produced by the 3D viewer widget.",
                ..input("image", variant.widget_type(), "Viewer")
            },
            dimension_input("width", "Width"),
            dimension_input("height", "Height"),
        ],
        optional_inputs: vec![],
        outputs: variant
            .outputs()
            .into_iter()
            .map(|(id, ty)| output(id, ty))
            .collect(),
        output_node: false,
        experimental: true,
    }
}

fn preview_signature(ty: NodeType) -> NodeSignature {
    NodeSignature {
        type_id: ty,
        name: ty.display_name(),
        category: "3d",
        function: "process",
        inputs: vec![model_path_input()],
        optional_inputs: vec![input("camera_info", PortType::Load3dCamera, "Camera")],
        outputs: vec![],
        output_node: true,
        experimental: true,
    }
}

/// Signature of one node. Loader signatures list the models currently on disk,
/// creating the models folder if needed.
pub fn signature(ty: NodeType, config: &HostConfig) -> Result<NodeSignature, NodeError> {
    let viewer = |variant: ViewerVariant| -> Result<NodeSignature, NodeError> {
        let models = enumerate_models(
            &config.input_dir,
            &config.models_subdir,
            variant.formats(),
        )?;
        Ok(viewer_signature(variant, models))
    };

    match ty {
        NodeType::LoadCameraFromFile => Ok(camera_loader_signature()),
        NodeType::Load3D => viewer(ViewerVariant::Mesh),
        NodeType::Load3DAnimation => viewer(ViewerVariant::Animation),
        NodeType::Preview3D | NodeType::Preview3DAnimation => Ok(preview_signature(ty)),
    }
}

pub fn registry(config: &HostConfig) -> Result<Registry, NodeError> {
    let nodes = NodeType::ALL
        .into_iter()
        .map(|ty| signature(ty, config))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Registry {
        version: "1.0.0",
        nodes,
    })
}
