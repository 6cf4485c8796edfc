use camtools_api_core::PortValue;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Every node class this crate registers with the host.
/// The serialized names are the host's class identifiers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum NodeType {
    #[serde(rename = "LoadCameraFromFile")]
    LoadCameraFromFile,
    #[serde(rename = "Load3D_Adv")]
    Load3D,
    #[serde(rename = "Load3DAnimation_Adv")]
    Load3DAnimation,
    #[serde(rename = "Preview3D_Adv")]
    Preview3D,
    #[serde(rename = "Preview3D_AdvAnimation_Adv")]
    Preview3DAnimation,
}

impl NodeType {
    pub const ALL: [NodeType; 5] = [
        NodeType::LoadCameraFromFile,
        NodeType::Load3D,
        NodeType::Load3DAnimation,
        NodeType::Preview3D,
        NodeType::Preview3DAnimation,
    ];

    pub fn class_id(self) -> &'static str {
        match self {
            NodeType::LoadCameraFromFile => "LoadCameraFromFile",
            NodeType::Load3D => "Load3D_Adv",
            NodeType::Load3DAnimation => "Load3DAnimation_Adv",
            NodeType::Preview3D => "Preview3D_Adv",
            NodeType::Preview3DAnimation => "Preview3D_AdvAnimation_Adv",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            NodeType::LoadCameraFromFile => "Load Camera From File",
            NodeType::Load3D => "Load 3D",
            NodeType::Load3DAnimation => "Load 3D - Animation",
            NodeType::Preview3D => "Preview 3D",
            NodeType::Preview3DAnimation => "Preview 3D - Animation",
        }
    }

    pub fn from_class_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.class_id() == id)
    }
}

/// Input values for one invocation, keyed by input name, as the host sends them.
pub type NodeInputs = HashMap<String, serde_json::Value>;

/// One filled output slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedPort {
    pub name: &'static str,
    pub value: PortValue,
}

impl NamedPort {
    pub fn new(name: &'static str, value: PortValue) -> Self {
        Self { name, value }
    }
}

/// Data published to the host UI instead of pipeline outputs.
/// Serializes as `{"ui": {"result": [model_file, camera_info]}}`, the camera
/// exactly as it was received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiResult {
    pub ui: UiPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiPayload {
    pub result: (String, Option<serde_json::Value>),
}

impl UiResult {
    pub fn new(model_file: String, camera_info: Option<serde_json::Value>) -> Self {
        Self {
            ui: UiPayload {
                result: (model_file, camera_info),
            },
        }
    }

    pub fn model_file(&self) -> &str {
        &self.ui.result.0
    }

    pub fn camera_info(&self) -> Option<&serde_json::Value> {
        self.ui.result.1.as_ref()
    }
}

/// What a node hands back to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeOutput {
    /// Output slots in declaration order.
    Ports(Vec<NamedPort>),
    Ui(UiResult),
}

impl NodeOutput {
    pub fn port(&self, name: &str) -> Option<&PortValue> {
        match self {
            NodeOutput::Ports(ports) => ports.iter().find(|p| p.name == name).map(|p| &p.value),
            NodeOutput::Ui(_) => None,
        }
    }

    pub fn ports(&self) -> &[NamedPort] {
        match self {
            NodeOutput::Ports(ports) => ports,
            NodeOutput::Ui(_) => &[],
        }
    }

    pub fn ui(&self) -> Option<&UiResult> {
        match self {
            NodeOutput::Ui(ui) => Some(ui),
            NodeOutput::Ports(_) => None,
        }
    }

    /// Host-facing JSON: an array of slot values, or the UI object.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            NodeOutput::Ports(ports) => serde_json::Value::Array(
                ports
                    .iter()
                    .map(|p| serde_json::to_value(&p.value).unwrap_or(serde_json::Value::Null))
                    .collect(),
            ),
            NodeOutput::Ui(ui) => serde_json::to_value(ui).unwrap_or(serde_json::Value::Null),
        }
    }
}
