//! Node implementations and the dispatcher the host calls once per execution.
//!
//! - [`camera_loader`] reads camera JSON with per-field fallbacks.
//! - [`model_enumerator`] lists model files for the loader nodes' selectors.
//! - [`viewer`] is the pass-through behind both 3D loader nodes.
//! - [`preview`] republishes a model path and camera to the UI.
//!
//! Hosts should go through [`process_node`]; it validates inputs and maps the
//! results onto the declared output slots.

pub mod camera_loader;
pub mod model_enumerator;
pub mod preview;
pub mod viewer;

use std::path::Path;

use camtools_api_core::{ImageBundle, PortValue};

use crate::error::NodeError;
use crate::host::HostContext;
use crate::types::{NamedPort, NodeInputs, NodeOutput, NodeType};

use self::viewer::ViewerVariant;


fn required_str<'a>(
    node: NodeType,
    inputs: &'a NodeInputs,
    input: &'static str,
) -> Result<&'a str, NodeError> {
    let value = inputs.get(input).ok_or(NodeError::MissingInput {
        node: node.class_id(),
        input,
    })?;
    value.as_str().ok_or(NodeError::InvalidInput {
        node: node.class_id(),
        input,
        expected: "a string",
    })
}

/// Raw value of an optional input; explicit `null` counts as absent.
fn optional_raw(inputs: &NodeInputs, input: &'static str) -> Option<serde_json::Value> {
    match inputs.get(input) {
        None | Some(serde_json::Value::Null) => None,
        Some(raw) => Some(raw.clone()),
    }
}

fn run_viewer(
    variant: ViewerVariant,
    inputs: &NodeInputs,
    ctx: &HostContext,
) -> Result<NodeOutput, NodeError> {
    let node = variant.node_type();
    let model_file = required_str(node, inputs, "model_file")?.to_string();
    let raw_bundle = inputs.get("image").ok_or(NodeError::MissingInput {
        node: node.class_id(),
        input: "image",
    })?;
    let bundle = ImageBundle::from_json(raw_bundle).map_err(|source| NodeError::Bundle {
        node: node.class_id(),
        source,
    })?;

    let output = viewer::process_viewer(variant, model_file, &bundle, ctx).map_err(|source| {
        NodeError::Host {
            node: node.class_id(),
            source,
        }
    })?;
    Ok(NodeOutput::Ports(output.into_value().into_ports(variant)))
}

/// Run one node. Input names are those declared by the node's signature;
/// undeclared or ignored inputs such as `width`/`height` are accepted.
pub fn process_node(
    node: NodeType,
    inputs: &NodeInputs,
    ctx: &HostContext,
) -> Result<NodeOutput, NodeError> {
    match node {
        NodeType::LoadCameraFromFile => {
            let json_path = required_str(node, inputs, "json_path")?;
            let camera = camera_loader::load_camera(Path::new(json_path));
            Ok(NodeOutput::Ports(vec![NamedPort::new(
                "camera_info",
                PortValue::Camera(camera.into_value()),
            )]))
        }
        NodeType::Load3D => run_viewer(ViewerVariant::Mesh, inputs, ctx),
        NodeType::Load3DAnimation => run_viewer(ViewerVariant::Animation, inputs, ctx),
        NodeType::Preview3D | NodeType::Preview3DAnimation => {
            let model_file = required_str(node, inputs, "model_file")?.to_string();
            let camera_info = optional_raw(inputs, "camera_info");
            Ok(NodeOutput::Ui(preview::preview(model_file, camera_info)))
        }
    }
}

/// [`process_node`] addressed by the host's class identifier.
pub fn process_class(
    class_id: &str,
    inputs: &NodeInputs,
    ctx: &HostContext,
) -> Result<NodeOutput, NodeError> {
    let node =
        NodeType::from_class_id(class_id).ok_or_else(|| NodeError::UnknownClass(class_id.into()))?;
    process_node(node, inputs, ctx)
}
