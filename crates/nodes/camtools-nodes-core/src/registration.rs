//! Registration map the host reads when it loads this package.

use camtools_api_core::PortType;
use indexmap::IndexMap;
use serde::Serialize;

use crate::types::NodeType;

/// Folder holding the browser-side widget scripts.
pub const WEB_DIRECTORY: &str = "js";
/// Name of the widget extension that replaces the loaders' `image` input.
pub const VIEWER_EXTENSION: &str = "Comfy.3D.Load3DWidget";

#[derive(Debug, Clone, Serialize)]
pub struct NodeRegistration {
    pub class_mappings: IndexMap<&'static str, NodeType>,
    pub display_names: IndexMap<&'static str, &'static str>,
    pub web_directory: &'static str,
    pub viewer_extension: &'static str,
    /// Widget type swapped in for the `image` input, per class.
    pub viewer_widgets: IndexMap<&'static str, PortType>,
}

type Mappings = (
    IndexMap<&'static str, NodeType>,
    IndexMap<&'static str, &'static str>,
);

fn mappings(types: &[NodeType]) -> Mappings {
    let classes = types.iter().map(|ty| (ty.class_id(), *ty)).collect();
    let names = types
        .iter()
        .map(|ty| (ty.class_id(), ty.display_name()))
        .collect();
    (classes, names)
}

fn camera_mappings() -> Mappings {
    mappings(&[NodeType::LoadCameraFromFile])
}

fn load3d_mappings() -> Mappings {
    mappings(&[
        NodeType::Load3D,
        NodeType::Load3DAnimation,
        NodeType::Preview3D,
        NodeType::Preview3DAnimation,
    ])
}

/// Merge the camera and 3D node groups into one map, camera nodes first.
pub fn registration() -> NodeRegistration {
    let (mut class_mappings, mut display_names) = camera_mappings();
    let (load3d_classes, load3d_names) = load3d_mappings();
    class_mappings.extend(load3d_classes);
    display_names.extend(load3d_names);

    let viewer_widgets = [
        (NodeType::Load3D.class_id(), PortType::Load3dWidget),
        (
            NodeType::Load3DAnimation.class_id(),
            PortType::Load3dAnimationWidget,
        ),
    ]
    .into_iter()
    .collect();

    NodeRegistration {
        class_mappings,
        display_names,
        web_directory: WEB_DIRECTORY,
        viewer_extension: VIEWER_EXTENSION,
        viewer_widgets,
    }
}
