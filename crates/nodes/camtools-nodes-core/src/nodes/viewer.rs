//! Viewer pass-through shared by the mesh and animation loader nodes.
//!
//! The widget renders in the browser and sends an [`ImageBundle`]; this module
//! resolves each referenced file, decodes it through the host, and forwards the
//! model path and camera untouched. If any decode fails, every image slot comes
//! back empty while the model path and camera still go through.

use camtools_api_core::{
    CameraInfo, Diagnostic, ImageBundle, ImageTensor, MaskTensor, PortType, PortValue, Recovered,
    VideoHandle,
};
use log::{debug, error};

use crate::error::HostError;
use crate::host::HostContext;
use crate::types::{NamedPort, NodeType};

use super::model_enumerator::ModelFormats;

/// Which loader node is running. The two differ only in accepted formats,
/// widget type and whether a line-art pass exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerVariant {
    Mesh,
    Animation,
}

impl ViewerVariant {
    pub fn node_type(self) -> NodeType {
        match self {
            ViewerVariant::Mesh => NodeType::Load3D,
            ViewerVariant::Animation => NodeType::Load3DAnimation,
        }
    }

    pub fn formats(self) -> ModelFormats {
        match self {
            ViewerVariant::Mesh => ModelFormats::Mesh,
            ViewerVariant::Animation => ModelFormats::Animated,
        }
    }

    pub fn widget_type(self) -> PortType {
        match self {
            ViewerVariant::Mesh => PortType::Load3dWidget,
            ViewerVariant::Animation => PortType::Load3dAnimationWidget,
        }
    }

    pub fn renders_lineart(self) -> bool {
        matches!(self, ViewerVariant::Mesh)
    }

    /// Output slots in declaration order.
    pub fn outputs(self) -> Vec<(&'static str, PortType)> {
        let mut outputs = vec![
            ("image", PortType::Image),
            ("mask", PortType::Mask),
            ("mesh_path", PortType::String),
            ("normal", PortType::Image),
        ];
        if self.renders_lineart() {
            outputs.push(("lineart", PortType::Image));
        }
        outputs.push(("camera_info", PortType::Load3dCamera));
        outputs.push(("recording_video", PortType::Video));
        outputs
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerOutput {
    pub image: Option<ImageTensor>,
    pub mask: Option<MaskTensor>,
    pub mesh_path: String,
    pub normal: Option<ImageTensor>,
    pub lineart: Option<ImageTensor>,
    pub camera_info: CameraInfo,
    /// Always `None`: recorded clips are not turned into video handles.
    pub recording_video: Option<VideoHandle>,
}

impl ViewerOutput {
    fn empty(mesh_path: String, camera_info: CameraInfo) -> Self {
        Self {
            image: None,
            mask: None,
            mesh_path,
            normal: None,
            lineart: None,
            camera_info,
            recording_video: None,
        }
    }

    /// Slot values for `variant`; the animation variant has no line-art slot.
    pub fn into_ports(self, variant: ViewerVariant) -> Vec<NamedPort> {
        let mut ports = vec![
            NamedPort::new("image", PortValue::Image(self.image)),
            NamedPort::new("mask", PortValue::Mask(self.mask)),
            NamedPort::new("mesh_path", PortValue::Text(self.mesh_path)),
            NamedPort::new("normal", PortValue::Image(self.normal)),
        ];
        if variant.renders_lineart() {
            ports.push(NamedPort::new("lineart", PortValue::Image(self.lineart)));
        }
        ports.push(NamedPort::new(
            "camera_info",
            PortValue::Camera(self.camera_info),
        ));
        ports.push(NamedPort::new(
            "recording_video",
            PortValue::Video(self.recording_video),
        ));
        ports
    }
}

/// Run the viewer pass-through.
///
/// Resolution failures are host failures and abort the call. Decode failures are
/// recovered: the output carries empty image slots and a diagnostic.
pub fn process_viewer(
    variant: ViewerVariant,
    model_file: String,
    bundle: &ImageBundle,
    ctx: &HostContext,
) -> Result<Recovered<ViewerOutput>, HostError> {
    let image_path = ctx.resolve(&bundle.image)?;
    let mask_path = ctx.resolve(&bundle.mask)?;
    let normal_path = ctx.resolve(&bundle.normal)?;
    let lineart_path = match (&bundle.lineart, variant.renders_lineart()) {
        (Some(lineart), true) => Some(ctx.resolve(lineart)?),
        _ => None,
    };

    if let Some(recording) = &bundle.recording {
        debug!("viewer recording {recording} not loaded; recording output is disabled");
    }

    let decoded = (|| -> Result<_, HostError> {
        let image = ctx.load_image(&image_path)?.image;
        let mask = ctx.load_image(&mask_path)?.mask;
        let normal = ctx.load_image(&normal_path)?.image;
        let lineart = match &lineart_path {
            Some(path) => Some(ctx.load_image(path)?.image),
            None => None,
        };
        Ok((image, mask, normal, lineart))
    })();

    match decoded {
        Ok((image, mask, normal, lineart)) => Ok(Recovered::clean(ViewerOutput {
            image: Some(image),
            mask: Some(mask),
            mesh_path: model_file,
            normal: Some(normal),
            lineart,
            camera_info: bundle.camera_info,
            recording_video: None,
        })),
        Err(e) => {
            error!("could not load viewer images: {e}");
            let path = match &e {
                HostError::Io { path, .. } | HostError::Decode { path, .. } => path.clone(),
                HostError::Unresolvable { reference, .. } => reference.into(),
            };
            Ok(Recovered::degraded(
                ViewerOutput::empty(model_file, bundle.camera_info),
                Diagnostic::Unreadable {
                    path,
                    error: e.to_string(),
                },
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_variant_declares_lineart_slot() {
        let names: Vec<_> = ViewerVariant::Mesh
            .outputs()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(
            names,
            [
                "image",
                "mask",
                "mesh_path",
                "normal",
                "lineart",
                "camera_info",
                "recording_video"
            ]
        );
    }

    #[test]
    fn animation_variant_drops_lineart_slot() {
        let outputs = ViewerVariant::Animation.outputs();
        assert_eq!(outputs.len(), 6);
        assert!(outputs.iter().all(|(name, _)| *name != "lineart"));
    }

    #[test]
    fn ports_match_declared_types() {
        for variant in [ViewerVariant::Mesh, ViewerVariant::Animation] {
            let ports = ViewerOutput::empty("3d/a.glb".into(), CameraInfo::default())
                .into_ports(variant);
            let declared = variant.outputs();
            assert_eq!(ports.len(), declared.len());
            for (port, (name, ty)) in ports.iter().zip(declared) {
                assert_eq!(port.name, name);
                assert!(port.value.fits(ty), "{name} does not fit {ty:?}");
            }
        }
    }
}
