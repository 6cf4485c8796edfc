//! camtools-api-core: data model shared by the 3D viewer nodes (engine-agnostic)

pub mod asset_ref;
pub mod bundle;
pub mod camera;
pub mod image;
pub mod recovered;
pub mod value;

pub use asset_ref::{AssetRef, AssetRefError, Folder};
pub use bundle::{BundleError, ImageBundle};
pub use camera::CameraInfo;
pub use image::{ImageTensor, MaskTensor, VideoHandle};
pub use recovered::{Diagnostic, Recovered};
pub use value::{PortType, PortValue};
