//! Camera and 3D viewer nodes for a node-graph media host.
//!
//! Each node is a stateless adapter: the host asks for its [`NodeSignature`] to build
//! a UI, then calls [`process_node`] once per execution with already-validated inputs.

pub mod config;
pub mod error;
pub mod host;
pub mod nodes;
pub mod registration;
pub mod schema;
pub mod types;

pub use config::HostConfig;
pub use error::{ConfigError, HostError, NodeError};
pub use host::{DecodingImageLoader, FolderPaths, HostContext, ImageLoader, LoadedImage, PathResolver};
pub use nodes::camera_loader::load_camera;
pub use nodes::model_enumerator::{enumerate_models, ModelFormats};
pub use nodes::viewer::{process_viewer, ViewerOutput, ViewerVariant};
pub use nodes::{process_class, process_node};
pub use registration::{registration, NodeRegistration};
pub use schema::{registry, signature, NodeSignature, Registry};
pub use types::*;
