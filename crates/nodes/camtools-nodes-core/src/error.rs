use std::io;
use std::path::PathBuf;

use camtools_api_core::BundleError;
use thiserror::Error;

/// Failures raised by host services (path resolution, image decoding).
#[derive(Debug, Error)]
pub enum HostError {
    #[error("cannot resolve asset '{reference}': {reason}")]
    Unresolvable { reference: String, reason: String },
    #[error("image {path} could not be opened: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("image {path} could not be decoded: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Failures that abort a node invocation and surface to the host.
#[derive(Debug, Error)]
pub enum NodeError {
    #[error("node '{node}' is missing required input '{input}'")]
    MissingInput {
        node: &'static str,
        input: &'static str,
    },
    #[error("node '{node}' input '{input}' must be {expected}")]
    InvalidInput {
        node: &'static str,
        input: &'static str,
        expected: &'static str,
    },
    #[error("node '{node}' received an invalid image bundle: {source}")]
    Bundle {
        node: &'static str,
        #[source]
        source: BundleError,
    },
    #[error("node '{node}': {source}")]
    Host {
        node: &'static str,
        #[source]
        source: HostError,
    },
    #[error("cannot prepare model folder {path}: {source}")]
    ModelFolder {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unknown node class '{0}'")]
    UnknownClass(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("host config {path} could not be read: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("host config is invalid: {0}")]
    Parse(#[from] serde_json::Error),
}
