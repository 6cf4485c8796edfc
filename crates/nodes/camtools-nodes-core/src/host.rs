//! Services the host lends to nodes: turning asset references into paths and
//! decoding images. Both sit behind traits so a host can substitute its own.

use std::fmt;
use std::path::{Path, PathBuf};

use camtools_api_core::{AssetRef, Folder, ImageTensor, MaskTensor};
use image::{DynamicImage, GenericImageView};

use crate::config::HostConfig;
use crate::error::HostError;

/// Side length of the empty mask returned for images without alpha.
pub const EMPTY_MASK_SIZE: u32 = 64;

pub trait PathResolver: Send + Sync {
    /// Concrete location of `asset`. Failures propagate to the host unchanged.
    fn resolve(&self, asset: &AssetRef) -> Result<PathBuf, HostError>;
}

/// Decoded image plus the mask derived from it.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedImage {
    pub image: ImageTensor,
    pub mask: MaskTensor,
}

pub trait ImageLoader: Send + Sync {
    fn load_image(&self, path: &Path) -> Result<LoadedImage, HostError>;
}

/// Resolves references against the folders of a [`HostConfig`].
/// Unannotated references land in the input folder.
#[derive(Clone, Debug)]
pub struct FolderPaths {
    config: HostConfig,
}

impl FolderPaths {
    pub fn new(config: HostConfig) -> Self {
        Self { config }
    }

    pub fn folder_dir(&self, folder: Folder) -> &Path {
        match folder {
            Folder::Input => &self.config.input_dir,
            Folder::Output => &self.config.output_dir,
            Folder::Temp => &self.config.temp_dir,
        }
    }
}

impl PathResolver for FolderPaths {
    fn resolve(&self, asset: &AssetRef) -> Result<PathBuf, HostError> {
        let base = self.folder_dir(asset.folder.unwrap_or(Folder::Input));
        Ok(base.join(asset.relative_path()))
    }
}

/// Decodes files with the `image` crate.
///
/// The image is converted to RGB. The mask is `1 - alpha` when the file carries
/// alpha, otherwise an all-zero [`EMPTY_MASK_SIZE`] square.
#[derive(Clone, Copy, Debug, Default)]
pub struct DecodingImageLoader;

impl DecodingImageLoader {
    pub fn decode(img: &DynamicImage) -> LoadedImage {
        let (width, height) = img.dimensions();
        let rgb = img.to_rgb8();
        let data = rgb.as_raw().iter().map(|&c| c as f32 / 255.0).collect();
        let image = ImageTensor::new(width, height, data);

        let mask = if img.color().has_alpha() {
            let rgba = img.to_rgba8();
            let data = rgba
                .pixels()
                .map(|p| 1.0 - p.0[3] as f32 / 255.0)
                .collect();
            MaskTensor::new(width, height, data)
        } else {
            MaskTensor::zeros(EMPTY_MASK_SIZE, EMPTY_MASK_SIZE)
        };

        LoadedImage { image, mask }
    }
}

impl ImageLoader for DecodingImageLoader {
    fn load_image(&self, path: &Path) -> Result<LoadedImage, HostError> {
        let io_err = |source| HostError::Io {
            path: path.to_path_buf(),
            source,
        };
        let reader = image::io::Reader::open(path)
            .map_err(io_err)?
            .with_guessed_format()
            .map_err(io_err)?;
        let decoded = reader.decode().map_err(|source| HostError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::decode(&decoded))
    }
}

/// Everything a node may ask of the host during one invocation.
pub struct HostContext {
    pub config: HostConfig,
    resolver: Box<dyn PathResolver>,
    loader: Box<dyn ImageLoader>,
}

impl HostContext {
    /// Folder-based resolution and `image` decoding over `config`.
    pub fn new(config: HostConfig) -> Self {
        Self {
            resolver: Box::new(FolderPaths::new(config.clone())),
            loader: Box::new(DecodingImageLoader),
            config,
        }
    }

    pub fn with_resolver(mut self, resolver: impl PathResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub fn with_loader(mut self, loader: impl ImageLoader + 'static) -> Self {
        self.loader = Box::new(loader);
        self
    }

    pub fn resolve(&self, asset: &AssetRef) -> Result<PathBuf, HostError> {
        self.resolver.resolve(asset)
    }

    pub fn load_image(&self, path: &Path) -> Result<LoadedImage, HostError> {
        self.loader.load_image(path)
    }
}

impl fmt::Debug for HostContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
