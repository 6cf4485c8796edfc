//! Decoded pixel data handed between nodes.
//! Channels are f32 in [0, 1], stored row-major.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// RGB image, three interleaved channels per pixel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageTensor {
    pub width: u32,
    pub height: u32,
    pub data: Vec<f32>,
}

impl ImageTensor {
    pub const CHANNELS: usize = 3;

    pub fn new(width: u32, height: u32, data: Vec<f32>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * Self::CHANNELS);
        Self {
            width,
            height,
            data,
        }
    }

    /// RGB triple at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[f32; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * Self::CHANNELS;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }
}

/// Single-channel mask.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaskTensor {
    pub width: u32,
    pub height: u32,
    pub data: Vec<f32>,
}

impl MaskTensor {
    pub fn new(width: u32, height: u32, data: Vec<f32>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn zeros(width: u32, height: u32) -> Self {
        Self::new(width, height, vec![0.0; width as usize * height as usize])
    }

    pub fn value(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }
}

/// Recorded viewer clip on disk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoHandle {
    pub path: PathBuf,
}
