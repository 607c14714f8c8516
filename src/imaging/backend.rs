//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations the generator needs
//! from an image library: identify (the dimension probe) and resize (the
//! scaling pipeline).
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate.

use super::params::ResizeParams;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Pixel size of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Get image dimensions. Fails on unreadable or corrupt files.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Write a resized copy of `params.source` to `params.output`.
    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError>;
}
