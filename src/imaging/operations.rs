//! High-level image operations.
//!
//! These functions combine calculations with backend execution.
//! They take the variant bounds, compute the output size, and call the backend.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::fit_within;
use super::params::{Quality, ResizeParams};
use std::path::Path;
use tracing::debug;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Write a copy of `source` scaled to fit within `bounds` and return the
/// size that was written.
///
/// The returned dimensions are exactly what the backend was asked to
/// produce, so callers can record them without probing the output again.
pub fn scale_photo<B: ImageBackend + ?Sized>(
    backend: &B,
    source: &Path,
    output: &Path,
    bounds: (u32, u32),
    quality: Quality,
) -> Result<Dimensions> {
    let original = backend.identify(source)?;
    let (width, height) = fit_within((original.width, original.height), bounds);

    backend.resize(&ResizeParams {
        source: source.to_path_buf(),
        output: output.to_path_buf(),
        width,
        height,
        quality,
    })?;

    debug!(
        source = %source.display(),
        output = %output.display(),
        width,
        height,
        "scaled"
    );
    Ok(Dimensions::new(width, height))
}

/// Copy `source` to `output` byte for byte.
pub fn copy_full(source: &Path, output: &Path) -> Result<()> {
    std::fs::copy(source, output)?;
    debug!(source = %source.display(), output = %output.display(), "copied");
    Ok(())
}
