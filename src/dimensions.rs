//! Memoized image dimensions for one generation run.
//!
//! Index pages show a thumbnail for every photo and a preview for every
//! sub-album, and each of those needs a width and height. The cache makes
//! sure the probe reads each target image at most once per run.
//!
//! The walker pre-seeds the cache with [`DimensionCache::put`] right after
//! scaling, since it already knows the sizes it asked the backend for.
//! Lookups key on the exact [`TargetPath`], so two variants of the same
//! photo are two entries.
//!
//! A failed probe is not stored. Asking again for the same path probes
//! again.

use crate::imaging::{BackendError, Dimensions, ImageBackend};
use crate::paths::TargetPath;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
#[error("Failed to probe {}: {source}", path.display())]
pub struct ProbeError {
    pub path: PathBuf,
    #[source]
    pub source: BackendError,
}

/// Target path → dimensions, filled lazily through an [`ImageBackend`].
///
/// Entries are never evicted. Construct one per run and drop it when the
/// run ends.
pub struct DimensionCache<'b, B: ImageBackend + ?Sized> {
    backend: &'b B,
    entries: HashMap<TargetPath, Dimensions>,
}

impl<'b, B: ImageBackend + ?Sized> DimensionCache<'b, B> {
    pub fn new(backend: &'b B) -> Self {
        Self {
            backend,
            entries: HashMap::new(),
        }
    }

    /// Dimensions of `target`, probing on the first request only.
    pub fn get(&mut self, target: &TargetPath) -> Result<Dimensions, ProbeError> {
        if let Some(dims) = self.entries.get(target) {
            debug!(path = %target, "dimension cache hit");
            return Ok(*dims);
        }

        debug!(path = %target, "probing dimensions");
        let dims = self
            .backend
            .identify(target.as_path())
            .map_err(|source| ProbeError {
                path: target.as_path().to_path_buf(),
                source,
            })?;
        self.entries.insert(target.clone(), dims);
        Ok(dims)
    }

    /// Record dimensions that are already known. Overwrites an existing entry.
    pub fn put(&mut self, target: TargetPath, dims: Dimensions) {
        self.entries.insert(target, dims);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
