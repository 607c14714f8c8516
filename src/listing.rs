//! Directory listing: the immediate children of a source directory, split
//! into sub-albums and photos.
//!
//! Both lists are sorted by file name in byte order, independent of locale
//! and of the order the filesystem returns entries in. Navigation between
//! neighbouring photos depends on this order being the same on every call.
//!
//! Files whose name starts with the hidden marker are left out of the
//! photos. Sub-directories are listed whatever their name.

use crate::paths::SourcePath;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ListError {
    #[error("Cannot list {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// The children of one source directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub subdirs: Vec<SourcePath>,
    pub photos: Vec<SourcePath>,
}

/// List the children of `dir`.
///
/// Symlinks are followed; a link whose target is missing is skipped with a
/// warning. Entries that are neither directories nor regular files are
/// ignored. Any other read error fails the whole listing.
pub fn list(dir: &SourcePath, hidden_marker: &str) -> Result<Listing, ListError> {
    let mut listing = Listing::default();

    let walker = WalkDir::new(dir.as_path())
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_broken_link(&err) => {
                warn!(path = ?err.path(), "skipping broken symlink");
                continue;
            }
            Err(source) => {
                return Err(ListError::Unreadable {
                    path: dir.as_path().to_path_buf(),
                    source,
                });
            }
        };
        let file_type = entry.file_type();

        if file_type.is_dir() {
            listing.subdirs.push(dir.child(entry.file_name()));
        } else if file_type.is_file() {
            let hidden = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with(hidden_marker));
            if !hidden {
                listing.photos.push(dir.child(entry.file_name()));
            }
        }
    }

    Ok(listing)
}

/// A child that is itself a symlink but could not be followed.
fn is_broken_link(err: &walkdir::Error) -> bool {
    err.depth() > 0
        && err
            .path()
            .and_then(|p| p.symlink_metadata().ok())
            .is_some_and(|m| m.file_type().is_symlink())
}
