//! Mapping between the source photo tree and the generated target tree.
//!
//! The target tree mirrors the source tree, with two differences: every
//! segment is passed through [`naming::target_segment`], and every photo
//! becomes a directory of its own.
//!
//! ```text
//! source/                         target/
//! ├── 01_Trip2024/                ├── index.html
//! │   ├── .preview.jpeg           ├── carousel.css
//! │   ├── a.jpg                   └── Trip2024/
//! │   └── b.jpg                       ├── index.html
//! └── ...                             ├── .preview.jpeg
//!                                     ├── a/
//!                                     │   ├── index.html
//!                                     │   ├── a.jpg          (full)
//!                                     │   ├── a_view.jpg     (view)
//!                                     │   └── a_thumb.jpg    (thumbnail)
//!                                     └── b/
//!                                         └── ...
//! ```
//!
//! [`SourcePath`] and [`TargetPath`] are distinct types so a location in
//! one tree can never be used where the other is expected. Everything in
//! this module is pure path arithmetic; nothing touches the filesystem.
//!
//! Links embedded in pages come from [`PathMapper::relativize`], which always
//! produces forward-slash paths relative to the linking page's directory.

use crate::config::{SiteConfig, VariantsConfig};
use crate::naming;
use serde::Serialize;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// File name of every generated page.
pub const PAGE_FILENAME: &str = "index.html";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("Invalid path {}: {reason}", path.display())]
    InvalidPath { path: PathBuf, reason: &'static str },
    #[error("{} collides with {}: both map to {}", path.display(), other.display(), target.display())]
    Collision {
        path: PathBuf,
        other: PathBuf,
        target: PathBuf,
    },
}

fn invalid(path: &Path, reason: &'static str) -> PathError {
    PathError::InvalidPath {
        path: path.to_path_buf(),
        reason,
    }
}

/// A photo or directory in the source tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourcePath(PathBuf);

impl SourcePath {
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Final segment, if it is valid UTF-8.
    pub fn file_name(&self) -> Option<&str> {
        self.0.file_name().and_then(|n| n.to_str())
    }

    /// A direct child of this location. Only the lister creates these, from
    /// names it read out of this directory.
    pub(crate) fn child(&self, name: &std::ffi::OsStr) -> SourcePath {
        SourcePath(self.0.join(name))
    }
}

impl fmt::Display for SourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// A generated artifact or directory in the target tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TargetPath(PathBuf);

impl TargetPath {
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn join(&self, name: &str) -> TargetPath {
        TargetPath(self.0.join(name))
    }

    pub fn parent(&self) -> Option<TargetPath> {
        self.0.parent().map(|p| TargetPath(p.to_path_buf()))
    }
}

impl fmt::Display for TargetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Which scaled artifact of a source location is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeVariant {
    /// Grid thumbnail of a photo.
    Thumbnail,
    /// The framed photo on a photo page.
    View,
    /// Unscaled copy of a photo.
    Full,
    /// Preview of a directory. The source location is the directory itself.
    Preview,
}

impl SizeVariant {
    pub const PHOTO_VARIANTS: [SizeVariant; 3] =
        [SizeVariant::Thumbnail, SizeVariant::View, SizeVariant::Full];
}

impl fmt::Display for SizeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SizeVariant::Thumbnail => "thumbnail",
            SizeVariant::View => "view",
            SizeVariant::Full => "full",
            SizeVariant::Preview => "preview",
        };
        f.write_str(name)
    }
}

/// Translates source locations into target locations and display names.
#[derive(Debug, Clone)]
pub struct PathMapper {
    source_root: PathBuf,
    target_root: PathBuf,
    gallery_name: String,
    variants: VariantsConfig,
}

impl PathMapper {
    pub fn new(
        config: &SiteConfig,
        source_root: impl Into<PathBuf>,
        target_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source_root: source_root.into(),
            target_root: target_root.into(),
            gallery_name: config.gallery_name.clone(),
            variants: config.variants.clone(),
        }
    }

    pub fn gallery_name(&self) -> &str {
        &self.gallery_name
    }

    pub fn source_root(&self) -> SourcePath {
        SourcePath(self.source_root.clone())
    }

    pub fn target_root(&self) -> TargetPath {
        TargetPath(self.target_root.clone())
    }

    /// Validate a path as a location inside the source tree.
    ///
    /// Relative paths are taken relative to the source root.
    pub fn source(&self, path: impl AsRef<Path>) -> Result<SourcePath, PathError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(invalid(path, "empty path"));
        }
        let full = if path.is_absolute() || path.starts_with(&self.source_root) {
            path.to_path_buf()
        } else {
            self.source_root.join(path)
        };
        let located = SourcePath(full);
        self.source_segments(&located)?;
        Ok(located)
    }

    /// Target directory of a source directory.
    pub fn to_dir_location(&self, dir: &SourcePath) -> Result<TargetPath, PathError> {
        let segments = self.source_segments(dir)?;
        Ok(self.target_from_segments(segments))
    }

    /// Index page of a source directory.
    pub fn to_dir_page(&self, dir: &SourcePath) -> Result<TargetPath, PathError> {
        Ok(self.to_dir_location(dir)?.join(PAGE_FILENAME))
    }

    /// Directory holding a photo's page and artifacts: `<mapped parent>/<stem>`.
    pub fn to_photo_dir(&self, photo: &SourcePath) -> Result<TargetPath, PathError> {
        let mut segments = self.source_segments(photo)?;
        let Some(last) = segments.pop() else {
            return Err(invalid(photo.as_path(), "the source root is not a photo"));
        };
        let stem = Path::new(last)
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| invalid(photo.as_path(), "photo has no file stem"))?;
        segments.push(stem);
        Ok(self.target_from_segments(segments))
    }

    /// The page generated for a photo.
    pub fn to_page_location(&self, photo: &SourcePath) -> Result<TargetPath, PathError> {
        Ok(self.to_photo_dir(photo)?.join(PAGE_FILENAME))
    }

    /// Where the scaled artifact of `source` for `variant` lives.
    ///
    /// Photo variants are named `<artifact name><suffix>.<source ext>` inside
    /// the photo directory. [`SizeVariant::Preview`] treats `source` as a
    /// directory and names its preview inside the target directory.
    pub fn to_scaled_path(
        &self,
        source: &SourcePath,
        variant: SizeVariant,
    ) -> Result<TargetPath, PathError> {
        let suffix = match variant {
            SizeVariant::Preview => {
                let dir = self.to_dir_location(source)?;
                return Ok(dir.join(&self.variants.preview.file_name));
            }
            SizeVariant::Thumbnail => &self.variants.thumbnail.suffix,
            SizeVariant::View => &self.variants.view.suffix,
            SizeVariant::Full => &self.variants.full.suffix,
        };

        let photo_dir = self.to_photo_dir(source)?;
        let name = naming::artifact_name(&self.target_segments(&photo_dir)?);
        let file_name = match source.as_path().extension() {
            Some(ext) => {
                let ext = ext
                    .to_str()
                    .ok_or_else(|| invalid(source.as_path(), "extension is not valid UTF-8"))?;
                format!("{name}{suffix}.{}", ext.to_lowercase())
            }
            None => format!("{name}{suffix}"),
        };
        Ok(photo_dir.join(&file_name))
    }

    /// Relative link from the directory containing `from` to `to`.
    ///
    /// Segments are always joined with `/`. Linking to the containing
    /// directory itself yields the empty string.
    pub fn relativize(&self, from: &TargetPath, to: &TargetPath) -> Result<String, PathError> {
        let from_dir = from
            .parent()
            .ok_or_else(|| invalid(from.as_path(), "page has no containing directory"))?;
        let from_segments = self.target_segments(&from_dir)?;
        let to_segments = self.target_segments(to)?;

        let common = from_segments
            .iter()
            .zip(&to_segments)
            .take_while(|(a, b)| a == b)
            .count();

        let mut parts: Vec<&str> = vec![".."; from_segments.len() - common];
        parts.extend(to_segments[common..].iter().map(String::as_str));
        Ok(parts.join("/"))
    }

    /// Link from `from`'s directory to the directory `to`, with a trailing
    /// slash so browsers resolve the directory's index page.
    pub fn relativize_dir(&self, from: &TargetPath, to: &TargetPath) -> Result<String, PathError> {
        let rel = self.relativize(from, to)?;
        Ok(if rel.is_empty() {
            "./".to_string()
        } else {
            format!("{rel}/")
        })
    }

    /// Prefix that leads from a page's directory back to the target root:
    /// empty at the root, otherwise `../` once per level.
    pub fn browse_prefix(&self, page: &TargetPath) -> Result<String, PathError> {
        let up = self.relativize(page, &self.target_root())?;
        Ok(if up.is_empty() { up } else { format!("{up}/") })
    }

    /// Segments of a target location below the target root.
    pub fn target_segments(&self, target: &TargetPath) -> Result<Vec<String>, PathError> {
        let rel = target
            .as_path()
            .strip_prefix(&self.target_root)
            .map_err(|_| invalid(target.as_path(), "outside the target tree"))?;
        normal_segments(target.as_path(), rel)
            .map(|segments| segments.into_iter().map(str::to_string).collect())
    }

    pub fn title(&self, segment: &str) -> String {
        naming::title(segment, &self.gallery_name)
    }

    pub fn caption(&self, segment: &str) -> String {
        naming::caption(segment, &self.gallery_name)
    }

    fn source_segments<'a>(&self, source: &'a SourcePath) -> Result<Vec<&'a str>, PathError> {
        let rel = source
            .as_path()
            .strip_prefix(&self.source_root)
            .map_err(|_| invalid(source.as_path(), "outside the source tree"))?;
        normal_segments(source.as_path(), rel)
    }

    fn target_from_segments(&self, segments: Vec<&str>) -> TargetPath {
        let mut target = self.target_root.clone();
        for segment in segments {
            target.push(naming::target_segment(segment));
        }
        TargetPath(target)
    }
}

/// Split a tree-relative path into plain UTF-8 segments.
fn normal_segments<'a>(full: &Path, rel: &'a Path) -> Result<Vec<&'a str>, PathError> {
    rel.components()
        .map(|component| match component {
            Component::Normal(segment) => segment
                .to_str()
                .ok_or_else(|| invalid(full, "segment is not valid UTF-8")),
            Component::CurDir => Err(invalid(full, "contains a `.` segment")),
            Component::ParentDir => Err(invalid(full, "contains a `..` segment")),
            Component::RootDir | Component::Prefix(_) => {
                Err(invalid(full, "root inside a tree-relative path"))
            }
        })
        .collect()
}
