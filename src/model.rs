//! Page models: everything a template needs to render one page.
//!
//! There are two kinds of page. A [`PhotoPageModel`] shows one photo with
//! links to its neighbours. An [`IndexPageModel`] shows a directory: its
//! sub-albums with their previews, then its photos as thumbnails.
//!
//! Every link in a model is relative to the directory of the page it will
//! be written to, so the generated site works wherever it is mounted.
//! Pixel sizes come from the [`DimensionCache`]; a missing size fails the
//! page instead of defaulting.
//!
//! Building a model has no side effects beyond filling the cache. Building
//! the same page twice gives equal models.

use crate::breadcrumbs::{self, Breadcrumb};
use crate::dimensions::{DimensionCache, ProbeError};
use crate::imaging::ImageBackend;
use crate::listing::{self, ListError};
use crate::paths::{PathError, PathMapper, SizeVariant, SourcePath, TargetPath};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error(transparent)]
    InvalidPath(#[from] PathError),
    #[error(transparent)]
    Probe(#[from] ProbeError),
    #[error(transparent)]
    Listing(#[from] ListError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhotoPageModel {
    pub page_title: String,
    pub browse_prefix: String,
    pub gallery_title: String,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub final_crumb: String,
    /// Link to the previous photo's page directory, absent on the first photo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    pub full_photo_url: String,
    pub framed_photo_url: String,
    pub caption: String,
    /// Size of the framed (view) image.
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexPageModel {
    pub gallery_title: String,
    pub browse_prefix: String,
    pub this_dir: String,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub final_crumb: String,
    pub sub_dirs: Vec<SubDirEntry>,
    pub images: Vec<ImageEntry>,
}

/// A sub-album on an index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubDirEntry {
    /// Link to the sub-album's directory.
    pub dir: String,
    pub name: String,
    /// Link to the sub-album's preview image.
    pub preview: String,
    pub width: u32,
    pub height: u32,
}

/// A photo thumbnail on an index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageEntry {
    pub page_url: String,
    pub thumb_url: String,
    pub caption: String,
    pub width: u32,
    pub height: u32,
}

/// Builds page models from source locations.
#[derive(Debug, Clone, Copy)]
pub struct Assembler<'a> {
    mapper: &'a PathMapper,
    hidden_marker: &'a str,
}

impl<'a> Assembler<'a> {
    pub fn new(mapper: &'a PathMapper, hidden_marker: &'a str) -> Self {
        Self {
            mapper,
            hidden_marker,
        }
    }

    /// Model for the page of `photo`.
    ///
    /// `prev` and `next` are the photo's neighbours in its directory's
    /// listing. The caller decides them; nothing here re-derives the order.
    pub fn photo_page<B: ImageBackend + ?Sized>(
        &self,
        cache: &mut DimensionCache<'_, B>,
        photo: &SourcePath,
        prev: Option<&SourcePath>,
        next: Option<&SourcePath>,
    ) -> Result<PhotoPageModel, ModelError> {
        let mapper = self.mapper;
        let photo_dir = mapper.to_photo_dir(photo)?;
        let page = mapper.to_page_location(photo)?;
        let view = mapper.to_scaled_path(photo, SizeVariant::View)?;
        let full = mapper.to_scaled_path(photo, SizeVariant::Full)?;
        let dims = cache.get(&view)?;
        let trail = breadcrumbs::trail(mapper, &page)?;

        let neighbour = |other: Option<&SourcePath>| -> Result<Option<String>, PathError> {
            other
                .map(|o| mapper.relativize_dir(&page, &mapper.to_photo_dir(o)?))
                .transpose()
        };

        Ok(PhotoPageModel {
            page_title: trail.final_crumb.clone(),
            browse_prefix: mapper.browse_prefix(&page)?,
            gallery_title: mapper.gallery_name().to_string(),
            breadcrumbs: trail.crumbs,
            prev: neighbour(prev)?,
            next: neighbour(next)?,
            full_photo_url: mapper.relativize(&page, &full)?,
            framed_photo_url: mapper.relativize(&page, &view)?,
            caption: mapper.caption(&dir_segment(mapper, &photo_dir)?),
            final_crumb: trail.final_crumb,
            width: dims.width,
            height: dims.height,
        })
    }

    /// Model for the index page `page` of the directory `dir`.
    ///
    /// The directory is listed afresh on every call.
    pub fn index_page<B: ImageBackend + ?Sized>(
        &self,
        cache: &mut DimensionCache<'_, B>,
        page: &TargetPath,
        dir: &SourcePath,
    ) -> Result<IndexPageModel, ModelError> {
        let mapper = self.mapper;
        let listing = listing::list(dir, self.hidden_marker)?;
        let trail = breadcrumbs::trail(mapper, page)?;

        let mut sub_dirs = Vec::with_capacity(listing.subdirs.len());
        for subdir in &listing.subdirs {
            let location = mapper.to_dir_location(subdir)?;
            let preview = mapper.to_scaled_path(subdir, SizeVariant::Preview)?;
            let dims = cache.get(&preview)?;
            sub_dirs.push(SubDirEntry {
                dir: mapper.relativize_dir(page, &location)?,
                name: mapper.caption(&dir_segment(mapper, &location)?),
                preview: mapper.relativize(page, &preview)?,
                width: dims.width,
                height: dims.height,
            });
        }

        let mut images = Vec::with_capacity(listing.photos.len());
        for photo in &listing.photos {
            let photo_dir = mapper.to_photo_dir(photo)?;
            let thumb = mapper.to_scaled_path(photo, SizeVariant::Thumbnail)?;
            let dims = cache.get(&thumb)?;
            images.push(ImageEntry {
                page_url: mapper.relativize_dir(page, &photo_dir)?,
                thumb_url: mapper.relativize(page, &thumb)?,
                caption: mapper.caption(&dir_segment(mapper, &photo_dir)?),
                width: dims.width,
                height: dims.height,
            });
        }

        Ok(IndexPageModel {
            gallery_title: mapper.gallery_name().to_string(),
            browse_prefix: mapper.browse_prefix(page)?,
            this_dir: trail.final_crumb.clone(),
            breadcrumbs: trail.crumbs,
            final_crumb: trail.final_crumb,
            sub_dirs,
            images,
        })
    }
}

/// Last target segment of `dir`; empty at the root.
fn dir_segment(mapper: &PathMapper, dir: &TargetPath) -> Result<String, PathError> {
    Ok(mapper.target_segments(dir)?.pop().unwrap_or_default())
}
