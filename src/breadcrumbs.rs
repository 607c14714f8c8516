//! Breadcrumb trails from the site root down to a page.
//!
//! The page's own directory is not a link; it becomes the `final_crumb`
//! label. Every directory above it gets a [`Breadcrumb`], starting with the
//! gallery name for the root.
//!
//! ```text
//! Trip2024/a/index.html
//!   crumbs:      Carousel (../../)  Trip2024 (../)
//!   final_crumb: a
//! ```
//!
//! Crumb `i` of `N` climbs `N - i` levels, so the last crumb is always one
//! level up and following any crumb lands on that directory's index page.

use crate::paths::{PathError, PathMapper, TargetPath};
use serde::Serialize;

/// One link in a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub label: String,
    /// `../` repeated once per level between the page and this crumb.
    pub up_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trail {
    pub crumbs: Vec<Breadcrumb>,
    pub final_crumb: String,
}

/// Build the trail for the page at `page`.
pub fn trail(mapper: &PathMapper, page: &TargetPath) -> Result<Trail, PathError> {
    let page_dir = page.parent().ok_or_else(|| PathError::InvalidPath {
        path: page.as_path().to_path_buf(),
        reason: "page has no containing directory",
    })?;
    let segments = mapper.target_segments(&page_dir)?;

    let Some((current, ancestors)) = segments.split_last() else {
        return Ok(Trail {
            crumbs: Vec::new(),
            final_crumb: mapper.gallery_name().to_string(),
        });
    };

    let labels = std::iter::once(mapper.gallery_name().to_string())
        .chain(ancestors.iter().map(|segment| mapper.title(segment)));
    let total = segments.len();
    let crumbs = labels
        .enumerate()
        .map(|(i, label)| Breadcrumb {
            label,
            up_path: "../".repeat(total - i),
        })
        .collect();

    Ok(Trail {
        crumbs,
        final_crumb: mapper.title(current),
    })
}
