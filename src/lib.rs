//! # Carousel
//!
//! A static photo-gallery generator. The source directory tree is the whole
//! data model: every directory becomes an index page listing its sub-albums
//! and photos, and every photo becomes a page of its own with links to its
//! neighbours.
//!
//! # Architecture: One Walk, Two Page Kinds
//!
//! A build is a single depth-first walk over the source tree:
//!
//! ```text
//! gallery/                 dist/
//! ├── 01_Trip2024/    →    ├── carousel.css
//! │   ├── a.jpg            ├── index.html
//! │   └── b.jpg            └── Trip2024/
//! └── .carousel.toml           ├── index.html, .preview.jpeg
//!                              ├── a/  index.html, a.jpg, a_view.jpg, a_thumb.jpg
//!                              └── b/  ...
//! ```
//!
//! Each page goes through the same steps: map source locations to target
//! locations, look up the pixel sizes of the images it shows, work out its
//! breadcrumb trail, assemble a serializable model with every link relative
//! to the page, and render that model with a named template.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`paths`] | Source ↔ target mapping, scaled artifact names, relative links |
//! | [`naming`] | Title, caption and target-segment rules for path segments |
//! | [`dimensions`] | Per-run memo of image sizes in front of the probe |
//! | [`breadcrumbs`] | Trail from the site root down to a page |
//! | [`listing`] | Sorted sub-albums and photos of one directory |
//! | [`model`] | Photo and index page models |
//! | [`render`] | Maud templates `PhotoPage` and `IndexPage` |
//! | [`imaging`] | Dimension probe and scaling on the `image` crate |
//! | [`generate`] | The tree walk, plus the read-only survey for `check` |
//! | [`config`] | `.carousel.toml` loading, merging and validation |
//! | [`output`] | CLI report formatting |
//!
//! # Design Decisions
//!
//! ## Relative Links Everywhere
//!
//! No generated link is absolute. Links are computed per page from the
//! page's own directory, so the output tree can be served from any path or
//! opened straight from disk.
//!
//! ## Explicit Run State
//!
//! The only state shared between pages is the [`dimensions::DimensionCache`].
//! It is created at the start of a run, passed by reference to whatever
//! needs it, and dropped at the end. There are no globals.
//!
//! ## Ordering Comes From One Place
//!
//! Listings are sorted by byte order of the file name. The walker computes
//! prev/next neighbours from that listing and passes them in; the model
//! assembler never re-sorts photos on its own.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed templates are build errors and all
//! interpolation is escaped. Templates are still addressed by name so that
//! an unknown name is a reportable error.

pub mod breadcrumbs;
pub mod config;
pub mod dimensions;
pub mod generate;
pub mod imaging;
pub mod listing;
pub mod model;
pub mod naming;
pub mod output;
pub mod paths;
pub mod render;

#[cfg(test)]
pub(crate) mod test_helpers;
