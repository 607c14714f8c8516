//! Site generation: the tree walk that drives a whole build.
//!
//! The walk is depth-first over the source tree. For each directory:
//!
//! 1. Each photo, in listing order, gets its thumbnail and view scaled, its
//!    full copy written, and its page rendered. Neighbours for prev/next
//!    come from the same listing.
//! 2. Each sub-album is walked.
//! 3. The directory preview is scaled.
//! 4. The index page is rendered.
//!
//! Sub-albums are finished before their parent's index page, so every
//! preview and thumbnail the index links to already exists and its size is
//! already in the [`DimensionCache`].
//!
//! ## Directory previews
//!
//! The preview source of a directory is the first of:
//!
//! - its own preview file (`.preview.jpeg` by default),
//! - its first photo,
//! - the preview source of its first sub-album that has one.
//!
//! A directory with no photos anywhere below it has no preview. Its
//! parent's index page then fails, since sizes are never made up.
//!
//! ## Errors
//!
//! The first error aborts the run. Pages written before it stay on disk.

use crate::config::{ConfigError, SiteConfig};
use crate::dimensions::{DimensionCache, ProbeError};
use crate::imaging::{self, BackendError, ImageBackend, Quality};
use crate::listing::{self, ListError, Listing};
use crate::model::{Assembler, IndexPageModel, ModelError, PhotoPageModel};
use crate::paths::{PathError, PathMapper, SizeVariant, SourcePath, TargetPath};
use crate::render::{self, PageModel, RenderError};
use serde::Serialize;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Listing(#[from] ListError),
    #[error(transparent)]
    Probe(#[from] ProbeError),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("Image processing failed for {path}: {source}")]
    Imaging {
        path: SourcePath,
        #[source]
        source: BackendError,
    },
}

/// Counts of what a build wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildSummary {
    pub directories: usize,
    pub photos: usize,
    pub previews: usize,
}

/// Build the whole site from `source_root` into `target_root`.
///
/// `config` is validated first; nothing is written for an invalid config
/// or for a `target_root` inside `source_root`.
pub fn generate<B: ImageBackend + ?Sized>(
    config: &SiteConfig,
    source_root: &Path,
    target_root: &Path,
    backend: &B,
) -> Result<BuildSummary, GenerateError> {
    config.validate()?;
    // The target would otherwise be walked as a sub-album of its own source
    if std::path::absolute(target_root)?.starts_with(std::path::absolute(source_root)?) {
        return Err(PathError::InvalidPath {
            path: target_root.to_path_buf(),
            reason: "the output directory is inside the source tree",
        }
        .into());
    }
    let mapper = PathMapper::new(config, source_root, target_root);

    fs::create_dir_all(target_root)?;
    fs::write(
        target_root.join(&config.output.stylesheet),
        render::STYLESHEET,
    )?;

    let mut walker = Walker {
        config,
        mapper: &mapper,
        assembler: Assembler::new(&mapper, &config.hidden_marker),
        backend,
        cache: DimensionCache::new(backend),
        quality: Quality::new(config.output.quality),
        summary: BuildSummary::default(),
    };
    walker.traverse_dir(&mapper.source_root(), 0)?;

    info!(
        directories = walker.summary.directories,
        photos = walker.summary.photos,
        target = %target_root.display(),
        "site generated"
    );
    Ok(walker.summary)
}

struct Walker<'a, B: ImageBackend + ?Sized> {
    config: &'a SiteConfig,
    mapper: &'a PathMapper,
    assembler: Assembler<'a>,
    backend: &'a B,
    cache: DimensionCache<'a, B>,
    quality: Quality,
    summary: BuildSummary,
}

impl<B: ImageBackend + ?Sized> Walker<'_, B> {
    /// Build `dir` and everything below it. Returns the source the
    /// directory's preview was scaled from, if any.
    fn traverse_dir(
        &mut self,
        dir: &SourcePath,
        depth: usize,
    ) -> Result<Option<SourcePath>, GenerateError> {
        let location = self.mapper.to_dir_location(dir)?;
        fs::create_dir_all(location.as_path())?;

        let listing = listing::list(dir, &self.config.hidden_marker)?;
        debug!(
            dir = %dir,
            photos = listing.photos.len(),
            subdirs = listing.subdirs.len(),
            "listed"
        );
        check_collisions(self.mapper, &listing)?;

        for (i, photo) in listing.photos.iter().enumerate() {
            let prev = i.checked_sub(1).map(|p| &listing.photos[p]);
            let next = listing.photos.get(i + 1);
            self.traverse_photo(photo, prev, next)?;
        }

        let mut first_sub_preview = None;
        for subdir in &listing.subdirs {
            let chosen = self.traverse_dir(subdir, depth + 1)?;
            if first_sub_preview.is_none() {
                first_sub_preview = chosen;
            }
        }

        let preview_source = preview_source(dir, &listing, first_sub_preview, self.config);
        match &preview_source {
            Some(source) => self.write_preview(dir, source)?,
            None if depth > 0 => warn!(dir = %dir, "no photos to build a preview from"),
            None => {}
        }

        let page = self.mapper.to_dir_page(dir)?;
        let model = self.assembler.index_page(&mut self.cache, &page, dir)?;
        render::render_to(
            "IndexPage",
            PageModel::Index(&model),
            &self.config.output.stylesheet,
            page.as_path(),
        )?;
        info!(page = %page, "wrote index page");
        self.summary.directories += 1;

        Ok(preview_source)
    }

    fn traverse_photo(
        &mut self,
        photo: &SourcePath,
        prev: Option<&SourcePath>,
        next: Option<&SourcePath>,
    ) -> Result<(), GenerateError> {
        let photo_dir = self.mapper.to_photo_dir(photo)?;
        fs::create_dir_all(photo_dir.as_path())?;

        let config = self.config;
        for (variant, bounds) in [
            (SizeVariant::Thumbnail, config.variants.thumbnail.bounds),
            (SizeVariant::View, config.variants.view.bounds),
        ] {
            let target = self.mapper.to_scaled_path(photo, variant)?;
            self.scale(photo, &target, bounds)?;
        }

        let full = self.mapper.to_scaled_path(photo, SizeVariant::Full)?;
        imaging::copy_full(photo.as_path(), full.as_path()).map_err(|source| {
            GenerateError::Imaging {
                path: photo.clone(),
                source,
            }
        })?;

        let model = self
            .assembler
            .photo_page(&mut self.cache, photo, prev, next)?;
        let page = self.mapper.to_page_location(photo)?;
        render::render_to(
            "PhotoPage",
            PageModel::Photo(&model),
            &self.config.output.stylesheet,
            page.as_path(),
        )?;
        info!(page = %page, "wrote photo page");
        self.summary.photos += 1;
        Ok(())
    }

    fn write_preview(&mut self, dir: &SourcePath, source: &SourcePath) -> Result<(), GenerateError> {
        let target = self.mapper.to_scaled_path(dir, SizeVariant::Preview)?;
        let bounds = self.config.variants.preview.bounds;
        self.scale(source, &target, bounds)?;
        self.summary.previews += 1;
        Ok(())
    }

    /// Scale `source` into `target` and record the written size.
    fn scale(
        &mut self,
        source: &SourcePath,
        target: &TargetPath,
        bounds: [u32; 2],
    ) -> Result<(), GenerateError> {
        let dims = imaging::scale_photo(
            self.backend,
            source.as_path(),
            target.as_path(),
            (bounds[0], bounds[1]),
            self.quality,
        )
        .map_err(|e| GenerateError::Imaging {
            path: source.clone(),
            source: e,
        })?;
        self.cache.put(target.clone(), dims);
        Ok(())
    }
}

/// Fail if two children of one directory map to the same target location.
///
/// Photos map to a directory named after their stem with any ordering prefix
/// removed, so `01_a.jpg`, `a.jpg`, `a.png` and a sub-album `a/` would all be
/// written over each other.
fn check_collisions(mapper: &PathMapper, listing: &Listing) -> Result<(), PathError> {
    let photos = listing
        .photos
        .iter()
        .map(|p| Ok::<_, PathError>((mapper.to_photo_dir(p)?, p)));
    let subdirs = listing
        .subdirs
        .iter()
        .map(|d| Ok::<_, PathError>((mapper.to_dir_location(d)?, d)));

    let mut seen: HashMap<TargetPath, &SourcePath> = HashMap::new();
    for entry in photos.chain(subdirs) {
        let (target, source) = entry?;
        if let Some(first) = seen.get(&target) {
            return Err(PathError::Collision {
                path: source.as_path().to_path_buf(),
                other: first.as_path().to_path_buf(),
                target: target.as_path().to_path_buf(),
            });
        }
        seen.insert(target, source);
    }
    Ok(())
}

/// Pick the image a directory's preview is scaled from.
fn preview_source(
    dir: &SourcePath,
    listing: &Listing,
    first_sub_preview: Option<SourcePath>,
    config: &SiteConfig,
) -> Option<SourcePath> {
    let own = dir.child(OsStr::new(&config.variants.preview.file_name));
    if own.as_path().is_file() {
        return Some(own);
    }
    listing.photos.first().cloned().or(first_sub_preview)
}

// ============================================================================
// Survey (check command)
// ============================================================================

/// One directory of the source tree as seen by `check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirReport {
    pub depth: usize,
    pub title: String,
    pub photos: usize,
    pub subdirs: usize,
    /// Whether a preview can be built for this directory.
    pub has_preview: bool,
    /// Names of listed photos the image backend cannot read.
    pub unsupported: Vec<String>,
}

/// Walk the source tree without writing anything. Rows are in walk order,
/// parents before children.
///
/// Target collisions fail the survey the same way they fail a build.
pub fn survey(mapper: &PathMapper, config: &SiteConfig) -> Result<Vec<DirReport>, GenerateError> {
    let mut rows = Vec::new();
    survey_dir(mapper, config, &mapper.source_root(), 0, &mut rows)?;
    Ok(rows)
}

fn survey_dir(
    mapper: &PathMapper,
    config: &SiteConfig,
    dir: &SourcePath,
    depth: usize,
    rows: &mut Vec<DirReport>,
) -> Result<bool, GenerateError> {
    let listing = listing::list(dir, &config.hidden_marker)?;
    check_collisions(mapper, &listing)?;
    let segment = mapper
        .target_segments(&mapper.to_dir_location(dir)?)?
        .pop()
        .unwrap_or_default();

    let row = rows.len();
    rows.push(DirReport {
        depth,
        title: mapper.title(&segment),
        photos: listing.photos.len(),
        subdirs: listing.subdirs.len(),
        has_preview: false,
        unsupported: listing
            .photos
            .iter()
            .filter(|p| !imaging::is_supported(p.as_path()))
            .filter_map(|p| p.file_name().map(str::to_string))
            .collect(),
    });

    let mut any_sub_preview = false;
    for subdir in &listing.subdirs {
        any_sub_preview |= survey_dir(mapper, config, subdir, depth + 1, rows)?;
    }

    let own = dir.child(OsStr::new(&config.variants.preview.file_name));
    let has_preview = own.as_path().is_file() || !listing.photos.is_empty() || any_sub_preview;
    rows[row].has_preview = has_preview;
    Ok(has_preview)
}

// ============================================================================
// Single page models (model command)
// ============================================================================

/// A page model labelled with the template that renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "template", content = "model")]
pub enum DescribedPage {
    PhotoPage(PhotoPageModel),
    IndexPage(IndexPageModel),
}

/// Build the model of the page for `path`, a photo or a directory in the
/// source tree, against an already generated target tree.
///
/// A photo's neighbours are taken from its directory's listing, as the
/// build does.
pub fn describe<B: ImageBackend + ?Sized>(
    mapper: &PathMapper,
    config: &SiteConfig,
    backend: &B,
    path: &Path,
) -> Result<DescribedPage, GenerateError> {
    let source = mapper.source(path)?;
    let assembler = Assembler::new(mapper, &config.hidden_marker);
    let mut cache = DimensionCache::new(backend);

    if source.as_path().is_dir() {
        let page = mapper.to_dir_page(&source)?;
        let model = assembler.index_page(&mut cache, &page, &source)?;
        return Ok(DescribedPage::IndexPage(model));
    }

    let parent = source
        .as_path()
        .parent()
        .ok_or_else(|| PathError::InvalidPath {
            path: source.as_path().to_path_buf(),
            reason: "photo has no parent directory",
        })?;
    let siblings = listing::list(&mapper.source(parent)?, &config.hidden_marker)?.photos;
    let position = siblings
        .iter()
        .position(|p| p == &source)
        .ok_or_else(|| PathError::InvalidPath {
            path: source.as_path().to_path_buf(),
            reason: "not a listed photo",
        })?;
    let prev = position.checked_sub(1).map(|i| &siblings[i]);
    let next = siblings.get(position + 1);

    let model = assembler.photo_page(&mut cache, &source, prev, next)?;
    Ok(DescribedPage::PhotoPage(model))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::Dimensions;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};
    use tempfile::TempDir;

    /// Source tree on disk plus a mock backend that knows every source
    /// photo. Photo bytes are placeholders; the mock never decodes them.
    struct Site {
        tmp: TempDir,
        backend: MockBackend,
    }

    impl Site {
        fn new(photos: &[&str]) -> Self {
            let tmp = TempDir::new().unwrap();
            let backend = MockBackend::new();
            let source = tmp.path().join("Gallery");
            fs::create_dir_all(&source).unwrap();
            for photo in photos {
                let path = source.join(photo);
                fs::create_dir_all(path.parent().unwrap()).unwrap();
                fs::write(&path, b"jpeg").unwrap();
                backend.set_dimensions(path, Dimensions::new(1400, 1000));
            }
            Self { tmp, backend }
        }

        fn source(&self) -> std::path::PathBuf {
            self.tmp.path().join("Gallery")
        }

        fn target(&self) -> std::path::PathBuf {
            self.tmp.path().join("site")
        }

        fn build(&self) -> Result<BuildSummary, GenerateError> {
            generate(
                &SiteConfig::default(),
                &self.source(),
                &self.target(),
                &self.backend,
            )
        }

        fn resized_outputs(&self) -> Vec<std::path::PathBuf> {
            self.backend
                .get_operations()
                .into_iter()
                .filter_map(|op| match op {
                    RecordedOp::Resize { output, .. } => Some(output),
                    _ => None,
                })
                .collect()
        }
    }

    // =========================================================================
    // Build
    // =========================================================================

    #[test]
    fn builds_pages_for_every_photo_and_directory() {
        let site = Site::new(&["Trip2024/a.jpg", "Trip2024/b.jpg"]);
        fs::write(site.source().join("Trip2024/.DS_Store"), b"").unwrap();

        let summary = site.build().unwrap();

        assert_eq!(summary.photos, 2);
        assert_eq!(summary.directories, 2);
        let target = site.target();
        assert!(target.join("index.html").is_file());
        assert!(target.join("carousel.css").is_file());
        assert!(target.join("Trip2024/index.html").is_file());
        assert!(target.join("Trip2024/a/index.html").is_file());
        assert!(target.join("Trip2024/b/index.html").is_file());
        assert!(target.join("Trip2024/a/a.jpg").is_file());
        assert!(!target.join("Trip2024/.DS_Store").exists());
    }

    #[test]
    fn scales_every_variant() {
        let site = Site::new(&["Trip2024/a.jpg"]);
        site.build().unwrap();

        let target = site.target();
        let outputs = site.resized_outputs();
        assert!(outputs.contains(&target.join("Trip2024/a/a_thumb.jpg")));
        assert!(outputs.contains(&target.join("Trip2024/a/a_view.jpg")));
        assert!(outputs.contains(&target.join("Trip2024/.preview.jpeg")));
    }

    #[test]
    fn generated_artifacts_are_never_probed() {
        let site = Site::new(&["Trip2024/a.jpg", "Trip2024/b.jpg"]);
        site.build().unwrap();

        let target = site.target();
        let probed_targets = site
            .backend
            .get_operations()
            .into_iter()
            .filter(|op| matches!(op, RecordedOp::Identify(p) if p.starts_with(&target)))
            .count();
        assert_eq!(probed_targets, 0);
    }

    #[test]
    fn photo_pages_link_neighbours() {
        let site = Site::new(&["Trip2024/a.jpg", "Trip2024/b.jpg", "Trip2024/c.jpg"]);
        site.build().unwrap();

        let middle = fs::read_to_string(site.target().join("Trip2024/b/index.html")).unwrap();
        assert!(middle.contains(r#"href="../a/""#));
        assert!(middle.contains(r#"href="../c/""#));
    }

    #[test]
    fn own_preview_file_wins() {
        let site = Site::new(&["Trip2024/a.jpg", "Trip2024/.preview.jpeg"]);
        site.build().unwrap();

        let preview_source = site.source().join("Trip2024/.preview.jpeg");
        assert!(site.backend.get_operations().iter().any(|op| matches!(
            op,
            RecordedOp::Resize { source, output, .. }
                if source == &preview_source && output.ends_with("Trip2024/.preview.jpeg")
        )));
    }

    #[test]
    fn container_preview_comes_from_first_sub_album() {
        let site = Site::new(&["2019/Hawaii/001.jpg", "2019/Alaska/x.jpg"]);
        site.build().unwrap();

        let alaska_photo = site.source().join("2019/Alaska/x.jpg");
        assert!(site.backend.get_operations().iter().any(|op| matches!(
            op,
            RecordedOp::Resize { source, output, .. }
                if source == &alaska_photo && output.ends_with("2019/.preview.jpeg")
        )));
    }

    #[test]
    fn ordering_prefixes_are_stripped_from_targets() {
        let site = Site::new(&["01_Trip/a.jpg"]);
        site.build().unwrap();

        assert!(site.target().join("Trip/a/index.html").is_file());
        assert!(!site.target().join("01_Trip").exists());
    }

    #[test]
    fn empty_sub_album_fails_the_build() {
        let site = Site::new(&["Trip2024/a.jpg"]);
        fs::create_dir(site.source().join("Empty")).unwrap();

        let result = site.build();
        assert!(matches!(
            result,
            Err(GenerateError::Model(ModelError::Probe(_)))
        ));
    }

    #[test]
    fn unreadable_photo_aborts() {
        let site = Site::new(&["Trip2024/a.jpg"]);
        // On disk, but the backend cannot read it
        fs::write(site.source().join("Trip2024/b.jpg"), b"junk").unwrap();

        let result = site.build();
        assert!(matches!(result, Err(GenerateError::Imaging { .. })));
    }

    #[test]
    fn invalid_config_writes_nothing() {
        let site = Site::new(&["Trip2024/a.jpg"]);
        let mut config = SiteConfig::default();
        config.variants.view.suffix = "_thumb".to_string();

        let result = generate(&config, &site.source(), &site.target(), &site.backend);
        assert!(matches!(result, Err(GenerateError::Config(_))));
        assert!(!site.target().exists());
    }

    #[test]
    fn missing_source_root_is_a_listing_error() {
        let tmp = TempDir::new().unwrap();
        let result = generate(
            &SiteConfig::default(),
            &tmp.path().join("nope"),
            &tmp.path().join("site"),
            &MockBackend::new(),
        );
        assert!(matches!(result, Err(GenerateError::Listing(_))));
    }

    #[test]
    fn target_inside_source_writes_nothing() {
        let site = Site::new(&["Trip2024/a.jpg"]);
        let target = site.source().join("dist");

        let result = generate(&SiteConfig::default(), &site.source(), &target, &site.backend);
        assert!(matches!(
            result,
            Err(GenerateError::Path(PathError::InvalidPath { .. }))
        ));
        assert!(!target.exists());
    }

    // =========================================================================
    // Target collisions
    // =========================================================================

    fn assert_collision(result: Result<BuildSummary, GenerateError>, expected: &str) {
        match result {
            Err(GenerateError::Path(PathError::Collision { target, .. })) => {
                assert!(target.ends_with(expected), "collided at {}", target.display());
            }
            other => panic!("expected a collision, got {other:?}"),
        }
    }

    #[test]
    fn ordering_prefix_collision_fails_before_writing() {
        let site = Site::new(&["Trip/01_a.jpg", "Trip/a.jpg"]);

        assert_collision(site.build(), "Trip/a");
        assert!(!site.target().join("Trip/a").exists());
        assert!(site.resized_outputs().is_empty());
    }

    #[test]
    fn same_stem_different_extension_collides() {
        let site = Site::new(&["Trip/a.jpg", "Trip/a.png"]);
        assert_collision(site.build(), "Trip/a");
    }

    #[test]
    fn photo_and_sub_album_collide() {
        let site = Site::new(&["Trip/a.jpg", "Trip/01_a/x.jpg"]);
        assert_collision(site.build(), "Trip/a");
    }

    #[test]
    fn distinct_targets_do_not_collide() {
        let site = Site::new(&["Trip/a.jpg", "Trip/ab.jpg", "Trip/b/x.jpg"]);
        assert_eq!(site.build().unwrap().photos, 3);
    }

    // =========================================================================
    // Survey
    // =========================================================================

    #[test]
    fn survey_lists_files_the_backend_cannot_read() {
        let site = Site::new(&["Trip/a.jpg", "Trip/b.JPG"]);
        fs::write(site.source().join("Trip/notes.txt"), b"").unwrap();
        let config = SiteConfig::default();
        let mapper = PathMapper::new(&config, site.source(), site.target());

        let rows = survey(&mapper, &config).unwrap();
        assert_eq!(rows[1].photos, 3);
        assert_eq!(rows[1].unsupported, vec!["notes.txt"]);
        assert!(rows[0].unsupported.is_empty());
    }

    #[test]
    fn survey_fails_on_collisions() {
        let site = Site::new(&["Trip/01_a.jpg", "Trip/a.jpg"]);
        let config = SiteConfig::default();
        let mapper = PathMapper::new(&config, site.source(), site.target());

        assert!(matches!(
            survey(&mapper, &config),
            Err(GenerateError::Path(PathError::Collision { .. }))
        ));
    }

    #[test]
    fn survey_reports_tree_in_walk_order() {
        let site = Site::new(&["01_Trip/a.jpg", "01_Trip/b.jpg", "2019/Hawaii/001.jpg"]);
        fs::create_dir(site.source().join("Empty")).unwrap();
        let config = SiteConfig::default();
        let mapper = PathMapper::new(&config, site.source(), site.target());

        let rows = survey(&mapper, &config).unwrap();
        let shape: Vec<(usize, &str, usize, bool)> = rows
            .iter()
            .map(|r| (r.depth, r.title.as_str(), r.photos, r.has_preview))
            .collect();

        assert_eq!(
            shape,
            vec![
                (0, "Carousel", 0, true),
                (1, "Trip", 2, true),
                (1, "2019", 0, true),
                (2, "Hawaii", 1, true),
                (1, "Empty", 0, false),
            ]
        );
        assert!(!site.target().exists());
    }

    // =========================================================================
    // Describe
    // =========================================================================

    #[test]
    fn describe_photo_uses_listing_neighbours() {
        let site = Site::new(&["Trip2024/a.jpg", "Trip2024/b.jpg"]);
        let config = SiteConfig::default();
        let mapper = PathMapper::new(&config, site.source(), site.target());
        site.backend.set_dimensions(
            site.target().join("Trip2024/a/a_view.jpg"),
            Dimensions::new(700, 500),
        );

        let described =
            describe(&mapper, &config, &site.backend, Path::new("Trip2024/a.jpg")).unwrap();

        let DescribedPage::PhotoPage(model) = described else {
            panic!("expected a photo page");
        };
        assert_eq!(model.prev, None);
        assert_eq!(model.next.as_deref(), Some("../b/"));
    }

    #[test]
    fn described_page_names_its_template() {
        let site = Site::new(&["Trip2024/a.jpg"]);
        site.build().unwrap();
        let config = SiteConfig::default();
        let mapper = PathMapper::new(&config, site.source(), site.target());
        site.backend.set_dimensions(
            site.target().join("Trip2024/a/a_thumb.jpg"),
            Dimensions::new(200, 143),
        );

        let described = describe(&mapper, &config, &site.backend, Path::new("Trip2024")).unwrap();
        let json = serde_json::to_value(&described).unwrap();

        assert_eq!(json["template"], "IndexPage");
        assert_eq!(json["model"]["images"][0]["thumb_url"], "a/a_thumb.jpg");
    }
}
