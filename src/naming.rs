//! Display names and target names derived from path segments.
//!
//! Source directories and photos carry their ordering and grouping in their
//! names. This module turns a raw segment into the forms the site needs:
//!
//! - **Target segment**: a leading two-digit ordering prefix `NN_` is dropped,
//!   so `01_Trip2024/` publishes as `Trip2024/`.
//! - **Title**: underscores become spaces, apostrophes become `’`, and a
//!   leading `NN ` ordering prefix is dropped. Qualified artifact names such
//!   as `Hawaii_2019_001` title as their last part.
//! - **Caption**: like the title, except that *boring* names (plain numbers
//!   that are not a four-digit year) have no caption at all.
//! - **Artifact name**: the stem used for scaled image files. Boring photo
//!   names are qualified with their year and album so downloaded files stay
//!   distinguishable: `2019/Hawaii/001` → `Hawaii_2019_001`.
//!
//! All functions are total: they never fail and [`title`] never returns an
//! empty string for a non-empty segment.

use regex::Regex;
use std::sync::LazyLock;

static TARGET_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d\d_").expect("valid regex"));

static TITLE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d\d ").expect("valid regex"));

static QUALIFIED_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+_20\d\d_\w*_\d*").expect("valid regex"));

static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d\d\d\d$").expect("valid regex"));

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d*$").expect("valid regex"));

/// Map a source path segment to its target segment.
///
/// - `"01_Trip2024"` → `"Trip2024"`
/// - `"2024"` → `"2024"`
/// - `"1_Trip"` → `"1_Trip"` (only two-digit prefixes are ordering prefixes)
pub fn target_segment(segment: &str) -> &str {
    match TARGET_PREFIX.find(segment) {
        Some(m) if m.end() < segment.len() => &segment[m.end()..],
        _ => segment,
    }
}

/// A name is boring when it is only digits and not a year.
///
/// Boring names say nothing to a visitor, so they get no caption and their
/// artifacts get qualified names.
pub fn is_boring(name: &str) -> bool {
    !YEAR.is_match(name) && DIGITS.is_match(name)
}

/// Human title for a path segment.
///
/// An empty segment is the site root and titles as `gallery_name`.
pub fn title(name: &str, gallery_name: &str) -> String {
    if name.is_empty() {
        return gallery_name.to_string();
    }
    let titled = if QUALIFIED_NAME.is_match(name) {
        name.rsplit('_').next().unwrap_or(name).to_string()
    } else {
        let spaced = name.replace('_', " ").replace('\'', "\u{2019}");
        TITLE_PREFIX.replace(&spaced, "").into_owned()
    };
    if titled.trim().is_empty() {
        name.to_string()
    } else {
        titled
    }
}

/// Caption for a path segment: empty for boring names, the title otherwise.
pub fn caption(name: &str, gallery_name: &str) -> String {
    if is_boring(name) {
        String::new()
    } else {
        title(name, gallery_name)
    }
}

/// Stem for the scaled artifacts of a photo.
///
/// `rel_parts` are the target segments of the photo's page directory,
/// relative to the target root. Interesting names are used as-is. Boring
/// names are prefixed with the album and year:
///
/// - `["Trip", "beach"]` → `"beach"`
/// - `["2019", "001"]` → `"2019_001"`
/// - `["2019", "Hawaii", "001"]` → `"Hawaii_2019_001"`
/// - `["2019", "Hawaii", "Maui", "001"]` → `"Hawaii_2019_Maui_001"`
/// - `["001"]` → `"001"` (nothing to qualify with at the root)
pub fn artifact_name<S: AsRef<str>>(rel_parts: &[S]) -> String {
    let Some((last, parents)) = rel_parts.split_last() else {
        return String::new();
    };
    let last = last.as_ref();
    if parents.is_empty() || !is_boring(last) {
        return last.to_string();
    }

    let year = parents[0].as_ref();
    let mut parts: Vec<&str> = match parents.get(1) {
        Some(top) => vec![top.as_ref(), year],
        None => vec![year],
    };
    parts.extend(parents.iter().skip(2).map(|p| p.as_ref()));
    parts.push(last);
    parts.join("_")
}
