//! CLI output formatting for `build` and `check`.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.
//!
//! Progress while building goes through `tracing`; this module only prints
//! the final report.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Carousel
//!     Trip (3 photos)
//!         notes.txt (not an image)
//!     2019
//!         Hawaii (12 photos)
//!     Empty (no preview)
//!
//! 4 directories, 15 photos
//! 1 file is not an image: the build will fail
//! 1 directory without photos: the build will fail
//! ```
//!
//! ## Build
//!
//! ```text
//! Generated 4 index pages, 14 photo pages, 3 previews
//! Site written to dist
//! ```

use crate::generate::{BuildSummary, DirReport};
use std::path::Path;

// ============================================================================
// Shared helpers
// ============================================================================

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// One directory of the survey tree.
///
/// ```text
/// Trip (2 photos)
/// 2019
/// Empty (no preview)
/// ```
fn dir_line(row: &DirReport) -> String {
    let mut line = format!("{}{}", indent(row.depth), row.title);
    if row.photos > 0 {
        line.push_str(&format!(" ({})", plural(row.photos, "photo", "photos")));
    }
    // The root never needs a preview; a sub-album without one breaks its parent
    if row.depth > 0 && !row.has_preview {
        line.push_str(" (no preview)");
    }
    line
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check_output(rows: &[DirReport]) -> Vec<String> {
    let mut lines = Vec::new();
    for row in rows {
        lines.push(dir_line(row));
        for name in &row.unsupported {
            lines.push(format!("{}{} (not an image)", indent(row.depth + 1), name));
        }
    }

    let photos: usize = rows.iter().map(|r| r.photos).sum();
    lines.push(String::new());
    lines.push(format!(
        "{}, {}",
        plural(rows.len(), "directory", "directories"),
        plural(photos, "photo", "photos")
    ));

    let unreadable: usize = rows.iter().map(|r| r.unsupported.len()).sum();
    if unreadable > 0 {
        let verb = if unreadable == 1 { "is not an image" } else { "are not images" };
        lines.push(format!(
            "{} {}: the build will fail",
            plural(unreadable, "file", "files"),
            verb
        ));
    }

    let broken = rows.iter().filter(|r| r.depth > 0 && !r.has_preview).count();
    if broken > 0 {
        lines.push(format!(
            "{} without photos: the build will fail",
            plural(broken, "directory", "directories")
        ));
    }
    lines
}

/// Print check output to stdout.
pub fn print_check_output(rows: &[DirReport]) {
    for line in format_check_output(rows) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

pub fn format_build_output(summary: &BuildSummary, target_root: &Path) -> Vec<String> {
    let mut lines = vec![format!(
        "Generated {}, {}, {}",
        plural(summary.directories, "index page", "index pages"),
        plural(summary.photos, "photo page", "photo pages"),
        plural(summary.previews, "preview", "previews"),
    )];
    lines.push(format!("Site written to {}", target_root.display()));
    lines
}

/// Print build output to stdout.
pub fn print_build_output(summary: &BuildSummary, target_root: &Path) {
    for line in format_build_output(summary, target_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
