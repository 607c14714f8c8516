//! Site configuration module.
//!
//! Handles loading, validating, and merging the gallery configuration file.
//! Stock defaults are the base layer; a user file overrides only the keys it
//! names.
//!
//! ## Config File Location
//!
//! The file is `.carousel.toml` in the source root. The leading dot keeps it
//! out of photo listings. An explicit path can be given with `--config`.
//!
//! ```text
//! gallery/
//! ├── .carousel.toml
//! ├── 01_Trip2024/
//! │   ├── .preview.jpeg        # Directory preview (optional)
//! │   ├── a.jpg
//! │   └── b.jpg
//! └── 2023/
//!     └── ...
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! gallery_name = "Carousel"    # Site display name, first breadcrumb
//! hidden_marker = "."          # Files starting with this are not photos
//!
//! [variants.thumbnail]
//! suffix = "_thumb"            # a/a_thumb.jpg
//! bounds = [200, 200]          # Fit within width x height
//!
//! [variants.view]
//! suffix = "_view"
//! bounds = [700, 500]
//!
//! [variants.full]
//! suffix = ""                  # Byte copy of the source photo
//!
//! [variants.preview]
//! file_name = ".preview.jpeg"  # Looked up in source dirs, written in target dirs
//! bounds = [100, 100]
//!
//! [output]
//! quality = 90                 # JPEG quality (0-100)
//! stylesheet = "carousel.css"  # Written at the target root
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file looked up in the source root.
pub const CONFIG_FILENAME: &str = ".carousel.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site display name. Also the title of the root directory.
    pub gallery_name: String,
    /// Prefix marking a file as hidden from photo listings.
    pub hidden_marker: String,
    /// Size variant naming and bounds.
    pub variants: VariantsConfig,
    /// Encoding and static asset settings.
    pub output: OutputConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            gallery_name: "Carousel".to_string(),
            hidden_marker: ".".to_string(),
            variants: VariantsConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gallery_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "gallery_name must not be empty".into(),
            ));
        }
        if self.hidden_marker.is_empty() {
            return Err(ConfigError::Validation(
                "hidden_marker must not be empty".into(),
            ));
        }
        if self.output.quality > 100 {
            return Err(ConfigError::Validation(
                "output.quality must be 0-100".into(),
            ));
        }
        if self.output.stylesheet.is_empty() || has_separator(&self.output.stylesheet) {
            return Err(ConfigError::Validation(
                "output.stylesheet must be a plain file name".into(),
            ));
        }

        let v = &self.variants;
        for (name, bounds) in [
            ("thumbnail", v.thumbnail.bounds),
            ("view", v.view.bounds),
            ("preview", v.preview.bounds),
        ] {
            if bounds[0] == 0 || bounds[1] == 0 {
                return Err(ConfigError::Validation(format!(
                    "variants.{name}.bounds values must be non-zero"
                )));
            }
        }

        let suffixes = [
            ("thumbnail", &v.thumbnail.suffix),
            ("view", &v.view.suffix),
            ("full", &v.full.suffix),
        ];
        for (name, suffix) in suffixes {
            if has_separator(suffix) {
                return Err(ConfigError::Validation(format!(
                    "variants.{name}.suffix must not contain a path separator"
                )));
            }
        }
        for (i, (a_name, a)) in suffixes.iter().enumerate() {
            for (b_name, b) in &suffixes[i + 1..] {
                if a == b {
                    return Err(ConfigError::Validation(format!(
                        "variants.{a_name}.suffix and variants.{b_name}.suffix must differ"
                    )));
                }
            }
        }

        let preview = &v.preview.file_name;
        if has_separator(preview) || Path::new(preview).extension().is_none() {
            return Err(ConfigError::Validation(
                "variants.preview.file_name must be a plain file name with an extension".into(),
            ));
        }
        if !preview.starts_with(&self.hidden_marker) {
            return Err(ConfigError::Validation(format!(
                "variants.preview.file_name must start with the hidden marker {:?}",
                self.hidden_marker
            )));
        }
        Ok(())
    }
}

fn has_separator(s: &str) -> bool {
    s.contains('/') || s.contains('\\')
}

/// Naming and bounds for every size variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VariantsConfig {
    /// Grid thumbnails on index pages.
    pub thumbnail: ScaledVariant,
    /// The framed photo on a photo page.
    pub view: ScaledVariant,
    /// Full-resolution copy linked from the photo page.
    pub full: FullVariant,
    /// Directory preview shown for a sub-album on its parent's index.
    pub preview: PreviewVariant,
}

impl Default for VariantsConfig {
    fn default() -> Self {
        Self {
            thumbnail: ScaledVariant {
                suffix: "_thumb".to_string(),
                bounds: [200, 200],
            },
            view: ScaledVariant {
                suffix: "_view".to_string(),
                bounds: [700, 500],
            },
            full: FullVariant::default(),
            preview: PreviewVariant::default(),
        }
    }
}

/// A resized per-photo artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScaledVariant {
    /// Appended to the artifact name before the extension.
    pub suffix: String,
    /// `[max_width, max_height]` the artifact must fit within.
    pub bounds: [u32; 2],
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FullVariant {
    pub suffix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewVariant {
    /// File name of the preview, both in source and target directories.
    pub file_name: String,
    pub bounds: [u32; 2],
}

impl Default for PreviewVariant {
    fn default() -> Self {
        Self {
            file_name: ".preview.jpeg".to_string(),
            bounds: [100, 100],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// JPEG encoding quality (0 = worst, 100 = best).
    pub quality: u32,
    /// Stylesheet file name, written at the target root.
    pub stylesheet: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quality: 90,
            stylesheet: "carousel.css".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer that user overrides are merged on top of.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(config_path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `.carousel.toml` in the given source root.
pub fn load_config(source_root: &Path) -> Result<SiteConfig, ConfigError> {
    load_config_file(&source_root.join(CONFIG_FILENAME))
}

/// Load config from an explicit file path, falling back to defaults when the
/// file does not exist.
pub fn load_config_file(config_path: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(config_path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock config with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Carousel Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Save as .carousel.toml in the root of your photo tree, or pass the
# file explicitly with --config. Unknown keys will cause an error.

# Site display name. Used as the first breadcrumb on every page and as the
# title of the root index.
gallery_name = "Carousel"

# Files whose name starts with this marker are never listed as photos.
# Directory previews and this config file rely on it.
hidden_marker = "."

# ---------------------------------------------------------------------------
# Size variants
# ---------------------------------------------------------------------------
# Each photo `Trip/a.jpg` gets its own page directory `Trip/a/` holding the
# page and the scaled artifacts, named `<name><suffix>.<ext>`.
# Suffixes must be distinct.

[variants.thumbnail]
# Grid thumbnail on the directory index.
suffix = "_thumb"
bounds = [200, 200]

[variants.view]
# The photo shown on its own page.
suffix = "_view"
bounds = [700, 500]

[variants.full]
# Unscaled copy of the source, linked from the photo page.
suffix = ""

[variants.preview]
# Directory preview. Put a file with this name in a source directory to
# choose it; otherwise the first photo below the directory is used.
# Must start with hidden_marker.
file_name = ".preview.jpeg"
bounds = [100, 100]

# ---------------------------------------------------------------------------
# Output
# ---------------------------------------------------------------------------
[output]
# JPEG encoding quality (0-100).
quality = 90
# Stylesheet written at the root of the generated site.
stylesheet = "carousel.css"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = SiteConfig::default();
        assert_eq!(config.gallery_name, "Carousel");
        assert_eq!(config.hidden_marker, ".");
        assert_eq!(config.variants.thumbnail.suffix, "_thumb");
        assert_eq!(config.variants.view.bounds, [700, 500]);
        assert_eq!(config.variants.full.suffix, "");
        assert_eq!(config.variants.preview.file_name, ".preview.jpeg");
        assert_eq!(config.output.quality, 90);
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
gallery_name = "Hall of Light"

[variants.view]
suffix = "_framed"
bounds = [1024, 768]
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.gallery_name, "Hall of Light");
        assert_eq!(config.variants.view.suffix, "_framed");
        assert_eq!(config.variants.view.bounds, [1024, 768]);
        // Defaults preserved
        assert_eq!(config.variants.thumbnail.suffix, "_thumb");
        assert_eq!(config.output.quality, 90);
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn load_config_reads_hidden_file_in_source_root() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILENAME),
            r##"
hidden_marker = "_"

[variants.preview]
file_name = "_preview.jpeg"
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.hidden_marker, "_");
        assert_eq!(config.variants.preview.file_name, "_preview.jpeg");
        assert_eq!(config.variants.preview.bounds, [100, 100]);
    }

    #[test]
    fn load_config_file_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("site.toml");
        fs::write(&path, "[output]\nquality = 75\n").unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.output.quality, 75);
        assert_eq!(config.output.stylesheet, "carousel.css");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILENAME), "this is not valid toml [[[").unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_key_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILENAME), "galery_name = \"typo\"\n").unwrap();

        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn unknown_nested_key_rejected() {
        let toml = "[variants.view]\nsufix = \"_v\"\n";
        let result: Result<SiteConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn stock_config_toml_parses_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    // =========================================================================
    // Merge tests
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str("a = 1\nb = 2").unwrap();
        let overlay: toml::Value = toml::from_str("b = 3").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("a").unwrap().as_integer(), Some(1));
        assert_eq!(merged.get("b").unwrap().as_integer(), Some(3));
    }

    #[test]
    fn merge_toml_deep_nested_preserves_siblings() {
        let base = stock_defaults_value().unwrap();
        let overlay: toml::Value = toml::from_str("[variants.thumbnail]\nbounds = [64, 64]").unwrap();
        let config: SiteConfig = merge_toml(base, overlay).try_into().unwrap();
        assert_eq!(config.variants.thumbnail.bounds, [64, 64]);
        assert_eq!(config.variants.thumbnail.suffix, "_thumb");
        assert_eq!(config.variants.view.suffix, "_view");
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_quality_too_high() {
        let mut config = SiteConfig::default();
        config.output.quality = 101;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_zero_bounds() {
        let mut config = SiteConfig::default();
        config.variants.view.bounds = [0, 500];
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_duplicate_suffixes() {
        let mut config = SiteConfig::default();
        config.variants.thumbnail.suffix = "_view".to_string();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("thumbnail"));
        assert!(err.contains("view"));
    }

    #[test]
    fn validate_suffix_with_separator() {
        let mut config = SiteConfig::default();
        config.variants.view.suffix = "/view".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_preview_must_be_hidden() {
        let mut config = SiteConfig::default();
        config.variants.preview.file_name = "preview.jpeg".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_empty_hidden_marker() {
        let mut config = SiteConfig::default();
        config.hidden_marker = String::new();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }
}
