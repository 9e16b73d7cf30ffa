//! Build configuration module.
//!
//! Handles loading, validating, and merging the `config.toml` that sits next
//! to the page shells. Stock defaults are the base layer; the user file only
//! needs the keys it wants to change.
//!
//! ## Config File Location
//!
//! ```text
//! site/
//! ├── config.toml        # optional, overrides stock defaults
//! ├── content.json       # content document (path configurable)
//! ├── index.html         # page shells
//! ├── about.html
//! └── css/ ...           # copied unchanged
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_path = "content.json"  # Content document, relative to the site root
//!
//! [binding]
//! fail_on_skip = false           # `check` fails when any binder skipped
//! report_skipped = true          # List skipped binders in the summary
//!
//! [processing]
//! max_processes = 4              # Max parallel workers (omit for auto = CPU cores)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path};
use thiserror::Error;

use crate::loader::CONTENT_PATH;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Build configuration loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Content document path, relative to the site root.
    pub content_path: String,
    pub binding: BindingConfig,
    pub processing: ProcessingConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_path: CONTENT_PATH.to_string(),
            binding: BindingConfig::default(),
            processing: ProcessingConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "content_path must not be empty".into(),
            ));
        }
        let relative = Path::new(&self.content_path)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !relative {
            return Err(ConfigError::Validation(
                "content_path must be a relative path inside the site".into(),
            ));
        }
        if self.processing.max_processes == Some(0) {
            return Err(ConfigError::Validation(
                "processing.max_processes must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// How binding skips are treated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BindingConfig {
    /// Treat any skipped binder as a failure in `check`.
    pub fail_on_skip: bool,
    /// Include skipped binders in the printed summary.
    pub report_skipped: bool,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            fail_on_skip: false,
            report_skipped: true,
        }
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of pages bound in parallel.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Number of pages bound at once: `max_processes` capped at the core count.
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_processes.map(|n| n.min(cores)).unwrap_or(cores)
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// The stock defaults as a `toml::Value::Table`, the base layer for merging.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
}

/// Layer a user `config.toml` over the stock defaults. Sections merge per
/// key, so `[binding] fail_on_skip = true` keeps the default `report_skipped`.
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

/// Read `config.toml` from `dir` as a raw TOML value, `None` if absent.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    Ok(Some(toml::from_str(&content)?))
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

/// Load config from `config.toml` in the site directory.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    resolve_config(stock_defaults_value()?, load_raw_config(root)?)
}

/// A fully-commented stock `config.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# fogbind configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# Content document, relative to the site root.
content_path = "content.json"

# ---------------------------------------------------------------------------
# Binding
# ---------------------------------------------------------------------------
[binding]
# Make `fogbind check` fail when any binder skipped (missing anchor or
# missing data). Skips never fail `build`.
fail_on_skip = false

# List every skipped binder in the command summary.
report_skipped = true

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum pages bound in parallel.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = SiteConfig::default();
        assert_eq!(config.content_path, "content.json");
        assert!(!config.binding.fail_on_skip);
        assert!(config.binding.report_skipped);
        assert_eq!(config.processing.max_processes, None);
    }

    #[test]
    fn parse_partial_config() {
        let config: SiteConfig = toml::from_str(
            r#"
[binding]
fail_on_skip = true
"#,
        )
        .unwrap();
        assert!(config.binding.fail_on_skip);
        assert!(config.binding.report_skipped);
        assert_eq!(config.content_path, "content.json");
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(load_config(tmp.path()).unwrap(), SiteConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
content_path = "data/site.json"

[processing]
max_processes = 2
"#,
        )
        .unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.content_path, "data/site.json");
        assert_eq!(config.processing.max_processes, Some(2));
        assert!(config.binding.report_skipped);
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "content_path = [").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    // =========================================================================
    // Unknown keys and validation
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("content_root = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_nested_key_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str(
            r#"
[binding]
fail_on_skips = true
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_key_rejected_via_load_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[theme]\ncolor = \"red\"\n").unwrap();
        assert!(load_config(tmp.path()).is_err());
    }

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_content_path() {
        let config = SiteConfig {
            content_path: "  ".into(),
            ..SiteConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_escaping_content_path() {
        for path in ["../content.json", "/etc/content.json"] {
            let config = SiteConfig {
                content_path: path.into(),
                ..SiteConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::Validation(_))),
                "{path}"
            );
        }
    }

    #[test]
    fn validate_rejects_zero_workers() {
        let config = SiteConfig {
            processing: ProcessingConfig {
                max_processes: Some(0),
            },
            ..SiteConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn worker_count_never_exceeds_cores() {
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        let with = |max_processes| effective_threads(&ProcessingConfig { max_processes });
        assert_eq!(with(None), cores);
        assert_eq!(with(Some(cores + 64)), cores);
        assert_eq!(with(Some(1)), 1);
    }

    // =========================================================================
    // Layering user config over the stock defaults
    // =========================================================================

    #[test]
    fn user_binding_flags_override_only_what_they_name() {
        let overlay: toml::Value = toml::from_str("[binding]\nfail_on_skip = true\n").unwrap();
        let config = resolve_config(stock_defaults_value().unwrap(), Some(overlay)).unwrap();
        assert!(config.binding.fail_on_skip);
        assert!(config.binding.report_skipped);
        assert_eq!(config.content_path, "content.json");
    }

    #[test]
    fn resolve_config_rejects_invalid_values() {
        let overlay: toml::Value = toml::from_str(r#"content_path = "../x.json""#).unwrap();
        let result = resolve_config(stock_defaults_value().unwrap(), Some(overlay));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // stock_config_toml
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }
}
