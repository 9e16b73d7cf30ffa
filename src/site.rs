//! Site build: bind every page shell in a directory.
//!
//! ```text
//! site/                          dist/
//! ├── config.toml    (read)
//! ├── content.json   ──copy──►   ├── content.json
//! ├── index.html     ──bind──►   ├── index.html
//! ├── about.html     ──bind──►   ├── about.html
//! └── css/style.css  ──copy──►   └── css/style.css
//! ```
//!
//! Shells are the `*.html` files at the top level of the source directory.
//! Each one is bound on the rayon pool with location `/<file name>` and its
//! own fresh load of the content document. A shell whose load fails is
//! written out byte for byte.
//!
//! [`check`] runs the same binding and writes nothing.

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::config::{BindingConfig, ConfigError, SiteConfig};
use crate::dom::Document;
use crate::engine::{self, BindState};
use crate::loader::FileSource;
use crate::page::{self, PageIdentity};

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Source directory not found: {0}")]
    SourceNotFound(PathBuf),
    #[error("No page shells (*.html) in {0}")]
    NoShells(PathBuf),
    #[error("Check failed: {unloaded} page(s) kept static markup, {skipped} binder(s) skipped")]
    CheckFailed { unloaded: usize, skipped: usize },
}

/// Outcome of binding one shell.
#[derive(Debug, Clone)]
pub struct PageReport {
    /// Shell file name, e.g. `about.html`.
    pub file_name: String,
    /// Location the page was bound at.
    pub location: String,
    pub page: PageIdentity,
    pub state: BindState,
}

impl PageReport {
    pub fn skipped(&self) -> usize {
        self.state.report().map_or(0, |r| r.skipped().count())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SiteReport {
    /// One entry per shell, sorted by file name.
    pub pages: Vec<PageReport>,
    /// Non-shell files copied to the output, relative to the source root.
    pub copied: Vec<PathBuf>,
}

impl SiteReport {
    pub fn unloaded(&self) -> usize {
        self.pages.iter().filter(|p| !p.state.is_loaded()).count()
    }

    pub fn skipped(&self) -> usize {
        self.pages.iter().map(PageReport::skipped).sum()
    }

    /// Pass/fail for `check`: every page must load, and with `fail_on_skip`
    /// no binder may skip.
    pub fn verdict(&self, binding: &BindingConfig) -> Result<(), SiteError> {
        let unloaded = self.unloaded();
        let skipped = self.skipped();
        if unloaded > 0 || (binding.fail_on_skip && skipped > 0) {
            return Err(SiteError::CheckFailed { unloaded, skipped });
        }
        Ok(())
    }
}

/// A shell discovered in the source directory.
#[derive(Debug, Clone)]
struct Shell {
    path: PathBuf,
    file_name: String,
}

/// Top-level `*.html` files, sorted by name.
fn discover_shells(source: &Path) -> Result<Vec<Shell>, SiteError> {
    let mut shells = Vec::new();
    for entry in WalkDir::new(source).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(file_name) = entry.file_name().to_str() else {
            continue;
        };
        if is_shell(file_name) {
            shells.push(Shell {
                path: entry.path().to_path_buf(),
                file_name: file_name.to_string(),
            });
        }
    }
    Ok(shells)
}

fn is_shell(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html"))
}

/// Load and bind one shell. Returns the report and, when the page was
/// bound, its serialized markup.
fn bind_shell(
    source: &FileSource,
    config: &SiteConfig,
    shell: &Shell,
) -> Result<(PageReport, Option<String>), SiteError> {
    let markup = fs::read_to_string(&shell.path)?;
    let location = format!("/{}", shell.file_name);
    let mut document = Document::parse(&markup);

    let state = engine::run_at(source, &config.content_path, &mut document, &location);
    let bound = state.is_loaded().then(|| document.to_html());

    let report = PageReport {
        page: page::resolve(&location),
        file_name: shell.file_name.clone(),
        location,
        state,
    };
    Ok((report, bound))
}

fn bind_all(
    source_dir: &Path,
    config: &SiteConfig,
) -> Result<(Vec<Shell>, Vec<(PageReport, Option<String>)>), SiteError> {
    if !source_dir.is_dir() {
        return Err(SiteError::SourceNotFound(source_dir.to_path_buf()));
    }
    let shells = discover_shells(source_dir)?;
    if shells.is_empty() {
        return Err(SiteError::NoShells(source_dir.to_path_buf()));
    }

    let source = FileSource::new(source_dir);
    let results = shells
        .par_iter()
        .map(|shell| bind_shell(&source, config, shell))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((shells, results))
}

/// Bind every shell in `source_dir` and write the site to `output_dir`.
pub fn build(
    source_dir: &Path,
    output_dir: &Path,
    config: &SiteConfig,
) -> Result<SiteReport, SiteError> {
    let (shells, results) = bind_all(source_dir, config)?;
    fs::create_dir_all(output_dir)?;

    let mut pages = Vec::with_capacity(results.len());
    for (shell, (report, bound)) in shells.iter().zip(results) {
        let target = output_dir.join(&shell.file_name);
        match bound {
            Some(html) => fs::write(&target, html)?,
            None => {
                fs::copy(&shell.path, &target)?;
            }
        }
        pages.push(report);
    }

    let copied = copy_assets(source_dir, output_dir)?;
    Ok(SiteReport { pages, copied })
}

/// Bind every shell in `source_dir` without writing anything.
pub fn check(source_dir: &Path, config: &SiteConfig) -> Result<SiteReport, SiteError> {
    let (_, results) = bind_all(source_dir, config)?;
    Ok(SiteReport {
        pages: results.into_iter().map(|(report, _)| report).collect(),
        copied: Vec::new(),
    })
}

/// Copy every non-shell file, keeping relative paths. `config.toml` at the
/// root is a build input and stays behind, as does an output directory
/// nested inside the source.
fn copy_assets(source_dir: &Path, output_dir: &Path) -> Result<Vec<PathBuf>, SiteError> {
    let output_abs = output_dir.canonicalize()?;
    let mut copied = Vec::new();

    let walker = WalkDir::new(source_dir)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            e.path()
                .canonicalize()
                .map(|p| p != output_abs)
                .unwrap_or(true)
        });

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(source_dir) else {
            continue;
        };
        let top_level = relative.parent().is_none_or(|p| p.as_os_str().is_empty());
        let name = entry.file_name().to_str().unwrap_or_default();
        if top_level && (is_shell(name) || name == "config.toml") {
            continue;
        }

        let target = output_dir.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &target)?;
        copied.push(relative.to_path_buf());
    }
    Ok(copied)
}
