//! Shared test utilities for the fogbind test suite.
//!
//! Provides in-memory content sources, fixture loading, and DOM lookup
//! helpers that work on a bound [`Document`].
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let content = fixture_content();
//! let mut dom = fixture_shell(PageIdentity::Home);
//! bind_page(&mut dom, &content, PageIdentity::Home, "/");
//!
//! assert_eq!(text_of(&dom, ".hero-badge"), "Cyber Security Summit");
//! assert_eq!(count_of(&dom, ".status-section .status-card"), 3);
//! ```

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

use scraper::Selector;

use crate::content::ContentDocument;
use crate::dom::Document;
use crate::loader::{ContentSource, FetchError, Response};
use crate::page::PageIdentity;

// =========================================================================
// Fixture setup
// =========================================================================

/// Directory holding the sample site.
pub fn fixture_site_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site")
}

/// Copy `fixtures/site/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    copy_dir_recursive(&fixture_site_dir(), tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// The sample content document, parsed.
pub fn fixture_content() -> ContentDocument {
    let path = fixture_site_dir().join("content.json");
    let json = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    ContentDocument::from_json(&json).unwrap()
}

/// The sample shell for `page`, parsed and unbound.
pub fn fixture_shell(page: PageIdentity) -> Document {
    let path = fixture_site_dir().join(page.file_name());
    let source = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    Document::parse(&source)
}

// =========================================================================
// Content sources
// =========================================================================

/// Answers every fetch with the same response.
pub struct StaticSource {
    response: Response,
}

impl StaticSource {
    pub fn ok(body: &str) -> Self {
        Self {
            response: Response::ok(body),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            response: Response::with_status(status),
        }
    }
}

impl ContentSource for StaticSource {
    fn fetch(&self, _path: &str) -> Result<Response, FetchError> {
        Ok(self.response.clone())
    }
}

/// Fails every fetch at the transport level.
pub struct BrokenSource;

impl ContentSource for BrokenSource {
    fn fetch(&self, _path: &str) -> Result<Response, FetchError> {
        Err(FetchError::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }
}

/// Counts fetches made through it.
pub struct CountingSource<S> {
    inner: S,
    fetches: AtomicUsize,
}

impl<S> CountingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl<S: ContentSource> ContentSource for CountingSource<S> {
    fn fetch(&self, path: &str) -> Result<Response, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch(path)
    }
}

// =========================================================================
// DOM lookups
// =========================================================================

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("bad selector '{css}': {e:?}"))
}

/// Text of the first element matching `css`. Panics if nothing matches.
pub fn text_of(doc: &Document, css: &str) -> String {
    doc.html()
        .root_element()
        .select(&selector(css))
        .next()
        .map(|el| el.text().collect())
        .unwrap_or_else(|| panic!("no element matches '{css}'"))
}

/// Text of every element matching `css`, in document order.
pub fn texts_of(doc: &Document, css: &str) -> Vec<String> {
    doc.html()
        .root_element()
        .select(&selector(css))
        .map(|el| el.text().collect())
        .collect()
}

/// Attribute of the first element matching `css`.
pub fn attr_of(doc: &Document, css: &str, name: &str) -> Option<String> {
    doc.html()
        .root_element()
        .select(&selector(css))
        .next()
        .and_then(|el| el.attr(name).map(str::to_string))
}

pub fn count_of(doc: &Document, css: &str) -> usize {
    doc.html().root_element().select(&selector(css)).count()
}

/// Inner HTML of the first element matching `css`. Panics if nothing matches.
pub fn inner_html(doc: &Document, css: &str) -> String {
    doc.html()
        .root_element()
        .select(&selector(css))
        .next()
        .map(|el| el.inner_html())
        .unwrap_or_else(|| panic!("no element matches '{css}'"))
}
