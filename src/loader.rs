//! Content document retrieval.
//!
//! The loader performs exactly one fetch of the content document per call and
//! parses it into a [`ContentDocument`]. There is no retry and no caching:
//! every call is a fresh fetch.
//!
//! [`load`] is the fail-soft entry point used by the engine. Any transport
//! error, non-success status, or parse error is logged and turned into
//! `None`, so the caller keeps the page's static markup. [`try_load`] exposes
//! the same path with the failure kept as a [`LoadError`].
//!
//! The fetch capability itself is the [`ContentSource`] trait. The crate ships
//! [`FileSource`], which serves relative paths out of a site directory with
//! HTTP-like status codes.

use crate::content::ContentDocument;
use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Well-known relative path of the content document.
pub const CONTENT_PATH: &str = "content.json";

/// The result of a fetch that reached its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("path escapes the site root: {0}")]
    OutsideRoot(String),
}

/// A generic fetch capability.
pub trait ContentSource {
    /// Fetch the resource at a relative path.
    ///
    /// Transport failures are `Err`; a reachable source that has nothing to
    /// serve answers with a non-success [`Response`].
    fn fetch(&self, path: &str) -> Result<Response, FetchError>;
}

impl<S: ContentSource + ?Sized> ContentSource for &S {
    fn fetch(&self, path: &str) -> Result<Response, FetchError> {
        (**self).fetch(path)
    }
}

/// Serves files from a site directory.
///
/// A missing file answers `404`, an unreadable one is a transport error.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ContentSource for FileSource {
    fn fetch(&self, path: &str) -> Result<Response, FetchError> {
        let relative = Path::new(path.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(FetchError::OutsideRoot(path.to_string()));
        }

        match std::fs::read_to_string(self.root.join(relative)) {
            Ok(body) => Ok(Response::ok(body)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Response::with_status(404)),
            Err(e) => Err(FetchError::Io(e)),
        }
    }
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fetch and parse the content document at `path`.
pub fn try_load(source: &dyn ContentSource, path: &str) -> Result<ContentDocument, LoadError> {
    let response = source.fetch(path)?;
    if !response.is_success() {
        return Err(LoadError::Status(response.status));
    }
    Ok(ContentDocument::from_json(&response.body)?)
}

/// Fail-soft load: logs the failure and returns `None`.
pub fn load(source: &dyn ContentSource, path: &str) -> Option<ContentDocument> {
    match try_load(source, path) {
        Ok(document) => Some(document),
        Err(e) => {
            tracing::error!(path, error = %e, "failed to load content");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{CountingSource, StaticSource};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn loads_a_well_formed_document() {
        let source = StaticSource::ok(r#"{ "common": { "loading": { "text": "BOOT" } } }"#);
        let doc = load(&source, CONTENT_PATH).unwrap();
        assert!(doc.common.is_present());
    }

    #[test]
    fn non_success_status_is_absent() {
        let source = StaticSource::status(500);
        assert!(load(&source, CONTENT_PATH).is_none());
        assert!(matches!(
            try_load(&source, CONTENT_PATH),
            Err(LoadError::Status(500))
        ));
    }

    #[test]
    fn invalid_json_is_absent() {
        let source = StaticSource::ok("{ not json");
        assert!(load(&source, CONTENT_PATH).is_none());
        assert!(matches!(
            try_load(&source, CONTENT_PATH),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn top_level_non_object_is_a_parse_failure() {
        let source = StaticSource::ok("[1, 2, 3]");
        assert!(load(&source, CONTENT_PATH).is_none());
    }

    #[test]
    fn every_load_is_a_fresh_fetch() {
        let source = CountingSource::new(StaticSource::ok("{}"));
        load(&source, CONTENT_PATH);
        load(&source, CONTENT_PATH);
        assert_eq!(source.count(), 2);
    }

    #[test]
    fn file_source_serves_relative_paths() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("content.json"), "{}").unwrap();
        let source = FileSource::new(tmp.path());

        let response = source.fetch("content.json").unwrap();
        assert!(response.is_success());
        assert_eq!(response.body, "{}");

        let response = source.fetch("/content.json").unwrap();
        assert!(response.is_success());
    }

    #[test]
    fn file_source_missing_file_is_404() {
        let tmp = TempDir::new().unwrap();
        let source = FileSource::new(tmp.path());
        assert_eq!(source.fetch("content.json").unwrap().status, 404);
        assert!(load(&source, CONTENT_PATH).is_none());
    }

    #[test]
    fn file_source_rejects_parent_traversal() {
        let tmp = TempDir::new().unwrap();
        let source = FileSource::new(tmp.path());
        assert!(matches!(
            source.fetch("../secret.json"),
            Err(FetchError::OutsideRoot(_))
        ));
    }
}
