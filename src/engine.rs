//! One page load, end to end.
//!
//! ```text
//! location ──► page::resolve ──► PageIdentity
//! source   ──► loader::load  ──► Option<ContentDocument>
//!                                  │
//!                 None ◄───────────┴──────────► Some(content)
//!                  │                                 │
//!             Unloaded                     bind::bind_page(document)
//!        (static markup kept)                        │
//!                                              Loaded(report)
//! ```
//!
//! Each call fetches the content document once. Nothing is cached between
//! calls, so two loads of the same page fetch twice.

use crate::bind::{self, BindReport};
use crate::dom::Document;
use crate::loader::{self, CONTENT_PATH, ContentSource};
use crate::page;

/// What a page load did to its document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindState {
    /// The content document could not be loaded; the page is untouched.
    Unloaded,
    /// The binding pass ran.
    Loaded(BindReport),
}

impl BindState {
    pub fn report(&self) -> Option<&BindReport> {
        match self {
            BindState::Unloaded => None,
            BindState::Loaded(report) => Some(report),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, BindState::Loaded(_))
    }
}

/// Load the content document from its well-known path and bind `document`.
pub fn run(source: &dyn ContentSource, document: &mut Document, location: &str) -> BindState {
    run_at(source, CONTENT_PATH, document, location)
}

/// Same as [`run`], with the content document read from `content_path`.
pub fn run_at(
    source: &dyn ContentSource,
    content_path: &str,
    document: &mut Document,
    location: &str,
) -> BindState {
    let identity = page::resolve(location);
    let Some(content) = loader::load(source, content_path) else {
        tracing::warn!(
            location,
            page = %identity,
            "content unavailable, keeping static markup"
        );
        return BindState::Unloaded;
    };

    let report = bind::bind_page(document, &content, identity, location);
    tracing::info!(
        location,
        page = %identity,
        bound = report.bound(),
        skipped = report.skipped().count(),
        "page bound"
    );
    BindState::Loaded(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bind::BindOutcome;
    use crate::page::PageIdentity;
    use crate::test_helpers::{
        BrokenSource, CountingSource, StaticSource, fixture_shell, fixture_site_dir, text_of,
    };
    use crate::loader::FileSource;

    #[test]
    fn load_failure_leaves_markup_intact() {
        for source in [StaticSource::status(404), StaticSource::ok("{ broken")] {
            let mut dom = fixture_shell(PageIdentity::Home);
            let before = dom.to_html();
            assert_eq!(run(&source, &mut dom, "/"), BindState::Unloaded);
            assert_eq!(dom.to_html(), before);
        }
    }

    #[test]
    fn transport_failure_is_unloaded() {
        let mut dom = fixture_shell(PageIdentity::About);
        let before = dom.to_html();
        assert_eq!(run(&BrokenSource, &mut dom, "/about.html"), BindState::Unloaded);
        assert_eq!(dom.to_html(), before);
    }

    #[test]
    fn successful_load_binds_the_resolved_page() {
        let source = FileSource::new(fixture_site_dir());
        let mut dom = fixture_shell(PageIdentity::Register);
        let state = run(&source, &mut dom, "/register.html");

        let report = state.report().unwrap();
        assert_eq!(
            report.outcome("register.header.title"),
            Some(BindOutcome::Bound)
        );
        assert!(report.outcome("home.hero.title").is_none());
        assert_eq!(text_of(&dom, ".form-title"), "Join the Summit");
    }

    #[test]
    fn unknown_location_binds_as_home() {
        let source = FileSource::new(fixture_site_dir());
        let mut dom = fixture_shell(PageIdentity::Home);
        let state = run(&source, &mut dom, "/nowhere.html");
        assert_eq!(
            state.report().unwrap().outcome("home.hero.title"),
            Some(BindOutcome::Bound)
        );
    }

    #[test]
    fn empty_document_binds_nothing_but_is_loaded() {
        let source = StaticSource::ok("{}");
        let mut dom = fixture_shell(PageIdentity::Dashboard);
        let state = run(&source, &mut dom, "/dashboard.html");
        assert!(state.is_loaded());
        assert_eq!(state.report().unwrap().bound(), 0);
    }

    #[test]
    fn each_run_fetches_once() {
        let source = CountingSource::new(StaticSource::ok("{}"));
        let mut dom = fixture_shell(PageIdentity::Home);
        run(&source, &mut dom, "/");
        assert_eq!(source.count(), 1);
        run(&source, &mut dom, "/");
        assert_eq!(source.count(), 2);
    }

    #[test]
    fn custom_content_path_is_fetched() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("data")).unwrap();
        std::fs::write(
            tmp.path().join("data/site.json"),
            r#"{ "register": { "header": { "title": "Custom" } } }"#,
        )
        .unwrap();
        let source = FileSource::new(tmp.path());
        let mut dom = fixture_shell(PageIdentity::Register);

        assert_eq!(run(&source, &mut dom, "/register.html"), BindState::Unloaded);
        assert!(run_at(&source, "data/site.json", &mut dom, "/register.html").is_loaded());
        assert_eq!(text_of(&dom, ".form-title"), "Custom");
    }
}
