//! Section binders and the binding pass.
//!
//! A section binder maps one slice of the [`ContentDocument`] onto one anchor
//! in the page shell. Every binder follows the same guard policy:
//!
//! 1. Locate the anchor. If it is absent, record [`BindOutcome::NoAnchor`].
//! 2. Read the data slot. If it is missing or malformed, record
//!    [`BindOutcome::NoData`].
//! 3. Otherwise replace the anchor's text (scalars) or regenerate its
//!    children (lists), and record [`BindOutcome::Bound`].
//!
//! Skips never abort the pass and are never surfaced as errors; they only
//! show up in the [`BindReport`], one entry per anchor.
//!
//! ## Dispatch
//!
//! [`bind_page`] runs the common binders (navigation, footer, loading
//! screen) and then exactly one page group chosen by [`PageIdentity`].

mod about;
mod challenges;
mod common;
mod dashboard;
mod home;
mod register;

pub use dashboard::chart_anchor_selector;

use crate::content::{ContentDocument, Text};
use crate::dom::{Anchor, Document};
use crate::page::PageIdentity;
use maud::Markup;
use std::fmt;

/// Why a binder did or did not touch its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindOutcome {
    Bound,
    NoAnchor,
    NoData,
}

impl BindOutcome {
    pub fn is_skip(self) -> bool {
        !matches!(self, BindOutcome::Bound)
    }
}

impl fmt::Display for BindOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BindOutcome::Bound => "bound",
            BindOutcome::NoAnchor => "skipped: no anchor",
            BindOutcome::NoData => "skipped: no data",
        })
    }
}

/// One anchor visited by the pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindRecord {
    /// Content path the binder reads, e.g. `home.hero.title`.
    pub binder: String,
    /// Selector used to locate the anchor.
    pub selector: String,
    pub outcome: BindOutcome,
}

/// Every anchor the pass visited, in binding order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindReport {
    pub records: Vec<BindRecord>,
}

impl BindReport {
    pub fn bound(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome == BindOutcome::Bound)
            .count()
    }

    pub fn skipped(&self) -> impl Iterator<Item = &BindRecord> {
        self.records.iter().filter(|r| r.outcome.is_skip())
    }

    /// Outcome recorded for a binder, if the pass visited it.
    pub fn outcome(&self, binder: &str) -> Option<BindOutcome> {
        self.records
            .iter()
            .find(|r| r.binder == binder)
            .map(|r| r.outcome)
    }
}

/// A single binding pass over one document.
///
/// Holds the shell being mutated, the location (for active-link marking)
/// and the report being built.
pub(crate) struct Pass<'a> {
    dom: &'a mut Document,
    location: &'a str,
    report: BindReport,
}

impl<'a> Pass<'a> {
    fn new(dom: &'a mut Document, location: &'a str) -> Self {
        Self {
            dom,
            location,
            report: BindReport::default(),
        }
    }

    fn finish(self) -> BindReport {
        self.report
    }

    fn record(&mut self, binder: &str, selector: &str, outcome: BindOutcome) {
        if outcome.is_skip() {
            tracing::debug!(binder, selector, %outcome, "binder skipped");
        }
        self.report.records.push(BindRecord {
            binder: binder.to_string(),
            selector: selector.to_string(),
            outcome,
        });
    }

    /// Locate `selector`, optionally inside `scope`.
    ///
    /// `Some(None)` means a scope was requested and does not exist.
    fn locate(&self, scope: Option<Option<Anchor>>, selector: &str) -> Option<Anchor> {
        match scope {
            None => self.dom.select_first(selector),
            Some(Some(scope)) => self.dom.select_within(scope, selector),
            Some(None) => None,
        }
    }

    /// Guard sequence shared by every binder. Returns the anchor and data
    /// when both are present, recording the skip otherwise.
    fn guard<'d, T: ?Sized>(
        &mut self,
        binder: &str,
        scope: Option<Option<Anchor>>,
        selector: &str,
        data: Option<&'d T>,
    ) -> Option<(Anchor, &'d T)> {
        let Some(anchor) = self.locate(scope, selector) else {
            self.record(binder, selector, BindOutcome::NoAnchor);
            return None;
        };
        let Some(data) = data else {
            self.record(binder, selector, BindOutcome::NoData);
            return None;
        };
        Some((anchor, data))
    }

    /// Bind a scalar as the anchor's text content.
    fn text(&mut self, binder: &str, selector: &str, value: Option<&Text>) -> Option<Anchor> {
        self.text_in(None, binder, selector, value)
    }

    fn text_in(
        &mut self,
        scope: Option<Option<Anchor>>,
        binder: &str,
        selector: &str,
        value: Option<&Text>,
    ) -> Option<Anchor> {
        let (anchor, value) = self.guard(binder, scope, selector, value)?;
        self.dom.set_text(anchor, value);
        self.record(binder, selector, BindOutcome::Bound);
        Some(anchor)
    }

    /// Regenerate the anchor's children from a list, one fragment per item.
    fn list<T>(
        &mut self,
        binder: &str,
        selector: &str,
        items: Option<&Vec<T>>,
        render: impl Fn(&[T]) -> Markup,
    ) {
        let Some((anchor, items)) = self.guard(binder, None, selector, items) else {
            return;
        };
        self.dom.replace_children(anchor, render(items.as_slice()));
        self.record(binder, selector, BindOutcome::Bound);
    }
}

/// Run the full binding pass for one page.
///
/// Common binders always run; then the group for `page` runs. `location` is
/// the navigation path the page is served at and only affects active-link
/// marking.
pub fn bind_page(
    dom: &mut Document,
    content: &ContentDocument,
    page: PageIdentity,
    location: &str,
) -> BindReport {
    let mut pass = Pass::new(dom, location);

    common::bind(&mut pass, content.common.get());

    match page {
        PageIdentity::Home => home::bind(&mut pass, content.home.get()),
        PageIdentity::Challenges => challenges::bind(&mut pass, content.challenges.get()),
        PageIdentity::Dashboard => dashboard::bind(&mut pass, content.dashboard.get()),
        PageIdentity::Register => register::bind(&mut pass, content.register.get()),
        PageIdentity::About => about::bind(&mut pass, content.about.get()),
    }

    pass.finish()
}

/// Title/subtitle pair shared by the secondary pages.
fn bind_header(
    pass: &mut Pass<'_>,
    page: &str,
    header: Option<&crate::content::PageHeader>,
    title_selector: &str,
    subtitle_selector: &str,
) {
    pass.text(
        &format!("{page}.header.title"),
        title_selector,
        header.and_then(|h| h.title.get()),
    );
    pass.text(
        &format!("{page}.header.subtitle"),
        subtitle_selector,
        header.and_then(|h| h.subtitle.get()),
    );
}

/// CTA block shared by home and about.
fn bind_cta(pass: &mut Pass<'_>, page: &str, cta: Option<&crate::content::CallToAction>) {
    pass.text(
        &format!("{page}.cta.title"),
        ".cta-section .cta-title",
        cta.and_then(|c| c.title.get()),
    );
    pass.text(
        &format!("{page}.cta.text"),
        ".cta-section .cta-text",
        cta.and_then(|c| c.text.get()),
    );
    pass.list(
        &format!("{page}.cta.buttons"),
        ".cta-section .cta-buttons",
        cta.and_then(|c| c.buttons.get()),
        |buttons| crate::fragments::list(buttons, crate::fragments::button),
    );
}
