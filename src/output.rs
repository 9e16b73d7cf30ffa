//! CLI output formatting.
//!
//! # Page-First Display
//!
//! Every bound shell is shown by file name and the page it resolved to,
//! followed by a one-line tally. Skipped binders, when reported, are
//! indented beneath their page with the selector they looked for.
//!
//! # Output Format
//!
//! ## Build / Check
//!
//! ```text
//! about.html → About (18 bound)
//! index.html → Home (17 bound, 1 skipped)
//!     home.workshops (.workshop-grid): skipped: no anchor
//! register.html → Register (static markup kept)
//!
//! Bound 2 pages, 1 binder skipped, 1 page kept static markup
//! ```
//!
//! ## Resolve
//!
//! ```text
//! /2026/about.html → About
//! ```
//!
//! # Architecture
//!
//! Each display has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::config::BindingConfig;
use crate::engine::BindState;
use crate::page::PageIdentity;
use crate::site::{PageReport, SiteReport};

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    format!("{n} {}", if n == 1 { one } else { many })
}

/// Format one page: header line plus, optionally, its skipped binders.
pub fn format_page_report(page: &PageReport, binding: &BindingConfig) -> Vec<String> {
    let header = format!("{} → {}", page.file_name, page.page.title());
    let Some(report) = page.state.report() else {
        return vec![format!("{header} (static markup kept)")];
    };

    let skipped: Vec<_> = report.skipped().collect();
    let mut lines = vec![if skipped.is_empty() {
        format!("{header} ({} bound)", report.bound())
    } else {
        format!(
            "{header} ({} bound, {} skipped)",
            report.bound(),
            skipped.len()
        )
    }];

    if binding.report_skipped {
        for record in skipped {
            lines.push(format!(
                "{}{} ({}): {}",
                indent(1),
                record.binder,
                record.selector,
                record.outcome
            ));
        }
    }
    lines
}

/// Format the whole site: one block per page, then a summary line.
pub fn format_site_report(report: &SiteReport, binding: &BindingConfig) -> Vec<String> {
    let mut lines: Vec<String> = report
        .pages
        .iter()
        .flat_map(|page| format_page_report(page, binding))
        .collect();

    let loaded = report.pages.len() - report.unloaded();
    let mut summary = format!(
        "Bound {}, {}",
        plural(loaded, "page", "pages"),
        plural(report.skipped(), "binder skipped", "binders skipped")
    );
    if report.unloaded() > 0 {
        summary.push_str(&format!(
            ", {} static markup",
            plural(report.unloaded(), "page kept", "pages kept")
        ));
    }
    if !report.copied.is_empty() {
        summary.push_str(&format!(
            ", copied {}",
            plural(report.copied.len(), "file", "files")
        ));
    }
    lines.push(String::new());
    lines.push(summary);
    lines
}

pub fn print_site_report(report: &SiteReport, binding: &BindingConfig) {
    for line in format_site_report(report, binding) {
        println!("{}", line);
    }
}

pub fn format_resolve(location: &str, page: PageIdentity) -> String {
    format!("{location} → {}", page.title())
}

pub fn print_resolve(location: &str, page: PageIdentity) {
    println!("{}", format_resolve(location, page));
}
