//! About page: header, mission, event details, categories, timeline, team, CTA.

use super::{BindOutcome, Pass, bind_cta, bind_header};
use crate::content::{AboutContent, TimelineEntry};
use crate::fragments;

/// Second detail section on the about page holds the category summaries.
const CATEGORY_SUMMARY_ANCHOR: &str = ".detail-section:nth-of-type(2) .detail-content";

pub(super) fn bind(pass: &mut Pass<'_>, about: Option<&AboutContent>) {
    bind_header(
        pass,
        "about",
        about.and_then(|a| a.header.get()),
        ".about-title",
        ".about-subtitle",
    );

    let mission = about.and_then(|a| a.mission.get());
    pass.text(
        "about.mission.title",
        ".mission-title",
        mission.and_then(|m| m.title.get()),
    );
    pass.text(
        "about.mission.text",
        ".mission-text",
        mission.and_then(|m| m.text.get()),
    );
    pass.list(
        "about.mission.highlights",
        ".mission-highlights",
        mission.and_then(|m| m.highlights.get()),
        |highlights| fragments::list(highlights, fragments::highlight),
    );

    pass.list(
        "about.eventDetails",
        ".detail-content",
        about.and_then(|a| a.event_details.get()),
        |details| fragments::list(details, fragments::event_detail),
    );
    pass.list(
        "about.challengeCategories",
        CATEGORY_SUMMARY_ANCHOR,
        about.and_then(|a| a.challenge_categories.get()),
        |categories| fragments::list(categories, fragments::category_summary),
    );

    bind_timeline(pass, about.and_then(|a| a.timeline.get()));

    pass.list(
        "about.team",
        ".team-grid",
        about.and_then(|a| a.team.get()),
        |team| fragments::list(team, fragments::team_member),
    );

    bind_cta(pass, "about", about.and_then(|a| a.cta.get()));
}

/// Timeline items live in `.timeline-items` inside `.timeline`. Shells that
/// only carry the section title get the container created right after it.
fn bind_timeline(pass: &mut Pass<'_>, timeline: Option<&Vec<TimelineEntry>>) {
    const BINDER: &str = "about.timeline";
    const SELECTOR: &str = ".timeline";

    let Some((section, entries)) = pass.guard(BINDER, None, SELECTOR, timeline) else {
        return;
    };

    let items = match pass.dom.select_within(section, ".timeline-items") {
        Some(items) => Some(items),
        None => match pass.dom.select_within(section, ".timeline-title") {
            Some(title) => pass.dom.insert_after(title, fragments::timeline_items()),
            None => pass.dom.append(section, fragments::timeline_items()),
        },
    };
    let Some(items) = items else {
        pass.record(BINDER, SELECTOR, BindOutcome::NoAnchor);
        return;
    };

    pass.dom.replace_children(
        items,
        fragments::list(entries, fragments::timeline_entry),
    );
    pass.record(BINDER, SELECTOR, BindOutcome::Bound);
}
