//! Dashboard page: header, stat cards, chart card titles.

use super::{BindOutcome, Pass, bind_header};
use crate::content::{ChartTitle, DashboardContent};
use crate::fragments;
use indexmap::IndexMap;

/// Key whose anchor does not follow the `#{key}-chart` pattern.
const ACTIVITY_FEED_KEY: &str = "activity_feed";

/// Selector of the element that sits inside a chart's card.
///
/// `activity_feed` maps to `#activity-feed`; every other key maps to
/// `#{key}-chart`. The exception is a fixed rule of the page shell, not an
/// instance of a general underscore-to-dash translation.
pub fn chart_anchor_selector(key: &str) -> String {
    if key == ACTIVITY_FEED_KEY {
        "#activity-feed".to_string()
    } else {
        format!("#{key}-chart")
    }
}

pub(super) fn bind(pass: &mut Pass<'_>, dashboard: Option<&DashboardContent>) {
    bind_header(
        pass,
        "dashboard",
        dashboard.and_then(|d| d.header.get()),
        ".dashboard-title",
        ".dashboard-subtitle",
    );

    pass.list(
        "dashboard.stats",
        ".stats-grid",
        dashboard.and_then(|d| d.stats.get()),
        |stats| fragments::list(stats, fragments::dashboard_stat),
    );

    bind_chart_titles(pass, dashboard.and_then(|d| d.charts.get()));
}

/// Each chart entry updates the title and icon of the `.dashboard-card`
/// enclosing its anchor. Entries bind in document order.
fn bind_chart_titles(pass: &mut Pass<'_>, charts: Option<&IndexMap<String, ChartTitle>>) {
    let Some(charts) = charts else {
        pass.record("dashboard.charts", ".dashboard-card", BindOutcome::NoData);
        return;
    };

    for (key, chart) in charts {
        let selector = chart_anchor_selector(key);
        let card = pass
            .dom
            .select_first(&selector)
            .and_then(|anchor| pass.dom.closest(anchor, ".dashboard-card"));
        let scope = Some(card);

        pass.text_in(
            scope,
            &format!("dashboard.charts.{key}.title"),
            ".card-title",
            chart.title.get(),
        );
        pass.text_in(
            scope,
            &format!("dashboard.charts.{key}.icon"),
            ".card-icon",
            chart.icon.get(),
        );
        if card.is_none() {
            tracing::debug!(
                key = key.as_str(),
                selector = selector.as_str(),
                "no dashboard card for chart"
            );
        }
    }
}
