//! Markup templates for repeated content records.
//!
//! One function per record shape; each maps a typed record onto the fixed
//! class structure the page stylesheet expects. All interpolation goes
//! through maud and is escaped, and link targets pass through [`safe_href`].

use crate::content::{
    Button, CategorySummary, ChallengeCategory, DashboardStat, EventDetail, Feature, NavLink,
    ProtocolCard, SocialLink, Stat, StatusCard, TeamMember, TimelineEntry, Text,
};
use crate::page::PageIdentity;
use maud::{Markup, html};

/// Schemes that execute code when followed.
const UNSAFE_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

/// Neutralize script-bearing link targets. Anything else passes unchanged.
pub fn safe_href(href: &str) -> &str {
    let normalized: String = href
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    if UNSAFE_SCHEMES.iter().any(|s| normalized.starts_with(s)) {
        "#"
    } else {
        href
    }
}

/// Whether a navigation link points at the current location.
///
/// A link is active when the location path contains its href, or when it
/// targets `index.html` and the location is a directory. Empty hrefs are
/// never active.
pub fn is_active_link(location: &str, href: &str) -> bool {
    !href.is_empty()
        && (location.contains(href) || (href == "index.html" && location.ends_with('/')))
}

/// Render every item in order with `render`.
pub fn list<T>(items: &[T], render: impl Fn(&T) -> Markup) -> Markup {
    html! {
        @for item in items {
            (render(item))
        }
    }
}

pub fn nav_links(links: &[NavLink], location: &str) -> Markup {
    html! {
        @for link in links {
            li {
                a.nav-item.active[is_active_link(location, &link.href)]
                    href=(safe_href(&link.href))
                    aria-label=(link.label.as_str()) {
                    (link.label.as_str())
                }
            }
        }
    }
}

pub fn social_link(link: &SocialLink) -> Markup {
    html! {
        a.social-link href=(safe_href(&link.href)) aria-label=(link.name.as_str())
            target="_blank" rel="noopener" {
            i class=(link.icon.as_str()) {}
        }
    }
}

pub fn button(btn: &Button) -> Markup {
    html! {
        a.btn.btn-secondary[!btn.primary] href=(safe_href(&btn.href)) { (btn.text.as_str()) }
    }
}

pub fn status_card(card: &StatusCard) -> Markup {
    html! {
        div.status-card data-animate {
            div.status-icon { i class=(card.icon.as_str()) {} }
            div.status-title { (card.title.as_str()) }
            div.status-value { (card.value.as_str()) }
            div.status-description { (card.description.as_str()) }
        }
    }
}

pub fn protocol_card(card: &ProtocolCard) -> Markup {
    html! {
        div.protocol-card data-href=(safe_href(&card.href)) role="button" tabindex="0"
            aria-label=(card.title.as_str()) {
            div.card-icon { i class=(card.icon.as_str()) {} }
            h3.card-title { (card.title.as_str()) }
            p.card-description { (card.description.as_str()) }
            ul.card-features {
                @for feature in &card.features {
                    li { (feature.as_str()) }
                }
            }
        }
    }
}

pub fn workshop(workshop: &Feature) -> Markup {
    html! {
        div.workshop-card data-animate {
            div.workshop-icon { i class=(workshop.icon.as_str()) {} }
            h3.workshop-title { (workshop.title.as_str()) }
            p.workshop-description { (workshop.description.as_str()) }
        }
    }
}

pub fn challenge_category(cat: &ChallengeCategory) -> Markup {
    html! {
        div.category-card data-category=(cat.id.as_str()) data-difficulty=(cat.difficulty.as_str()) {
            div.category-header {
                span.category-icon { (cat.icon.as_str()) }
                div.category-info {
                    h3 { (cat.title.as_str()) }
                    div.category-meta {
                        span class={ "difficulty " (cat.difficulty.as_str()) } { (cat.difficulty.as_str()) }
                        span { (cat.challenge_count.as_str()) " Challenges" }
                        span { (cat.total_points.as_str()) " Points" }
                    }
                }
            }
            p.category-description { (cat.description.as_str()) }
            ul.challenge-list {
                @for challenge in &cat.challenges {
                    li.challenge-item {
                        span.challenge-name { (challenge.name.as_str()) }
                        span.challenge-points { (challenge.points.as_str()) " pts" }
                    }
                }
            }
            div.category-stats {
                div.stat-item {
                    div.stat-value { (cat.stats.participants.as_str()) }
                    div.stat-label { "Participants" }
                }
                div.stat-item {
                    div.stat-value { (cat.stats.completion.as_str()) }
                    div.stat-label { "Completion" }
                }
                a.join-button href=(PageIdentity::Register.file_name()) { "Join Challenge" }
            }
        }
    }
}

pub fn stat(stat: &Stat) -> Markup {
    html! {
        div.stat-card data-animate {
            div.stat-icon { (stat.icon.as_str()) }
            div.stat-value { (stat.value.as_str()) }
            div.stat-label { (stat.label.as_str()) }
        }
    }
}

fn non_empty(text: &Text) -> Option<&str> {
    (!text.is_empty()).then_some(text.as_str())
}

/// Dashboard stat card. The value carries the record's `id` and the change
/// line `{id}-change`, so live counters can find them; an empty id emits
/// neither.
pub fn dashboard_stat(stat: &DashboardStat) -> Markup {
    let id = non_empty(&stat.id);
    let change_id = id.map(|id| format!("{id}-change"));
    html! {
        div.stat-card data-animate {
            div.stat-icon { (stat.icon.as_str()) }
            div.stat-value id=[id] { (stat.value.as_str()) }
            div.stat-label { (stat.label.as_str()) }
            div.stat-change id=[change_id] { (stat.change.as_str()) }
        }
    }
}

pub fn benefit(item: &Text) -> Markup {
    html! {
        div.benefit-item {
            span.benefit-icon { "✓" }
            span { (item.as_str()) }
        }
    }
}

pub fn highlight(highlight: &Feature) -> Markup {
    html! {
        div.highlight-card data-animate {
            div.highlight-icon { (highlight.icon.as_str()) }
            h3.highlight-title { (highlight.title.as_str()) }
            p.highlight-description { (highlight.description.as_str()) }
        }
    }
}

pub fn event_detail(detail: &EventDetail) -> Markup {
    html! {
        div.detail-card {
            h4 { (detail.title.as_str()) }
            p { (detail.content.as_str()) }
            p { (detail.subtitle.as_str()) }
            ul.detail-list {
                @for item in &detail.items {
                    li { (item.as_str()) }
                }
            }
        }
    }
}

pub fn category_summary(cat: &CategorySummary) -> Markup {
    html! {
        div.detail-card {
            h4 { (cat.title.as_str()) }
            p { (cat.description.as_str()) }
        }
    }
}

pub fn timeline_entry(entry: &TimelineEntry) -> Markup {
    html! {
        div.timeline-item {
            div.timeline-content {
                h3.timeline-title { (entry.title.as_str()) }
                p.timeline-description { (entry.description.as_str()) }
            }
            div.timeline-date { (entry.date.as_str()) }
        }
    }
}

pub fn team_member(member: &TeamMember) -> Markup {
    html! {
        div.team-member data-animate {
            div.member-avatar { (member.avatar.as_str()) }
            h3.member-name { (member.name.as_str()) }
            p.member-role { (member.role.as_str()) }
            p.member-bio { (member.bio.as_str()) }
        }
    }
}

/// Empty container created on demand for timeline items.
pub fn timeline_items() -> Markup {
    html! { div.timeline-items {} }
}
