//! Home page: hero, status cards, protocol cards, workshops, CTA.

use super::{Pass, bind_cta};
use crate::content::HomeContent;
use crate::fragments;

pub(super) fn bind(pass: &mut Pass<'_>, home: Option<&HomeContent>) {
    let hero = home.and_then(|h| h.hero.get());
    pass.text(
        "home.hero.badge",
        ".hero-badge",
        hero.and_then(|h| h.badge.get()),
    );
    let title = hero.and_then(|h| h.title.get());
    if let (Some(anchor), Some(title)) = (pass.text("home.hero.title", ".hero-title", title), title)
    {
        // The glitch effect reads its copy of the title from `data-text`.
        pass.dom.set_attr(anchor, "data-text", title);
    }
    pass.text(
        "home.hero.subtitle",
        ".hero-subtitle",
        hero.and_then(|h| h.subtitle.get()),
    );
    pass.text(
        "home.hero.description",
        ".hero-description",
        hero.and_then(|h| h.description.get()),
    );
    pass.list(
        "home.hero.cta",
        ".hero-cta",
        hero.and_then(|h| h.cta.get()),
        |buttons| fragments::list(buttons, fragments::button),
    );

    pass.list(
        "home.statusCards",
        ".status-section",
        home.and_then(|h| h.status_cards.get()),
        |cards| fragments::list(cards, fragments::status_card),
    );
    pass.list(
        "home.protocolCards",
        ".protocol-cards",
        home.and_then(|h| h.protocol_cards.get()),
        |cards| fragments::list(cards, fragments::protocol_card),
    );
    pass.list(
        "home.workshops",
        ".workshop-grid",
        home.and_then(|h| h.workshops.get()),
        |workshops| fragments::list(workshops, fragments::workshop),
    );

    bind_cta(pass, "home", home.and_then(|h| h.cta.get()));
}
