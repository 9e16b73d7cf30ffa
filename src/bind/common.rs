//! Binders shared by every page: navigation, footer, loading screen.

use super::Pass;
use crate::content::CommonContent;
use crate::fragments;

pub(super) fn bind(pass: &mut Pass<'_>, common: Option<&CommonContent>) {
    let navigation = common.and_then(|c| c.navigation.get());
    pass.text(
        "common.navigation.logo",
        ".nav-logo",
        navigation.and_then(|n| n.logo.get()),
    );
    let location = pass.location;
    pass.list(
        "common.navigation.links",
        ".nav-links",
        navigation.and_then(|n| n.links.get()),
        |links| fragments::nav_links(links, location),
    );

    let footer = common.and_then(|c| c.footer.get());
    pass.text(
        "common.footer.logo",
        ".footer-logo",
        footer.and_then(|f| f.logo.get()),
    );
    // Bound as text: markup in the copyright line is shown, not interpreted.
    pass.text(
        "common.footer.copyright",
        ".footer-text",
        footer.and_then(|f| f.copyright.get()),
    );
    pass.list(
        "common.footer.socialLinks",
        ".social-links",
        footer.and_then(|f| f.social_links.get()),
        |links| fragments::list(links, fragments::social_link),
    );

    let loading = common.and_then(|c| c.loading.get());
    pass.text(
        "common.loading.logo",
        ".loading-logo",
        loading.and_then(|l| l.logo.get()),
    );
    pass.text(
        "common.loading.text",
        ".loading-text",
        loading.and_then(|l| l.text.get()),
    );
}
