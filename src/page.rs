//! Page identity resolution.
//!
//! Every shell is one of five logical pages. The identity is derived from the
//! final segment of the location path and never fails: anything that is not a
//! known page file resolves to [`PageIdentity::Home`].
//!
//! | Final segment       | Identity     |
//! |---------------------|--------------|
//! | *(empty)*, `index.html` | `home`   |
//! | `challenges.html`   | `challenges` |
//! | `dashboard.html`    | `dashboard`  |
//! | `register.html`     | `register`   |
//! | `about.html`        | `about`      |
//! | anything else       | `home`       |

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageIdentity {
    #[default]
    Home,
    Challenges,
    Dashboard,
    Register,
    About,
}

impl PageIdentity {
    pub const ALL: [PageIdentity; 5] = [
        PageIdentity::Home,
        PageIdentity::Challenges,
        PageIdentity::Dashboard,
        PageIdentity::Register,
        PageIdentity::About,
    ];

    /// Key of this page's subtree in the content document.
    pub fn key(self) -> &'static str {
        match self {
            PageIdentity::Home => "home",
            PageIdentity::Challenges => "challenges",
            PageIdentity::Dashboard => "dashboard",
            PageIdentity::Register => "register",
            PageIdentity::About => "about",
        }
    }

    /// Human-readable name for CLI output.
    pub fn title(self) -> &'static str {
        match self {
            PageIdentity::Home => "Home",
            PageIdentity::Challenges => "Challenges",
            PageIdentity::Dashboard => "Dashboard",
            PageIdentity::Register => "Register",
            PageIdentity::About => "About",
        }
    }

    /// Canonical shell file name for this page.
    pub fn file_name(self) -> &'static str {
        match self {
            PageIdentity::Home => "index.html",
            PageIdentity::Challenges => "challenges.html",
            PageIdentity::Dashboard => "dashboard.html",
            PageIdentity::Register => "register.html",
            PageIdentity::About => "about.html",
        }
    }
}

impl fmt::Display for PageIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Resolve the page identity from a location path such as `/site/about.html`.
///
/// Only the segment after the last `/` is considered and it must match a page
/// file name exactly. Query strings and fragments are not part of a path and
/// are not stripped here.
pub fn resolve(location_path: &str) -> PageIdentity {
    let segment = location_path
        .rsplit_once('/')
        .map_or(location_path, |(_, last)| last);

    match segment {
        "" | "index.html" => PageIdentity::Home,
        "challenges.html" => PageIdentity::Challenges,
        "dashboard.html" => PageIdentity::Dashboard,
        "register.html" => PageIdentity::Register,
        "about.html" => PageIdentity::About,
        _ => PageIdentity::Home,
    }
}
