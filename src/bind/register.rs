//! Register page: form header and the benefits panel.

use super::{Pass, bind_header};
use crate::content::RegisterContent;
use crate::fragments;

pub(super) fn bind(pass: &mut Pass<'_>, register: Option<&RegisterContent>) {
    bind_header(
        pass,
        "register",
        register.and_then(|r| r.header.get()),
        ".form-title",
        ".form-subtitle",
    );

    let benefits = register.and_then(|r| r.benefits.get());
    pass.text(
        "register.benefits.title",
        ".benefits-title",
        benefits.and_then(|b| b.title.get()),
    );
    pass.list(
        "register.benefits.items",
        ".benefits-grid",
        benefits.and_then(|b| b.items.get()),
        |items| fragments::list(items, fragments::benefit),
    );
}
