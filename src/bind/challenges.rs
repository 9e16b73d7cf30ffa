//! Challenges page: matrix header, category cards, summary stats.

use super::Pass;
use crate::content::ChallengesContent;
use crate::fragments;

pub(super) fn bind(pass: &mut Pass<'_>, challenges: Option<&ChallengesContent>) {
    let header = challenges.and_then(|c| c.header.get());
    // Title and subtitle only bind inside the matrix header.
    let scope = Some(pass.dom.select_first(".matrix-header"));
    pass.text_in(
        scope,
        "challenges.header.title",
        ".matrix-title",
        header.and_then(|h| h.title.get()),
    );
    pass.text_in(
        scope,
        "challenges.header.subtitle",
        ".matrix-subtitle",
        header.and_then(|h| h.subtitle.get()),
    );

    pass.list(
        "challenges.categories",
        ".challenge-categories",
        challenges.and_then(|c| c.categories.get()),
        |categories| fragments::list(categories, fragments::challenge_category),
    );
    pass.list(
        "challenges.stats",
        ".challenge-stats",
        challenges.and_then(|c| c.stats.get()),
        |stats| fragments::list(stats, fragments::stat),
    );
}

#[cfg(test)]
mod tests {
    use crate::bind::{BindOutcome, bind_page};
    use crate::dom::Document;
    use crate::page::PageIdentity;
    use crate::test_helpers::{attr_of, count_of, fixture_content, fixture_shell, texts_of};

    #[test]
    fn header_binds_inside_matrix_header() {
        let content = fixture_content();
        let mut dom = fixture_shell(PageIdentity::Challenges);
        bind_page(&mut dom, &content, PageIdentity::Challenges, "/challenges.html");
        assert_eq!(texts_of(&dom, ".matrix-title"), vec!["Challenge Matrix"]);
        assert_eq!(
            texts_of(&dom, ".matrix-subtitle"),
            vec!["Choose your battlefield"]
        );
    }

    #[test]
    fn title_outside_matrix_header_is_not_an_anchor() {
        let content = fixture_content();
        let mut dom = Document::parse(
            r#"<html><body><h1 class="matrix-title">Static</h1></body></html>"#,
        );
        let report = bind_page(&mut dom, &content, PageIdentity::Challenges, "/challenges.html");
        assert_eq!(
            report.outcome("challenges.header.title"),
            Some(BindOutcome::NoAnchor)
        );
        assert_eq!(texts_of(&dom, ".matrix-title"), vec!["Static"]);
    }

    #[test]
    fn categories_render_with_difficulty_and_points() {
        let content = fixture_content();
        let mut dom = fixture_shell(PageIdentity::Challenges);
        bind_page(&mut dom, &content, PageIdentity::Challenges, "/challenges.html");

        assert_eq!(count_of(&dom, ".challenge-categories .category-card"), 2);
        assert_eq!(
            attr_of(&dom, ".category-card", "data-difficulty").as_deref(),
            Some("medium")
        );
        assert_eq!(
            texts_of(&dom, ".category-card:first-child .challenge-points"),
            vec!["100 pts", "250 pts"]
        );
        assert_eq!(
            texts_of(&dom, ".category-card:first-child .category-meta span"),
            vec!["medium", "2 Challenges", "350 Points"]
        );
    }

    #[test]
    fn stats_keep_input_order() {
        let content = fixture_content();
        let mut dom = fixture_shell(PageIdentity::Challenges);
        bind_page(&mut dom, &content, PageIdentity::Challenges, "/challenges.html");
        assert_eq!(
            texts_of(&dom, ".challenge-stats .stat-label"),
            vec!["Challenges", "Hackers", "Prize Pool"]
        );
    }
}
