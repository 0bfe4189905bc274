//! Medium RSS/export dialect.
//!
//! Medium feeds wrap every image in a `<figure>`, append a 1x1 tracking
//! pixel, and close posts with "Continue reading" / "Originally published"
//! boilerplate and a link back to medium.com.
//!
//! A trailing `...` is only stripped when its text is the last content of the
//! post; an image after it means the ellipsis is mid-post and stays.

use kuchiki::NodeRef;

use crate::normalizer::dom;
use crate::normalizer::rules::{Action, AttrMatch, Rule, Selector, TextMatch};

pub const RULES: &[Rule] = &[
    Rule::element("medium-figure-to-img", Selector::tags(&["figure"]), Action::FigureToImage),
    Rule::element(
        "medium-tracking-pixel",
        Selector::tags(&["img"]).attr(AttrMatch::Contains("src", &["medium.com/stat", "1x1"])),
        Action::Remove,
    ),
    Rule::element(
        "medium-continue-reading",
        Selector::tags(&["a"]).text(TextMatch::Contains("continue reading")),
        Action::Remove,
    ),
    Rule::document("medium-trailing-ellipsis", strip_trailing_ellipsis),
    Rule::element(
        "medium-originally-published",
        Selector::tags(&["p"]).text(TextMatch::Contains("originally published")),
        Action::Remove,
    ),
    Rule::document("medium-trailing-profile-links", remove_trailing_medium_links),
];

/// Strip a `...` or `…` ending the last piece of content in the document.
fn strip_trailing_ellipsis(document: &NodeRef) -> usize {
    let last_content = document
        .descendants()
        .filter(|node| {
            dom::tag_name(node) == Some("img")
                || node
                    .as_text()
                    .is_some_and(|text| !text.borrow().trim().is_empty())
        })
        .last();

    let Some(node) = last_content else {
        return 0;
    };
    let Some(text) = node.as_text() else {
        return 0;
    };

    let mut text = text.borrow_mut();
    let stripped = {
        let trimmed = text.trim_end();
        trimmed
            .strip_suffix("...")
            .or_else(|| trimmed.strip_suffix('…'))
            .map(|rest| rest.trim_end().to_string())
    };

    match stripped {
        Some(rest) => {
            *text = rest;
            1
        }
        None => 0,
    }
}

/// Remove closing top-level paragraphs that hold nothing but one link to medium.com.
fn remove_trailing_medium_links(document: &NodeRef) -> usize {
    let Some(body) = dom::body(document) else {
        return 0;
    };

    let mut removed = 0;
    while let Some(last) = dom::last_significant_child(&body) {
        if !is_medium_link_paragraph(&last) {
            break;
        }
        last.detach();
        removed += 1;
    }
    removed
}

fn is_medium_link_paragraph(node: &NodeRef) -> bool {
    if dom::tag_name(node) != Some("p") {
        return false;
    }

    let mut significant = node.children().filter(|child| {
        !child
            .as_text()
            .is_some_and(|text| text.borrow().trim().is_empty())
    });

    match (significant.next(), significant.next()) {
        (Some(only), None) => {
            dom::tag_name(&only) == Some("a")
                && dom::attribute(&only, "href")
                    .is_some_and(|href| href.to_ascii_lowercase().contains("medium.com"))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::normalizer::{Platform, normalize};
    use pretty_assertions::assert_eq;

    fn medium(html: &str) -> String {
        normalize(html, Platform::Medium)
    }

    #[test]
    fn test_figure_becomes_bare_image() {
        let html = r#"<figure><img src="https://x/y.png" class="c"></figure>"#;
        assert_eq!(medium(html), r#"<img src="https://x/y.png" />"#);
    }

    #[test]
    fn test_figure_with_caption_and_alt() {
        let html = r#"<p>Intro</p><figure><img alt="chart" src="https://cdn-images-1.medium.com/max/1024/a.png"><figcaption>Figure 1</figcaption></figure>"#;
        assert_eq!(
            medium(html),
            r#"<p>Intro</p><img src="https://cdn-images-1.medium.com/max/1024/a.png" />"#
        );
    }

    #[test]
    fn test_tracking_pixel_removed() {
        assert_eq!(medium(r#"<img src="https://medium.com/stat/abc">"#), "");
        assert_eq!(
            medium(r#"<p>Body</p><img src="https://cdn.example.com/1x1.gif" width="1" height="1">"#),
            "<p>Body</p>"
        );
    }

    #[test]
    fn test_continue_reading_link_removed() {
        let html = r#"<p>Story text</p><p><a href="https://medium.com/@me/post-123">Continue reading on Medium »</a></p>"#;
        assert_eq!(medium(html), "<p>Story text</p>");
    }

    #[test]
    fn test_trailing_ellipsis_removed() {
        assert_eq!(medium("<p>First</p><p>And then...</p>"), "<p>First</p><p>And then</p>");
        assert_eq!(medium("<p>Wait for it…</p>"), "<p>Wait for it</p>");
        assert_eq!(medium("<p>Mid... sentence stays</p>"), "<p>Mid... sentence stays</p>");
    }

    #[test]
    fn test_ellipsis_before_trailing_image_is_kept() {
        let html = r#"<p>And then...</p><img src="https://x/y.png">"#;
        assert_eq!(
            medium(html),
            r#"<p>And then...</p><img src="https://x/y.png" />"#
        );
    }

    #[test]
    fn test_ellipsis_only_paragraph_disappears() {
        assert_eq!(medium("<p>Body</p><p>...</p>"), "<p>Body</p>");
    }

    #[test]
    fn test_originally_published_paragraph_removed() {
        let html = r#"<p>Body</p><p><em>Originally published at <a href="https://blog.example.com">blog.example.com</a> on May 1.</em></p>"#;
        assert_eq!(medium(html), "<p>Body</p>");
    }

    #[test]
    fn test_trailing_medium_links_removed() {
        let html = r#"<p>Body with <a href="https://medium.com/tag/rust">a medium link</a> inline.</p>
<p><a href="https://medium.com/@me">My profile</a></p>
<p><a href="https://medium.com/p/123">Read more</a></p>"#;
        assert_eq!(
            medium(html),
            r#"<p>Body with <a href="https://medium.com/tag/rust">a medium link</a> inline.</p>"#
        );
    }

    #[test]
    fn test_non_trailing_medium_link_paragraph_kept() {
        let html = r#"<p><a href="https://medium.com/@me">Profile</a></p><p>Closing words</p>"#;
        assert_eq!(medium(html), html);
    }

    #[test]
    fn test_external_trailing_link_kept() {
        let html = r#"<p>Body</p><p><a href="https://example.com">Elsewhere</a></p>"#;
        assert_eq!(medium(html), html);
    }
}
