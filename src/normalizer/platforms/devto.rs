//! DEV.to (Forem) post dialect.

use std::sync::LazyLock;

use kuchiki::NodeRef;
use regex::Regex;

use crate::normalizer::rules::{Action, Rule, Selector};

/// Liquid tags such as `{% embed https://... %}` or `{% youtube id %}`
static LIQUID_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\{%.*?%\}").expect("LIQUID_TAG_RE: hardcoded regex is valid")
});

pub const RULES: &[Rule] = &[
    Rule::document("devto-liquid-tags", strip_liquid_tags),
    Rule::element(
        "devto-ltag",
        Selector::any().class_contains(&["ltag"]),
        Action::Remove,
    ),
    Rule::element(
        "devto-tag-span",
        Selector::tags(&["span"]).class_token("tag"),
        Action::Remove,
    ),
];

fn strip_liquid_tags(document: &NodeRef) -> usize {
    let mut stripped = 0;
    for node in document.descendants() {
        let Some(text) = node.as_text() else {
            continue;
        };
        let replaced = {
            let current = text.borrow();
            if !LIQUID_TAG_RE.is_match(&current) {
                continue;
            }
            stripped += LIQUID_TAG_RE.find_iter(&current).count();
            LIQUID_TAG_RE.replace_all(&current, "").into_owned()
        };
        *text.borrow_mut() = replaced;
    }
    stripped
}

#[cfg(test)]
mod tests {
    use crate::normalizer::{Platform, normalize};
    use pretty_assertions::assert_eq;

    fn devto(html: &str) -> String {
        normalize(html, Platform::DevTo)
    }

    #[test]
    fn test_liquid_tags_removed() {
        let html = "<p>Intro</p><p>{% embed https://github.com/a/b %}</p><p>Text {% youtube abc %} more</p>";
        assert_eq!(devto(html), "<p>Intro</p><p>Text  more</p>");
    }

    #[test]
    fn test_ltag_containers_removed() {
        let html = r#"<p>Author:</p><div class="ltag__user ltag__user__id__1"><a href="/me">me</a></div><div class="ltag-github-readme-tag"><p>repo</p></div>"#;
        assert_eq!(devto(html), "<p>Author:</p>");
    }

    #[test]
    fn test_tag_spans_removed() {
        let html = r#"<p>Tags: <span class="tag">#rust</span><span class="tags-summary">kept</span></p>"#;
        assert_eq!(devto(html), "<p>Tags: <span>kept</span></p>");
    }
}
