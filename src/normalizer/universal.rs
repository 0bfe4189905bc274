//! Platform-agnostic final pass producing TipTap-compatible markup.

use std::sync::LazyLock;

use regex::Regex;

use super::rules::{Action, Rule, Selector, TextMatch};

static MULTI_NEWLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("MULTI_NEWLINE_RE: hardcoded regex is valid"));

static INTER_TAG_WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r">\s+<").expect("INTER_TAG_WHITESPACE_RE: hardcoded regex is valid")
});

pub const RULES: &[Rule] = &[
    Rule::element(
        "drop-executable-blocks",
        Selector::tags(&["script", "style", "noscript", "iframe"]),
        Action::Remove,
    ),
    Rule::element(
        "drop-empty-paragraphs",
        Selector::tags(&["p"]).text(TextMatch::Blank),
        Action::Remove,
    ),
    Rule::element(
        "bare-headings",
        Selector::tags(&["h1", "h2", "h3"]),
        Action::RetainAttributes(&[]),
    ),
    Rule::element(
        "demote-deep-headings",
        Selector::tags(&["h4", "h5", "h6"]),
        Action::Rename("h3"),
    ),
    Rule::element(
        "strip-presentation-attributes",
        Selector::any(),
        Action::StripPresentationAttributes,
    ),
    Rule::element(
        "bare-code-blocks",
        Selector::tags(&["blockquote", "pre", "code"]),
        Action::RetainAttributes(&[]),
    ),
    Rule::element("links-href-only", Selector::tags(&["a"]), Action::RetainAttributes(&["href"])),
    Rule::element(
        "drop-empty-links",
        Selector::tags(&["a"]).text(TextMatch::Blank),
        Action::Remove,
    ),
    Rule::element(
        "bare-lists",
        Selector::tags(&["ul", "ol", "li"]),
        Action::RetainAttributes(&[]),
    ),
    Rule::element("drop-rules", Selector::tags(&["hr"]), Action::Remove),
];

/// Whitespace normalization applied to the serialized output.
pub(crate) fn finalize_whitespace(html: &str) -> String {
    let collapsed = MULTI_NEWLINE_RE.replace_all(html, "\n\n");
    let collapsed = INTER_TAG_WHITESPACE_RE.replace_all(&collapsed, "><");
    collapsed.trim().to_string()
}
