//! Blogger (Blogspot) post dialect.

use crate::normalizer::rules::{Action, AttrMatch, Rule, Selector, TextMatch};

pub const RULES: &[Rule] = &[
    Rule::element(
        "blogger-post-footer",
        Selector::tags(&["div"]).class_contains(&["blogger-post-footer", "post-footer"]),
        Action::Remove,
    ),
    Rule::element(
        "blogger-share-buttons",
        Selector::tags(&["div"]).class_contains(&["post-share-buttons"]),
        Action::Remove,
    ),
    Rule::element(
        "blogger-separator",
        Selector::tags(&["div"]).class_contains(&["separator"]),
        Action::Unwrap,
    ),
    Rule::element(
        "blogger-more-marker",
        Selector::tags(&["a"])
            .attr(AttrMatch::Equals("name", "more"))
            .text(TextMatch::Blank),
        Action::Remove,
    ),
];
