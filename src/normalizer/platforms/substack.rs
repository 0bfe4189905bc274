//! Substack post dialect.

use crate::normalizer::rules::{Action, Rule, Selector};

pub const RULES: &[Rule] = &[
    Rule::element(
        "substack-subscribe-widget",
        Selector::tags(&["div"]).class_contains(&["subscription-widget", "subscribe-widget"]),
        Action::Remove,
    ),
    Rule::element(
        "substack-captioned-image",
        Selector::tags(&["div"]).class_contains(&["captioned-image-container"]),
        Action::Unwrap,
    ),
    Rule::element("substack-figure-to-img", Selector::tags(&["figure"]), Action::FigureToImage),
    Rule::element(
        "substack-share-buttons",
        Selector::tags(&["div"]).class_contains(&["share-button"]),
        Action::Remove,
    ),
    Rule::element(
        "substack-subscribe-link",
        Selector::tags(&["a"]).class_contains(&["subscribe"]),
        Action::Remove,
    ),
    Rule::element(
        "substack-post-footer",
        Selector::tags(&["div"]).class_contains(&["post-footer"]),
        Action::Remove,
    ),
];
