//! Ghost post dialect (Koenig editor cards).

use crate::normalizer::rules::{Action, Rule, Selector};

pub const RULES: &[Rule] = &[
    Rule::element(
        "ghost-card-wrapper",
        Selector::tags(&["div"]).class_contains(&["kg-card"]),
        Action::Unwrap,
    ),
    Rule::element(
        "ghost-image-card",
        Selector::tags(&["figure"]).class_contains(&["kg-image-card"]),
        Action::FigureToImage,
    ),
    Rule::element(
        "ghost-bookmark-card",
        Selector::tags(&["figure"]).class_contains(&["kg-bookmark-card"]),
        Action::BookmarkToLink,
    ),
    Rule::element(
        "ghost-embed-card",
        Selector::tags(&["figure"]).class_contains(&["kg-embed-card"]),
        Action::Remove,
    ),
];
