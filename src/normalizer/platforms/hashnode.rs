//! Hashnode post dialect.

use crate::normalizer::rules::{Action, Rule, Selector};

pub const RULES: &[Rule] = &[
    Rule::element(
        "hashnode-embed",
        Selector::tags(&["div"]).class_contains(&["embed"]),
        Action::Remove,
    ),
    Rule::element(
        "hashnode-code-language",
        Selector::tags(&["pre"]),
        Action::RemoveAttributes(&["data-language"]),
    ),
    Rule::element(
        "hashnode-reactions",
        Selector::tags(&["div"]).class_contains(&["reactions"]),
        Action::Remove,
    ),
];
