//! Element predicates used by the rule tables.
//!
//! A `Selector` is a conjunction of optional predicates over one element:
//! tag name, `class`, one attribute, and text content. All string comparisons
//! are ASCII case-insensitive. Selectors are `const`-constructible so rule
//! tables can live in `static` data.

use kuchiki::NodeRef;

use crate::normalizer::dom;

/// How the `class` attribute is matched
#[derive(Debug, Clone, Copy)]
pub enum ClassMatch {
    /// Any of the needles occurs as a substring of the class attribute
    Contains(&'static [&'static str]),
    /// The class list holds exactly this token
    Token(&'static str),
}

/// How a single attribute is matched
#[derive(Debug, Clone, Copy)]
pub enum AttrMatch {
    /// Attribute present with any value
    Present(&'static str),
    /// Attribute value equals the given string
    Equals(&'static str, &'static str),
    /// Attribute value contains any of the needles
    Contains(&'static str, &'static [&'static str]),
}

/// How the element's text content is matched
#[derive(Debug, Clone, Copy)]
pub enum TextMatch {
    /// Text content contains the needle
    Contains(&'static str),
    /// No visible text and no image inside
    Blank,
}

#[derive(Debug, Clone, Copy)]
pub struct Selector {
    tags: &'static [&'static str],
    class: Option<ClassMatch>,
    attr: Option<AttrMatch>,
    text: Option<TextMatch>,
}

impl Selector {
    /// Matches every element.
    #[must_use]
    pub const fn any() -> Self {
        Self {
            tags: &[],
            class: None,
            attr: None,
            text: None,
        }
    }

    /// Matches elements with one of the given tag names.
    #[must_use]
    pub const fn tags(tags: &'static [&'static str]) -> Self {
        Self { tags, ..Self::any() }
    }

    #[must_use]
    pub const fn class_contains(self, needles: &'static [&'static str]) -> Self {
        Self {
            class: Some(ClassMatch::Contains(needles)),
            ..self
        }
    }

    #[must_use]
    pub const fn class_token(self, token: &'static str) -> Self {
        Self {
            class: Some(ClassMatch::Token(token)),
            ..self
        }
    }

    #[must_use]
    pub const fn attr(self, matcher: AttrMatch) -> Self {
        Self {
            attr: Some(matcher),
            ..self
        }
    }

    #[must_use]
    pub const fn text(self, matcher: TextMatch) -> Self {
        Self {
            text: Some(matcher),
            ..self
        }
    }

    /// Whether `node` is an element satisfying every predicate.
    #[must_use]
    pub fn matches(&self, node: &NodeRef) -> bool {
        let Some(element) = node.as_element() else {
            return false;
        };

        let name = &*element.name.local;
        if !self.tags.is_empty() && !self.tags.iter().any(|tag| tag.eq_ignore_ascii_case(name)) {
            return false;
        }

        if let Some(class) = self.class {
            let attrs = element.attributes.borrow();
            let Some(value) = attrs.get("class") else {
                return false;
            };
            let value = value.to_ascii_lowercase();
            let hit = match class {
                ClassMatch::Contains(needles) => needles.iter().any(|needle| value.contains(needle)),
                ClassMatch::Token(token) => value.split_ascii_whitespace().any(|t| t == token),
            };
            if !hit {
                return false;
            }
        }

        if let Some(attr) = self.attr {
            let attrs = element.attributes.borrow();
            let hit = match attr {
                AttrMatch::Present(name) => attrs.contains(name),
                AttrMatch::Equals(name, expected) => attrs
                    .get(name)
                    .is_some_and(|value| value.trim().eq_ignore_ascii_case(expected)),
                AttrMatch::Contains(name, needles) => attrs.get(name).is_some_and(|value| {
                    let value = value.to_ascii_lowercase();
                    needles.iter().any(|needle| value.contains(needle))
                }),
            };
            if !hit {
                return false;
            }
        }

        match self.text {
            None => true,
            Some(TextMatch::Contains(needle)) => {
                node.text_contents().to_lowercase().contains(needle)
            }
            Some(TextMatch::Blank) => dom::is_blank(node),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::dom::{parse_document, tag_name};

    fn first(document: &NodeRef, tag: &str) -> NodeRef {
        document
            .descendants()
            .find(|node| tag_name(node) == Some(tag))
            .expect("element present")
    }

    #[test]
    fn test_class_substring_is_case_insensitive() {
        let document = parse_document(r#"<div class="Post-Footer wide">x</div>"#);
        let div = first(&document, "div");
        assert!(Selector::tags(&["div"]).class_contains(&["post-footer"]).matches(&div));
        assert!(!Selector::tags(&["span"]).class_contains(&["post-footer"]).matches(&div));
    }

    #[test]
    fn test_class_token_requires_whole_token() {
        let document = parse_document(r#"<span class="tags">a</span><span class="tag x">b</span>"#);
        let spans: Vec<NodeRef> = document
            .descendants()
            .filter(|node| tag_name(node) == Some("span"))
            .collect();
        let selector = Selector::tags(&["span"]).class_token("tag");
        assert!(!selector.matches(&spans[0]));
        assert!(selector.matches(&spans[1]));
    }

    #[test]
    fn test_attribute_and_text_predicates() {
        let document = parse_document(r#"<a name="more"></a><p>Originally published at x</p>"#);
        let anchor = first(&document, "a");
        let paragraph = first(&document, "p");

        assert!(Selector::tags(&["a"])
            .attr(AttrMatch::Equals("name", "more"))
            .text(TextMatch::Blank)
            .matches(&anchor));
        assert!(Selector::tags(&["p"])
            .text(TextMatch::Contains("originally published"))
            .matches(&paragraph));
        assert!(!Selector::tags(&["p"]).attr(AttrMatch::Present("id")).matches(&paragraph));
    }

    #[test]
    fn test_text_nodes_never_match() {
        let document = parse_document("<p>text</p>");
        let text = first(&document, "p").first_child().expect("text child");
        assert!(!Selector::any().matches(&text));
    }
}
