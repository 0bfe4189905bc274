//! DOM helpers shared by every rule set.
//!
//! Input fragments are parsed with html5ever (through `kuchiki`) into a
//! mutable tree. The `html`, `head` and `body` wrappers the parser inserts are
//! transparent to serialization, so a fragment comes back out as a fragment.

use html_escape::{encode_double_quoted_attribute, encode_text};
use kuchiki::traits::TendrilSink;
use kuchiki::iter::NodeEdge;
use kuchiki::{Attribute, ElementData, ExpandedName, NodeData, NodeRef};

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose text children are raw text (never entity-decoded by the parser).
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "script", "style", "xmp", "iframe", "noembed", "noframes", "noscript", "plaintext",
];

/// Elements whose first newline after the start tag is dropped by the parser.
const LEADING_NEWLINE_ELEMENTS: &[&str] = &["pre", "textarea", "listing"];

/// Parse an HTML fragment into a document tree.
pub(crate) fn parse_document(html: &str) -> NodeRef {
    kuchiki::parse_html().one(html)
}

/// Serialize a document produced by [`parse_document`] back to a fragment.
///
/// Walks start and end edges instead of recursing, so nesting depth is bounded
/// only by memory.
pub(crate) fn serialize_document(document: &NodeRef) -> String {
    let mut output = String::new();
    for edge in document.traverse() {
        match edge {
            NodeEdge::Start(node) => open_node(&node, &mut output),
            NodeEdge::End(node) => close_node(&node, &mut output),
        }
    }
    output
}

fn open_node(node: &NodeRef, output: &mut String) {
    match node.data() {
        NodeData::Element(element) => {
            let name = &*element.name.local;

            // Parser-inserted wrappers
            if matches!(name, "html" | "head" | "body") {
                return;
            }

            output.push('<');
            output.push_str(name);
            for (attr_name, attr) in &element.attributes.borrow().map {
                output.push(' ');
                output.push_str(&attr_name.local);
                output.push_str("=\"");
                output.push_str(&encode_double_quoted_attribute(&attr.value));
                output.push('"');
            }

            if VOID_ELEMENTS.contains(&name) {
                output.push_str(" />");
                return;
            }
            output.push('>');

            // The parser eats one leading newline; write one back for it
            if LEADING_NEWLINE_ELEMENTS.contains(&name)
                && node
                    .first_child()
                    .and_then(|child| child.as_text().map(|text| text.borrow().starts_with('\n')))
                    .unwrap_or(false)
            {
                output.push('\n');
            }
        }
        NodeData::Text(text) => {
            let text = text.borrow();
            if has_raw_text_parent(node) {
                output.push_str(&text);
            } else {
                output.push_str(&encode_text(text.as_str()));
            }
        }
        NodeData::Comment(comment) => {
            output.push_str("<!--");
            output.push_str(&comment.borrow());
            output.push_str("-->");
        }
        NodeData::Document(_)
        | NodeData::DocumentFragment
        | NodeData::Doctype(_)
        | NodeData::ProcessingInstruction(_) => {}
    }
}

fn close_node(node: &NodeRef, output: &mut String) {
    let Some(element) = node.as_element() else {
        return;
    };
    let name = &*element.name.local;

    // plaintext runs to the end of input and has no end tag
    if matches!(name, "html" | "head" | "body" | "plaintext") || VOID_ELEMENTS.contains(&name) {
        return;
    }

    output.push_str("</");
    output.push_str(name);
    output.push('>');
}

fn has_raw_text_parent(node: &NodeRef) -> bool {
    node.parent()
        .and_then(|parent| {
            parent
                .as_element()
                .map(|element| RAW_TEXT_ELEMENTS.contains(&&*element.name.local))
        })
        .unwrap_or(false)
}

/// Local tag name of an element node.
pub(crate) fn tag_name(node: &NodeRef) -> Option<&str> {
    node.as_element().map(|element| &*element.name.local)
}

/// Value of an attribute on an element node.
pub(crate) fn attribute(node: &NodeRef, name: &str) -> Option<String> {
    node.as_element()
        .and_then(|element| element.attributes.borrow().get(name).map(String::from))
}

/// Whether the subtree carries an image.
pub(crate) fn contains_image(node: &NodeRef) -> bool {
    node.inclusive_descendants()
        .any(|descendant| tag_name(&descendant) == Some("img"))
}

/// Whether the subtree has no visible text and no image.
pub(crate) fn is_blank(node: &NodeRef) -> bool {
    node.text_contents().trim().is_empty() && !contains_image(node)
}

/// First `attr` value found on a `tag` element inside `node`.
pub(crate) fn find_descendant_attribute(node: &NodeRef, tag: &str, attr: &str) -> Option<String> {
    node.descendants()
        .filter(|descendant| tag_name(descendant) == Some(tag))
        .find_map(|descendant| attribute(&descendant, attr).filter(|value| !value.trim().is_empty()))
}

/// The `body` element of a parsed document.
pub(crate) fn body(document: &NodeRef) -> Option<NodeRef> {
    document
        .select_first("body")
        .ok()
        .map(|body| body.as_node().clone())
}

/// Create an HTML element named `tag`, borrowing the namespace of `template`.
pub(crate) fn new_element(template: &ElementData, tag: &str, attributes: &[(&str, &str)]) -> NodeRef {
    let mut name = template.name.clone();
    name.local = tag.into();
    name.prefix = None;

    let attributes = attributes.iter().map(|(attr_name, value)| {
        (
            ExpandedName::new("", *attr_name),
            Attribute {
                prefix: None,
                value: (*value).to_string(),
            },
        )
    });

    NodeRef::new_element(name, attributes)
}

/// Replace `node` with `replacements`, in order.
pub(crate) fn replace_with(node: &NodeRef, replacements: Vec<NodeRef>) {
    for replacement in replacements {
        node.insert_before(replacement);
    }
    node.detach();
}

/// Replace `node` with its own children.
pub(crate) fn unwrap(node: &NodeRef) {
    // Collect first: moving a child breaks sibling iteration
    let children: Vec<NodeRef> = node.children().collect();
    replace_with(node, children);
}

/// Move the children of `node` into `target`, then put `target` in its place.
pub(crate) fn replace_keeping_children(node: &NodeRef, target: NodeRef) {
    let children: Vec<NodeRef> = node.children().collect();
    for child in children {
        target.append(child);
    }
    replace_with(node, vec![target]);
}

/// Last node in document order that is not whitespace-only text.
pub(crate) fn last_significant_child(node: &NodeRef) -> Option<NodeRef> {
    let mut current = node.last_child();
    while let Some(candidate) = current {
        let is_blank_text = candidate
            .as_text()
            .is_some_and(|text| text.borrow().trim().is_empty());
        if !is_blank_text {
            return Some(candidate);
        }
        current = candidate.previous_sibling();
    }
    None
}
