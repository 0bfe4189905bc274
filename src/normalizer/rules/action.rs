//! Rewrites applied to elements picked by a [`Selector`](super::Selector).

use kuchiki::NodeRef;

use crate::normalizer::dom;

#[derive(Debug, Clone, Copy)]
pub enum Action {
    /// Delete the element and everything inside it
    Remove,
    /// Replace the element with its children
    Unwrap,
    /// Replace a figure with a bare `<img src>` taken from the first image
    /// inside it; delete the figure when it holds no image
    FigureToImage,
    /// Replace a bookmark card with `<p><a href="U">U</a></p>` built from its
    /// first link; delete the card when it holds no link
    BookmarkToLink,
    /// Replace the element with a bare element of another name, keeping children
    Rename(&'static str),
    /// Drop the named attributes
    RemoveAttributes(&'static [&'static str]),
    /// Drop every attribute except the named ones
    RetainAttributes(&'static [&'static str]),
    /// Drop `class`, `style`, `id` and every `data-*` attribute
    StripPresentationAttributes,
}

impl Action {
    /// Whether applying the action detaches everything under the element.
    pub(crate) const fn discards_subtree(self) -> bool {
        matches!(
            self,
            Action::Remove | Action::FigureToImage | Action::BookmarkToLink
        )
    }

    pub(crate) fn apply(self, node: &NodeRef) {
        match self {
            Action::Remove => node.detach(),
            Action::Unwrap => dom::unwrap(node),
            Action::FigureToImage => figure_to_image(node),
            Action::BookmarkToLink => bookmark_to_link(node),
            Action::Rename(tag) => rename(node, tag),
            Action::RemoveAttributes(names) => {
                retain_attributes(node, |name| !names.contains(&name));
            }
            Action::RetainAttributes(names) => {
                retain_attributes(node, |name| names.contains(&name));
            }
            Action::StripPresentationAttributes => {
                retain_attributes(node, |name| !is_presentation_attribute(name));
            }
        }
    }
}

/// `class`, `style`, `id` or any `data-*` attribute.
pub(crate) fn is_presentation_attribute(name: &str) -> bool {
    matches!(name, "class" | "style" | "id") || name.starts_with("data-")
}

fn retain_attributes(node: &NodeRef, keep: impl Fn(&str) -> bool) {
    if let Some(element) = node.as_element() {
        element
            .attributes
            .borrow_mut()
            .map
            .retain(|name, _| keep(&*name.local));
    }
}

fn figure_to_image(node: &NodeRef) {
    let Some(element) = node.as_element() else {
        return;
    };

    match dom::find_descendant_attribute(node, "img", "src") {
        Some(src) => {
            let img = dom::new_element(element, "img", &[("src", src.trim())]);
            dom::replace_with(node, vec![img]);
        }
        None => {
            log::debug!("Dropping figure without an image");
            node.detach();
        }
    }
}

fn bookmark_to_link(node: &NodeRef) {
    let Some(element) = node.as_element() else {
        return;
    };

    match dom::find_descendant_attribute(node, "a", "href") {
        Some(href) => {
            let href = href.trim();
            let paragraph = dom::new_element(element, "p", &[]);
            let anchor = dom::new_element(element, "a", &[("href", href)]);
            anchor.append(NodeRef::new_text(href));
            paragraph.append(anchor);
            dom::replace_with(node, vec![paragraph]);
        }
        None => node.detach(),
    }
}

fn rename(node: &NodeRef, tag: &str) {
    let Some(element) = node.as_element() else {
        return;
    };
    let renamed = dom::new_element(element, tag, &[]);
    dom::replace_keeping_children(node, renamed);
}
