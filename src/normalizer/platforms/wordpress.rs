//! WordPress (Gutenberg) post dialect.

use kuchiki::NodeRef;

use crate::normalizer::rules::{Action, Rule, Selector};

pub const RULES: &[Rule] = &[
    Rule::document("wordpress-block-comments", strip_block_comments),
    Rule::element(
        "wordpress-gallery",
        Selector::tags(&["div"]).class_contains(&["wp-block-gallery"]),
        Action::Unwrap,
    ),
    Rule::element(
        "wordpress-image-block",
        Selector::tags(&["figure"]).class_contains(&["wp-block-image"]),
        Action::FigureToImage,
    ),
    Rule::element(
        "wordpress-sharedaddy",
        Selector::tags(&["div"]).class_contains(&["sharedaddy"]),
        Action::Remove,
    ),
    Rule::element(
        "wordpress-jetpack-likes",
        Selector::tags(&["div"]).class_contains(&["wp-block-jetpack-like"]),
        Action::Remove,
    ),
];

/// Remove `<!-- wp:... -->` block delimiters and their `<!-- /wp:... -->` closers.
fn strip_block_comments(document: &NodeRef) -> usize {
    let comments: Vec<NodeRef> = document
        .descendants()
        .filter(|node| {
            node.as_comment().is_some_and(|comment| {
                let body = comment.borrow().trim_start().to_ascii_lowercase();
                body.starts_with("wp:") || body.starts_with("/wp:")
            })
        })
        .collect();

    let count = comments.len();
    for comment in comments {
        comment.detach();
    }
    count
}

#[cfg(test)]
mod tests {
    use crate::normalizer::{Platform, normalize};
    use pretty_assertions::assert_eq;

    fn wordpress(html: &str) -> String {
        normalize(html, Platform::WordPress)
    }

    #[test]
    fn test_block_comments_removed() {
        let html = "<!-- wp:paragraph -->\n<p>Hello</p>\n<!-- /wp:paragraph -->\n<!-- keep me -->";
        assert_eq!(wordpress(html), "<p>Hello</p><!-- keep me -->");
    }

    #[test]
    fn test_image_block_becomes_bare_image() {
        let html = r#"<figure class="wp-block-image size-large"><img decoding="async" src="https://blog.example.com/wp-content/uploads/a.jpg" class="wp-image-42" srcset="a.jpg 1024w"><figcaption class="wp-element-caption">Cap</figcaption></figure>"#;
        assert_eq!(
            wordpress(html),
            r#"<img src="https://blog.example.com/wp-content/uploads/a.jpg" />"#
        );
    }

    #[test]
    fn test_gallery_unwrapped_into_images() {
        let html = r#"<div class="wp-block-gallery columns-2"><figure class="wp-block-image"><img src="https://a/1.jpg"></figure><figure class="wp-block-image"><img src="https://a/2.jpg"></figure></div>"#;
        assert_eq!(
            wordpress(html),
            r#"<img src="https://a/1.jpg" /><img src="https://a/2.jpg" />"#
        );
    }

    #[test]
    fn test_other_figures_left_for_universal_pass() {
        let html = r#"<figure class="wp-block-table"><table><tbody><tr><td>1</td></tr></tbody></table></figure>"#;
        assert_eq!(
            wordpress(html),
            "<figure><table><tbody><tr><td>1</td></tr></tbody></table></figure>"
        );
    }

    #[test]
    fn test_sharing_and_likes_removed() {
        let html = r#"<p>Post</p><div class="sharedaddy sd-sharing-enabled"><h3 class="sd-title">Share this:</h3></div><div class="wp-block-jetpack-like">Like Loading...</div>"#;
        assert_eq!(wordpress(html), "<p>Post</p>");
    }
}
