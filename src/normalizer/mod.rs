//! Content normalization pipeline - HTML from blogging platforms to TipTap markup
//!
//! ```text
//! raw HTML, platform -> platform rules -> universal rules -> whitespace pass -> HTML
//! ```
//!
//! The input is parsed once into a `kuchiki` tree. Platform rules (see
//! [`platforms`]) run first, then the universal rules, then the tree is
//! serialized and whitespace is normalized. The output only carries the
//! editor's vocabulary for every tag the rules target: `p`, `h1`-`h3`,
//! `blockquote`, `pre`, `code`, lists, `a href`, `img src`, `strong`, `em`,
//! `br`.
//!
//! # Usage
//!
//! ```rust
//! use tiptap_normalizer::normalizer::{Platform, normalize};
//!
//! let html = r#"<figure><img src="https://x/y.png" class="c"></figure>"#;
//! assert_eq!(normalize(html, Platform::Medium), r#"<img src="https://x/y.png" />"#);
//! assert_eq!(normalize("<h5>X</h5>", "ghost"), "<h3>X</h3>");
//! ```

pub(crate) mod dom;
mod platform;
pub mod platforms;
pub mod rules;
pub mod universal;

use std::sync::Arc;

pub use platform::Platform;
pub use rules::{Action, Rule, Selector, apply_rules};

use crate::config::NormalizerConfig;
use crate::error::{NormalizeError, NormalizeResult};

/// Normalize `html` exported from `platform` into TipTap-compatible markup.
///
/// Empty input yields an empty string. Unknown platform tags apply only the
/// universal rules. Malformed markup never fails: rules that find nothing to
/// match are no-ops.
#[must_use]
pub fn normalize(html: &str, platform: impl Into<Platform>) -> String {
    if html.is_empty() {
        return String::new();
    }

    let platform = platform.into();
    let document = dom::parse_document(html);
    let rewrites = apply_rules(&document, platform.rules());
    log::debug!("{platform} rules rewrote {rewrites} node(s)");

    finish(&document)
}

/// Apply only the platform-agnostic final pass.
///
/// Idempotent: `universal_clean(&universal_clean(h)) == universal_clean(h)`.
#[must_use]
pub fn universal_clean(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let document = dom::parse_document(html);
    finish(&document)
}

fn finish(document: &kuchiki::NodeRef) -> String {
    apply_rules(document, universal::RULES);
    universal::finalize_whitespace(&dom::serialize_document(document))
}

/// Configured entry point used by the HTTP surface.
///
/// Adds the input size ceiling and the default platform to [`normalize`].
#[derive(Debug, Clone, Default)]
pub struct ContentNormalizer {
    config: NormalizerConfig,
}

impl ContentNormalizer {
    #[must_use]
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Platform for an optional caller-supplied tag.
    #[must_use]
    pub fn resolve_platform(&self, tag: Option<&str>) -> Platform {
        tag.map_or(self.config.default_platform(), Platform::from_tag)
    }

    /// Normalize with the configured size ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::InputTooLarge`] when `html` exceeds the
    /// configured ceiling.
    pub fn normalize(&self, html: &str, platform: Platform) -> NormalizeResult<String> {
        let limit = self.config.max_html_size();
        if html.len() > limit {
            log::warn!(
                "Rejecting {} byte input for {platform} (limit {limit} bytes)",
                html.len()
            );
            return Err(NormalizeError::InputTooLarge {
                size: html.len(),
                limit,
            });
        }

        Ok(normalize(html, platform))
    }

    /// Normalize on the blocking thread pool.
    ///
    /// HTML parsing is CPU-bound, so it runs under `spawn_blocking`. A panic
    /// inside the task is reported as [`NormalizeError::TransformFailure`].
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::InputTooLarge`] for oversized input and
    /// [`NormalizeError::TransformFailure`] if the task does not complete.
    pub async fn normalize_async(
        &self,
        html: impl Into<Arc<str>>,
        platform: Platform,
    ) -> NormalizeResult<String> {
        let html: Arc<str> = html.into();
        let normalizer = self.clone();

        run_blocking(move || normalizer.normalize(&html, platform)).await
    }
}

/// Run `task` under `spawn_blocking`, reporting a panic or cancellation as
/// [`NormalizeError::TransformFailure`].
async fn run_blocking<T, F>(task: F) -> NormalizeResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> NormalizeResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| NormalizeError::TransformFailure(format!("normalization task failed: {e}")))?
}
