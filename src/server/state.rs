//! Application state shared by all request handlers.

use crate::normalizer::ContentNormalizer;

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub(crate) normalizer: ContentNormalizer,
}

impl AppState {
    #[must_use]
    pub fn new(normalizer: ContentNormalizer) -> Self {
        Self { normalizer }
    }
}
