//! Core configuration types for content normalization
//!
//! `NormalizerConfig` controls the library entry points; `ServerConfig`
//! wraps it with the bind address of the HTTP service.

use serde::{Deserialize, Serialize};

use crate::normalizer::Platform;
use crate::utils::{DEFAULT_HOST, DEFAULT_PORT, MAX_HTML_SIZE};

/// Configuration for a normalization run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Inputs larger than this many bytes are rejected before parsing.
    ///
    /// **INVARIANT:** Always non-zero (enforced by the builder).
    pub(crate) max_html_size: usize,

    /// Platform used when the caller does not name one.
    pub(crate) default_platform: Platform,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            max_html_size: MAX_HTML_SIZE,
            default_platform: Platform::default(),
        }
    }
}

/// Configuration for the HTTP service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) normalizer: NormalizerConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            normalizer: NormalizerConfig::default(),
        }
    }
}
