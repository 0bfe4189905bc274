//! Getter methods for the configuration types

use std::net::SocketAddr;

use anyhow::{Context, Result};

use super::types::{NormalizerConfig, ServerConfig};
use crate::normalizer::Platform;
use crate::utils::REQUEST_BODY_OVERHEAD;

impl NormalizerConfig {
    #[must_use]
    pub fn max_html_size(&self) -> usize {
        self.max_html_size
    }

    #[must_use]
    pub fn default_platform(&self) -> Platform {
        self.default_platform
    }
}

impl ServerConfig {
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    #[must_use]
    pub fn normalizer(&self) -> &NormalizerConfig {
        &self.normalizer
    }

    /// Largest request body the service accepts.
    ///
    /// JSON escaping can grow the HTML payload, so the ceiling is the HTML
    /// limit doubled plus a fixed envelope allowance.
    #[must_use]
    pub fn max_body_bytes(&self) -> usize {
        self.normalizer
            .max_html_size
            .saturating_mul(2)
            .saturating_add(REQUEST_BODY_OVERHEAD)
    }

    /// Resolve `host:port` into a socket address.
    ///
    /// # Errors
    ///
    /// Returns an error if the host is not a valid IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address '{}:{}'", self.host, self.port))
    }
}
