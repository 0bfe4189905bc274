//! Fluent builders for `NormalizerConfig` and `ServerConfig`
//!
//! Validation happens once in `build()` so that a constructed config is
//! always usable as-is.

use anyhow::{Result, anyhow};

use super::types::{NormalizerConfig, ServerConfig};
use crate::normalizer::Platform;

#[derive(Debug, Clone, Default)]
pub struct NormalizerConfigBuilder {
    pub(crate) config: NormalizerConfig,
}

impl NormalizerConfig {
    /// Create a builder for configuring a `NormalizerConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> NormalizerConfigBuilder {
        NormalizerConfigBuilder::default()
    }
}

impl NormalizerConfigBuilder {
    #[must_use]
    pub fn max_html_size(mut self, bytes: usize) -> Self {
        self.config.max_html_size = bytes;
        self
    }

    /// Platform used when a request carries no `platform` field.
    ///
    /// Accepts any tag understood by [`Platform::from_tag`]; unknown tags
    /// resolve to [`Platform::Generic`].
    #[must_use]
    pub fn default_platform(mut self, platform: impl Into<Platform>) -> Self {
        self.config.default_platform = platform.into();
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the size ceiling is zero.
    pub fn build(self) -> Result<NormalizerConfig> {
        if self.config.max_html_size == 0 {
            return Err(anyhow!("max_html_size must be greater than zero"));
        }
        Ok(self.config)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ServerConfigBuilder {
    pub(crate) config: ServerConfig,
}

impl ServerConfig {
    /// Create a builder for configuring a `ServerConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

impl ServerConfigBuilder {
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    #[must_use]
    pub fn normalizer(mut self, normalizer: NormalizerConfig) -> Self {
        self.config.normalizer = normalizer;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the host is empty or `host:port` does not parse
    /// as a socket address.
    pub fn build(self) -> Result<ServerConfig> {
        if self.config.host.trim().is_empty() {
            return Err(anyhow!("host must not be empty"));
        }
        self.config.socket_addr()?;
        Ok(self.config)
    }
}
