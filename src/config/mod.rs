//! Configuration module for content normalization
//!
//! This module provides the `NormalizerConfig` struct and its builder, plus the
//! `ServerConfig` used by the HTTP service binary.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::{NormalizerConfigBuilder, ServerConfigBuilder};
pub use types::{NormalizerConfig, ServerConfig};
