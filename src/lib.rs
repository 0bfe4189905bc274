//! Normalizes HTML exported by blogging platforms (Medium, Substack, Blogger,
//! Hashnode, WordPress, Ghost, DEV.to) into the HTML subset a TipTap editor
//! accepts.
//!
//! The library entry point is [`normalize`]; [`ContentNormalizer`] adds the
//! configured size ceiling and default platform, and [`server`] exposes both
//! over HTTP.

pub mod config;
pub mod error;
pub mod normalizer;
pub mod server;
pub mod utils;

pub use config::{NormalizerConfig, ServerConfig};
pub use error::{NormalizeError, NormalizeResult};
pub use normalizer::{ContentNormalizer, Platform, normalize, universal_clean};
pub use server::run_server;
