//! Shared configuration constants for the normalizer
//!
//! This module contains default values used throughout the codebase to
//! ensure consistency and avoid magic numbers.

/// Maximum HTML input size: 10 MB
///
/// Imported posts are rarely above a few hundred KB:
/// - Long-form Medium/Substack essays: 50-300 KB
/// - WordPress pages with inline galleries: up to ~1-2 MB
///
/// Anything above this is rejected before parsing.
pub const MAX_HTML_SIZE: usize = 10 * 1024 * 1024;

/// Platform assumed when a caller does not name one.
pub const DEFAULT_PLATFORM_TAG: &str = "medium";

/// Default bind address for the HTTP service.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port for the HTTP service.
pub const DEFAULT_PORT: u16 = 8787;

/// Extra room on top of the HTML ceiling for the JSON envelope
/// (`title`, `platform`, quoting and escapes).
pub const REQUEST_BODY_OVERHEAD: usize = 64 * 1024;
