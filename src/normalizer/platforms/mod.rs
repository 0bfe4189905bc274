//! Per-platform rule tables.
//!
//! Each module exposes `RULES`, the ordered rule list for one source
//! platform's HTML dialect. Rules that read image or link information run
//! before anything that strips attributes.

pub mod blogger;
pub mod devto;
pub mod ghost;
pub mod hashnode;
pub mod medium;
pub mod substack;
pub mod wordpress;
