//! tiptap-normalizer HTTP service.
//!
//! Serves the content normalizer over HTTP. Every option can also be given
//! through a `TIPTAP_*` environment variable.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tiptap_normalizer::utils::{DEFAULT_HOST, DEFAULT_PLATFORM_TAG, DEFAULT_PORT, MAX_HTML_SIZE};
use tiptap_normalizer::{NormalizerConfig, ServerConfig, run_server};

/// Normalize blogging-platform HTML into TipTap-compatible markup.
#[derive(Parser, Debug)]
#[command(name = "tiptap-normalizer", version, about)]
struct Args {
    /// Address to bind
    #[arg(long, env = "TIPTAP_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "TIPTAP_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Largest accepted HTML input, in bytes
    #[arg(long, env = "TIPTAP_MAX_HTML_BYTES", default_value_t = MAX_HTML_SIZE)]
    max_html_bytes: usize,

    /// Platform assumed when a request names none
    #[arg(long, env = "TIPTAP_DEFAULT_PLATFORM", default_value = DEFAULT_PLATFORM_TAG)]
    default_platform: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins; otherwise info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let normalizer = NormalizerConfig::builder()
        .max_html_size(args.max_html_bytes)
        .default_platform(args.default_platform.as_str())
        .build()?;

    let config = ServerConfig::builder()
        .host(args.host)
        .port(args.port)
        .normalizer(normalizer)
        .build()?;

    run_server(config).await
}
