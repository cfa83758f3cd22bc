//! synthdocs - synthetic donation documents for OCR pipeline testing.
//!
//! Generates receipts, acknowledgment letters, bank statements and IRS forms
//! with ground-truth manifests, and links them into donation scenarios.

use synthdocs::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    let default_filter = if cli::is_verbose() {
        "synthdocs=info"
    } else {
        "synthdocs=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    cli::run().await
}
