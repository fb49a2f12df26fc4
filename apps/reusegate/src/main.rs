//! # ReuseGate
//!
//! The main binary for the ReuseGate reuse viability calculator.
//!
//! This application provides:
//! - HTTP JSON API server (axum-based)
//! - CLI interface for both gates and the sensitivity sweep
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │               apps/reusegate (THE BINARY)            │
//! │                                                      │
//! │  ┌─────────────┐    ┌─────────────┐    ┌──────────┐  │
//! │  │   CLI       │    │   HTTP API  │    │  Params  │  │
//! │  │  (clap)     │    │   (axum)    │    │  (toml)  │  │
//! │  └──────┬──────┘    └──────┬──────┘    └────┬─────┘  │
//! │         └──────────────────┼────────────────┘        │
//! │                            ▼                         │
//! │                  ┌──────────────────┐                │
//! │                  │  reusegate-core  │                │
//! │                  │   (THE MODEL)    │                │
//! │                  └──────────────────┘                │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Full report for the reference vehicle
//! reusegate report
//!
//! # Single gates with overrides
//! reusegate break-even --p-rec 0.97 --c-ref 8
//! reusegate cadence --rate 30 --t-turn95 18
//!
//! # Parameter file and JSON output
//! reusegate --params vehicle.toml --json-mode sweep
//!
//! # Start the HTTP server
//! reusegate server --host 0.0.0.0 --port 8080
//! ```

use clap::Parser;
use reusegate::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // REUSEGATE_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("REUSEGATE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "reusegate=info,tower_http=debug".into());

    // Logs go to stderr so JSON mode output on stdout stays parseable.
    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    let cli = cli::Cli::parse();

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the ReuseGate startup banner.
fn print_banner() {
    println!(
        r#"
  ReuseGate v{}

  Break-even • Cadence • Sensitivity
"#,
        env!("CARGO_PKG_VERSION")
    );
}
