//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! Useful for development and debugging. The workspace's main `symcheck-run` binary also loads
//! `.env` before starting the same server.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use symcheck_core::{CoreConfig, SymptomCheckService};

/// Main entry point for the SymCheck REST API server
///
/// # Environment Variables
/// - `SYMCHECK_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `SYMCHECK_SUGGESTION_LIMIT`: Maximum suggestions per request (default: 8)
/// - `SYMCHECK_SUGGESTION_MIN_CHARS`: Minimum input length before suggesting (default: 2)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("SYMCHECK_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let cfg = Arc::new(CoreConfig::from_env_values(
        std::env::var("SYMCHECK_SUGGESTION_LIMIT").ok(),
        std::env::var("SYMCHECK_SUGGESTION_MIN_CHARS").ok(),
    )?);

    tracing::info!("-- Starting SymCheck REST API on {}", addr);
    api_rest::serve(&addr, SymptomCheckService::new(cfg)).await
}
