use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use symcheck_core::{Catalog, CoreConfig, SymptomCheckService, REFERENCE_CONDITIONS};

/// Main entry point for the SymCheck application
///
/// Loads `.env`, resolves configuration once and starts the REST server
/// (port 3000 by default).
///
/// # Environment Variables
/// - `SYMCHECK_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `SYMCHECK_SUGGESTION_LIMIT`: Maximum suggestions per request (default: 8)
/// - `SYMCHECK_SUGGESTION_MIN_CHARS`: Minimum input length before suggesting (default: 2)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, startup or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("symcheck=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr =
        std::env::var("SYMCHECK_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let cfg = Arc::new(CoreConfig::from_env_values(
        std::env::var("SYMCHECK_SUGGESTION_LIMIT").ok(),
        std::env::var("SYMCHECK_SUGGESTION_MIN_CHARS").ok(),
    )?);

    // Fail fast if the built-in table was edited into an inconsistent state.
    let catalog = Catalog::try_new(&REFERENCE_CONDITIONS)?;
    tracing::info!(
        "++ Loaded {} conditions, {} symptom tags",
        catalog.len(),
        catalog.all_symptom_tags().len()
    );
    tracing::info!("++ Starting SymCheck REST on {}", rest_addr);

    api_rest::serve(&rest_addr, SymptomCheckService::with_catalog(catalog, cfg)).await
}
