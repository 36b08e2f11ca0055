//! Exoplanet Vetting Server
//!
//! Loads the candidate classifier once, then serves the vetting pages and
//! the prediction API.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exoplanet_vetting::{config::LogFormat, create_router, model, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Initialize logging
    let json = config.log_format == LogFormat::Json;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "exoplanet_vetting=debug,tower_http=debug".into()))
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .init();

    tracing::info!("Exoplanet Vetting Server starting...");
    tracing::info!("Environment: {}", config.environment);

    // Load the model
    let classifier = model::load_classifier(&config)
        .context("Failed to load prediction model")?;
    tracing::info!("Classifier ready: {}", classifier.name());

    // Build router
    let app = create_router(AppState::new(classifier), &config);

    // Start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("🚀 Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
