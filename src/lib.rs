//! Exoplanet Vetting Service
//!
//! Serves predictions from a pre-trained exoplanet candidate classifier.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                   EXOPLANET VETTING                          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  POST /predict                                               │
//! │     │                                                        │
//! │     ▼                                                        │
//! │  ┌───────────┐  5 values  ┌────────────┐                     │
//! │  │  Request  │───────────▶│ Normalizer │──┐                  │
//! │  │  parsing  │            └────────────┘  │  ┌────────────┐  │
//! │  │           │────────────────────────────┴─▶│ Classifier │  │
//! │  └───────────┘  4 values                     │ (ONNX or   │  │
//! │                                              │  fallback) │  │
//! │                                              └────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod features;
pub mod handlers;
pub mod model;
pub mod models;

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::{get, post}, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub use config::Config;
pub use error::{AppError, AppResult};
use model::Classifier;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup, read-only afterwards
    pub classifier: Arc<dyn Classifier>,
}

impl AppState {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }
}

/// Create the main router with all routes
pub fn create_router(state: AppState, config: &Config) -> Router {
    // Production serves the pages and the API from one origin
    let cors = if config.is_production() {
        CorsLayer::new()
    } else {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        // Pages
        .route("/", get(handlers::pages::landing))
        .route("/home", get(handlers::pages::home))
        .route("/manual", get(handlers::pages::manual))
        .route("/csv", get(handlers::pages::csv))
        .nest_service("/static", ServeDir::new(&config.static_dir))

        // API
        .route("/health", get(handlers::health::check))
        .route("/predict", post(handlers::predict::predict))

        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors)
                .layer(DefaultBodyLimit::max(config.body_limit_bytes)),
        )
        .with_state(state)
}
