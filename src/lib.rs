//! Packetwatch
//!
//! Rule-based network packet anomaly detection.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      PACKETWATCH                         │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌──────────────┐   ┌────────────────┐  │
//! │  │  API      │   │  Classifier  │   │  Model Upload  │  │
//! │  │  (Axum)   │──▶│  (pure rule) │   │  (blob + row)  │  │
//! │  └───────────┘   └──────▲───────┘   └───────┬────────┘  │
//! │                         │                   ▼            │
//! │  ┌───────────┐          │            ┌─────────────┐    │
//! │  │  Client   │──────────┘            │ PostgreSQL  │    │
//! │  │ (fallback)│                       └─────────────┘    │
//! │  └───────────┘                                           │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The classifier is evaluated in exactly one place; the analyze endpoint
//! and the client adapter's local fallback both call it.

pub mod analysis;
pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod storage;

use axum::{
    http::{header, HeaderName},
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::{AppError, AppResult};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: sqlx::PgPool,
    pub config: config::Config,
    pub store: storage::ModelStore,
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    // Browser clients send auth/apikey headers even on public routes
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ]);

    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/analyze-packet", post(handlers::analyze::analyze))
        .route("/convert-model", post(handlers::upload::upload))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
