//! Router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`           - Create a shortened URL
//! - `GET  /analytics/{code}`  - Access analytics for a link
//! - `GET  /health`            - Liveness check
//! - `GET  /{code}`            - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Path normalization** - the canonical short URL carries a trailing
//!   slash (`<base>/<code>/`); both forms resolve

use axum::routing::{get, post};
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::Level;

use crate::api::handlers::{
    analytics_handler, health_handler, redirect_handler, shorten_handler,
};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/analytics/{code}", get(analytics_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        );

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
