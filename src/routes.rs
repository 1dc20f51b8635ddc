//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`     - Health check: database (public)
//! - `/products[/{id}]` - Product CRUD (Bearer token required)
//! - `/users`           - Registration, listing and login
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Bearer JWT verified against the configured secret
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the application router with all routes and middleware.
///
/// Integration tests drive this directly; [`app_router`] wraps it for serving.
pub fn router(state: AppState) -> Router {
    let product_router = api::routes::product_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let user_router = api::routes::user_routes(state.clone());

    Router::new()
        .route("/health", get(health_handler))
        .merge(product_router)
        .merge(user_router)
        .with_state(state)
        .layer(tracing::layer())
}

/// [`router`] with trailing slashes trimmed before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
