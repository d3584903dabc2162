//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                                  - Home listing
//! - `GET  /about`                             - About page
//! - `GET  /category/{category_name_url}`      - Category detail
//! - `GET|POST /add_category`                  - Category form
//! - `GET|POST /category/{category_name_url}/add_page` - Page form
//! - `/static/*`                               - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on form routes
//! - **Path normalization** - Trailing slash handling

use crate::state::AppState;
use crate::web;
use crate::web::middleware::{rate_limit, tracing};
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/static`
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    let form_router = web::routes::form_routes().layer(rate_limit::layer());

    let router = Router::new()
        .merge(web::routes::public_routes())
        .merge(form_router)
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
