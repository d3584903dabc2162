//! Catalog route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    about_handler, add_category_form_handler, add_category_handler, add_page_form_handler,
    add_page_handler, category_handler, index_handler,
};
use axum::{Router, routing::get};

/// Read-only pages.
///
/// # Endpoints
///
/// - `GET /` - Top categories and pages
/// - `GET /about` - About page
/// - `GET /category/{category_name_url}` - Pages of one category
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/about", get(about_handler))
        .route("/category/{category_name_url}", get(category_handler))
}

/// Form pages that write to the catalog.
///
/// # Endpoints
///
/// - `GET  /add_category` - Empty category form
/// - `POST /add_category` - Create a category
/// - `GET  /category/{category_name_url}/add_page` - Empty page form
/// - `POST /category/{category_name_url}/add_page` - Create a page
pub fn form_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/add_category",
            get(add_category_form_handler).post(add_category_handler),
        )
        .route(
            "/category/{category_name_url}/add_page",
            get(add_page_form_handler).post(add_page_handler),
        )
}
