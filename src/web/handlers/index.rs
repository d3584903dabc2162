//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::application::services::{CategoryListing, HomeListing};
use crate::domain::entities::Page;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the home page.
///
/// Renders `templates/index.html` with:
/// - The five most liked categories, each with its slug
/// - The five most viewed pages
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub categories: Vec<CategoryListing>,
    pub pages: Vec<Page>,
}

impl From<HomeListing> for IndexTemplate {
    fn from(listing: HomeListing) -> Self {
        Self {
            categories: listing.categories,
            pages: listing.pages,
        }
    }
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(State(state): State<AppState>) -> Result<IndexTemplate, AppError> {
    render_index(&state).await
}

/// Builds the home page from the current store contents.
///
/// Shared with the category form, which shows the home page after a
/// successful submission.
pub(crate) async fn render_index(state: &AppState) -> Result<IndexTemplate, AppError> {
    let listing = state.catalog_service.home_listing().await?;
    Ok(listing.into())
}
