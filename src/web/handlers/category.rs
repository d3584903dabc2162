//! Category detail page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};

use crate::application::services::{CategoryDetail, CategoryLookup};
use crate::domain::entities::{Category, Page};
use crate::error::AppError;
use crate::state::AppState;

/// Template for a single category.
///
/// Renders `templates/category.html`. When `category` is `None` the template
/// shows a "does not exist" notice instead of the page list.
#[derive(Template, WebTemplate)]
#[template(path = "category.html")]
pub struct CategoryTemplate {
    pub category_name: String,
    pub category_name_url: String,
    pub category: Option<Category>,
    pub pages: Vec<Page>,
}

impl From<CategoryDetail> for CategoryTemplate {
    fn from(detail: CategoryDetail) -> Self {
        let (category, pages) = match detail.lookup {
            CategoryLookup::Found { category, pages } => (Some(category), pages),
            CategoryLookup::Absent => (None, Vec::new()),
        };

        Self {
            category_name: detail.category_name,
            category_name_url: detail.category_name_url,
            category,
            pages,
        }
    }
}

/// Renders the pages of a category.
///
/// # Endpoint
///
/// `GET /category/{category_name_url}`
///
/// An unknown category still renders with `200 OK` and an empty state.
pub async fn category_handler(
    Path(category_name_url): Path<String>,
    State(state): State<AppState>,
) -> Result<CategoryTemplate, AppError> {
    render_category(&state, &category_name_url).await
}

/// Builds the category page for a slug.
///
/// Shared with the page form, which shows the category after a successful
/// submission.
pub(crate) async fn render_category(
    state: &AppState,
    category_name_url: &str,
) -> Result<CategoryTemplate, AppError> {
    let detail = state
        .catalog_service
        .category_detail(category_name_url)
        .await?;
    Ok(detail.into())
}
