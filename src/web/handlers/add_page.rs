//! Page submission handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use super::add_category::AddCategoryTemplate;
use super::category::render_category;
use crate::application::services::PageCreation;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::slug;
use crate::web::forms::{FormErrors, PageForm};

/// Template for the page form.
///
/// Renders `templates/add_page.html` for the category named by
/// `category_name_url`.
#[derive(Template, WebTemplate)]
#[template(path = "add_page.html")]
pub struct AddPageTemplate {
    pub category_name_url: String,
    pub category_name: String,
    pub title: String,
    pub url: String,
    pub errors: FormErrors,
}

impl AddPageTemplate {
    fn new(category_name_url: String, form: PageForm, errors: FormErrors) -> Self {
        Self {
            category_name: slug::decode(&category_name_url),
            category_name_url,
            title: form.title,
            url: form.url,
            errors,
        }
    }
}

/// Renders an empty page form for a category.
///
/// # Endpoint
///
/// `GET /category/{category_name_url}/add_page`
pub async fn add_page_form_handler(Path(category_name_url): Path<String>) -> AddPageTemplate {
    AddPageTemplate::new(category_name_url, PageForm::default(), FormErrors::default())
}

/// Files a submitted page under a category.
///
/// # Endpoint
///
/// `POST /category/{category_name_url}/add_page`
///
/// # Responses
///
/// - Valid form, known category: the page is stored with zero views and the
///   category page is rendered
/// - Valid form, unknown category: nothing is stored and an empty category
///   form is rendered so the category can be created first
/// - Invalid form: the page form is rendered again with errors
///
/// # Errors
///
/// Returns [`AppError::Internal`] on storage errors.
pub async fn add_page_handler(
    Path(category_name_url): Path<String>,
    State(state): State<AppState>,
    Form(form): Form<PageForm>,
) -> Result<Response, AppError> {
    let draft = match form.clean() {
        Ok(draft) => draft,
        Err(errors) => {
            tracing::warn!(?errors, category = %category_name_url, "Invalid page form");
            return Ok(AddPageTemplate::new(category_name_url, form, errors).into_response());
        }
    };

    match state
        .catalog_service
        .create_page(&category_name_url, draft)
        .await?
    {
        PageCreation::Created(_) => Ok(render_category(&state, &category_name_url)
            .await?
            .into_response()),
        PageCreation::CategoryMissing => Ok(AddCategoryTemplate::default().into_response()),
    }
}
