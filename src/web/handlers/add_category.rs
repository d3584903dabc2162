//! Category submission handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};

use super::index::render_index;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::forms::{CategoryForm, FormErrors};

/// Template for the category form.
///
/// Renders `templates/add_category.html`, echoing the submitted name and any
/// field errors.
#[derive(Template, WebTemplate, Default)]
#[template(path = "add_category.html")]
pub struct AddCategoryTemplate {
    pub name: String,
    pub errors: FormErrors,
}

/// Renders an empty category form.
///
/// # Endpoint
///
/// `GET /add_category`
pub async fn add_category_form_handler() -> AddCategoryTemplate {
    AddCategoryTemplate::default()
}

/// Creates a category from a submitted form.
///
/// # Endpoint
///
/// `POST /add_category`
///
/// # Responses
///
/// - Valid form: the category is stored and the home page is rendered
/// - Invalid form or taken name: the form is rendered again with errors
///
/// # Errors
///
/// Returns [`AppError::Internal`] on storage errors.
pub async fn add_category_handler(
    State(state): State<AppState>,
    Form(form): Form<CategoryForm>,
) -> Result<Response, AppError> {
    let new_category = match form.clean() {
        Ok(new_category) => new_category,
        Err(errors) => {
            tracing::warn!(?errors, "Invalid category form");
            return Ok(redisplay(form, errors));
        }
    };

    match state.catalog_service.create_category(new_category).await {
        Ok(_) => Ok(render_index(&state).await?.into_response()),
        Err(AppError::Conflict { .. }) => {
            let errors = FormErrors::single("name", "Category with this name already exists.");
            tracing::warn!(?errors, "Duplicate category name");
            Ok(redisplay(form, errors))
        }
        Err(e) => Err(e),
    }
}

fn redisplay(form: CategoryForm, errors: FormErrors) -> Response {
    AddCategoryTemplate {
        name: form.name,
        errors,
    }
    .into_response()
}
