//! About page handler.

use askama::Template;
use askama_web::WebTemplate;

/// Template for the about page.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {}

/// Renders the about page.
///
/// # Endpoint
///
/// `GET /about`
pub async fn about_handler() -> AboutTemplate {
    AboutTemplate {}
}
