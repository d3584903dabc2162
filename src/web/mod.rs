//! Web layer serving the catalog as HTML.
//!
//! Uses Askama templates for server-side rendering and HTML forms for
//! submissions.
//!
//! # Modules
//!
//! - [`forms`] - Form bindings and validation
//! - [`handlers`] - Template rendering handlers
//! - [`middleware`] - Rate limiting and request tracing
//! - [`routes`] - Route configuration

pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod routes;
