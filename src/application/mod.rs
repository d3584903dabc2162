//! Application layer services implementing the catalog workflow.
//!
//! Services coordinate repository calls and the slug convention, and expose
//! a small API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::catalog_service::CatalogService`] - Listings, lookups and creation

pub mod services;
