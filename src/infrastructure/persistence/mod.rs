//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgCategoryRepository`] - Category storage and ranking
//! - [`PgPageRepository`] - Page storage and ranking

pub mod pg_category_repository;
pub mod pg_page_repository;

pub use pg_category_repository::PgCategoryRepository;
pub use pg_page_repository::PgPageRepository;
