//! In-process repository implementations.
//!
//! Used when no database is configured and by tests that exercise the
//! catalog workflow without PostgreSQL.
//!
//! - [`MemoryStore`] - Shared tables
//! - [`MemoryCategoryRepository`] - Category storage and ranking
//! - [`MemoryPageRepository`] - Page storage and ranking

mod category_repository;
mod page_repository;
mod store;

pub use category_repository::MemoryCategoryRepository;
pub use page_repository::MemoryPageRepository;
pub use store::MemoryStore;
