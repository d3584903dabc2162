//! Repository trait for pages.

use crate::domain::entities::{NewPage, Page};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for storing and ranking pages.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPageRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryPageRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageRepository: Send + Sync {
    /// Inserts a new page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `category_id` references no category.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_page: NewPage) -> Result<Page, AppError>;

    /// Lists at most `limit` pages, most viewed first.
    ///
    /// Ties are broken by title, then by insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_by_views(&self, limit: i64) -> Result<Vec<Page>, AppError>;

    /// Lists all pages of a category in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Page>, AppError>;

    /// Counts stored pages.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;
}
