//! Repository trait for categories.

use crate::domain::entities::{Category, NewCategory};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for storing and ranking categories.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCategoryRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryCategoryRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_category.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Inserts a new category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a category with the same name already exists.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_category: NewCategory) -> Result<Category, AppError>;

    /// Finds a category by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, AppError>;

    /// Lists at most `limit` categories, most liked first.
    ///
    /// Ties are broken by name in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_by_likes(&self, limit: i64) -> Result<Vec<Category>, AppError>;

    /// Lists every category ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_all(&self) -> Result<Vec<Category>, AppError>;

    /// Counts stored categories.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;
}
