//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::CatalogService;
use crate::domain::repositories::{CategoryRepository, PageRepository};
use crate::infrastructure::memory::{MemoryCategoryRepository, MemoryPageRepository, MemoryStore};

/// Per-process state; cloned cheaply into each request.
///
/// Handlers receive it explicitly through the `State` extractor. Nothing
/// request-specific is stored here.
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService>,
}

impl AppState {
    pub fn new(catalog_service: Arc<CatalogService>) -> Self {
        Self { catalog_service }
    }

    /// Builds the state from a pair of repositories.
    pub fn with_repositories(
        categories: Arc<dyn CategoryRepository>,
        pages: Arc<dyn PageRepository>,
    ) -> Self {
        Self::new(Arc::new(CatalogService::new(categories, pages)))
    }

    /// Builds the state over an in-process store.
    pub fn in_memory(store: MemoryStore) -> Self {
        Self::with_repositories(
            Arc::new(MemoryCategoryRepository::new(store.clone())),
            Arc::new(MemoryPageRepository::new(store)),
        )
    }
}
