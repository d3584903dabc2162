//! Shared in-process tables backing the memory repositories.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{Category, Page};

#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) categories: Vec<Category>,
    pub(crate) pages: Vec<Page>,
    next_category_id: i64,
    next_page_id: i64,
}

impl Tables {
    pub(crate) fn allocate_category_id(&mut self) -> i64 {
        self.next_category_id += 1;
        self.next_category_id
    }

    pub(crate) fn allocate_page_id(&mut self) -> i64 {
        self.next_page_id += 1;
        self.next_page_id
    }
}

/// Handle to an in-process catalog.
///
/// Cloning the handle shares the same tables, so a category repository and a
/// page repository built from one store see each other's writes. Nothing is
/// persisted across restarts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub(crate) tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        tracing::debug!("Using in-memory catalog store");
        Self::default()
    }
}
