//! In-process page repository.

use async_trait::async_trait;
use serde_json::json;

use super::store::MemoryStore;
use crate::domain::entities::{NewPage, Page};
use crate::domain::repositories::PageRepository;
use crate::error::AppError;

/// Page repository over a [`MemoryStore`].
///
/// Checks the category reference the way a foreign key would.
pub struct MemoryPageRepository {
    store: MemoryStore,
}

impl MemoryPageRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PageRepository for MemoryPageRepository {
    async fn create(&self, new_page: NewPage) -> Result<Page, AppError> {
        if new_page.views < 0 {
            return Err(AppError::bad_request(
                "Views must not be negative",
                json!({ "views": new_page.views }),
            ));
        }

        let mut tables = self.store.tables.write().await;

        if !tables
            .categories
            .iter()
            .any(|c| c.id == new_page.category_id)
        {
            return Err(AppError::not_found(
                "Category not found",
                json!({ "category_id": new_page.category_id }),
            ));
        }

        let id = tables.allocate_page_id();
        let page = Page::new(
            id,
            new_page.category_id,
            new_page.title,
            new_page.url,
            new_page.views,
        );
        tables.pages.push(page.clone());

        Ok(page)
    }

    async fn list_by_views(&self, limit: i64) -> Result<Vec<Page>, AppError> {
        let tables = self.store.tables.read().await;

        let mut pages = tables.pages.clone();
        pages.sort_by(|a, b| {
            b.views
                .cmp(&a.views)
                .then_with(|| a.title.cmp(&b.title))
                .then_with(|| a.id.cmp(&b.id))
        });
        pages.truncate(usize::try_from(limit).unwrap_or(0));

        Ok(pages)
    }

    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Page>, AppError> {
        let tables = self.store.tables.read().await;

        Ok(tables
            .pages
            .iter()
            .filter(|p| p.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let tables = self.store.tables.read().await;

        Ok(tables.pages.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewCategory;
    use crate::domain::repositories::CategoryRepository;
    use crate::infrastructure::memory::MemoryCategoryRepository;

    async fn store_with_category(name: &str) -> (MemoryStore, i64) {
        let store = MemoryStore::new();
        let categories = MemoryCategoryRepository::new(store.clone());
        let category = categories.create(NewCategory::named(name)).await.unwrap();
        (store, category.id)
    }

    fn new_page(category_id: i64, title: &str, views: i32) -> NewPage {
        NewPage {
            category_id,
            title: title.to_string(),
            url: format!("http://example.com/{title}"),
            views,
        }
    }

    #[tokio::test]
    async fn test_create_requires_existing_category() {
        let repo = MemoryPageRepository::new(MemoryStore::new());

        let result = repo.create(new_page(42, "orphan", 0)).await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_by_category_keeps_insertion_order() {
        let (store, python) = store_with_category("Python").await;
        let other = MemoryCategoryRepository::new(store.clone())
            .create(NewCategory::named("Django"))
            .await
            .unwrap()
            .id;
        let repo = MemoryPageRepository::new(store);

        repo.create(new_page(python, "zeta", 100)).await.unwrap();
        repo.create(new_page(other, "unrelated", 1)).await.unwrap();
        repo.create(new_page(python, "alpha", 0)).await.unwrap();

        let pages = repo.list_by_category(python).await.unwrap();
        let titles: Vec<&str> = pages.iter().map(|p| p.title.as_str()).collect();

        assert_eq!(titles, vec!["zeta", "alpha"]);
    }

    #[tokio::test]
    async fn test_list_by_views_orders_and_limits() {
        let (store, python) = store_with_category("Python").await;
        let repo = MemoryPageRepository::new(store);

        for (title, views) in [("a", 1), ("b", 9), ("c", 9), ("d", 3), ("e", 4), ("f", 2), ("g", 0)] {
            repo.create(new_page(python, title, views)).await.unwrap();
        }

        let top = repo.list_by_views(5).await.unwrap();
        let titles: Vec<&str> = top.iter().map(|p| p.title.as_str()).collect();

        assert_eq!(titles, vec!["b", "c", "e", "d", "f"]);
    }
}
