//! In-process category repository.

use async_trait::async_trait;
use serde_json::json;

use super::store::MemoryStore;
use crate::domain::entities::{Category, NewCategory};
use crate::domain::repositories::CategoryRepository;
use crate::error::AppError;

/// Category repository over a [`MemoryStore`].
///
/// Mirrors the PostgreSQL repository: unique names, ranking by likes with
/// name as tie-break.
pub struct MemoryCategoryRepository {
    store: MemoryStore,
}

impl MemoryCategoryRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CategoryRepository for MemoryCategoryRepository {
    async fn create(&self, new_category: NewCategory) -> Result<Category, AppError> {
        if new_category.likes < 0 {
            return Err(AppError::bad_request(
                "Likes must not be negative",
                json!({ "likes": new_category.likes }),
            ));
        }

        let mut tables = self.store.tables.write().await;

        if tables.categories.iter().any(|c| c.name == new_category.name) {
            return Err(AppError::conflict(
                "Category with this name already exists",
                json!({ "name": new_category.name }),
            ));
        }

        let id = tables.allocate_category_id();
        let category = Category::new(id, new_category.name, new_category.likes);
        tables.categories.push(category.clone());

        Ok(category)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, AppError> {
        let tables = self.store.tables.read().await;

        Ok(tables.categories.iter().find(|c| c.name == name).cloned())
    }

    async fn list_by_likes(&self, limit: i64) -> Result<Vec<Category>, AppError> {
        let tables = self.store.tables.read().await;

        let mut categories = tables.categories.clone();
        categories.sort_by(|a, b| b.likes.cmp(&a.likes).then_with(|| a.name.cmp(&b.name)));
        categories.truncate(usize::try_from(limit).unwrap_or(0));

        Ok(categories)
    }

    async fn list_all(&self) -> Result<Vec<Category>, AppError> {
        let tables = self.store.tables.read().await;

        let mut categories = tables.categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(categories)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let tables = self.store.tables.read().await;

        Ok(tables.categories.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> MemoryCategoryRepository {
        MemoryCategoryRepository::new(MemoryStore::new())
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = repo();

        let first = repo.create(NewCategory::named("Python")).await.unwrap();
        let second = repo.create(NewCategory::named("Django")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_create_duplicate_name_conflicts() {
        let repo = repo();

        repo.create(NewCategory::named("Python")).await.unwrap();
        let result = repo.create(NewCategory::named("Python")).await;

        assert!(matches!(result, Err(AppError::Conflict { .. })));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_negative_likes() {
        let repo = repo();

        let result = repo
            .create(NewCategory {
                name: "Broken".to_string(),
                likes: -1,
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_find_by_name_is_exact() {
        let repo = repo();
        repo.create(NewCategory::named("Other Frameworks"))
            .await
            .unwrap();

        assert!(repo.find_by_name("Other Frameworks").await.unwrap().is_some());
        assert!(repo.find_by_name("other frameworks").await.unwrap().is_none());
        assert!(repo.find_by_name("Other_Frameworks").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_by_likes_orders_and_limits() {
        let repo = repo();
        for (name, likes) in [("b", 10), ("a", 10), ("c", 30), ("d", 0), ("e", 5), ("f", 7)] {
            repo.create(NewCategory {
                name: name.to_string(),
                likes,
            })
            .await
            .unwrap();
        }

        let top = repo.list_by_likes(5).await.unwrap();
        let names: Vec<&str> = top.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(names, vec!["c", "a", "b", "f", "e"]);
    }

    #[tokio::test]
    async fn test_list_all_sorted_by_name() {
        let repo = repo();
        repo.create(NewCategory::named("Zope")).await.unwrap();
        repo.create(NewCategory::named("Bottle")).await.unwrap();

        let all = repo.list_all().await.unwrap();

        assert_eq!(all[0].name, "Bottle");
        assert_eq!(all[1].name, "Zope");
    }

    #[tokio::test]
    async fn test_tie_break_uses_byte_order() {
        let repo = repo();
        for name in ["apple", "Banana", "cherry"] {
            repo.create(NewCategory {
                name: name.to_string(),
                likes: 3,
            })
            .await
            .unwrap();
        }

        let top = repo.list_by_likes(5).await.unwrap();
        let names: Vec<&str> = top.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(names, vec!["Banana", "apple", "cherry"]);
    }
}
