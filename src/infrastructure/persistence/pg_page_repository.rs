//! PostgreSQL implementation of the page repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewPage, Page};
use crate::domain::repositories::PageRepository;
use crate::error::AppError;
use serde_json::json;

#[derive(sqlx::FromRow)]
struct PageRow {
    id: i64,
    category_id: i64,
    title: String,
    url: String,
    views: i32,
}

impl From<PageRow> for Page {
    fn from(r: PageRow) -> Self {
        Page::new(r.id, r.category_id, r.title, r.url, r.views)
    }
}

/// PostgreSQL repository for pages.
pub struct PgPageRepository {
    pool: Arc<PgPool>,
}

impl PgPageRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PageRepository for PgPageRepository {
    async fn create(&self, new_page: NewPage) -> Result<Page, AppError> {
        let row = sqlx::query_as::<_, PageRow>(
            r#"
            INSERT INTO pages (category_id, title, url, views)
            VALUES ($1, $2, $3, $4)
            RETURNING id, category_id, title, url, views
            "#,
        )
        .bind(new_page.category_id)
        .bind(&new_page.title)
        .bind(&new_page.url)
        .bind(new_page.views)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| match AppError::from(e) {
            AppError::NotFound { .. } => AppError::not_found(
                "Category not found",
                json!({ "category_id": new_page.category_id }),
            ),
            other => other,
        })?;

        Ok(row.into())
    }

    async fn list_by_views(&self, limit: i64) -> Result<Vec<Page>, AppError> {
        let rows = sqlx::query_as::<_, PageRow>(
            r#"
            SELECT id, category_id, title, url, views
            FROM pages
            ORDER BY views DESC, title COLLATE "C" ASC, id ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Page::from).collect())
    }

    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Page>, AppError> {
        let rows = sqlx::query_as::<_, PageRow>(
            r#"
            SELECT id, category_id, title, url, views
            FROM pages
            WHERE category_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(category_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Page::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pages")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
