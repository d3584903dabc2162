#![allow(dead_code)]

use axum_test::TestServer;
use rango::domain::entities::{Category, NewCategory, NewPage, Page};
use rango::domain::repositories::{CategoryRepository, PageRepository};
use rango::infrastructure::memory::{MemoryCategoryRepository, MemoryPageRepository, MemoryStore};
use rango::state::AppState;
use rango::web::routes::{form_routes, public_routes};

/// Test server over an in-memory store, plus a handle to inspect the store.
pub struct TestApp {
    pub server: TestServer,
    pub store: MemoryStore,
}

impl TestApp {
    pub fn new() -> Self {
        let store = MemoryStore::new();
        let state = AppState::in_memory(store.clone());

        let app = public_routes().merge(form_routes()).with_state(state);

        Self {
            server: TestServer::new(app).unwrap(),
            store,
        }
    }

    pub fn categories(&self) -> MemoryCategoryRepository {
        MemoryCategoryRepository::new(self.store.clone())
    }

    pub fn pages(&self) -> MemoryPageRepository {
        MemoryPageRepository::new(self.store.clone())
    }

    pub async fn create_category(&self, name: &str, likes: i32) -> Category {
        self.categories()
            .create(NewCategory {
                name: name.to_string(),
                likes,
            })
            .await
            .unwrap()
    }

    pub async fn create_page(&self, category_id: i64, title: &str, views: i32) -> Page {
        self.pages()
            .create(NewPage {
                category_id,
                title: title.to_string(),
                url: format!("http://example.com/{}", title.replace(' ', "-")),
                views,
            })
            .await
            .unwrap()
    }

    pub async fn find_category(&self, name: &str) -> Category {
        self.categories().find_by_name(name).await.unwrap().unwrap()
    }

    pub async fn category_count(&self) -> i64 {
        self.categories().count().await.unwrap()
    }

    pub async fn page_count(&self) -> i64 {
        self.pages().count().await.unwrap()
    }
}
