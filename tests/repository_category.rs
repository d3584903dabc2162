use std::sync::Arc;

use rango::AppError;
use rango::domain::entities::NewCategory;
use rango::domain::repositories::CategoryRepository;
use rango::infrastructure::persistence::PgCategoryRepository;
use sqlx::PgPool;

fn repository(pool: PgPool) -> PgCategoryRepository {
    PgCategoryRepository::new(Arc::new(pool))
}

fn category(name: &str, likes: i32) -> NewCategory {
    NewCategory {
        name: name.to_string(),
        likes,
    }
}

#[sqlx::test]
async fn test_create_and_find_by_name(pool: PgPool) {
    let repo = repository(pool);

    let created = repo.create(category("Other Frameworks", 16)).await.unwrap();
    let found = repo.find_by_name("Other Frameworks").await.unwrap().unwrap();

    assert_eq!(found, created);
    assert_eq!(found.likes, 16);
    assert!(repo.find_by_name("Other_Frameworks").await.unwrap().is_none());
    assert!(repo.find_by_name("other frameworks").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_duplicate_name_conflicts(pool: PgPool) {
    let repo = repository(pool);
    repo.create(category("Python", 64)).await.unwrap();

    let result = repo.create(category("Python", 0)).await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[sqlx::test]
async fn test_negative_likes_rejected(pool: PgPool) {
    let repo = repository(pool);

    let result = repo.create(category("Broken", -1)).await;

    assert!(result.is_err());
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[sqlx::test]
async fn test_list_by_likes_orders_and_limits(pool: PgPool) {
    let repo = repository(pool);
    for (name, likes) in [("b", 5), ("a", 5), ("c", 9), ("d", 1), ("e", 0), ("f", 3)] {
        repo.create(category(name, likes)).await.unwrap();
    }

    let top = repo.list_by_likes(5).await.unwrap();

    let names: Vec<&str> = top.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["c", "a", "b", "f", "d"]);
}

#[sqlx::test]
async fn test_list_all(pool: PgPool) {
    let repo = repository(pool);
    assert!(repo.list_all().await.unwrap().is_empty());

    repo.create(category("Django", 32)).await.unwrap();
    repo.create(category("Python", 64)).await.unwrap();

    let all = repo.list_all().await.unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "Django");
}

#[sqlx::test]
async fn test_tie_break_uses_byte_order(pool: PgPool) {
    let repo = repository(pool);
    for name in ["apple", "Banana", "cherry"] {
        repo.create(category(name, 3)).await.unwrap();
    }

    let top = repo.list_by_likes(5).await.unwrap();
    let all = repo.list_all().await.unwrap();

    let ranked: Vec<&str> = top.iter().map(|c| c.name.as_str()).collect();
    let listed: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(ranked, vec!["Banana", "apple", "cherry"]);
    assert_eq!(listed, vec!["Banana", "apple", "cherry"]);
}
