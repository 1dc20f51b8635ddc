mod common;

use chrono::{Duration, Utc};
use product_api::domain::entities::Product;
use product_api::domain::repositories::{ProductQuery, ProductRepository, SortOrder};
use product_api::error::AppError;
use product_api::infrastructure::persistence::SqliteProductRepository;
use std::sync::Arc;
use uuid::Uuid;

async fn repo() -> SqliteProductRepository {
    SqliteProductRepository::new(Arc::new(common::setup_pool().await))
}

async fn seed(repo: &SqliteProductRepository, count: usize) {
    // Inserted in reverse so ordering comes from the query, not insertion order.
    for i in (1..=count).rev() {
        let product = Product::new(format!("Product {:02}", i), i as f64).unwrap();
        repo.create(&product).await.unwrap();
    }
}

fn names(products: &[Product]) -> Vec<String> {
    products.iter().map(|p| p.name.clone()).collect()
}

#[tokio::test]
async fn test_create_and_find_by_id() {
    let repo = repo().await;

    let product = Product::new("book", 15.0).unwrap();
    repo.create(&product).await.unwrap();

    let found = repo.find_by_id(product.id).await.unwrap();

    assert_eq!(found, product);
}

#[tokio::test]
async fn test_find_by_id_not_found() {
    let repo = repo().await;

    let result = repo.find_by_id(Uuid::new_v4()).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[tokio::test]
async fn test_pagination_pages() {
    let repo = repo().await;
    seed(&repo, 32).await;

    let first = repo
        .find_all(ProductQuery::new(1, 10, SortOrder::Asc))
        .await
        .unwrap();
    assert_eq!(first.products.len(), 10);
    assert_eq!(first.products[0].name, "Product 01");
    assert_eq!(first.products[9].name, "Product 10");
    assert_eq!(first.total, 32);
    assert_eq!(first.page, 1);
    assert_eq!(first.limit, 10);

    let second = repo
        .find_all(ProductQuery::new(2, 10, SortOrder::Asc))
        .await
        .unwrap();
    assert_eq!(second.products[0].name, "Product 11");
    assert_eq!(second.products[9].name, "Product 20");

    let last = repo
        .find_all(ProductQuery::new(4, 10, SortOrder::Asc))
        .await
        .unwrap();
    assert_eq!(names(&last.products), vec!["Product 31", "Product 32"]);

    let beyond = repo
        .find_all(ProductQuery::new(5, 10, SortOrder::Asc))
        .await
        .unwrap();
    assert!(beyond.products.is_empty());
    assert_eq!(beyond.total, 32);
}

#[tokio::test]
async fn test_zero_limit_returns_everything() {
    let repo = repo().await;
    seed(&repo, 32).await;

    let page = repo
        .find_all(ProductQuery::new(3, 0, SortOrder::Asc))
        .await
        .unwrap();

    assert_eq!(page.products.len(), 32);
    assert_eq!(page.products[0].name, "Product 01");
    assert_eq!(page.products[31].name, "Product 32");
}

#[tokio::test]
async fn test_page_below_one_reads_first_page() {
    let repo = repo().await;
    seed(&repo, 12).await;

    let page = repo
        .find_all(ProductQuery::new(0, 5, SortOrder::Asc))
        .await
        .unwrap();

    assert_eq!(page.page, 1);
    assert_eq!(page.products[0].name, "Product 01");
    assert_eq!(page.products.len(), 5);
}

#[tokio::test]
async fn test_descending_order() {
    let repo = repo().await;
    seed(&repo, 32).await;

    let page = repo
        .find_all(ProductQuery::new(1, 10, SortOrder::Desc))
        .await
        .unwrap();

    assert_eq!(page.sort, SortOrder::Desc);
    assert_eq!(page.products[0].name, "Product 32");
    assert_eq!(page.products[9].name, "Product 23");
}

#[tokio::test]
async fn test_empty_table() {
    let repo = repo().await;

    let page = repo
        .find_all(ProductQuery::new(1, 10, SortOrder::Asc))
        .await
        .unwrap();

    assert!(page.products.is_empty());
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn test_update_product() {
    let repo = repo().await;

    let product = Product::new("old", 1.0).unwrap();
    repo.create(&product).await.unwrap();

    let created_at = Utc::now() - Duration::days(1);
    let changed = Product::from_parts(product.id, "new".to_string(), 2.5, created_at);
    repo.update(&changed).await.unwrap();

    let found = repo.find_by_id(product.id).await.unwrap();
    assert_eq!(found.name, "new");
    assert_eq!(found.price, 2.5);
    assert_eq!(found.created_at.timestamp(), created_at.timestamp());
}

#[tokio::test]
async fn test_update_missing_product() {
    let repo = repo().await;

    let product = Product::new("ghost", 1.0).unwrap();
    let result = repo.update(&product).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[tokio::test]
async fn test_delete_product() {
    let repo = repo().await;

    let product = Product::new("book", 15.0).unwrap();
    repo.create(&product).await.unwrap();

    repo.delete(product.id).await.unwrap();

    assert!(matches!(
        repo.find_by_id(product.id).await.unwrap_err(),
        AppError::NotFound { .. }
    ));
    assert!(matches!(
        repo.delete(product.id).await.unwrap_err(),
        AppError::NotFound { .. }
    ));
}
