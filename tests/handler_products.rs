mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use product_api::routes::router;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use uuid::Uuid;

async fn make_server() -> (TestServer, SqlitePool) {
    let pool = common::setup_pool().await;
    let server = TestServer::new(router(common::create_test_state(pool.clone()))).unwrap();
    (server, pool)
}

// ─── Auth ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_products_require_token() {
    let (server, _pool) = make_server().await;

    let response = server.get("/products").await;

    response.assert_status_unauthorized();
    assert_eq!(response.header("www-authenticate"), "Bearer");
    assert_eq!(response.json::<Value>()["code"], "unauthorized");
}

#[tokio::test]
async fn test_products_reject_bad_token() {
    let (server, _pool) = make_server().await;

    server
        .post("/products")
        .authorization_bearer("not-a-jwt")
        .json(&json!({ "name": "book", "price": 15.0 }))
        .await
        .assert_status_unauthorized();
}

#[tokio::test]
async fn test_products_reject_token_signed_with_other_secret() {
    let (server, _pool) = make_server().await;

    let foreign = product_api::infrastructure::jwt::JwtSigner::new("other-secret", 300);
    let token = foreign
        .sign(&foreign.claims_for(Uuid::new_v4(), chrono::Utc::now()).unwrap())
        .unwrap();

    server
        .get("/products")
        .authorization_bearer(token)
        .await
        .assert_status_unauthorized();
}

// ─── POST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_product() {
    let (server, pool) = make_server().await;

    let response = server
        .post("/products")
        .authorization_bearer(common::bearer_token())
        .json(&json!({ "name": "book", "price": 15.0 }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["name"], "book");
    assert_eq!(body["price"], 15.0);
    assert!(body["created_at"].is_string());

    let id: Uuid = body["id"].as_str().unwrap().parse().unwrap();
    assert!(!id.is_nil());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_create_product_invalid_fields() {
    let (server, _pool) = make_server().await;
    let token = common::bearer_token();

    for (body, field) in [
        (json!({ "name": "", "price": 15.0 }), "name"),
        (json!({ "name": "book", "price": 0.0 }), "price"),
        (json!({ "name": "book", "price": -3.0 }), "price"),
    ] {
        let response = server
            .post("/products")
            .authorization_bearer(token.clone())
            .json(&body)
            .await;

        response.assert_status_bad_request();
        let json = response.json::<Value>();
        assert_eq!(json["code"], "validation_error");
        assert_eq!(json["details"]["field"], field);
    }
}

#[tokio::test]
async fn test_create_product_malformed_json() {
    let (server, _pool) = make_server().await;

    let response = server
        .post("/products")
        .authorization_bearer(common::bearer_token())
        .content_type("application/json")
        .text("{not json")
        .await;

    response.assert_status_bad_request();
}

// ─── GET list ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_products_paginated() {
    let (server, pool) = make_server().await;
    for i in 1..=12 {
        common::create_test_product(&pool, &format!("Product {:02}", i), 1.0).await;
    }

    let response = server
        .get("/products")
        .add_query_params(json!({ "page": 2, "limit": 5 }))
        .authorization_bearer(common::bearer_token())
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["page"], 2);
    assert_eq!(body["limit"], 5);
    assert_eq!(body["sort"], "asc");
    assert_eq!(body["total"], 12);

    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 5);
    assert_eq!(products[0]["name"], "Product 06");
    assert_eq!(products[4]["name"], "Product 10");
}

#[tokio::test]
async fn test_list_products_defaults_return_all() {
    let (server, pool) = make_server().await;
    common::create_test_product(&pool, "b", 1.0).await;
    common::create_test_product(&pool, "a", 1.0).await;
    common::create_test_product(&pool, "c", 1.0).await;

    let response = server
        .get("/products")
        .authorization_bearer(common::bearer_token())
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    let names: Vec<&str> = body["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_list_products_descending() {
    let (server, pool) = make_server().await;
    common::create_test_product(&pool, "a", 1.0).await;
    common::create_test_product(&pool, "b", 1.0).await;

    let response = server
        .get("/products?sort=desc")
        .authorization_bearer(common::bearer_token())
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["sort"], "desc");
    assert_eq!(body["products"][0]["name"], "b");
}

#[tokio::test]
async fn test_list_products_bad_query() {
    let (server, _pool) = make_server().await;
    let token = common::bearer_token();

    for query in ["/products?sort=sideways", "/products?page=abc", "/products?limit=x"] {
        server
            .get(query)
            .authorization_bearer(token.clone())
            .await
            .assert_status_bad_request();
    }
}

// ─── GET one ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_product() {
    let (server, pool) = make_server().await;
    let product = common::create_test_product(&pool, "book", 15.0).await;

    let response = server
        .get(&format!("/products/{}", product.id))
        .authorization_bearer(common::bearer_token())
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["id"], product.id.to_string());
    assert_eq!(body["name"], "book");
}

#[tokio::test]
async fn test_get_product_not_found() {
    let (server, _pool) = make_server().await;

    let response = server
        .get(&format!("/products/{}", Uuid::new_v4()))
        .authorization_bearer(common::bearer_token())
        .await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["code"], "not_found");
}

#[tokio::test]
async fn test_get_product_bad_id() {
    let (server, _pool) = make_server().await;

    server
        .get("/products/not-a-uuid")
        .authorization_bearer(common::bearer_token())
        .await
        .assert_status_bad_request();
}

// ─── PUT ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_product_path_id_wins() {
    let (server, pool) = make_server().await;
    let product = common::create_test_product(&pool, "old", 1.0).await;

    let response = server
        .put(&format!("/products/{}", product.id))
        .authorization_bearer(common::bearer_token())
        .json(&json!({ "id": Uuid::new_v4(), "name": "new", "price": 2.5 }))
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["id"], product.id.to_string());
    assert_eq!(body["name"], "new");
    assert_eq!(body["price"], 2.5);

    let stored: String = sqlx::query_scalar("SELECT name FROM products WHERE id = ?")
        .bind(product.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, "new");
}

#[tokio::test]
async fn test_update_product_not_found() {
    let (server, _pool) = make_server().await;

    server
        .put(&format!("/products/{}", Uuid::new_v4()))
        .authorization_bearer(common::bearer_token())
        .json(&json!({ "name": "new", "price": 2.5 }))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_update_product_invalid_price() {
    let (server, pool) = make_server().await;
    let product = common::create_test_product(&pool, "old", 1.0).await;

    server
        .put(&format!("/products/{}", product.id))
        .authorization_bearer(common::bearer_token())
        .json(&json!({ "name": "old", "price": 0.0 }))
        .await
        .assert_status_bad_request();
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_product() {
    let (server, pool) = make_server().await;
    let product = common::create_test_product(&pool, "book", 15.0).await;
    let token = common::bearer_token();

    server
        .delete(&format!("/products/{}", product.id))
        .authorization_bearer(token.clone())
        .await
        .assert_status_ok();

    // Second delete returns 404.
    server
        .delete(&format!("/products/{}", product.id))
        .authorization_bearer(token)
        .await
        .assert_status_not_found();
}
