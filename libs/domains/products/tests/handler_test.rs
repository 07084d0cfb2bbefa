//! Handler tests for the Products domain
//!
//! These tests verify the HTTP surface against a real database:
//! - Request deserialization (camelCase JSON → Rust structs)
//! - Response serialization and status codes
//! - The Location header on create
//! - Empty 404 bodies vs. 400 error envelopes

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use test_utils::TestDatabase;
use tower::ServiceExt; // For oneshot()

async fn test_app() -> (TestDatabase, axum::Router) {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let service = ProductService::new(repo);
    let app = handlers::router(service);
    (db, app)
}

async fn body_bytes(body: Body) -> Vec<u8> {
    body.collect().await.unwrap().to_bytes().to_vec()
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_product(payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(payload).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_list_starts_empty() {
    let (_db, app) = test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_create_returns_201_with_location_and_category() {
    let (_db, app) = test_app().await;

    let response = app
        .clone()
        .oneshot(post_product(&json!({
            "title": "Mekanik Klavye",
            "description": "RGB aydınlatmalı",
            "stockQuantity": 12,
            "categoryId": 1
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("Location header")
        .to_str()
        .unwrap()
        .to_string();

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(location, format!("/api/product/{}", product.id));
    assert_eq!(product.title, "Mekanik Klavye");
    assert_eq!(product.stock_quantity, 12);
    assert_eq!(product.category.as_ref().unwrap().name, "Elektronik");

    // The created product is retrievable at its own path.
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/{}", product.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_serializes_camel_case() {
    let (_db, app) = test_app().await;

    let response = app
        .oneshot(post_product(&json!({
            "title": "Kablosuz Mouse",
            "description": null,
            "stockQuantity": 3,
            "categoryId": 1
        })))
        .await
        .unwrap();

    let body: Value = json_body(response.into_body()).await;
    assert!(body.get("stockQuantity").is_some());
    assert!(body.get("categoryId").is_some());
    assert!(body.get("stock_quantity").is_none());
    assert_eq!(body["category"]["minimumStock"], json!(5));
}

#[tokio::test]
async fn test_create_rejects_invalid_title_with_message() {
    let (_db, app) = test_app().await;

    let response = app
        .oneshot(post_product(&json!({
            "title": "   ",
            "description": null,
            "stockQuantity": 0,
            "categoryId": 1
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "BadRequest");
    assert_eq!(
        body["message"],
        "Başlık gereklidir ve 200 karakterden kısa olmalıdır."
    );
}

#[tokio::test]
async fn test_create_rejects_unknown_category_with_message() {
    let (_db, app) = test_app().await;

    let response = app
        .oneshot(post_product(&json!({
            "title": "Geçerli başlık",
            "description": null,
            "stockQuantity": 1,
            "categoryId": 999
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Kategori bulunamadı.");
}

#[tokio::test]
async fn test_get_unknown_id_returns_404_with_empty_body() {
    let (_db, app) = test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/12345").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response.into_body()).await.is_empty());
}

#[tokio::test]
async fn test_update_returns_204_without_body() {
    let (_db, app) = test_app().await;

    let response = app
        .clone()
        .oneshot(post_product(&json!({
            "title": "Eski Başlık",
            "description": "eski",
            "stockQuantity": 1,
            "categoryId": 1
        })))
        .await
        .unwrap();
    let created: Product = json_body(response.into_body()).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/{}", created.id))
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_string(&json!({
                        "title": "Yeni Başlık",
                        "description": null,
                        "stockQuantity": 20,
                        "categoryId": 2
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response.into_body()).await.is_empty());

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let stored: Product = json_body(response.into_body()).await;
    assert_eq!(stored.title, "Yeni Başlık");
    assert_eq!(stored.stock_quantity, 20);
    assert_eq!(stored.category.as_ref().unwrap().name, "Giyim");
}

#[tokio::test]
async fn test_update_unknown_id_returns_404_even_with_invalid_payload() {
    let (_db, app) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/12345")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_string(&json!({
                        "title": "",
                        "description": null,
                        "stockQuantity": 0,
                        "categoryId": 999
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response.into_body()).await.is_empty());
}

#[tokio::test]
async fn test_delete_returns_204_then_404() {
    let (_db, app) = test_app().await;

    let response = app
        .clone()
        .oneshot(post_product(&json!({
            "title": "Silinecek",
            "description": null,
            "stockQuantity": 0,
            "categoryId": 3
        })))
        .await
        .unwrap();
    let created: Product = json_body(response.into_body()).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response.into_body()).await.is_empty());

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_filter_combines_query_params() {
    let (_db, app) = test_app().await;

    for (title, stock) in [("Mekanik Klavye", 4), ("Sessiz Klavye", 9), ("Mouse", 9)] {
        let response = app
            .clone()
            .oneshot(post_product(&json!({
                "title": title,
                "description": null,
                "stockQuantity": stock,
                "categoryId": 1
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/filter?search=klavye&minStock=5&maxStock=10")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].title, "Sessiz Klavye");
}
