//! HTTP handlers for the Products API

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::ErrorResponse;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{Category, Product, ProductFilter, ProductInput};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        get_product,
        create_product,
        update_product,
        delete_product,
        filter_products,
    ),
    components(
        schemas(Product, Category, ProductInput, ErrorResponse)
    ),
    tags(
        (name = "products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/filter", get(filter_products))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "products",
    responses(
        (status = 200, description = "List of products with categories", body = Vec<Product>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products().await?;
    Ok(Json(products))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i32>,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created successfully", body = Product,
            headers(("Location" = String, description = "URL of the created product"))),
        (status = 400, description = "Invalid title or unknown category", body = ErrorResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Json(input): Json<ProductInput>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    let location = format!("/api/product/{}", product.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    ))
}

/// Replace an existing product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = ProductInput,
    responses(
        (status = 204, description = "Product updated successfully"),
        (status = 400, description = "Invalid title or unknown category", body = ErrorResponse),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i32>,
    Json(input): Json<ProductInput>,
) -> ProductResult<StatusCode> {
    service.update_product(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i32>,
) -> ProductResult<StatusCode> {
    service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Search products by term and stock bounds
#[utoipa::path(
    get,
    path = "/filter",
    tag = "products",
    params(ProductFilter),
    responses(
        (status = 200, description = "Matching products", body = Vec<Product>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn filter_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(filter): Query<ProductFilter>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.filter_products(filter).await?;
    Ok(Json(products))
}
