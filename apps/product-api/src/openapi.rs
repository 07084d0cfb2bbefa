//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Product API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product API",
        version = "0.1.0",
        description = "Minimal CRUD API for products and their categories",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/product", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;
