use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{Product, ProductFilter, ProductInput};

/// Repository trait for Product persistence
///
/// Every read resolves the owning category alongside the product.
/// Implementations can use different storage backends (PostgreSQL, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List all products
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Insert a new product and return it with its category resolved
    async fn insert(&self, input: ProductInput) -> ProductResult<Product>;

    /// Overwrite an existing product's fields
    async fn update(&self, id: i32, input: ProductInput) -> ProductResult<Product>;

    /// Delete a product by ID, returning whether a row was removed
    async fn delete(&self, id: i32) -> ProductResult<bool>;

    /// Search products by term and stock bounds
    async fn filter(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;

    /// Whether a category with this ID exists
    async fn category_exists(&self, category_id: i32) -> ProductResult<bool>;
}
