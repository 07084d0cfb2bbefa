use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductFilter, ProductInput};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
///
/// Owns the write-side validation: the title rule and the category
/// existence check, in that order. Update additionally requires the
/// product to exist before any validation runs.
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all products with categories resolved
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Get a product by ID
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Create a new product after validating title and category
    #[instrument(skip(self, input), fields(product_title = %input.title))]
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        self.validate_input(&input).await?;
        self.repository.insert(input).await
    }

    /// Replace an existing product's fields
    ///
    /// Existence is checked first so that an unknown ID yields 404 even
    /// when the payload is also invalid.
    #[instrument(skip(self, input), fields(product_id = %id))]
    pub async fn update_product(&self, id: i32, input: ProductInput) -> ProductResult<()> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        self.validate_input(&input).await?;
        self.repository.update(id, input).await?;
        Ok(())
    }

    /// Delete a product
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }

    /// Search products with optional term and stock bounds
    pub async fn filter_products(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        self.repository.filter(filter).await
    }

    /// Title rule first, then the category reference.
    async fn validate_input(&self, input: &ProductInput) -> ProductResult<()> {
        input.validate().map_err(|_| ProductError::InvalidTitle)?;

        if !self.repository.category_exists(input.category_id).await? {
            return Err(ProductError::CategoryNotFound);
        }

        Ok(())
    }
}
