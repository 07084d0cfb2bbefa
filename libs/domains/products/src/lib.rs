//! Products Domain
//!
//! Complete domain implementation for managing products and their
//! categories.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP surface (axum + utoipa)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + Postgres implementation)
//! └─────────────┘
//! ```
//!
//! Categories are read-only from this API's point of view. They are
//! provisioned elsewhere; product writes only reference them.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{PgProductRepository, ProductService};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("postgres://...").await?;
//!
//! let repository = PgProductRepository::new(db);
//! let service = ProductService::new(repository);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{Category, Product, ProductFilter, ProductInput};
pub use postgres::PgProductRepository;
pub use repository::ProductRepository;
pub use service::ProductService;
