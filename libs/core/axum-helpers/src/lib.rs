//! # Axum Helpers
//!
//! Utilities shared by the HTTP apps in this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: router assembly with OpenAPI docs, health checks,
//!   graceful shutdown, connection cleanup
//! - **[`errors`]**: structured error responses

pub mod errors;
pub mod server;

// Re-export server types
pub use server::{
    create_production_app, create_router, health_router, readiness_response, HealthResponse,
    ShutdownCoordinator,
};

// Re-export error types
pub use errors::{AppError, ErrorResponse};
