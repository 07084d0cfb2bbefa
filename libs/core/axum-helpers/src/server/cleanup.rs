//! Connection cleanup helpers for graceful shutdown.

use tracing::{error, info};

/// Explicitly close a SeaORM PostgreSQL connection.
///
/// The connection would close on drop anyway; closing it here gives
/// deterministic ordering and a log line during shutdown.
pub async fn close_postgres(db: sea_orm::DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(_) => info!("PostgreSQL connection '{}' closed successfully", name),
        Err(e) => error!("Error closing PostgreSQL connection '{}': {}", name, e),
    }
}
