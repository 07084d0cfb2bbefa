//! Readiness endpoint
//!
//! Liveness (`/health`) comes from `axum_helpers::health_router`; this
//! adds `/ready`, which round-trips the database.

use axum::{extract::State, response::Response, routing::get, Router};
use axum_helpers::readiness_response;
use database::postgres::{check_health, DatabaseConnection};

async fn ready(State(db): State<DatabaseConnection>) -> Response {
    let result = check_health(&db).await.map_err(|e| e.to_string());
    readiness_response(result)
}

pub fn ready_router(db: DatabaseConnection) -> Router {
    Router::new().route("/ready", get(ready)).with_state(db)
}
