//! Product API - REST server over PostgreSQL

use axum_helpers::server::{close_postgres, create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_from_config_with_retry, run_migrations};
use migration::Migrator;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to PostgreSQL");
    let db = connect_from_config_with_retry(config.postgres.clone(), None).await?;

    run_migrations::<Migrator>(&db, "product-api").await?;

    let state = AppState {
        config: config.clone(),
        db: db.clone(),
    };

    let api_routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router
        .merge(health_router(config.app.clone()))
        .merge(api::health::ready_router(db.clone()));

    info!("Starting Product API on port {}", config.server.port);

    create_production_app(app, &config.server, Duration::from_secs(30), async move {
        close_postgres(db, "main").await;
    })
    .await?;

    info!("Product API shutdown complete");
    Ok(())
}
