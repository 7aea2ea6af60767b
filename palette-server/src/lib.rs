//! palette-server: HTTP API for Palette Picker
//!
//! Projects group color palettes. Each endpoint maps one verb + path onto a
//! single parameterized statement against PostgreSQL.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;

use std::sync::Arc;

pub use config::{Environment, Settings};
pub use error::{Error, Result};
pub use http::{build_router, run_server, AppState};

/// Connect to the configured database, bootstrap the schema, and serve
/// until a shutdown signal arrives.
pub async fn serve(settings: Settings) -> Result<()> {
    tracing::info!(
        environment = %settings.environment,
        database = %settings.database.redacted_url(),
        "Connecting to database"
    );
    let pool = db::create_pool_with_options(
        &settings.database.url,
        settings.database.max_connections,
    )
    .await?;

    db::schema::bootstrap(&pool).await?;

    let store = Arc::new(db::PgStore::new(pool));
    run_server(store, settings.bind_addr()?).await?;

    Ok(())
}

/// Bootstrap the schema and return without serving.
pub async fn migrate(settings: &Settings) -> Result<()> {
    let pool = db::create_pool_with_options(
        &settings.database.url,
        settings.database.max_connections,
    )
    .await?;

    db::schema::bootstrap(&pool).await?;
    pool.close().await;

    Ok(())
}
