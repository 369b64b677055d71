use axum::http::{header, HeaderValue, Method};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;

use crate::server::{
    config::Config,
    error::{config::ConfigError, Error},
};

/// Connect to the database, verify it responds, and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    tracing::info!(environment = %config.database_env, "Connecting to database");

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;
    db.ping().await?;

    Migrator::up(&db, None).await?;

    tracing::info!(environment = %config.database_env, "Database connected and migrated");

    Ok(db)
}

/// Build the CORS layer allowing the configured web UI origins
pub fn build_cors_layer(config: &Config) -> Result<CorsLayer, Error> {
    let origins = config
        .cors_allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "CORS_ALLOWED_ORIGINS".to_string(),
                    reason: format!("{}: {}", origin, e),
                })
        })
        .collect::<Result<Vec<HeaderValue>, ConfigError>>()?;

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    Ok(cors)
}
