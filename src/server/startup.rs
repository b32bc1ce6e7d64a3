use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::server::{config::Config, error::AppError};

/// Connects to the SQLite database and resets the schema.
///
/// Establishes a connection pool using the connection string from configuration, then
/// drops and recreates the `students` table and its indexes. Data does not survive a
/// restart.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with a fresh schema
/// - `Err(AppError::DbErr)` - Failed to connect to database or create the schema
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    initialize_schema(&db).await?;

    Ok(db)
}

/// Drops every table and reapplies all migrations.
pub async fn initialize_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::fresh(db).await?;

    tracing::info!("Recreated students table and indexes");

    Ok(())
}

/// Builds the CORS layer for the frontend.
///
/// With no configured origins any origin is allowed, otherwise only the listed ones.
/// Entries that are not valid header values are skipped.
pub fn setup_cors(config: &Config) -> CorsLayer {
    let origin = if config.cors_origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
