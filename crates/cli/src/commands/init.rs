//! Store initialization command.
//!
//! # Usage
//!
//! ```bash
//! tailor init
//! ```
//!
//! # Environment Variables
//!
//! - `TAILOR_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)

use tracing::info;

use tailor_server::ServerConfig;
use tailor_server::db::{self, clothing::ClothingRepository, schema};

/// Create tables and seed the catalog if it is empty.
///
/// # Errors
///
/// Returns an error if configuration is missing, the database cannot be
/// reached, or any statement fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    info!("Connecting to database...");
    let pool = db::create_pool(&config.database_url).await?;

    let report = schema::initialize(&pool).await?;
    let items = ClothingRepository::new(&pool).count().await?;

    info!(
        tables = ?report.tables_created,
        sample_data_inserted = report.sample_data_inserted,
        catalog_items = items,
        "Database initialized"
    );

    pool.close().await;
    Ok(())
}
