//! Store initialization: table creation and catalog seeding.

use serde::Serialize;
use sqlx::PgPool;

use tailor_core::ClothingId;
use tailor_core::catalog::SEED_CATALOG;

use super::RepositoryError;

/// Transaction-scoped advisory lock serializing concurrent initializations.
const INIT_LOCK_KEY: i64 = 0x7461_696c_6f72;

/// Tables owned by the service, in creation order.
pub const TABLES: [&str; 3] = ["users", "measurements", "clothing"];

const CREATE_USERS: &str = r"
    CREATE TABLE IF NOT EXISTS users (
        id UUID PRIMARY KEY,
        username VARCHAR(255) NOT NULL,
        email VARCHAR(255) UNIQUE NOT NULL,
        password_hash VARCHAR(255) NOT NULL,
        token UUID NOT NULL UNIQUE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
";

const CREATE_MEASUREMENTS: &str = r"
    CREATE TABLE IF NOT EXISTS measurements (
        id UUID PRIMARY KEY,
        user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        chest DECIMAL(5,2) NOT NULL,
        waist DECIMAL(5,2) NOT NULL,
        hips DECIMAL(5,2) NOT NULL,
        shoulders DECIMAL(5,2) NOT NULL,
        neck DECIMAL(5,2) NOT NULL,
        sleeve_length DECIMAL(5,2) NOT NULL,
        inseam DECIMAL(5,2) NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        seq BIGINT GENERATED ALWAYS AS IDENTITY
    )
";

const CREATE_MEASUREMENTS_INDEX: &str = r"
    CREATE INDEX IF NOT EXISTS measurements_user_created_seq_idx
        ON measurements (user_id, created_at DESC, seq DESC)
";

const CREATE_CLOTHING: &str = r"
    CREATE TABLE IF NOT EXISTS clothing (
        id UUID PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        category VARCHAR(100) NOT NULL,
        price DECIMAL(10,2) NOT NULL,
        image VARCHAR(500),
        rating DECIMAL(2,1),
        brand VARCHAR(255),
        sizes TEXT[] NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
";

/// Outcome of [`initialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitReport {
    /// Tables that exist after initialization.
    pub tables_created: [&'static str; 3],
    /// Whether this run seeded the catalog (false if it already had rows).
    pub sample_data_inserted: bool,
}

/// Create all tables if absent and seed the catalog if it is empty.
///
/// Everything runs in one transaction. The clothing table is locked before
/// it is counted, so concurrent initializations seed at most once.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if any statement fails; nothing is
/// committed in that case.
pub async fn initialize(pool: &PgPool) -> Result<InitReport, RepositoryError> {
    let mut tx = pool.begin().await?;

    // Concurrent CREATE TABLE IF NOT EXISTS can still collide in pg_type
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(INIT_LOCK_KEY)
        .execute(&mut *tx)
        .await?;

    for ddl in [
        CREATE_USERS,
        CREATE_MEASUREMENTS,
        CREATE_MEASUREMENTS_INDEX,
        CREATE_CLOTHING,
    ] {
        sqlx::query(ddl).execute(&mut *tx).await?;
    }

    sqlx::query("LOCK TABLE clothing IN EXCLUSIVE MODE")
        .execute(&mut *tx)
        .await?;

    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM clothing")
        .fetch_one(&mut *tx)
        .await?;

    let sample_data_inserted = existing == 0;
    if sample_data_inserted {
        for item in &SEED_CATALOG {
            sqlx::query(
                r"
                INSERT INTO clothing (id, name, category, price, image, rating, brand, sizes)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                ",
            )
            .bind(ClothingId::new())
            .bind(item.name)
            .bind(item.category)
            .bind(item.price())
            .bind(item.image_url)
            .bind(item.rating())
            .bind(item.brand)
            .bind(item.size_list())
            .execute(&mut *tx)
            .await?;
        }
        tracing::info!(items = SEED_CATALOG.len(), "Seeded clothing catalog");
    }

    tx.commit().await?;

    Ok(InitReport {
        tables_created: TABLES,
        sample_data_inserted,
    })
}
