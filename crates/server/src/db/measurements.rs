//! Measurement repository.
//!
//! Every query is scoped to the owning user; there is no way to read another
//! user's rows through this type.

use sqlx::PgPool;

use tailor_core::{BodyMeasurements, MeasurementId, UserId};

use super::RepositoryError;
use crate::models::Measurement;

const COLUMNS: &str =
    "id, user_id, chest, waist, hips, shoulders, neck, sleeve_length, inseam, created_at";

/// Repository for a user's measurements.
pub struct MeasurementRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MeasurementRepository<'a> {
    /// Create a new measurement repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Store a measurement set for a user and return the stored row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if a value cannot be stored
    /// (callers validate first). Returns `RepositoryError::Database` if the
    /// insert fails.
    pub async fn create(
        &self,
        user_id: UserId,
        values: &BodyMeasurements,
    ) -> Result<Measurement, RepositoryError> {
        let [chest, waist, hips, shoulders, neck, sleeve_length, inseam] = values
            .to_columns()
            .map_err(|e| RepositoryError::DataCorruption(e.to_string()))?;

        let sql = format!(
            r"
            INSERT INTO measurements
                (id, user_id, chest, waist, hips, shoulders, neck, sleeve_length, inseam)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {COLUMNS}
            "
        );

        let measurement = sqlx::query_as::<_, Measurement>(&sql)
            .bind(MeasurementId::new())
            .bind(user_id)
            .bind(chest)
            .bind(waist)
            .bind(hips)
            .bind(shoulders)
            .bind(neck)
            .bind(sleeve_length)
            .bind(inseam)
            .fetch_one(self.pool)
            .await?;
        Ok(measurement)
    }

    /// List a user's measurements, newest first.
    ///
    /// Rows sharing a timestamp (same transaction) come back in reverse
    /// insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Measurement>, RepositoryError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM measurements WHERE user_id = $1 ORDER BY created_at DESC, seq DESC"
        );
        let rows = sqlx::query_as::<_, Measurement>(&sql)
            .bind(user_id)
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }
}
