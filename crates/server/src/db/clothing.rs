//! Clothing catalog queries.

use sqlx::PgPool;

use super::RepositoryError;
use crate::models::ClothingItem;

/// Read-only access to the catalog.
pub struct ClothingRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ClothingRepository<'a> {
    /// Create a new clothing repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Every catalog item, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<ClothingItem>, RepositoryError> {
        let items = sqlx::query_as::<_, ClothingItem>(
            r"
            SELECT id, name, category, price, image, rating, brand, sizes, created_at
            FROM clothing
            ORDER BY name
            ",
        )
        .fetch_all(self.pool)
        .await?;
        Ok(items)
    }

    /// Number of catalog items.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM clothing")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}
