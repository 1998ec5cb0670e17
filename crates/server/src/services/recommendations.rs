//! Size recommendations over the catalog.

use rand::Rng;
use sqlx::PgPool;

use tailor_core::{SizeLabel, fit_label};

use crate::db::RepositoryError;
use crate::db::clothing::ClothingRepository;
use crate::models::{ClothingItem, Recommendation};

/// Builds recommendations from the catalog. Nothing is stored.
pub struct RecommendationService<'a> {
    clothing: ClothingRepository<'a>,
}

impl<'a> RecommendationService<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            clothing: ClothingRepository::new(pool),
        }
    }

    /// Annotate every catalog item for one recommended size.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the catalog cannot be read.
    pub async fn for_size(&self, size: SizeLabel) -> Result<Vec<Recommendation>, RepositoryError> {
        let items = self.clothing.list().await?;
        Ok(annotate(items, size, &mut rand::rng()))
    }
}

/// Attach the recommended size and a fit label to each item.
pub fn annotate<R: Rng + ?Sized>(
    items: Vec<ClothingItem>,
    size: SizeLabel,
    rng: &mut R,
) -> Vec<Recommendation> {
    items
        .into_iter()
        .map(|item| {
            let fit = fit_label(size, &item.sizes, rng);
            Recommendation {
                item,
                recommended_size: size,
                fit,
            }
        })
        .collect()
}
