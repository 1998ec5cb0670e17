//! Catalog items and the recommendations built from them.

use chrono::{DateTime, Utc};
use serde::Serialize;

use tailor_core::{ClothingId, FitLabel, Price, Rating, SizeLabel};

/// A clothing item from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ClothingItem {
    pub id: ClothingId,
    pub name: String,
    pub category: String,
    pub price: Price,
    pub image: Option<String>,
    pub rating: Option<Rating>,
    pub brand: Option<String>,
    /// Offered sizes; letter sizes or waist sizes.
    pub sizes: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// A catalog item annotated with a recommended size and fit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(flatten)]
    pub item: ClothingItem,
    pub recommended_size: SizeLabel,
    pub fit: FitLabel,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_flattens_item() {
        let item = ClothingItem {
            id: ClothingId::new(),
            name: "Casual Hoodie".to_string(),
            category: "Hoodies".to_string(),
            price: Price::from_cents(4999),
            image: None,
            rating: Some(Rating::from_tenths(46)),
            brand: Some("StreetWear".to_string()),
            sizes: vec!["M".to_string(), "L".to_string()],
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(Recommendation {
            item,
            recommended_size: SizeLabel::L,
            fit: FitLabel::Loose,
        })
        .unwrap();

        assert_eq!(json["name"], "Casual Hoodie");
        assert_eq!(json["price"], "49.99");
        assert_eq!(json["rating"], "4.6");
        assert_eq!(json["sizes"], serde_json::json!(["M", "L"]));
        assert!(json.get("created_at").is_some());
        assert_eq!(json["recommendedSize"], "L");
        assert_eq!(json["fit"], "Loose");
        assert!(json.get("item").is_none());
    }
}
