//! The fixed clothing catalog seeded into a fresh store.
//!
//! There is no catalog administration; these six items are all the store
//! ever sells.

use crate::types::{Price, Rating};

/// A catalog entry as it is written to the `clothing` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogItem {
    pub name: &'static str,
    pub category: &'static str,
    pub price_cents: i64,
    pub image_url: &'static str,
    pub rating_tenths: i64,
    pub brand: &'static str,
    /// Offered sizes. Letter sizes for tops, waist sizes for jeans.
    pub sizes: &'static [&'static str],
}

impl CatalogItem {
    #[must_use]
    pub fn price(&self) -> Price {
        Price::from_cents(self.price_cents)
    }

    #[must_use]
    pub fn rating(&self) -> Rating {
        Rating::from_tenths(self.rating_tenths)
    }

    /// Owned copy of the size list, ready to bind as `TEXT[]`.
    #[must_use]
    pub fn size_list(&self) -> Vec<String> {
        self.sizes.iter().map(|s| (*s).to_owned()).collect()
    }
}

const LETTER_SIZES: &[&str] = &["XS", "S", "M", "L", "XL", "XXL"];

/// Items inserted by schema initialization when the catalog is empty.
pub const SEED_CATALOG: [CatalogItem; 6] = [
    CatalogItem {
        name: "Classic Cotton T-Shirt",
        category: "T-Shirts",
        price_cents: 2999,
        image_url: "https://images.pexels.com/photos/8532616/pexels-photo-8532616.jpeg?auto=compress&cs=tinysrgb&w=400",
        rating_tenths: 45,
        brand: "ComfortWear",
        sizes: LETTER_SIZES,
    },
    CatalogItem {
        name: "Slim Fit Jeans",
        category: "Jeans",
        price_cents: 8999,
        image_url: "https://images.pexels.com/photos/1082529/pexels-photo-1082529.jpeg?auto=compress&cs=tinysrgb&w=400",
        rating_tenths: 47,
        brand: "DenimCo",
        sizes: &["28", "30", "32", "34", "36", "38"],
    },
    CatalogItem {
        name: "Business Casual Shirt",
        category: "Shirts",
        price_cents: 5999,
        image_url: "https://images.pexels.com/photos/297933/pexels-photo-297933.jpeg?auto=compress&cs=tinysrgb&w=400",
        rating_tenths: 43,
        brand: "ProStyle",
        sizes: &["S", "M", "L", "XL", "XXL"],
    },
    CatalogItem {
        name: "Casual Hoodie",
        category: "Hoodies",
        price_cents: 4999,
        image_url: "https://images.pexels.com/photos/4066043/pexels-photo-4066043.jpeg?auto=compress&cs=tinysrgb&w=400",
        rating_tenths: 46,
        brand: "StreetWear",
        sizes: LETTER_SIZES,
    },
    CatalogItem {
        name: "Summer Dress",
        category: "Dresses",
        price_cents: 7999,
        image_url: "https://images.pexels.com/photos/985635/pexels-photo-985635.jpeg?auto=compress&cs=tinysrgb&w=400",
        rating_tenths: 48,
        brand: "ElegantStyle",
        sizes: &["XS", "S", "M", "L", "XL"],
    },
    CatalogItem {
        name: "Athletic Shorts",
        category: "Shorts",
        price_cents: 3499,
        image_url: "https://images.pexels.com/photos/1598505/pexels-photo-1598505.jpeg?auto=compress&cs=tinysrgb&w=400",
        rating_tenths: 44,
        brand: "SportsFit",
        sizes: &["S", "M", "L", "XL", "XXL"],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::types::SizeLabel;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = SEED_CATALOG.iter().map(|item| item.name).collect();
        assert_eq!(names.len(), SEED_CATALOG.len());
    }

    #[test]
    fn test_every_item_offers_sizes() {
        assert!(SEED_CATALOG.iter().all(|item| !item.sizes.is_empty()));
    }

    #[test]
    fn test_jeans_use_waist_sizes() {
        let jeans = SEED_CATALOG
            .iter()
            .find(|item| item.category == "Jeans")
            .map(|item| item.sizes);
        assert_eq!(jeans, Some(&["28", "30", "32", "34", "36", "38"][..]));
        assert!(
            jeans
                .unwrap_or_default()
                .iter()
                .all(|size| size.parse::<SizeLabel>().is_err())
        );
    }

    #[test]
    fn test_prices_and_ratings() {
        let tee = &SEED_CATALOG[0];
        assert_eq!(tee.price().to_string(), "29.99");
        assert_eq!(tee.rating().value().to_string(), "4.5");
        for item in &SEED_CATALOG {
            assert!((0..=50).contains(&item.rating_tenths), "{}", item.name);
            assert!(item.price_cents > 0, "{}", item.name);
        }
    }
}
