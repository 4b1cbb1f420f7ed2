//! Reconciliation of persisted products against the seed dataset.
//!
//! Persisted blobs carry no schema version, so a recovered product may be
//! missing any field. Recovered fields win over seed fields; fields the blob
//! lacks fall back to the seed record with the same id.

use crate::targeting::default_targeting;
use ads_core::types::{Product, ProductSentiment, ProductStatus, TargetingInputs};
use serde::Deserialize;
use std::collections::HashMap;

/// A product as read back from the persistence slot: every field optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoredProduct {
    pub id: Option<String>,
    pub name: Option<String>,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub advertiser: Option<String>,
    pub status: Option<ProductStatus>,
    pub launch_date: Option<String>,
    pub price_range: Option<String>,
    pub updated_at: Option<String>,
    pub brand_tone: Option<String>,
    pub description: Option<String>,
    pub targeting: Option<TargetingInputs>,
    pub sentiment: Option<ProductSentiment>,
}

impl StoredProduct {
    /// Shallow merge: every field present on `self` replaces the one on `base`.
    pub fn over(self, base: Product) -> Product {
        Product {
            id: self.id.unwrap_or(base.id),
            name: self.name.unwrap_or(base.name),
            sku: self.sku.unwrap_or(base.sku),
            category: self.category.unwrap_or(base.category),
            advertiser: self.advertiser.unwrap_or(base.advertiser),
            status: self.status.unwrap_or(base.status),
            launch_date: self.launch_date.unwrap_or(base.launch_date),
            price_range: self.price_range.unwrap_or(base.price_range),
            updated_at: self.updated_at.unwrap_or(base.updated_at),
            brand_tone: self.brand_tone.or(base.brand_tone),
            description: self.description.or(base.description),
            targeting: self.targeting.or(base.targeting),
            sentiment: self.sentiment.or(base.sentiment),
        }
    }

    /// Same merge between two stored records; `later` wins.
    fn absorb(self, later: StoredProduct) -> StoredProduct {
        StoredProduct {
            id: later.id.or(self.id),
            name: later.name.or(self.name),
            sku: later.sku.or(self.sku),
            category: later.category.or(self.category),
            advertiser: later.advertiser.or(self.advertiser),
            status: later.status.or(self.status),
            launch_date: later.launch_date.or(self.launch_date),
            price_range: later.price_range.or(self.price_range),
            updated_at: later.updated_at.or(self.updated_at),
            brand_tone: later.brand_tone.or(self.brand_tone),
            description: later.description.or(self.description),
            targeting: later.targeting.or(self.targeting),
            sentiment: later.sentiment.or(self.sentiment),
        }
    }

    fn key(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }
}

impl From<Product> for StoredProduct {
    fn from(p: Product) -> Self {
        Self {
            id: Some(p.id),
            name: Some(p.name),
            sku: Some(p.sku),
            category: Some(p.category),
            advertiser: Some(p.advertiser),
            status: Some(p.status),
            launch_date: Some(p.launch_date),
            price_range: Some(p.price_range),
            updated_at: Some(p.updated_at),
            brand_tone: p.brand_tone,
            description: p.description,
            targeting: p.targeting,
            sentiment: p.sentiment,
        }
    }
}

fn with_fallback_targeting(product: Product) -> Product {
    if product.targeting.is_some() {
        return product;
    }
    let targeting = default_targeting(&product.category, product.brand_tone.as_deref());
    Product {
        targeting: Some(targeting),
        ..product
    }
}

/// Collapse duplicate ids, keeping the first position and merging later
/// records over earlier ones.
fn dedupe(persisted: Vec<StoredProduct>) -> Vec<StoredProduct> {
    let mut order: Vec<StoredProduct> = Vec::with_capacity(persisted.len());
    let mut index: HashMap<String, usize> = HashMap::new();
    for product in persisted {
        let existing = index.get(product.key()).copied();
        match existing {
            Some(i) => {
                let earlier = std::mem::take(&mut order[i]);
                order[i] = earlier.absorb(product);
            }
            None => {
                index.insert(product.key().to_string(), order.len());
                order.push(product);
            }
        }
    }
    order
}

/// Merge recovered products with the seed products.
///
/// * recovered products keep their order; a recovered product whose id is in
///   the seed is merged over the seed record and, if it still has no
///   targeting, gets generated defaults from its category and tone;
/// * seed products missing from the recovered list are appended, with
///   generated targeting when the seed has none;
/// * recovered products unknown to the seed are kept as they are.
///
/// Status normalization is not applied here.
pub fn reconcile(seed: &[Product], persisted: Vec<StoredProduct>) -> Vec<Product> {
    let persisted = dedupe(persisted);
    let mut merged: Vec<Product> = persisted
        .into_iter()
        .map(|stored| match seed.iter().find(|s| s.id == stored.key()) {
            Some(seed_product) => with_fallback_targeting(stored.over(seed_product.clone())),
            None => stored.over(Product::default()),
        })
        .collect();

    let missing: Vec<Product> = seed
        .iter()
        .filter(|s| !merged.iter().any(|p| p.id == s.id))
        .cloned()
        .map(with_fallback_targeting)
        .collect();
    merged.extend(missing);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::SeedDataset;

    fn seed() -> Vec<Product> {
        SeedDataset::builtin().products
    }

    #[test]
    fn test_empty_persisted_yields_seed_with_targeting() {
        let merged = reconcile(&seed(), Vec::new());
        assert_eq!(merged.len(), seed().len());
        assert!(merged.iter().all(|p| p.targeting.is_some()));
        let ids: Vec<&str> = merged.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p-1", "p-2", "p-3", "p-4"]);
    }

    #[test]
    fn test_recovered_fields_win_absent_fields_fall_back() {
        let stored = StoredProduct {
            id: Some("p-3".to_string()),
            name: Some("SonicPro Max".to_string()),
            status: Some(ProductStatus::Approved),
            ..Default::default()
        };
        let merged = reconcile(&seed(), vec![stored]);
        let p3 = merged.iter().find(|p| p.id == "p-3").unwrap();
        assert_eq!(p3.name, "SonicPro Max");
        assert_eq!(p3.status, ProductStatus::Approved);
        assert_eq!(p3.sku, "SP-2024-089");
        assert_eq!(p3.brand_tone.as_deref(), Some("Luxury, refined"));

        // Seed p-3 has no targeting, so it is generated from category + tone.
        let targeting = p3.targeting.as_ref().unwrap();
        assert_eq!(targeting.content_topics, "Technology, Audio, Gaming");
        assert_eq!(targeting.objective, "Consideration");
    }

    #[test]
    fn test_recovered_targeting_is_kept() {
        let custom = TargetingInputs {
            age_min: "30".to_string(),
            ..Default::default()
        };
        let stored = StoredProduct {
            id: Some("p-2".to_string()),
            targeting: Some(custom.clone()),
            ..Default::default()
        };
        let merged = reconcile(&seed(), vec![stored]);
        assert_eq!(merged[0].targeting.as_ref(), Some(&custom));
    }

    #[test]
    fn test_unknown_products_kept_in_order_before_missing_seeds() {
        let user = StoredProduct {
            id: Some("p-new".to_string()),
            name: Some("Trail Pack".to_string()),
            ..Default::default()
        };
        let p2 = StoredProduct {
            id: Some("p-2".to_string()),
            ..Default::default()
        };
        let merged = reconcile(&seed(), vec![user, p2]);
        let ids: Vec<&str> = merged.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p-new", "p-2", "p-1", "p-3", "p-4"]);
        assert!(merged[0].targeting.is_none());
    }

    #[test]
    fn test_duplicate_ids_collapse() {
        let first = StoredProduct {
            id: Some("p-1".to_string()),
            name: Some("First".to_string()),
            price_range: Some("USD 1 - 2".to_string()),
            ..Default::default()
        };
        let second = StoredProduct {
            id: Some("p-1".to_string()),
            name: Some("Second".to_string()),
            ..Default::default()
        };
        let merged = reconcile(&seed(), vec![first, second]);
        let p1: Vec<&Product> = merged.iter().filter(|p| p.id == "p-1").collect();
        assert_eq!(p1.len(), 1);
        assert_eq!(p1[0].name, "Second");
        assert_eq!(p1[0].price_range, "USD 1 - 2");
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let once = reconcile(&seed(), Vec::new());
        let again = reconcile(&seed(), once.iter().cloned().map(StoredProduct::from).collect());
        assert_eq!(once, again);
    }
}
