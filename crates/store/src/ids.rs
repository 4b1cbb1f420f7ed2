//! Identifier generation for new products and campaigns.

use rand::Rng;
use uuid::Uuid;

/// Produces prefixed record ids and placeholder SKUs.
///
/// Ids are random (UUID v4), so two records created within the same
/// millisecond never collide.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    product_prefix: String,
    campaign_prefix: String,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new("p-", "user-")
    }
}

impl IdGenerator {
    pub fn new(product_prefix: impl Into<String>, campaign_prefix: impl Into<String>) -> Self {
        Self {
            product_prefix: product_prefix.into(),
            campaign_prefix: campaign_prefix.into(),
        }
    }

    pub fn product_id(&self) -> String {
        format!("{}{}", self.product_prefix, Uuid::new_v4().simple())
    }

    pub fn campaign_id(&self) -> String {
        format!("{}{}", self.campaign_prefix, Uuid::new_v4().simple())
    }

    /// `NEW-` followed by a random three-digit suffix.
    pub fn sku(&self) -> String {
        let suffix: u16 = rand::thread_rng().gen_range(100..=999);
        format!("NEW-{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_prefixed_and_unique() {
        let ids = IdGenerator::default();
        let campaign_ids: HashSet<String> = (0..500).map(|_| ids.campaign_id()).collect();
        assert_eq!(campaign_ids.len(), 500);
        assert!(campaign_ids.iter().all(|id| id.starts_with("user-")));
        assert!(ids.product_id().starts_with("p-"));
    }

    #[test]
    fn test_sku_suffix_range() {
        let ids = IdGenerator::default();
        for _ in 0..200 {
            let sku = ids.sku();
            let suffix: u16 = sku.strip_prefix("NEW-").unwrap().parse().unwrap();
            assert!((100..=999).contains(&suffix));
        }
    }
}
