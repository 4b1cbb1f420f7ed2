//! Store snapshot and the pure transitions between snapshots.
//!
//! Every transition borrows the current snapshot and returns a complete
//! replacement; records are never mutated in place. Operations that name a
//! product which does not exist return an unchanged copy.

use crate::ids::IdGenerator;
use crate::normalize::{
    format_display_date, normalize_campaigns, normalize_products, with_campaign_defaults,
};
use crate::reconcile::{reconcile, StoredProduct};
use crate::seed::SeedDataset;
use ads_core::types::{
    null_as_default, CampaignDetails, CampaignRecord, CampaignState, DraftProduct, Product,
    ProductInput, ProductSentiment, ProductStatus, TargetingInputs, TargetingMetrics,
    TargetingSegment,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Advertiser label given to products created in the console.
pub const NEW_ADVERTISER: &str = "New Advertiser";

/// Inputs a transition needs from outside the snapshot.
#[derive(Clone, Copy)]
pub struct TransitionContext<'a> {
    pub today: NaiveDate,
    pub ids: &'a IdGenerator,
}

/// Full store state. This is also the persisted shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    pub products: Vec<Product>,
    pub selected_product_id: Option<String>,
    pub targeting_generated: bool,
    pub selected_segments: Vec<String>,
    pub campaigns: Vec<CampaignRecord>,
    pub metrics: TargetingMetrics,
    pub segments: Vec<TargetingSegment>,
    pub loading: bool,
    pub draft_product: Option<DraftProduct>,
    pub draft_targeting: Option<TargetingInputs>,
}

/// A [`StoreState`] as read back from the slot, tolerant of missing keys.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(deserialize_with = "null_as_default")]
    pub products: Vec<StoredProduct>,
    pub selected_product_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub targeting_generated: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub selected_segments: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub campaigns: Vec<CampaignRecord>,
    pub metrics: Option<TargetingMetrics>,
    #[serde(deserialize_with = "null_as_default")]
    pub loading: bool,
    pub draft_product: Option<DraftProduct>,
    pub draft_targeting: Option<TargetingInputs>,
}

impl StoreState {
    /// Default state built from the seed alone.
    pub fn from_seed(seed: &SeedDataset, today: NaiveDate) -> Self {
        Self::rehydrate(seed, PersistedState::default(), today)
    }

    /// Rebuild a state from a recovered blob: reconcile products with the
    /// seed, normalize statuses, default campaigns, and drop the selection.
    ///
    /// The segment catalog always comes from the seed. The loading flag is
    /// cleared because no generation survives a reload.
    pub fn rehydrate(seed: &SeedDataset, saved: PersistedState, today: NaiveDate) -> Self {
        Self {
            products: normalize_products(reconcile(&seed.products, saved.products), today),
            selected_product_id: None,
            targeting_generated: saved.targeting_generated,
            selected_segments: saved.selected_segments,
            campaigns: normalize_campaigns(saved.campaigns),
            metrics: saved.metrics.unwrap_or_else(|| seed.metrics.clone()),
            segments: seed.segments.clone(),
            loading: false,
            draft_product: saved.draft_product,
            draft_targeting: saved.draft_targeting,
        }
    }

    // ─── Queries ───────────────────────────────────────────────────────────

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// The selected product, if the selection still points at one.
    pub fn selected_product(&self) -> Option<&Product> {
        self.selected_product_id
            .as_deref()
            .and_then(|id| self.product(id))
    }

    pub fn campaign(&self, id: &str) -> Option<&CampaignRecord> {
        self.campaigns.iter().find(|c| c.id == id)
    }

    pub fn catalog_segment_ids(&self) -> Vec<String> {
        self.segments.iter().map(|s| s.id.clone()).collect()
    }

    fn with_products(&self, products: Vec<Product>, today: NaiveDate) -> Self {
        Self {
            products: normalize_products(products, today),
            ..self.clone()
        }
    }

    fn map_product(&self, id: &str, today: NaiveDate, f: impl Fn(&Product) -> Product) -> Self {
        let products = self
            .products
            .iter()
            .map(|p| if p.id == id { f(p) } else { p.clone() })
            .collect();
        self.with_products(products, today)
    }

    // ─── Selection & targeting ─────────────────────────────────────────────

    pub fn select_product(&self, id: &str) -> Self {
        Self {
            selected_product_id: Some(id.to_string()),
            targeting_generated: false,
            selected_segments: Vec::new(),
            loading: false,
            ..self.clone()
        }
    }

    pub fn reset_targeting(&self) -> Self {
        Self {
            targeting_generated: false,
            selected_segments: Vec::new(),
            loading: false,
            ..self.clone()
        }
    }

    /// Mark a targeting generation as in flight.
    pub fn begin_targeting_generation(&self) -> Self {
        Self {
            loading: true,
            ..self.clone()
        }
    }

    /// Complete a generation started for `product_id`.
    ///
    /// Selects every catalog segment and moves the product back to
    /// ReadyForView. A completion for a product that is no longer selected
    /// is stale and leaves the state unchanged.
    pub fn finish_targeting_generation(&self, product_id: &str, ctx: TransitionContext<'_>) -> Self {
        if self.selected_product_id.as_deref() != Some(product_id) {
            return self.clone();
        }
        let stamp = format_display_date(ctx.today);
        let next = self.map_product(product_id, ctx.today, |p| Product {
            status: ProductStatus::ReadyForView,
            updated_at: stamp.clone(),
            ..p.clone()
        });
        Self {
            targeting_generated: true,
            selected_segments: self.catalog_segment_ids(),
            loading: false,
            ..next
        }
    }

    pub fn cancel_targeting_generation(&self) -> Self {
        Self {
            loading: false,
            ..self.clone()
        }
    }

    pub fn toggle_segment(&self, id: &str) -> Self {
        let selected_segments = if self.selected_segments.iter().any(|s| s == id) {
            self.selected_segments
                .iter()
                .filter(|s| *s != id)
                .cloned()
                .collect()
        } else {
            let mut segments = self.selected_segments.clone();
            segments.push(id.to_string());
            segments
        };
        Self {
            selected_segments,
            ..self.clone()
        }
    }

    // ─── Campaigns ─────────────────────────────────────────────────────────

    /// Campaign for the selected product with the selected segments.
    pub fn create_campaign(&self, ctx: TransitionContext<'_>) -> Self {
        match self.selected_product_id.as_deref() {
            Some(id) => self.create_campaign_internal(id, self.selected_segments.clone(), None, ctx),
            None => self.clone(),
        }
    }

    /// Campaign for any product; with no segments selected, every catalog
    /// segment is used.
    pub fn create_campaign_for_product(&self, product_id: &str, ctx: TransitionContext<'_>) -> Self {
        self.create_campaign_internal(product_id, self.segments_or_catalog(), None, ctx)
    }

    pub fn create_campaign_with_details(
        &self,
        details: &CampaignDetails,
        ctx: TransitionContext<'_>,
    ) -> Self {
        self.create_campaign_internal(
            &details.product_id,
            self.segments_or_catalog(),
            Some(details),
            ctx,
        )
    }

    fn segments_or_catalog(&self) -> Vec<String> {
        if self.selected_segments.is_empty() {
            self.catalog_segment_ids()
        } else {
            self.selected_segments.clone()
        }
    }

    /// Shared creation path. Creating a campaign also approves its product.
    fn create_campaign_internal(
        &self,
        product_id: &str,
        segments: Vec<String>,
        details: Option<&CampaignDetails>,
        ctx: TransitionContext<'_>,
    ) -> Self {
        let Some(product) = self.product(product_id) else {
            return self.clone();
        };
        let stamp = format_display_date(ctx.today);
        let name = details
            .map(|d| d.name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} Launch", product.name));

        let campaign = with_campaign_defaults(CampaignRecord {
            id: ctx.ids.campaign_id(),
            name,
            code: product.sku.clone(),
            scope: product.category.clone(),
            state: CampaignState::Review,
            last_sync: stamp.clone(),
            segments,
            product_id: product.id.clone(),
            objective: details.map(|d| d.objective.clone()),
            budget_type: details.map(|d| d.budget_type),
            budget_amount: details.map(|d| d.budget_amount.clone()),
            start_date: details.map(|d| d.start_date.clone()),
            end_date: details.map(|d| d.end_date.clone()),
            bid_strategy: details.map(|d| d.bid_strategy.clone()),
            pacing: details.map(|d| d.pacing),
            frequency_cap: details.map(|d| d.frequency_cap.clone()),
        });

        let mut campaigns = Vec::with_capacity(self.campaigns.len() + 1);
        campaigns.push(campaign);
        campaigns.extend(self.campaigns.iter().cloned().map(with_campaign_defaults));

        let next = self.map_product(product_id, ctx.today, |p| Product {
            status: ProductStatus::Approved,
            updated_at: stamp.clone(),
            ..p.clone()
        });
        Self { campaigns, ..next }
    }

    /// Set a campaign's state, inserting the campaign first if the store
    /// has never seen it (e.g. one that only exists in the seed).
    pub fn set_campaign_state(&self, campaign: &CampaignRecord, state: CampaignState) -> Self {
        let campaigns = if self.campaign(&campaign.id).is_some() {
            self.campaigns
                .iter()
                .map(|c| {
                    if c.id == campaign.id {
                        with_campaign_defaults(CampaignRecord {
                            state,
                            ..c.clone()
                        })
                    } else {
                        c.clone()
                    }
                })
                .collect()
        } else {
            let mut campaigns = Vec::with_capacity(self.campaigns.len() + 1);
            campaigns.push(with_campaign_defaults(CampaignRecord {
                state,
                ..campaign.clone()
            }));
            campaigns.extend(self.campaigns.iter().cloned().map(with_campaign_defaults));
            campaigns
        };
        Self {
            campaigns,
            ..self.clone()
        }
    }

    // ─── Products ──────────────────────────────────────────────────────────

    /// Approve a product. A launch date in the past still wins and keeps
    /// the product Archived.
    pub fn approve_product(&self, product_id: &str, ctx: TransitionContext<'_>) -> Self {
        if self.product(product_id).is_none() {
            return self.clone();
        }
        let stamp = format_display_date(ctx.today);
        self.map_product(product_id, ctx.today, |p| Product {
            status: ProductStatus::Approved,
            updated_at: stamp.clone(),
            ..p.clone()
        })
    }

    /// Prepend a new product and select it.
    pub fn create_product(&self, input: ProductInput, ctx: TransitionContext<'_>) -> Self {
        let product = Product {
            id: ctx.ids.product_id(),
            name: input.name,
            sku: ctx.ids.sku(),
            category: input.category,
            advertiser: NEW_ADVERTISER.to_string(),
            status: ProductStatus::ReadyForView,
            launch_date: input.launch_date,
            price_range: input.price_range,
            updated_at: format_display_date(ctx.today),
            brand_tone: input.brand_tone,
            description: input.description,
            targeting: input.targeting,
            sentiment: input.sentiment,
        };
        let id = product.id.clone();
        let mut products = Vec::with_capacity(self.products.len() + 1);
        products.push(product);
        products.extend(self.products.iter().cloned());
        Self {
            selected_product_id: Some(id),
            targeting_generated: false,
            selected_segments: Vec::new(),
            ..self.with_products(products, ctx.today)
        }
    }

    // ─── Drafts ────────────────────────────────────────────────────────────

    pub fn set_draft_product(&self, draft: DraftProduct) -> Self {
        Self {
            draft_product: Some(draft),
            ..self.clone()
        }
    }

    pub fn set_draft_targeting(&self, targeting: TargetingInputs) -> Self {
        Self {
            draft_targeting: Some(targeting),
            ..self.clone()
        }
    }

    pub fn clear_draft(&self) -> Self {
        Self {
            draft_product: None,
            draft_targeting: None,
            ..self.clone()
        }
    }

    /// Turn the pending drafts into a product and clear them. Without both
    /// drafts this is a no-op.
    pub fn commit_draft(
        &self,
        sentiment: Option<ProductSentiment>,
        ctx: TransitionContext<'_>,
    ) -> Self {
        let (Some(draft), Some(targeting)) = (&self.draft_product, &self.draft_targeting) else {
            return self.clone();
        };
        let input = ProductInput::from_draft(draft.clone(), Some(targeting.clone()), sentiment);
        self.create_product(input, ctx).clear_draft()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ads_core::types::{BudgetType, Pacing};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn state() -> StoreState {
        StoreState::from_seed(&SeedDataset::builtin(), today())
    }

    fn ctx(ids: &IdGenerator) -> TransitionContext<'_> {
        TransitionContext { today: today(), ids }
    }

    fn details(product_id: &str, name: &str) -> CampaignDetails {
        CampaignDetails {
            product_id: product_id.to_string(),
            name: name.to_string(),
            objective: "Conversion".to_string(),
            budget_type: BudgetType::Lifetime,
            budget_amount: "$5,000".to_string(),
            start_date: "2026-11-01".to_string(),
            end_date: "2026-12-01".to_string(),
            bid_strategy: "Target CPA".to_string(),
            pacing: Pacing::Asap,
            frequency_cap: "2 / day".to_string(),
        }
    }

    #[test]
    fn test_seed_state_normalized() {
        let s = state();
        assert_eq!(s.products.len(), 4);
        assert!(s.campaigns.is_empty());
        assert_eq!(s.selected_product_id, None);
        // p-4 launched 2026-01-15.
        assert_eq!(s.product("p-4").unwrap().status, ProductStatus::Archived);
        assert_eq!(s.product("p-2").unwrap().status, ProductStatus::Approved);
        assert_eq!(s.product("p-1").unwrap().status, ProductStatus::ReadyForView);
    }

    #[test]
    fn test_select_product_clears_targeting() {
        let s = state().select_product("p-1").toggle_segment("s-1");
        let s = StoreState {
            targeting_generated: true,
            ..s
        };
        let next = s.select_product("p-2");
        assert_eq!(next.selected_product_id.as_deref(), Some("p-2"));
        assert!(!next.targeting_generated);
        assert!(next.selected_segments.is_empty());

        // No existence check on selection.
        let ghost = s.select_product("p-missing");
        assert_eq!(ghost.selected_product_id.as_deref(), Some("p-missing"));
        assert!(ghost.selected_product().is_none());
    }

    #[test]
    fn test_toggle_segment_is_its_own_inverse() {
        let s = state().toggle_segment("s-2");
        assert_eq!(s.selected_segments, vec!["s-2"]);
        let original = s.selected_segments.clone();
        let twice = s.toggle_segment("s-3").toggle_segment("s-3");
        assert_eq!(twice.selected_segments, original);
        assert!(s.toggle_segment("s-2").selected_segments.is_empty());
    }

    #[test]
    fn test_finish_generation_selects_catalog() {
        let ids = IdGenerator::default();
        let s = state().select_product("p-2").begin_targeting_generation();
        assert!(s.loading);
        let done = s.finish_targeting_generation("p-2", ctx(&ids));
        assert!(done.targeting_generated);
        assert!(!done.loading);
        assert_eq!(done.selected_segments, vec!["s-1", "s-2", "s-3"]);
        let p2 = done.product("p-2").unwrap();
        assert_eq!(p2.status, ProductStatus::ReadyForView);
        assert_eq!(p2.updated_at, "Oct 17, 2026");
    }

    #[test]
    fn test_stale_generation_completion_ignored() {
        let ids = IdGenerator::default();
        let s = state()
            .select_product("p-2")
            .begin_targeting_generation()
            .select_product("p-3");
        let done = s.finish_targeting_generation("p-2", ctx(&ids));
        assert_eq!(done, s);
    }

    #[test]
    fn test_create_campaign_without_selection_is_noop() {
        let ids = IdGenerator::default();
        let s = state();
        assert_eq!(s.create_campaign(ctx(&ids)), s);
    }

    #[test]
    fn test_create_campaign_uses_selected_segments() {
        let ids = IdGenerator::default();
        let s = state()
            .select_product("p-1")
            .toggle_segment("s-3")
            .create_campaign(ctx(&ids));
        assert_eq!(s.campaigns.len(), 1);
        let c = &s.campaigns[0];
        assert_eq!(c.name, "CloudWalk Sneakers Launch");
        assert_eq!(c.code, "CW-2024-001");
        assert_eq!(c.scope, "Apparel & Accessories");
        assert_eq!(c.state, CampaignState::Review);
        assert_eq!(c.last_sync, "Oct 17, 2026");
        assert_eq!(c.segments, vec!["s-3"]);
        assert_eq!(c.product_id, "p-1");
        assert!(c.id.starts_with("user-"));
        assert_eq!(c.budget_amount.as_deref(), Some("$1,200"));
        assert_eq!(s.product("p-1").unwrap().status, ProductStatus::Approved);
    }

    #[test]
    fn test_create_campaign_for_product_defaults_to_catalog() {
        let ids = IdGenerator::default();
        let s = state().create_campaign_for_product("p-1", ctx(&ids));
        assert_eq!(s.campaigns[0].segments, vec!["s-1", "s-2", "s-3"]);
    }

    #[test]
    fn test_create_campaign_for_unknown_product_is_noop() {
        let ids = IdGenerator::default();
        let s = state().create_campaign_for_product("p-1", ctx(&ids));
        let next = s.create_campaign_for_product("p-unknown", ctx(&ids));
        assert_eq!(next.campaigns.len(), 1);
        assert_eq!(next, s);
    }

    #[test]
    fn test_campaigns_are_prepended() {
        let ids = IdGenerator::default();
        let s = state()
            .create_campaign_for_product("p-1", ctx(&ids))
            .create_campaign_for_product("p-3", ctx(&ids));
        assert_eq!(s.campaigns[0].product_id, "p-3");
        assert_eq!(s.campaigns[1].product_id, "p-1");
        assert_ne!(s.campaigns[0].id, s.campaigns[1].id);
    }

    #[test]
    fn test_create_campaign_with_details_overrides_schedule() {
        let ids = IdGenerator::default();
        let s = state().create_campaign_with_details(&details("p-3", "Holiday Push"), ctx(&ids));
        let c = &s.campaigns[0];
        assert_eq!(c.name, "Holiday Push");
        assert_eq!(c.objective.as_deref(), Some("Conversion"));
        assert_eq!(c.budget_type, Some(BudgetType::Lifetime));
        assert_eq!(c.pacing, Some(Pacing::Asap));
        assert_eq!(c.frequency_cap.as_deref(), Some("2 / day"));
        assert_eq!(c.segments.len(), 3);

        let blank = state().create_campaign_with_details(&details("p-3", "  "), ctx(&ids));
        assert_eq!(blank.campaigns[0].name, "SonicPro Headphones Launch");
    }

    #[test]
    fn test_campaign_on_archived_product_stays_archived() {
        let ids = IdGenerator::default();
        let s = state().create_campaign_for_product("p-4", ctx(&ids));
        assert_eq!(s.campaigns.len(), 1);
        assert_eq!(s.product("p-4").unwrap().status, ProductStatus::Archived);
    }

    #[test]
    fn test_approve_product() {
        let ids = IdGenerator::default();
        let s = state();
        let p1_before = s.product("p-1").unwrap().updated_at.clone();
        let next = s.approve_product("p-1", ctx(&ids));
        let p1 = next.product("p-1").unwrap();
        assert_eq!(p1.status, ProductStatus::Approved);
        assert_ne!(p1.updated_at, p1_before);
        assert_eq!(p1.updated_at, "Oct 17, 2026");

        assert_eq!(s.approve_product("p-unknown", ctx(&ids)), s);
        assert_eq!(
            s.approve_product("p-4", ctx(&ids)).product("p-4").unwrap().status,
            ProductStatus::Archived
        );
    }

    #[test]
    fn test_set_campaign_state_updates_or_inserts() {
        let ids = IdGenerator::default();
        let s = state().create_campaign_for_product("p-1", ctx(&ids));
        let existing = s.campaigns[0].clone();
        let next = s.set_campaign_state(&existing, CampaignState::Active);
        assert_eq!(next.campaigns.len(), 1);
        assert_eq!(next.campaigns[0].state, CampaignState::Active);

        let seed_campaign = CampaignRecord {
            id: "c-2".to_string(),
            name: "HydroBottle 2.0".to_string(),
            product_id: "p-2".to_string(),
            ..Default::default()
        };
        let inserted = next.set_campaign_state(&seed_campaign, CampaignState::Active);
        assert_eq!(inserted.campaigns.len(), 2);
        assert_eq!(inserted.campaigns[0].id, "c-2");
        assert_eq!(inserted.campaigns[0].state, CampaignState::Active);
        assert_eq!(inserted.campaigns[0].bid_strategy.as_deref(), Some("Maximize Reach"));
    }

    #[test]
    fn test_create_product_prepends_and_selects() {
        let ids = IdGenerator::default();
        let s = state().select_product("p-1").toggle_segment("s-1");
        let next = s.create_product(
            ProductInput {
                name: "Trail Pack".to_string(),
                category: "Sporting Goods".to_string(),
                price_range: "USD 80 - 120".to_string(),
                launch_date: "2027-02-01".to_string(),
                ..Default::default()
            },
            ctx(&ids),
        );
        assert_eq!(next.products.len(), 5);
        let created = &next.products[0];
        assert_eq!(created.name, "Trail Pack");
        assert_eq!(created.advertiser, NEW_ADVERTISER);
        assert_eq!(created.status, ProductStatus::ReadyForView);
        assert!(created.sku.starts_with("NEW-"));
        assert_eq!(next.selected_product_id.as_deref(), Some(created.id.as_str()));
        assert!(next.selected_segments.is_empty());
        assert!(!next.targeting_generated);
    }

    #[test]
    fn test_create_product_with_past_launch_is_archived() {
        let ids = IdGenerator::default();
        let next = state().create_product(
            ProductInput {
                name: "Old".to_string(),
                launch_date: "2025-01-01".to_string(),
                ..Default::default()
            },
            ctx(&ids),
        );
        assert_eq!(next.products[0].status, ProductStatus::Archived);
    }

    #[test]
    fn test_drafts_and_commit() {
        let ids = IdGenerator::default();
        let draft = DraftProduct {
            name: "Glow Lamp".to_string(),
            category: "Home & Garden".to_string(),
            price_range: "USD 40 - 60".to_string(),
            launch_date: "2027-01-10".to_string(),
            brand_tone: Some("Calm".to_string()),
            description: None,
        };
        let s = state().set_draft_product(draft.clone());
        // Targeting draft missing: nothing to commit.
        assert_eq!(s.commit_draft(None, ctx(&ids)), s);

        let s = s.set_draft_targeting(TargetingInputs::default());
        let committed = s.commit_draft(Some(ProductSentiment::default()), ctx(&ids));
        assert!(committed.draft_product.is_none());
        assert!(committed.draft_targeting.is_none());
        assert_eq!(committed.products[0].name, "Glow Lamp");
        assert!(committed.products[0].sentiment.is_some());

        let cleared = s.clear_draft();
        assert!(cleared.draft_product.is_none());
        assert_eq!(cleared.products, s.products);
    }

    #[test]
    fn test_rehydrate_twice_matches_once() {
        let ids = IdGenerator::default();
        let edited = state()
            .create_product(
                ProductInput {
                    name: "Trail Pack".to_string(),
                    category: "Fitness".to_string(),
                    price_range: "USD 80 - 120".to_string(),
                    launch_date: "2027-02-01".to_string(),
                    ..Default::default()
                },
                ctx(&ids),
            )
            .toggle_segment("s-1")
            .create_campaign_with_details(&details("p-3", ""), ctx(&ids))
            .approve_product("p-1", ctx(&ids));

        let reload = |s: &StoreState| {
            let json = serde_json::to_string(s).unwrap();
            let saved: PersistedState = serde_json::from_str(&json).unwrap();
            StoreState::rehydrate(&SeedDataset::builtin(), saved, today())
        };
        let once = reload(&edited);
        let twice = reload(&once);
        assert_eq!(once, twice);
        assert_eq!(once.products.len(), 5);
        assert_eq!(once.campaigns.len(), 1);
        assert_eq!(once.selected_segments, vec!["s-1"]);
        assert_eq!(once.selected_product_id, None);
    }

    #[test]
    fn test_rehydrate_tolerates_nulls_and_unknown_enums() {
        let raw = serde_json::json!({
            "products": [ { "id": "p-77", "name": "Desk Lamp", "launchDate": "2027-05-01" } ],
            "selectedSegments": null,
            "campaigns": [ { "id": "user-9", "productId": "p-77", "pacing": "Slow" } ],
            "draftProduct": null
        });
        let saved: PersistedState = serde_json::from_value(raw).unwrap();
        let s = StoreState::rehydrate(&SeedDataset::builtin(), saved, today());
        assert!(s.product("p-77").is_some());
        assert!(s.selected_segments.is_empty());
        assert_eq!(s.campaigns[0].pacing, Some(Pacing::Even));

        let saved: PersistedState = serde_json::from_value(serde_json::json!({
            "products": [ { "id": "p-77", "name": "Desk Lamp" } ],
            "campaigns": null
        }))
        .unwrap();
        let s = StoreState::rehydrate(&SeedDataset::builtin(), saved, today());
        assert!(s.product("p-77").is_some());
        assert!(s.campaigns.is_empty());
    }

    #[test]
    fn test_reset_targeting() {
        let s = StoreState {
            targeting_generated: true,
            loading: true,
            ..state().toggle_segment("s-1")
        };
        let next = s.reset_targeting();
        assert!(!next.targeting_generated);
        assert!(!next.loading);
        assert!(next.selected_segments.is_empty());
    }
}
