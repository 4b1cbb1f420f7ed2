//! Domain store container: owns the current snapshot, rehydrates it from
//! a persistence slot on open, and writes the full snapshot back after
//! every transition.
//!
//! Slot failures never reach the caller. A missing, corrupt, or unreachable
//! slot falls back to the seed state, and failed writes are logged.

use crate::ids::IdGenerator;
use crate::seed::SeedDataset;
use crate::slot::PersistenceSlot;
use crate::state::{PersistedState, StoreState, TransitionContext};
use ads_core::config::StoreConfig;
use ads_core::AdsResult;
use ads_core::types::{
    CampaignDetails, CampaignRecord, CampaignState, DraftProduct, ProductInput, ProductSentiment,
    TargetingInputs,
};
use chrono::{Local, NaiveDate};
use std::sync::Arc;
use tracing::{debug, info, warn};

// ─── Clock ─────────────────────────────────────────────────────────────────

/// Source of "today" for date-only comparisons and display stamps.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date.
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

// ─── Options ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub storage_key: String,
    pub ids: IdGenerator,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self::from_config(&StoreConfig::default())
    }
}

impl StoreOptions {
    pub fn from_config(config: &StoreConfig) -> Self {
        Self {
            storage_key: config.storage_key.clone(),
            ids: IdGenerator::new(&config.product_id_prefix, &config.campaign_id_prefix),
        }
    }
}

// ─── Store ─────────────────────────────────────────────────────────────────

pub struct DomainStore {
    state: StoreState,
    seed: SeedDataset,
    slot: Arc<dyn PersistenceSlot>,
    clock: Arc<dyn Clock>,
    options: StoreOptions,
}

impl DomainStore {
    /// Open the store: rehydrate from the slot (or the seed) and persist
    /// the resulting state.
    pub fn open(
        seed: SeedDataset,
        slot: Arc<dyn PersistenceSlot>,
        clock: Arc<dyn Clock>,
        options: StoreOptions,
    ) -> Self {
        let today = clock.today();
        let saved = load_state(slot.as_ref(), &options.storage_key);
        let restored = saved.is_some();
        let state = StoreState::rehydrate(&seed, saved.unwrap_or_default(), today);
        info!(
            key = %options.storage_key,
            restored,
            products = state.products.len(),
            campaigns = state.campaigns.len(),
            "Domain store opened"
        );
        let store = Self {
            state,
            seed,
            slot,
            clock,
            options,
        };
        store.persist();
        store
    }

    /// Re-run the rehydrate protocol against the slot.
    pub fn reload(&mut self) {
        let saved = load_state(self.slot.as_ref(), &self.options.storage_key);
        let today = self.clock.today();
        self.state = StoreState::rehydrate(&self.seed, saved.unwrap_or_default(), today);
        self.persist();
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn seed(&self) -> &SeedDataset {
        &self.seed
    }

    /// Serialize the full state and overwrite the slot.
    pub fn persist(&self) {
        match self.write_state() {
            Ok(bytes) => debug!(key = %self.options.storage_key, bytes, "Store persisted"),
            Err(e) => warn!(error = %e, key = %self.options.storage_key, "Failed to persist store"),
        }
    }

    fn write_state(&self) -> AdsResult<usize> {
        let json = serde_json::to_string(&self.state)?;
        self.slot.write(&self.options.storage_key, &json)?;
        Ok(json.len())
    }

    fn transition<F>(&mut self, op: &'static str, f: F)
    where
        F: FnOnce(&StoreState, TransitionContext<'_>) -> StoreState,
    {
        let ctx = TransitionContext {
            today: self.clock.today(),
            ids: &self.options.ids,
        };
        let next = f(&self.state, ctx);
        if next == self.state {
            debug!(op, "Transition left state unchanged");
            return;
        }
        self.state = next;
        self.persist();
    }

    // ─── Operations ────────────────────────────────────────────────────────

    pub fn select_product(&mut self, id: &str) {
        info!(product_id = %id, "Product selected");
        self.transition("select_product", |s, _| s.select_product(id));
    }

    pub fn reset_targeting(&mut self) {
        self.transition("reset_targeting", |s, _| s.reset_targeting());
    }

    pub fn toggle_segment(&mut self, id: &str) {
        self.transition("toggle_segment", |s, _| s.toggle_segment(id));
    }

    /// Flag a targeting generation as started for the selected product,
    /// returning that product's id. `None` when nothing is selected.
    pub fn begin_targeting_generation(&mut self) -> Option<String> {
        let product_id = self.state.selected_product_id.clone()?;
        self.transition("begin_targeting_generation", |s, _| s.begin_targeting_generation());
        Some(product_id)
    }

    pub fn finish_targeting_generation(&mut self, product_id: &str) {
        self.transition("finish_targeting_generation", |s, ctx| {
            s.finish_targeting_generation(product_id, ctx)
        });
    }

    pub fn cancel_targeting_generation(&mut self) {
        self.transition("cancel_targeting_generation", |s, _| s.cancel_targeting_generation());
    }

    pub fn create_campaign(&mut self) {
        self.transition("create_campaign", |s, ctx| s.create_campaign(ctx));
    }

    pub fn create_campaign_for_product(&mut self, product_id: &str) {
        if self.state.product(product_id).is_none() {
            info!(product_id = %product_id, "Campaign not created, unknown product");
            return;
        }
        self.transition("create_campaign_for_product", |s, ctx| {
            s.create_campaign_for_product(product_id, ctx)
        });
    }

    pub fn create_campaign_with_details(&mut self, details: &CampaignDetails) {
        self.transition("create_campaign_with_details", |s, ctx| {
            s.create_campaign_with_details(details, ctx)
        });
    }

    pub fn approve_product(&mut self, product_id: &str) {
        info!(product_id = %product_id, "Approving product");
        self.transition("approve_product", |s, ctx| s.approve_product(product_id, ctx));
    }

    pub fn set_campaign_state(&mut self, campaign: &CampaignRecord, state: CampaignState) {
        info!(campaign_id = %campaign.id, state = %state, "Setting campaign state");
        self.transition("set_campaign_state", |s, _| s.set_campaign_state(campaign, state));
    }

    pub fn set_draft_product(&mut self, draft: DraftProduct) {
        self.transition("set_draft_product", |s, _| s.set_draft_product(draft));
    }

    pub fn set_draft_targeting(&mut self, targeting: TargetingInputs) {
        self.transition("set_draft_targeting", |s, _| s.set_draft_targeting(targeting));
    }

    pub fn clear_draft(&mut self) {
        self.transition("clear_draft", |s, _| s.clear_draft());
    }

    /// Create a product and return its id.
    pub fn create_product(&mut self, input: ProductInput) -> String {
        self.transition("create_product", |s, ctx| s.create_product(input, ctx));
        let id = self.state.selected_product_id.clone().unwrap_or_default();
        info!(product_id = %id, "Product created");
        id
    }

    /// Commit the pending wizard drafts as a product. Returns the new id, or
    /// `None` when a draft is missing.
    pub fn commit_draft(&mut self, sentiment: Option<ProductSentiment>) -> Option<String> {
        if self.state.draft_product.is_none() || self.state.draft_targeting.is_none() {
            info!("Nothing to commit, draft incomplete");
            return None;
        }
        self.transition("commit_draft", |s, ctx| s.commit_draft(sentiment, ctx));
        self.state.selected_product_id.clone()
    }
}

fn read_state(slot: &dyn PersistenceSlot, key: &str) -> AdsResult<Option<PersistedState>> {
    let Some(raw) = slot.read(key)? else {
        return Ok(None);
    };
    Ok(Some(serde_json::from_str(&raw)?))
}

/// Read and decode the persisted blob. Every failure reads as "absent".
fn load_state(slot: &dyn PersistenceSlot, key: &str) -> Option<PersistedState> {
    match read_state(slot, key) {
        Ok(Some(saved)) => Some(saved),
        Ok(None) => {
            debug!(key, "No persisted state, using seed");
            None
        }
        Err(e) => {
            warn!(error = %e, key, "Persisted state unavailable, using seed");
            None
        }
    }
}
