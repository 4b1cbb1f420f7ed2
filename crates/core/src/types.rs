//! Domain records shared by the store and the console.
//!
//! Every record serializes with camelCase keys; that JSON shape is what the
//! persistence slot holds.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Reads an explicit JSON `null` as the type's default, e.g. an empty list.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ─── Product ───────────────────────────────────────────────────────────────

/// Review status of a product.
///
/// Raw stored strings are read leniently: the legacy `"Targeting Approved"`
/// reads as [`ProductStatus::Approved`] and anything unrecognised reads as
/// [`ProductStatus::ReadyForView`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductStatus {
    #[default]
    ReadyForView,
    Approved,
    Archived,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::ReadyForView => "Ready for View",
            ProductStatus::Approved => "Approved",
            ProductStatus::Archived => "Archived",
        }
    }

    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "Approved" | "Targeting Approved" => ProductStatus::Approved,
            "Archived" => ProductStatus::Archived,
            _ => ProductStatus::ReadyForView,
        }
    }
}

impl From<String> for ProductStatus {
    fn from(raw: String) -> Self {
        ProductStatus::from_raw(&raw)
    }
}

impl From<ProductStatus> for String {
    fn from(status: ProductStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub advertiser: String,
    pub status: ProductStatus,
    pub launch_date: String,
    pub price_range: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targeting: Option<TargetingInputs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<ProductSentiment>,
}

// ─── Targeting ─────────────────────────────────────────────────────────────

/// Free-form audience targeting inputs attached to a product.
///
/// List fields hold enumerated tags (`"Mobile"`, `"iOS"`, ...); their order
/// only matters for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TargetingInputs {
    pub age_min: String,
    pub age_max: String,
    #[serde(deserialize_with = "null_as_default")]
    pub genders: Vec<String>,
    pub include_regions: String,
    pub exclude_regions: String,
    pub languages: String,
    pub interests: String,
    pub intent_signals: String,
    pub industries: String,
    pub company_size: String,
    pub job_seniority: String,
    pub job_functions: String,
    #[serde(deserialize_with = "null_as_default")]
    pub devices: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub platforms: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub placements: Vec<String>,
    pub content_topics: String,
    pub brand_safety_level: String,
    pub excluded_brands: String,
    pub excluded_keywords: String,
    pub frequency_cap: String,
    pub objective: String,
}

/// Read-only catalog entry describing an audience segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetingSegment {
    pub id: String,
    pub title: String,
    pub tags: Vec<String>,
    pub confidence: u32,
    pub rationale: String,
    pub reach: String,
    pub cpm_index: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TargetingMetrics {
    pub impression_goal: String,
    pub estimated_reach: String,
    pub confidence: u32,
    pub objective: String,
    pub updated_at: String,
}

// ─── Sentiment ─────────────────────────────────────────────────────────────

/// Positive / neutral / negative split. Expected to sum to 100; not enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

/// Analytics snapshot attached to a product when it is created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductSentiment {
    pub net_sentiment: u32,
    pub confidence: u32,
    pub volume: String,
    pub momentum: String,
    pub distribution: SentimentDistribution,
    #[serde(deserialize_with = "null_as_default")]
    pub drivers: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub risks: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub insights: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub trend: Vec<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub sources: Vec<String>,
}

// ─── Campaign ──────────────────────────────────────────────────────────────

/// Campaign lifecycle state. Anything other than `"Active"` reads as Review.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CampaignState {
    #[default]
    Review,
    Active,
}

impl CampaignState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignState::Review => "Review",
            CampaignState::Active => "Active",
        }
    }
}

impl From<String> for CampaignState {
    fn from(raw: String) -> Self {
        if raw == "Active" {
            CampaignState::Active
        } else {
            CampaignState::Review
        }
    }
}

impl From<CampaignState> for String {
    fn from(state: CampaignState) -> Self {
        state.as_str().to_string()
    }
}

impl fmt::Display for CampaignState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Budget model. Unrecognised stored values read as [`BudgetType::Daily`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BudgetType {
    #[default]
    Daily,
    Lifetime,
}

impl BudgetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetType::Daily => "Daily",
            BudgetType::Lifetime => "Lifetime",
        }
    }
}

impl From<String> for BudgetType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Lifetime" => BudgetType::Lifetime,
            _ => BudgetType::Daily,
        }
    }
}

impl From<BudgetType> for String {
    fn from(budget: BudgetType) -> Self {
        budget.as_str().to_string()
    }
}

/// Delivery pacing. Unrecognised stored values read as [`Pacing::Even`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Pacing {
    #[default]
    Even,
    Ahead,
    Asap,
}

impl Pacing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pacing::Even => "Even",
            Pacing::Ahead => "Ahead",
            Pacing::Asap => "ASAP",
        }
    }
}

impl From<String> for Pacing {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Ahead" => Pacing::Ahead,
            "ASAP" => Pacing::Asap,
            _ => Pacing::Even,
        }
    }
}

impl From<Pacing> for String {
    fn from(pacing: Pacing) -> Self {
        pacing.as_str().to_string()
    }
}

/// A campaign launched from a product.
///
/// `product_id` is a loose reference: a dangling id is tolerated and simply
/// resolves to no product. The scheduling fields are optional on the wire
/// and filled in by the store's defaulting pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CampaignRecord {
    pub id: String,
    pub name: String,
    pub code: String,
    pub scope: String,
    pub state: CampaignState,
    pub last_sync: String,
    #[serde(deserialize_with = "null_as_default")]
    pub segments: Vec<String>,
    pub product_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_type: Option<BudgetType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pacing: Option<Pacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_cap: Option<String>,
}

/// Manual campaign setup collected by the campaign form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDetails {
    pub product_id: String,
    /// Blank means "use the generated `<product> Launch` name".
    pub name: String,
    pub objective: String,
    pub budget_type: BudgetType,
    pub budget_amount: String,
    pub start_date: String,
    pub end_date: String,
    pub bid_strategy: String,
    pub pacing: Pacing,
    pub frequency_cap: String,
}

// ─── Drafts ────────────────────────────────────────────────────────────────

/// Product details held between wizard steps, before commit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftProduct {
    pub name: String,
    pub category: String,
    pub price_range: String,
    pub launch_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Input to product creation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub category: String,
    pub price_range: String,
    pub launch_date: String,
    pub brand_tone: Option<String>,
    pub description: Option<String>,
    pub targeting: Option<TargetingInputs>,
    pub sentiment: Option<ProductSentiment>,
}

impl ProductInput {
    pub fn from_draft(
        draft: DraftProduct,
        targeting: Option<TargetingInputs>,
        sentiment: Option<ProductSentiment>,
    ) -> Self {
        Self {
            name: draft.name,
            category: draft.category,
            price_range: draft.price_range,
            launch_date: draft.launch_date,
            brand_tone: draft.brand_tone,
            description: draft.description,
            targeting,
            sentiment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_status_reads_legacy_and_unknown_values() {
        let legacy: ProductStatus = serde_json::from_str(r#""Targeting Approved""#).unwrap();
        assert_eq!(legacy, ProductStatus::Approved);

        let unknown: ProductStatus = serde_json::from_str(r#""Pending""#).unwrap();
        assert_eq!(unknown, ProductStatus::ReadyForView);

        let json = serde_json::to_string(&ProductStatus::ReadyForView).unwrap();
        assert_eq!(json, r#""Ready for View""#);
    }

    #[test]
    fn test_campaign_state_defaults_to_review() {
        let state: CampaignState = serde_json::from_str(r#""Paused""#).unwrap();
        assert_eq!(state, CampaignState::Review);
        let state: CampaignState = serde_json::from_str(r#""Active""#).unwrap();
        assert_eq!(state, CampaignState::Active);
    }

    #[test]
    fn test_campaign_record_tolerates_missing_schedule() {
        let raw = r#"{
            "id": "user-1",
            "name": "Launch",
            "code": "CW-1",
            "scope": "Apparel",
            "lastSync": "Feb 02, 2026",
            "segments": ["s-1"],
            "productId": "p-1",
            "pacing": "ASAP"
        }"#;
        let campaign: CampaignRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(campaign.state, CampaignState::Review);
        assert_eq!(campaign.pacing, Some(Pacing::Asap));
        assert!(campaign.objective.is_none());

        let json = serde_json::to_value(&campaign).unwrap();
        assert_eq!(json["productId"], "p-1");
        assert!(json.get("budgetType").is_none());
    }

    #[test]
    fn test_unknown_budget_and_pacing_fall_back() {
        let raw = r#"{
            "id": "user-2",
            "budgetType": "Monthly",
            "pacing": "Slow",
            "segments": null
        }"#;
        let campaign: CampaignRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(campaign.budget_type, Some(BudgetType::Daily));
        assert_eq!(campaign.pacing, Some(Pacing::Even));
        assert!(campaign.segments.is_empty());

        let json = serde_json::to_value(Pacing::Asap).unwrap();
        assert_eq!(json, "ASAP");
        let lifetime: BudgetType = serde_json::from_str(r#""Lifetime""#).unwrap();
        assert_eq!(lifetime, BudgetType::Lifetime);
    }
}
