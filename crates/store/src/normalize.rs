//! Status and default rules re-applied on every load and every product mutation.
//!
//! Product status is recomputed from `launch_date` (a past launch always
//! reads as Archived) and campaigns get every scheduling field filled in.

use ads_core::types::{BudgetType, CampaignRecord, Pacing, Product, ProductStatus};
use chrono::{DateTime, NaiveDate};

pub const DEFAULT_OBJECTIVE: &str = "Awareness";
pub const DEFAULT_BUDGET_AMOUNT: &str = "$1,200";
pub const DEFAULT_START_DATE: &str = "2026-02-10";
pub const DEFAULT_END_DATE: &str = "2026-03-20";
pub const DEFAULT_BID_STRATEGY: &str = "Maximize Reach";
pub const DEFAULT_FREQUENCY_CAP: &str = "3 / day";

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%b %d, %Y", "%B %d, %Y", "%m/%d/%Y"];

/// Parse the date strings the console stores. Time of day is dropped.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

/// `true` when `value` is a date strictly before `today`. Unparseable dates
/// are never considered passed.
pub fn is_date_passed(value: &str, today: NaiveDate) -> bool {
    parse_date(value).is_some_and(|date| date < today)
}

/// Render a date the way campaign sync and product update stamps read,
/// e.g. `Feb 02, 2026`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

pub fn normalize_product_status(
    status: ProductStatus,
    launch_date: &str,
    today: NaiveDate,
) -> ProductStatus {
    if is_date_passed(launch_date, today) {
        return ProductStatus::Archived;
    }
    match status {
        ProductStatus::Approved => ProductStatus::Approved,
        _ => ProductStatus::ReadyForView,
    }
}

pub fn normalize_product(product: Product, today: NaiveDate) -> Product {
    let status = normalize_product_status(product.status, &product.launch_date, today);
    Product { status, ..product }
}

pub fn normalize_products(products: Vec<Product>, today: NaiveDate) -> Vec<Product> {
    products
        .into_iter()
        .map(|product| normalize_product(product, today))
        .collect()
}

fn text_or(value: Option<String>, fallback: &str) -> Option<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Some(text),
        _ => Some(fallback.to_string()),
    }
}

/// Fill every optional scheduling field; blank text counts as missing.
/// The state itself is already coerced to Review/Active when the record is
/// read.
pub fn with_campaign_defaults(campaign: CampaignRecord) -> CampaignRecord {
    CampaignRecord {
        objective: text_or(campaign.objective, DEFAULT_OBJECTIVE),
        budget_type: campaign.budget_type.or(Some(BudgetType::Daily)),
        budget_amount: text_or(campaign.budget_amount, DEFAULT_BUDGET_AMOUNT),
        start_date: text_or(campaign.start_date, DEFAULT_START_DATE),
        end_date: text_or(campaign.end_date, DEFAULT_END_DATE),
        bid_strategy: text_or(campaign.bid_strategy, DEFAULT_BID_STRATEGY),
        pacing: campaign.pacing.or(Some(Pacing::Even)),
        frequency_cap: text_or(campaign.frequency_cap, DEFAULT_FREQUENCY_CAP),
        ..campaign
    }
}

pub fn normalize_campaigns(campaigns: Vec<CampaignRecord>) -> Vec<CampaignRecord> {
    campaigns.into_iter().map(with_campaign_defaults).collect()
}
