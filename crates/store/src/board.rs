//! Read-side helpers for the product and campaign boards and the product
//! brief form. Nothing here touches the store; every function works on
//! borrowed snapshots.

use crate::rules::{MatchMode, Rule, RuleGroup};
use ads_core::types::{CampaignRecord, CampaignState, Product, ProductStatus};
use regex::Regex;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Board ordering by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusSort {
    /// Items needing attention first.
    #[default]
    Workflow,
    Reverse,
}

fn by_name(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

// ─── Products ──────────────────────────────────────────────────────────────

fn product_rank(status: ProductStatus, sort: StatusSort) -> u8 {
    match (sort, status) {
        (StatusSort::Workflow, ProductStatus::ReadyForView) => 1,
        (StatusSort::Workflow, ProductStatus::Approved) => 2,
        (StatusSort::Workflow, ProductStatus::Archived) => 3,
        (StatusSort::Reverse, ProductStatus::Archived) => 1,
        (StatusSort::Reverse, ProductStatus::Approved) => 2,
        (StatusSort::Reverse, ProductStatus::ReadyForView) => 3,
    }
}

/// Products ordered by status rank, then name.
pub fn sort_products(products: &[Product], sort: StatusSort) -> Vec<Product> {
    let mut sorted = products.to_vec();
    sorted.sort_by(|a, b| {
        product_rank(a.status, sort)
            .cmp(&product_rank(b.status, sort))
            .then_with(|| by_name(&a.name, &b.name))
    });
    sorted
}

// ─── Campaigns ─────────────────────────────────────────────────────────────

fn campaign_rank(state: CampaignState, sort: StatusSort) -> u8 {
    match (sort, state) {
        (StatusSort::Workflow, CampaignState::Review)
        | (StatusSort::Reverse, CampaignState::Active) => 1,
        _ => 2,
    }
}

fn overlay(store: &CampaignRecord, seed: Option<&CampaignRecord>) -> CampaignRecord {
    let scope = if store.scope.is_empty() {
        "General"
    } else {
        store.scope.as_str()
    };
    let scope = format!("{scope} · {} segments", store.segments.len());
    let Some(seed) = seed else {
        return CampaignRecord {
            scope,
            ..store.clone()
        };
    };
    CampaignRecord {
        scope,
        objective: store.objective.clone().or_else(|| seed.objective.clone()),
        budget_type: store.budget_type.or(seed.budget_type),
        budget_amount: store.budget_amount.clone().or_else(|| seed.budget_amount.clone()),
        start_date: store.start_date.clone().or_else(|| seed.start_date.clone()),
        end_date: store.end_date.clone().or_else(|| seed.end_date.clone()),
        bid_strategy: store.bid_strategy.clone().or_else(|| seed.bid_strategy.clone()),
        pacing: store.pacing.or(seed.pacing),
        frequency_cap: store.frequency_cap.clone().or_else(|| seed.frequency_cap.clone()),
        ..store.clone()
    }
}

/// The campaign board: seed campaigns overlaid with the store's campaigns
/// (matched by id, store fields win), sorted by state rank then name.
///
/// Rows that came from the store carry their segment count in the scope
/// label, e.g. `"Fitness · 2 segments"`.
pub fn campaign_board(
    seed: &[CampaignRecord],
    store: &[CampaignRecord],
    sort: StatusSort,
) -> Vec<CampaignRecord> {
    let mut rows: Vec<CampaignRecord> = seed.to_vec();
    let mut index: HashMap<String, usize> = rows
        .iter()
        .enumerate()
        .map(|(i, c)| (c.id.clone(), i))
        .collect();

    for campaign in store {
        match index.get(&campaign.id).copied() {
            Some(i) => {
                let merged = overlay(campaign, Some(&rows[i]));
                rows[i] = merged;
            }
            None => {
                index.insert(campaign.id.clone(), rows.len());
                rows.push(overlay(campaign, None));
            }
        }
    }

    rows.sort_by(|a, b| {
        campaign_rank(a.state, sort)
            .cmp(&campaign_rank(b.state, sort))
            .then_with(|| by_name(&a.name, &b.name))
    });
    rows
}

/// Find the product a campaign was launched from: by product id, then by
/// SKU matching the campaign code, then by case-insensitive name.
pub fn resolve_campaign_product<'a>(
    products: &'a [Product],
    campaign: &CampaignRecord,
) -> Option<&'a Product> {
    let by_id = || {
        (!campaign.product_id.is_empty())
            .then(|| products.iter().find(|p| p.id == campaign.product_id))
            .flatten()
    };
    let by_sku = || {
        (!campaign.code.is_empty())
            .then(|| products.iter().find(|p| p.sku == campaign.code))
            .flatten()
    };
    let by_name = || {
        let name = campaign.name.to_lowercase();
        products.iter().find(|p| p.name.to_lowercase() == name)
    };
    by_id().or_else(by_sku).or_else(by_name)
}

// ─── Brief quality ─────────────────────────────────────────────────────────

/// Signals detected in a free-text product description.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BriefQuality {
    pub audience: bool,
    pub problem: bool,
    pub value: bool,
    pub differentiator: bool,
    pub words: usize,
}

impl BriefQuality {
    pub const MAX_SCORE: usize = 4;

    pub fn score(&self) -> usize {
        [self.audience, self.problem, self.value, self.differentiator]
            .iter()
            .filter(|passed| **passed)
            .count()
    }

    /// Labels of the signals still missing.
    pub fn missing(&self) -> Vec<&'static str> {
        BRIEF_RULES
            .rules
            .iter()
            .zip([self.audience, self.problem, self.value, self.differentiator])
            .filter(|(_, passed)| !passed)
            .map(|(rule, _)| rule.name)
            .collect()
    }
}

fn mark_audience(q: &mut BriefQuality) {
    q.audience = true;
}

fn mark_problem(q: &mut BriefQuality) {
    q.problem = true;
}

fn mark_value(q: &mut BriefQuality) {
    q.value = true;
}

fn mark_differentiator(q: &mut BriefQuality) {
    q.differentiator = true;
}

static BRIEF_RULES: RuleGroup<BriefQuality> = RuleGroup {
    name: "brief",
    mode: MatchMode::AllMatches,
    rules: &[
        Rule {
            name: "Audience context",
            keywords: &[
                "for ", "who ", "audience", "target", "customer", "user", "team", "persona",
                "business", "company", "industry", "b2b", "b2c",
            ],
            apply: mark_audience,
        },
        Rule {
            name: "Problem statement",
            keywords: &[
                "problem", "pain", "challenge", "issue", "need", "friction", "bottleneck",
                "solve", "solves", "solving", "inefficient", "slow",
            ],
            apply: mark_problem,
        },
        Rule {
            name: "Value or outcome",
            keywords: &[
                "value", "benefit", "outcome", "improve", "increase", "reduce", "save",
                "faster", "lower", "higher", "roi", "growth",
            ],
            apply: mark_value,
        },
        Rule {
            name: "Differentiator",
            keywords: &[
                "unique", "different", "differentiator", "advantage", "versus", "vs ",
                "unlike", "compared", "better", "only", "exclusive",
            ],
            apply: mark_differentiator,
        },
    ],
};

pub fn brief_quality(description: &str) -> BriefQuality {
    let mut quality = BriefQuality {
        words: description.split_whitespace().count(),
        ..Default::default()
    };
    BRIEF_RULES.apply(description, &mut quality);
    quality
}

// ─── Price range ───────────────────────────────────────────────────────────

pub const CURRENCIES: [&str; 6] = ["USD", "EUR", "GBP", "JPY", "CAD", "AUD"];

static PRICE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z]{3})\s+(\d+(?:\.\d+)?)\s*-\s*(\d+(?:\.\d+)?)$")
        .expect("price range pattern compiles")
});

/// A price range split into its form fields. Bounds keep their input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRange {
    pub currency: String,
    pub min: String,
    pub max: String,
}

impl PriceRange {
    pub fn new(currency: &str, min: &str, max: &str) -> Self {
        Self {
            currency: currency.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// Parse `"<CUR> <min> - <max>"`. Anything else is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let caps = PRICE_RANGE.captures(raw)?;
        Some(Self::new(&caps[1], &caps[2], &caps[3]))
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - {}", self.currency, self.min, self.max)
    }
}
