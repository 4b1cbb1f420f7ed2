//! Built-in fixture records the store merges against on every load.

use ads_core::types::{
    BudgetType, CampaignRecord, CampaignState, Pacing, Product, ProductSentiment, ProductStatus,
    SentimentDistribution, TargetingInputs, TargetingMetrics, TargetingSegment,
};

/// Read-only seed records supplied at process start.
#[derive(Debug, Clone)]
pub struct SeedDataset {
    pub products: Vec<Product>,
    pub segments: Vec<TargetingSegment>,
    pub campaigns: Vec<CampaignRecord>,
    pub metrics: TargetingMetrics,
}

impl SeedDataset {
    pub fn builtin() -> Self {
        Self {
            products: seed_products(),
            segments: seed_segments(),
            campaigns: seed_campaigns(),
            metrics: seed_metrics(),
        }
    }

    /// Ids of every catalog segment, in catalog order.
    pub fn segment_ids(&self) -> Vec<String> {
        self.segments.iter().map(|s| s.id.clone()).collect()
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

impl Default for SeedDataset {
    fn default() -> Self {
        Self::builtin()
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "p-1".to_string(),
            name: "CloudWalk Sneakers".to_string(),
            sku: "CW-2024-001".to_string(),
            category: "Apparel & Accessories".to_string(),
            advertiser: "CloudWalk".to_string(),
            status: ProductStatus::ReadyForView,
            launch_date: "2027-03-01".to_string(),
            price_range: "USD 120 - 180".to_string(),
            updated_at: "Feb 02, 2026".to_string(),
            brand_tone: Some("Bold, urban, energetic".to_string()),
            description: Some(
                "Lightweight commuter sneakers for urban professionals who walk more than \
                 they drive."
                    .to_string(),
            ),
            targeting: Some(TargetingInputs {
                age_min: "24".to_string(),
                age_max: "44".to_string(),
                genders: strings(&["All"]),
                include_regions: "United States, Canada, United Kingdom".to_string(),
                exclude_regions: "Russia, China".to_string(),
                languages: "English".to_string(),
                interests: "Sneakers, Running, Fitness wearables, Urban lifestyle".to_string(),
                intent_signals: "running shoes, commuter gear, sportswear reviews".to_string(),
                industries: "Retail, Consumer Goods, Lifestyle".to_string(),
                company_size: "Mid-market (200-1000)".to_string(),
                job_seniority: "Manager, Director, VP".to_string(),
                job_functions: "Marketing, Growth, Product".to_string(),
                devices: strings(&["Mobile", "Desktop"]),
                platforms: strings(&["iOS", "Android", "Web"]),
                placements: strings(&["Homepage", "Product pages", "Blog"]),
                content_topics: "Lifestyle, Fitness, Apparel".to_string(),
                brand_safety_level: "Standard".to_string(),
                excluded_brands: "Competitor X, Competitor Y".to_string(),
                excluded_keywords: "free, cheap, discount".to_string(),
                frequency_cap: "3 / day".to_string(),
                objective: "Awareness".to_string(),
            }),
            sentiment: Some(ProductSentiment {
                net_sentiment: 64,
                confidence: 90,
                volume: "128k mentions / 30d".to_string(),
                momentum: "+9%".to_string(),
                distribution: SentimentDistribution {
                    positive: 62,
                    neutral: 26,
                    negative: 12,
                },
                drivers: strings(&[
                    "Strong affinity in urban professional cohorts",
                    "Positive product performance reviews",
                ]),
                risks: strings(&["Price sensitivity in entry-level segments"]),
                insights: strings(&["Sentiment lifts during weekday commute windows"]),
                trend: vec![50, 54, 58, 60, 62, 64, 66, 68],
                sources: strings(&["Social listening", "Review aggregators"]),
            }),
        },
        Product {
            id: "p-2".to_string(),
            name: "HydroBottle 2.0".to_string(),
            sku: "HB-2024-042".to_string(),
            category: "Fitness".to_string(),
            advertiser: "HydroLife".to_string(),
            status: ProductStatus::Approved,
            launch_date: "2027-04-15".to_string(),
            price_range: "USD 35 - 49".to_string(),
            updated_at: "Feb 01, 2026".to_string(),
            brand_tone: Some("Playful, upbeat".to_string()),
            description: Some("Smart insulated bottle that tracks hydration.".to_string()),
            targeting: None,
            sentiment: None,
        },
        Product {
            id: "p-3".to_string(),
            name: "SonicPro Headphones".to_string(),
            sku: "SP-2024-089".to_string(),
            category: "Electronics".to_string(),
            advertiser: "SonicPro".to_string(),
            status: ProductStatus::ReadyForView,
            launch_date: "2027-05-20".to_string(),
            price_range: "USD 249 - 349".to_string(),
            updated_at: "Jan 30, 2026".to_string(),
            brand_tone: Some("Luxury, refined".to_string()),
            description: Some(
                "Noise-canceling over-ear headphones with studio-grade audio.".to_string(),
            ),
            targeting: None,
            sentiment: None,
        },
        Product {
            id: "p-4".to_string(),
            name: "ZenGlow Candle".to_string(),
            sku: "ZG-2024-005".to_string(),
            category: "Home Decor".to_string(),
            advertiser: "ZenGlow".to_string(),
            status: ProductStatus::ReadyForView,
            launch_date: "2026-01-15".to_string(),
            price_range: "USD 28 - 42".to_string(),
            updated_at: "Jan 29, 2026".to_string(),
            brand_tone: Some("Calm, minimalist".to_string()),
            description: None,
            targeting: None,
            sentiment: None,
        },
    ]
}

fn seed_segments() -> Vec<TargetingSegment> {
    vec![
        TargetingSegment {
            id: "s-1".to_string(),
            title: "Urban Commuters".to_string(),
            tags: strings(&["Lifestyle", "Mobile-first", "Metro"]),
            confidence: 94,
            rationale: "High overlap with commuter gear searches and weekday mobile sessions."
                .to_string(),
            reach: "1.2M".to_string(),
            cpm_index: "1.08x".to_string(),
        },
        TargetingSegment {
            id: "s-2".to_string(),
            title: "Wellness Enthusiasts".to_string(),
            tags: strings(&["Fitness", "Subscriptions", "Health apps"]),
            confidence: 89,
            rationale: "Engages with training plans and hydration content on weekends."
                .to_string(),
            reach: "850k".to_string(),
            cpm_index: "0.94x".to_string(),
        },
        TargetingSegment {
            id: "s-3".to_string(),
            title: "Premium Tech Adopters".to_string(),
            tags: strings(&["Audio", "Gadgets", "High income"]),
            confidence: 91,
            rationale: "Strong premium device usage and early-adopter review engagement."
                .to_string(),
            reach: "640k".to_string(),
            cpm_index: "1.21x".to_string(),
        },
    ]
}

fn seed_metrics() -> TargetingMetrics {
    TargetingMetrics {
        impression_goal: "2.5M".to_string(),
        estimated_reach: "1.85M".to_string(),
        confidence: 92,
        objective: "Awareness".to_string(),
        updated_at: "12 mins ago".to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn seed_campaign(
    id: &str,
    name: &str,
    code: &str,
    scope: &str,
    state: CampaignState,
    last_sync: &str,
    segments: &[&str],
    product_id: &str,
    objective: &str,
    budget_type: BudgetType,
    budget_amount: &str,
    dates: (&str, &str),
    bid_strategy: &str,
    pacing: Pacing,
    frequency_cap: &str,
) -> CampaignRecord {
    CampaignRecord {
        id: id.to_string(),
        name: name.to_string(),
        code: code.to_string(),
        scope: scope.to_string(),
        state,
        last_sync: last_sync.to_string(),
        segments: strings(segments),
        product_id: product_id.to_string(),
        objective: Some(objective.to_string()),
        budget_type: Some(budget_type),
        budget_amount: Some(budget_amount.to_string()),
        start_date: Some(dates.0.to_string()),
        end_date: Some(dates.1.to_string()),
        bid_strategy: Some(bid_strategy.to_string()),
        pacing: Some(pacing),
        frequency_cap: Some(frequency_cap.to_string()),
    }
}

fn seed_campaigns() -> Vec<CampaignRecord> {
    vec![
        seed_campaign(
            "c-1",
            "CloudWalk Sneakers",
            "CW-2024-001",
            "Consumer Goods",
            CampaignState::Active,
            "Feb 2, 2026",
            &["s-1", "s-2"],
            "p-1",
            "Awareness",
            BudgetType::Daily,
            "$1,200",
            ("2026-01-20", "2026-03-20"),
            "Maximize Reach",
            Pacing::Even,
            "3 / day",
        ),
        seed_campaign(
            "c-2",
            "HydroBottle 2.0",
            "HB-2024-042",
            "Fitness",
            CampaignState::Review,
            "Feb 1, 2026",
            &["s-2"],
            "p-2",
            "Consideration",
            BudgetType::Lifetime,
            "$8,000",
            ("2026-02-01", "2026-03-15"),
            "Target CPM",
            Pacing::Ahead,
            "2 / day",
        ),
        seed_campaign(
            "c-3",
            "SonicPro Headphones",
            "SP-2024-089",
            "Electronics",
            CampaignState::Review,
            "Jan 30, 2026",
            &["s-1", "s-3"],
            "p-3",
            "Conversion",
            BudgetType::Daily,
            "$900",
            ("2026-02-10", "2026-04-10"),
            "Target CPA",
            Pacing::Even,
            "4 / day",
        ),
        seed_campaign(
            "c-4",
            "ZenGlow Candle",
            "ZG-2024-005",
            "Home Decor",
            CampaignState::Review,
            "Jan 29, 2026",
            &["s-3"],
            "p-4",
            "Awareness",
            BudgetType::Lifetime,
            "$6,000",
            ("2026-01-15", "2026-02-28"),
            "Maximize Reach",
            Pacing::Asap,
            "3 / day",
        ),
    ]
}
