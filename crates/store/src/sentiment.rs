//! Simulated sentiment summary for a product.
//!
//! A baseline snapshot is overwritten by at most one tone rule (luxury is
//! checked before playful) and then by the category rule (home). Both
//! groups write the same snapshot fields, so when a tone rule and the home
//! rule both match, the home rule's values win.

use crate::rules::{MatchMode, Rule, RuleGroup};
use ads_core::types::{ProductSentiment, SentimentDistribution};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn distribution(positive: u32, neutral: u32, negative: u32) -> SentimentDistribution {
    SentimentDistribution {
        positive,
        neutral,
        negative,
    }
}

pub fn baseline_sentiment() -> ProductSentiment {
    ProductSentiment {
        net_sentiment: 64,
        confidence: 90,
        volume: "128k mentions / 30d".to_string(),
        momentum: "+9%".to_string(),
        distribution: distribution(62, 26, 12),
        drivers: strings(&[
            "Strong affinity in urban professional cohorts",
            "Positive product performance reviews",
            "High intent signals in premium placements",
        ]),
        risks: strings(&["Price sensitivity in entry-level segments"]),
        insights: strings(&[
            "Confidence highest in North America + UK",
            "Sentiment lifts during weekday commute windows",
        ]),
        trend: vec![50, 54, 58, 60, 62, 64, 66, 68],
        sources: strings(&["Social listening", "Review aggregators", "Partner surveys"]),
    }
}

fn luxury(s: &mut ProductSentiment) {
    s.net_sentiment = 58;
    s.confidence = 86;
    s.momentum = "+6%".to_string();
    s.distribution = distribution(56, 30, 14);
    s.drivers = strings(&[
        "High-end craftsmanship comments",
        "Creator endorsements",
        "Premium placement affinity",
    ]);
    s.risks = strings(&["Price comparisons vs. competitors", "Battery life scrutiny"]);
    s.insights = strings(&[
        "Strong lift in creator communities",
        "Sentiment strongest with high-income cohorts",
    ]);
    s.trend = vec![46, 48, 52, 55, 57, 58, 59, 60];
}

fn playful(s: &mut ProductSentiment) {
    s.net_sentiment = 70;
    s.confidence = 88;
    s.momentum = "+10%".to_string();
    s.distribution = distribution(68, 23, 9);
    s.drivers = strings(&["Community challenges", "Colorway drops", "UGC momentum"]);
    s.risks = strings(&["Seasonal dips outside peak months"]);
    s.insights = strings(&[
        "High sentiment on mobile placements",
        "Strong response to wellness content",
    ]);
    s.trend = vec![54, 58, 62, 64, 66, 68, 70, 71];
}

fn home(s: &mut ProductSentiment) {
    s.net_sentiment = 66;
    s.confidence = 85;
    s.momentum = "+8%".to_string();
    s.distribution = distribution(62, 27, 11);
    s.drivers = strings(&["Minimalist design praise", "Seasonal scent interest"]);
    s.risks = strings(&["Fulfillment delays in peak season"]);
    s.insights = strings(&["Strong resonance with design-forward cohorts"]);
    s.trend = vec![48, 51, 55, 58, 60, 62, 64, 66];
}

pub static TONE_RULES: RuleGroup<ProductSentiment> = RuleGroup {
    name: "tone",
    mode: MatchMode::FirstMatch,
    rules: &[
        Rule {
            name: "luxury",
            keywords: &["luxury"],
            apply: luxury,
        },
        Rule {
            name: "playful",
            keywords: &["playful"],
            apply: playful,
        },
    ],
};

pub static CATEGORY_RULES: RuleGroup<ProductSentiment> = RuleGroup {
    name: "category",
    mode: MatchMode::FirstMatch,
    rules: &[Rule {
        name: "home",
        keywords: &["home"],
        apply: home,
    }],
};

pub fn sentiment_summary(brand_tone: Option<&str>, category: Option<&str>) -> ProductSentiment {
    let mut summary = baseline_sentiment();
    TONE_RULES.apply(brand_tone.unwrap_or_default(), &mut summary);
    CATEGORY_RULES.apply(category.unwrap_or_default(), &mut summary);
    summary
}
