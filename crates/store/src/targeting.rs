//! Default targeting generator.
//!
//! Starts from a baseline record and applies two rule groups:
//!
//! 1. the category group (first match wins: fitness, then electronics/tech,
//!    then home), evaluated against the product category;
//! 2. the tone group (every match applies: luxury, then bold), evaluated
//!    against the brand tone.
//!
//! The category group always runs before the tone group. The two groups
//! write disjoint fields, so a tone override never undoes a category one.

use crate::rules::{MatchMode, Rule, RuleGroup};
use ads_core::types::TargetingInputs;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn baseline_targeting() -> TargetingInputs {
    TargetingInputs {
        age_min: "24".to_string(),
        age_max: "44".to_string(),
        genders: strings(&["All"]),
        include_regions: "United States, Canada, United Kingdom".to_string(),
        exclude_regions: "Russia, China".to_string(),
        languages: "English".to_string(),
        interests: "Lifestyle, Shopping, Consumer tech".to_string(),
        intent_signals: "buyer intent signals, category searches, product reviews".to_string(),
        industries: "SaaS, Technology, Services".to_string(),
        company_size: "Mid-market (200-1000)".to_string(),
        job_seniority: "Manager, Director, VP".to_string(),
        job_functions: "Marketing, Product, Growth".to_string(),
        devices: strings(&["Mobile", "Desktop"]),
        platforms: strings(&["iOS", "Android", "Web"]),
        placements: strings(&["Homepage", "Product pages", "Blog"]),
        content_topics: "Business, Technology, Strategy".to_string(),
        brand_safety_level: "Standard".to_string(),
        excluded_brands: "Competitor X, Competitor Y".to_string(),
        excluded_keywords: "free, cheap, discount".to_string(),
        frequency_cap: "3 / day".to_string(),
        objective: "Awareness".to_string(),
    }
}

// ─── Category overrides ────────────────────────────────────────────────────

fn fitness(t: &mut TargetingInputs) {
    t.age_min = "20".to_string();
    t.age_max = "45".to_string();
    t.interests = "Fitness, Wellness, Running, Outdoor gear".to_string();
    t.intent_signals = "training plans, wellness subscriptions, hydration".to_string();
    t.content_topics = "Fitness, Wellness, Outdoor".to_string();
}

fn tech(t: &mut TargetingInputs) {
    t.age_min = "18".to_string();
    t.age_max = "40".to_string();
    t.interests = "Audio gear, Tech reviews, Gaming, Smart devices".to_string();
    t.intent_signals = "noise-canceling, premium audio, smart devices".to_string();
    t.content_topics = "Technology, Audio, Gaming".to_string();
}

fn home(t: &mut TargetingInputs) {
    t.age_min = "25".to_string();
    t.age_max = "54".to_string();
    t.interests = "Home decor, Interior design, Lifestyle".to_string();
    t.intent_signals = "home refresh, interior inspiration, premium decor".to_string();
    t.content_topics = "Home decor, Lifestyle".to_string();
}

pub static CATEGORY_RULES: RuleGroup<TargetingInputs> = RuleGroup {
    name: "category",
    mode: MatchMode::FirstMatch,
    rules: &[
        Rule {
            name: "fitness",
            keywords: &["fitness"],
            apply: fitness,
        },
        Rule {
            name: "tech",
            keywords: &["electronics", "tech"],
            apply: tech,
        },
        Rule {
            name: "home",
            keywords: &["home"],
            apply: home,
        },
    ],
};

// ─── Tone overrides ────────────────────────────────────────────────────────

fn luxury(t: &mut TargetingInputs) {
    t.objective = "Consideration".to_string();
    t.excluded_keywords = "discount, cheap, clearance".to_string();
    t.brand_safety_level = "Limited".to_string();
}

fn bold(t: &mut TargetingInputs) {
    t.frequency_cap = "4 per day".to_string();
}

pub static TONE_RULES: RuleGroup<TargetingInputs> = RuleGroup {
    name: "tone",
    mode: MatchMode::AllMatches,
    rules: &[
        Rule {
            name: "luxury",
            keywords: &["luxury"],
            apply: luxury,
        },
        Rule {
            name: "bold",
            keywords: &["bold"],
            apply: bold,
        },
    ],
};

/// Build targeting inputs for a product from its category and brand tone.
pub fn default_targeting(category: &str, brand_tone: Option<&str>) -> TargetingInputs {
    let mut targeting = baseline_targeting();
    CATEGORY_RULES.apply(category, &mut targeting);
    TONE_RULES.apply(brand_tone.unwrap_or_default(), &mut targeting);
    targeting
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmatched_category_keeps_baseline() {
        assert_eq!(default_targeting("Sporting Goods", None), baseline_targeting());
    }

    #[test]
    fn test_unmatched_category_still_takes_tone() {
        let targeting = default_targeting("Sporting Goods", Some("Bold and Luxury"));
        let mut expected = baseline_targeting();
        expected.objective = "Consideration".to_string();
        expected.excluded_keywords = "discount, cheap, clearance".to_string();
        expected.brand_safety_level = "Limited".to_string();
        expected.frequency_cap = "4 per day".to_string();
        assert_eq!(targeting, expected);
    }

    #[test]
    fn test_category_matching_is_case_insensitive() {
        let targeting = default_targeting("Home & Garden", None);
        assert_eq!(targeting.age_min, "25");
        assert_eq!(targeting.content_topics, "Home decor, Lifestyle");
    }

    #[test]
    fn test_first_category_match_wins() {
        // Matches both "fitness" and "tech"; fitness is checked first.
        let targeting = default_targeting("Fitness Tech Wearables", None);
        assert_eq!(targeting.age_min, "20");
        assert_eq!(targeting.interests, "Fitness, Wellness, Running, Outdoor gear");

        // Matches both "electronics" and "home"; tech is checked first.
        let targeting = default_targeting("Home Electronics", None);
        assert_eq!(targeting.age_min, "18");
        assert_eq!(targeting.content_topics, "Technology, Audio, Gaming");
    }

    #[test]
    fn test_tone_is_additive_to_category() {
        let targeting = default_targeting("Electronics", Some("Luxury, refined"));
        assert_eq!(targeting.age_max, "40");
        assert_eq!(targeting.objective, "Consideration");
        assert_eq!(targeting.brand_safety_level, "Limited");
        assert_eq!(targeting.frequency_cap, "3 / day");
    }
}
