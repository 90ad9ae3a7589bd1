//! Tests for workload token counts and tier recommendation

use crate::error::ConfigError;
use crate::revenue::Segment;
use crate::usage::{UsageWorkload, recommend_tier};

const DEFAULT_PRICES: [f64; 4] = [29.0, 79.0, 249.0, 1249.0];

fn legal_with_tokens(tokens: f64) -> UsageWorkload {
    UsageWorkload::Legal {
        documents: 1.0,
        pages_per_document: 1.0,
        tokens_per_page: tokens,
    }
}

#[test]
fn test_workload_token_formulas() {
    let legal = UsageWorkload::Legal {
        documents: 20.0,
        pages_per_document: 50.0,
        tokens_per_page: 750.0,
    };
    assert_eq!(legal.monthly_tokens().unwrap(), 750_000.0);

    let content = UsageWorkload::ContentTeam {
        articles: 100.0,
        words_per_article: 2000.0,
        research_pages_per_article: 30.0,
    };
    // 100 * 2000 * 1.5 + 100 * 30 * 750
    assert_eq!(content.monthly_tokens().unwrap(), 2_550_000.0);

    let government = UsageWorkload::Government {
        policies: 10.0,
        pages_per_policy: 200.0,
        cross_references: 500.0,
    };
    // 10 * 200 * 750 + 500 * 1000
    assert_eq!(government.monthly_tokens().unwrap(), 2_000_000.0);

    let healthcare = UsageWorkload::Healthcare {
        records: 500.0,
        pages_per_record: 15.0,
        context_pages: 50.0,
    };
    // 500 * 15 * 600 + 50 * 800
    assert_eq!(healthcare.monthly_tokens().unwrap(), 4_540_000.0);
}

/// Tier ceilings are inclusive on the lower tier
#[test]
fn test_tier_thresholds() {
    let cases = [
        (500_000.0, Segment::Freelancer),
        (500_001.0, Segment::Healthcare),
        (1_500_000.0, Segment::Healthcare),
        (1_500_001.0, Segment::Enterprise),
        (5_000_000.0, Segment::Enterprise),
        (5_000_001.0, Segment::Government),
    ];
    for (tokens, expected) in cases {
        let rec = recommend_tier(&legal_with_tokens(tokens), DEFAULT_PRICES).unwrap();
        assert_eq!(rec.tier, expected, "at {tokens} tokens");
        assert_eq!(rec.monthly_tokens, tokens);
    }
}

#[test]
fn test_recommendation_carries_tier_price() {
    let rec = recommend_tier(&legal_with_tokens(750_000.0), DEFAULT_PRICES).unwrap();
    assert_eq!(rec.tier, Segment::Healthcare);
    assert_eq!(rec.monthly_price, 79.0);

    let rec = recommend_tier(&legal_with_tokens(10_000_000.0), DEFAULT_PRICES).unwrap();
    assert_eq!(rec.tier, Segment::Government);
    assert_eq!(rec.monthly_price, 1249.0);
}

#[test]
fn test_default_scenarios_span_tiers() {
    for workload in UsageWorkload::default_scenarios() {
        let rec = recommend_tier(&workload, DEFAULT_PRICES).unwrap();
        assert!(rec.monthly_tokens > 0.0);
        assert!(rec.monthly_price > 0.0);
    }
}

#[test]
fn test_negative_quantities_rejected() {
    let workload = UsageWorkload::Legal {
        documents: -1.0,
        pages_per_document: 50.0,
        tokens_per_page: 750.0,
    };
    assert!(matches!(
        workload.monthly_tokens(),
        Err(ConfigError::NegativeUsage { .. })
    ));
}
