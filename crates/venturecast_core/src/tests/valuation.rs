//! Tests for the four valuation heuristics and their aggregation

use crate::params::{ParamKey, ParameterStore};
use crate::valuation::{
    RISK_FACTOR_BASE_VALUATION, SCORECARD_BASE_VALUATION, ValuationMethod, ValuationSet,
    berkus_valuation, cost_to_duplicate_valuation, risk_factor_valuation, scorecard_valuation,
};

#[test]
fn test_default_store_estimates() {
    let store = ParameterStore::new();

    // Berkus factors default to zero
    assert_eq!(berkus_valuation(&store), 0.0);
    // All multipliers at 1.0 and weights summing to 1.0 reproduce the base
    assert!((scorecard_valuation(&store) - SCORECARD_BASE_VALUATION).abs() < 1e-6);
    // No risk deltas
    assert_eq!(risk_factor_valuation(&store), RISK_FACTOR_BASE_VALUATION);
    // $2M dev cost at a 2.5x premium
    assert_eq!(cost_to_duplicate_valuation(&store), 5_000_000.0);
}

#[test]
fn test_berkus_sums_factors() {
    let mut store = ParameterStore::new();
    store.set(ParamKey::BerkusIdea, 500_000.0);
    store.set(ParamKey::BerkusPrototype, 400_000.0);
    store.set(ParamKey::BerkusManagement, 450_000.0);
    store.set(ParamKey::BerkusRelationships, 250_000.0);
    store.set(ParamKey::BerkusSales, 300_000.0);

    assert_eq!(berkus_valuation(&store), 1_900_000.0);
}

#[test]
fn test_scorecard_weighting() {
    let mut store = ParameterStore::new();
    store.set(ParamKey::ScorecardManagement, 4.0);

    // 4.0 * 0.30 + 1.0 * (0.25 + 0.15 + 0.10 + 0.10 + 0.10) = 1.9
    let expected = SCORECARD_BASE_VALUATION * 1.9;
    assert!((scorecard_valuation(&store) - expected).abs() < 1e-3);
}

#[test]
fn test_risk_factor_deltas_can_be_negative() {
    let mut store = ParameterStore::new();
    store.set(ParamKey::RiskManagement, -5_000_000.0);
    store.set(ParamKey::RiskStage, -3_000_000.0);

    assert_eq!(
        risk_factor_valuation(&store),
        RISK_FACTOR_BASE_VALUATION - 8_000_000.0
    );
}

#[test]
fn test_average_is_mean_of_stored_estimates() {
    let store = ParameterStore::new();
    let set = ValuationSet::compute(&store);

    let estimates = set.estimates();
    let mean = estimates.iter().map(|e| e.amount).sum::<f64>() / 4.0;
    assert_eq!(set.average(), mean);

    // Default estimates: 0 + 35M + 40M + 5M over four methods
    assert!((set.average() - 20_000_000.0).abs() < 1e-3);
}

/// The average is insensitive to the order in which inputs were changed,
/// since all four estimates are retained
#[test]
fn test_average_order_independence() {
    let mut forward = ParameterStore::new();
    forward.set(ParamKey::BerkusIdea, 500_000.0);
    forward.set(ParamKey::DevCost, 3_000_000.0);
    forward.set(ParamKey::RiskStage, 2_000_000.0);

    let mut reverse = ParameterStore::new();
    reverse.set(ParamKey::RiskStage, 2_000_000.0);
    reverse.set(ParamKey::DevCost, 3_000_000.0);
    reverse.set(ParamKey::BerkusIdea, 500_000.0);

    let a = ValuationSet::compute(&forward);
    let b = ValuationSet::compute(&reverse);
    assert_eq!(a, b);
    assert_eq!(a.average(), b.average());
}

#[test]
fn test_estimates_cover_all_methods() {
    let set = ValuationSet::compute(&ParameterStore::new());
    let estimates = set.estimates();

    assert_eq!(estimates.len(), 4);
    for (estimate, method) in estimates.iter().zip(ValuationMethod::ALL) {
        assert_eq!(estimate.method, method);
        assert_eq!(estimate.amount, set.amount(method));
    }
}
