//! Tests for funding allocation and round metrics

use crate::error::ConfigError;
use crate::funding::{AllocationCategory, PRE_MONEY_VALUATION, allocate, round_metrics};

#[test]
fn test_default_split() {
    let allocations = allocate(10_000_000.0, [40.0, 25.0, 20.0, 15.0]).unwrap();

    assert_eq!(allocations[0].category, AllocationCategory::Product);
    assert!((allocations[0].normalized_percent - 40.0).abs() < 1e-9);
    assert!((allocations[0].amount - 4_000_000.0).abs() < 1e-6);
    assert!((allocations[3].amount - 1_500_000.0).abs() < 1e-6);
}

/// Raw percentages that do not sum to 100 are normalized so they do
#[test]
fn test_normalization_properties() {
    for raws in [
        [33.3, 21.0, 14.0, 7.0],
        [10.0, 10.0, 10.0, 10.0],
        [80.0, 5.0, 90.0, 2.0],
        [0.0, 1.0, 0.0, 0.0],
    ] {
        let allocations = allocate(10_000_000.0, raws).unwrap();

        let percent_sum: f64 = allocations.iter().map(|a| a.normalized_percent).sum();
        assert!(
            (percent_sum - 100.0).abs() < 1e-6,
            "percent sum {percent_sum} for {raws:?}"
        );

        let amount_sum: f64 = allocations.iter().map(|a| a.amount).sum();
        assert!(
            (amount_sum - 10_000_000.0).abs() < 1e-6,
            "amount sum {amount_sum} for {raws:?}"
        );

        for (allocation, raw) in allocations.iter().zip(raws) {
            assert_eq!(allocation.raw_percent, raw);
        }
    }
}

#[test]
fn test_equal_raws_split_evenly() {
    let allocations = allocate(8_000_000.0, [10.0, 10.0, 10.0, 10.0]).unwrap();
    for allocation in &allocations {
        assert!((allocation.normalized_percent - 25.0).abs() < 1e-9);
        assert!((allocation.amount - 2_000_000.0).abs() < 1e-6);
    }
}

#[test]
fn test_zero_sum_is_config_error() {
    let err = allocate(10_000_000.0, [0.0; 4]).unwrap_err();
    assert_eq!(err, ConfigError::AllocationSumNotPositive { sum: 0.0 });
}

#[test]
fn test_negative_percent_is_config_error() {
    let err = allocate(10_000_000.0, [40.0, -5.0, 20.0, 15.0]).unwrap_err();
    assert!(matches!(err, ConfigError::NegativeAllocation { .. }));
}

#[test]
fn test_round_metrics() {
    let round = round_metrics(10_000_000.0);
    assert_eq!(round.pre_money, PRE_MONEY_VALUATION);
    assert_eq!(round.post_money, 50_000_000.0);
    assert!((round.equity_percent - 20.0).abs() < 1e-9);
}
