//! Tests for segment revenue projection and the revenue-stream NPV

use crate::error::ConfigError;
use crate::revenue::{
    COLD_START_NPV, MIN_SEGMENT_USERS, RevenueProjection, Segment, derive_npv, project_revenue,
};

const DEFAULT_PRICES: [f64; 4] = [29.0, 79.0, 249.0, 1249.0];

#[test]
fn test_default_inputs_user_counts() {
    let projection = project_revenue(100_000.0, 0.05, DEFAULT_PRICES).unwrap();
    assert_eq!(projection.segments.len(), 4);

    // 100_000 * 0.05 * 0.60 / 150 = 20 acquired users
    let freelancer = &projection.segments[Segment::Freelancer.index()];
    assert_eq!(freelancer.year1_users, 20.0);

    // Healthcare: 100_000 * 0.05 * 0.25 / 300 = 4.16 -> floor 4, floored to 10
    let healthcare = &projection.segments[Segment::Healthcare.index()];
    assert_eq!(healthcare.year1_users, MIN_SEGMENT_USERS);

    // Enterprise and government both land below the floor too
    assert_eq!(
        projection.segments[Segment::Enterprise.index()].year1_users,
        MIN_SEGMENT_USERS
    );
    assert_eq!(
        projection.segments[Segment::Government.index()].year1_users,
        MIN_SEGMENT_USERS
    );
}

#[test]
fn test_minimum_users_policy_at_zero_spend() {
    let projection = project_revenue(0.0, 0.05, DEFAULT_PRICES).unwrap();
    for seg in &projection.segments {
        assert_eq!(seg.year1_users, MIN_SEGMENT_USERS);
    }
}

/// Growth compounds by squared and quadrupled exponents, not annually
#[test]
fn test_growth_exponents() {
    let projection = project_revenue(100_000.0, 0.05, DEFAULT_PRICES).unwrap();
    let freelancer = &projection.segments[Segment::Freelancer.index()];

    // 2.8 + 0.05 * 10 = 3.3
    let growth: f64 = 3.3;
    assert!((freelancer.year3_users - 20.0 * growth.powi(2)).abs() < 1e-9);
    assert!((freelancer.year5_users - 20.0 * growth.powi(4)).abs() < 1e-9);
}

#[test]
fn test_revenue_annualizes_monthly_price() {
    let projection = project_revenue(100_000.0, 0.05, DEFAULT_PRICES).unwrap();
    let freelancer = &projection.segments[Segment::Freelancer.index()];

    assert_eq!(freelancer.price, 29.0);
    assert_eq!(freelancer.year1_revenue, 20.0 * 29.0 * 12.0);
}

#[test]
fn test_totals_sum_segments() {
    let projection = project_revenue(100_000.0, 0.05, DEFAULT_PRICES).unwrap();

    let y1: f64 = projection.segments.iter().map(|s| s.year1_revenue).sum();
    let y5: f64 = projection.segments.iter().map(|s| s.year5_revenue).sum();
    assert!((projection.year1_revenue - y1).abs() < 1e-6);
    assert!((projection.year5_revenue - y5).abs() < 1e-6);
}

#[test]
fn test_cagr_matches_definition() {
    let projection = project_revenue(100_000.0, 0.05, DEFAULT_PRICES).unwrap();
    let expected = (projection.year5_revenue / projection.year1_revenue).powf(0.25) - 1.0;
    assert_eq!(projection.cagr, expected);
    assert!(projection.cagr > 0.0);
}

#[test]
fn test_negative_inputs_rejected() {
    let err = project_revenue(-1.0, 0.05, DEFAULT_PRICES).unwrap_err();
    assert!(matches!(err, ConfigError::NegativeUsage { .. }));

    let err = project_revenue(100_000.0, -0.01, DEFAULT_PRICES).unwrap_err();
    assert!(matches!(err, ConfigError::NegativeUsage { .. }));
}

/// All-zero prices leave the CAGR undefined; rejected at the boundary
#[test]
fn test_zero_prices_rejected_as_non_finite() {
    let err = project_revenue(100_000.0, 0.05, [0.0; 4]).unwrap_err();
    assert!(matches!(err, ConfigError::NonFinite { .. }));
}

#[test]
fn test_idempotence() {
    let a = project_revenue(100_000.0, 0.05, DEFAULT_PRICES).unwrap();
    let b = project_revenue(100_000.0, 0.05, DEFAULT_PRICES).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_derive_npv_cold_start() {
    assert_eq!(derive_npv(None, 0.12).unwrap(), COLD_START_NPV);
}

#[test]
fn test_derive_npv_matches_hand_calculation() {
    let projection = RevenueProjection {
        segments: Vec::new(),
        year1_revenue: 1000.0,
        year3_revenue: 2000.0,
        year5_revenue: 4000.0,
        cagr: 0.414,
    };
    let rate: f64 = 0.12;

    let revenues = [1000.0, 1800.0, 2000.0, 4200.0, 4000.0];
    let mut expected = 0.0;
    for (i, revenue) in revenues.iter().enumerate() {
        let year = i as f64 + 1.0;
        let fcf = revenue * (0.3 + year * 0.08) * 0.75;
        expected += fcf / (1.0 + rate).powf(year);
    }
    let terminal = 4000.0 * 0.65 * 1.03 / (rate - 0.03) / (1.0 + rate).powi(5);
    expected += terminal;

    let npv = derive_npv(Some(&projection), rate).unwrap();
    assert!((npv - expected).abs() < 1e-6);
}

#[test]
fn test_derive_npv_rejects_low_discount() {
    let projection = project_revenue(100_000.0, 0.05, DEFAULT_PRICES).unwrap();

    let err = derive_npv(Some(&projection), 0.03).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::DiscountNotAboveTerminalGrowth { .. }
    ));

    let err = derive_npv(Some(&projection), 0.01).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::DiscountNotAboveTerminalGrowth { .. }
    ));
}
