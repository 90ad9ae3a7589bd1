//! Segment revenue projection
//!
//! Converts marketing spend and conversion rate into per-segment user counts,
//! compounds them over the 1/3/5-year horizons, and derives an NPV from the
//! resulting revenue stream.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result, ensure_finite};
use crate::params::ParamKey;

/// Minimum users per segment.
///
/// A deliberate policy to avoid degenerate zero-revenue segments at low
/// marketing spend, not a rounding artifact.
pub const MIN_SEGMENT_USERS: f64 = 10.0;

/// Fallback NPV before any revenue projection has been computed (cold start)
pub const COLD_START_NPV: f64 = 2_100_000_000.0;

/// Terminal growth rate for the revenue-stream NPV
const NPV_TERMINAL_GROWTH: f64 = 0.03;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Segment {
    Freelancer,
    Healthcare,
    Enterprise,
    Government,
}

impl Segment {
    pub const ALL: [Segment; 4] = [
        Segment::Freelancer,
        Segment::Healthcare,
        Segment::Enterprise,
        Segment::Government,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Segment::Freelancer => "Freelancer",
            Segment::Healthcare => "Healthcare",
            Segment::Enterprise => "Enterprise",
            Segment::Government => "Government",
        }
    }

    /// Position in [`Segment::ALL`]; also the index into price arrays
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Segment::Freelancer => 0,
            Segment::Healthcare => 1,
            Segment::Enterprise => 2,
            Segment::Government => 3,
        }
    }

    /// Share of marketing spend routed to this segment
    #[must_use]
    pub const fn share_of_spend(self) -> f64 {
        match self {
            Segment::Freelancer => 0.60,
            Segment::Healthcare => 0.25,
            Segment::Enterprise => 0.12,
            Segment::Government => 0.03,
        }
    }

    /// Cost to acquire one customer in this segment, in dollars
    #[must_use]
    pub const fn acquisition_cost(self) -> f64 {
        match self {
            Segment::Freelancer => 150.0,
            Segment::Healthcare => 300.0,
            Segment::Enterprise => 800.0,
            Segment::Government => 2000.0,
        }
    }

    /// Base of the growth multiplier, before conversion sensitivity
    #[must_use]
    pub const fn base_growth(self) -> f64 {
        match self {
            Segment::Freelancer => 2.8,
            Segment::Healthcare => 3.2,
            Segment::Enterprise => 4.1,
            Segment::Government => 5.8,
        }
    }

    /// How strongly the conversion rate scales this segment's growth
    #[must_use]
    pub const fn conversion_sensitivity(self) -> f64 {
        match self {
            Segment::Freelancer => 10.0,
            Segment::Healthcare => 8.0,
            Segment::Enterprise => 12.0,
            Segment::Government => 15.0,
        }
    }

    /// The parameter holding this segment's monthly price
    #[must_use]
    pub const fn price_key(self) -> ParamKey {
        match self {
            Segment::Freelancer => ParamKey::FreelancerPrice,
            Segment::Healthcare => ParamKey::HealthcarePrice,
            Segment::Enterprise => ParamKey::EnterprisePrice,
            Segment::Government => ParamKey::GovernmentPrice,
        }
    }
}

/// Projected users and revenue for one segment at the three horizons
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentRevenue {
    pub segment: Segment,
    pub price: f64,
    pub year1_users: f64,
    pub year3_users: f64,
    pub year5_users: f64,
    pub year1_revenue: f64,
    pub year3_revenue: f64,
    pub year5_revenue: f64,
}

/// Full projection across all four segments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueProjection {
    /// All four segments, in fixed order
    pub segments: Vec<SegmentRevenue>,
    pub year1_revenue: f64,
    pub year3_revenue: f64,
    pub year5_revenue: f64,
    /// Compound annual growth rate over the 1-to-5-year span, as a fraction
    pub cagr: f64,
}

/// Project per-segment users and revenue.
///
/// `conversion_rate` is a fraction (0.05 = 5%); `prices` are monthly prices
/// in [`Segment::ALL`] order. Growth compounds by squared and quadrupled
/// exponents tied to the 1/3/5-year horizons, not annual compounding.
pub fn project_revenue(
    marketing_spend: f64,
    conversion_rate: f64,
    prices: [f64; 4],
) -> Result<RevenueProjection> {
    if marketing_spend < 0.0 {
        return Err(ConfigError::NegativeUsage {
            what: "marketing spend",
            value: marketing_spend,
        });
    }
    if conversion_rate < 0.0 {
        return Err(ConfigError::NegativeUsage {
            what: "conversion rate",
            value: conversion_rate,
        });
    }

    let mut segments = Vec::with_capacity(Segment::ALL.len());
    let mut year1_revenue = 0.0;
    let mut year3_revenue = 0.0;
    let mut year5_revenue = 0.0;

    for (segment, price) in Segment::ALL.into_iter().zip(prices) {
        let acquired = (marketing_spend * conversion_rate * segment.share_of_spend()
            / segment.acquisition_cost())
        .floor();
        let year1_users = acquired.max(MIN_SEGMENT_USERS);

        let growth = segment.base_growth() + conversion_rate * segment.conversion_sensitivity();
        let year3_users = year1_users * growth.powi(2);
        let year5_users = year1_users * growth.powi(4);

        // Monthly price annualized
        let seg = SegmentRevenue {
            segment,
            price,
            year1_users,
            year3_users,
            year5_users,
            year1_revenue: year1_users * price * 12.0,
            year3_revenue: year3_users * price * 12.0,
            year5_revenue: year5_users * price * 12.0,
        };

        year1_revenue += seg.year1_revenue;
        year3_revenue += seg.year3_revenue;
        year5_revenue += seg.year5_revenue;
        segments.push(seg);
    }

    let cagr = ensure_finite(
        (year5_revenue / year1_revenue).powf(0.25) - 1.0,
        "revenue CAGR",
    )?;

    Ok(RevenueProjection {
        segments,
        year1_revenue,
        year3_revenue,
        year5_revenue,
        cagr,
    })
}

/// NPV of the projected revenue stream.
///
/// Builds a five-point series by interpolating between the 1/3/5-year totals
/// (year 2 = year 1 x 1.8, year 4 = year 3 x 2.1 — fixed factors, not a
/// curve fit), applies a linearly growing EBITDA margin and a 0.75 FCF
/// conversion, discounts each year, and adds a terminal value.
///
/// `discount_rate` is a fraction. With no projection yet, returns the fixed
/// cold-start value — an explicit policy, not an error.
pub fn derive_npv(projection: Option<&RevenueProjection>, discount_rate: f64) -> Result<f64> {
    let Some(projection) = projection else {
        return Ok(COLD_START_NPV);
    };

    if discount_rate <= NPV_TERMINAL_GROWTH {
        return Err(ConfigError::DiscountNotAboveTerminalGrowth {
            discount: discount_rate,
            terminal_growth: NPV_TERMINAL_GROWTH,
        });
    }

    let revenues = [
        projection.year1_revenue,
        projection.year1_revenue * 1.8,
        projection.year3_revenue,
        projection.year3_revenue * 2.1,
        projection.year5_revenue,
    ];

    let mut npv = 0.0;
    for (index, revenue) in revenues.iter().enumerate() {
        let year = index as i32 + 1;
        let ebitda = revenue * (0.3 + year as f64 * 0.08);
        let fcf = ebitda * 0.75;
        npv += fcf / (1.0 + discount_rate).powi(year);
    }

    let terminal_fcf = revenues[4] * 0.65 * (1.0 + NPV_TERMINAL_GROWTH);
    let terminal_value = terminal_fcf / (discount_rate - NPV_TERMINAL_GROWTH);
    let terminal_pv = terminal_value / (1.0 + discount_rate).powi(5);

    ensure_finite(npv + terminal_pv, "revenue-stream NPV")
}
