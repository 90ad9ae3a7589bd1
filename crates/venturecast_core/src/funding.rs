//! Funding allocation and round metrics
//!
//! Normalizes the four use-of-funds percentages to exactly 100% and splits
//! the funding amount accordingly; also computes post-money and equity
//! figures for the round.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::params::ParamKey;

/// Fixed pre-money valuation anchoring the round metrics
pub const PRE_MONEY_VALUATION: f64 = 40_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AllocationCategory {
    Product,
    Marketing,
    Operations,
    WorkingCapital,
}

impl AllocationCategory {
    pub const ALL: [AllocationCategory; 4] = [
        AllocationCategory::Product,
        AllocationCategory::Marketing,
        AllocationCategory::Operations,
        AllocationCategory::WorkingCapital,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AllocationCategory::Product => "Product",
            AllocationCategory::Marketing => "Marketing",
            AllocationCategory::Operations => "Operations",
            AllocationCategory::WorkingCapital => "Working Capital",
        }
    }

    /// The parameter holding this category's raw percentage
    #[must_use]
    pub const fn param_key(self) -> ParamKey {
        match self {
            AllocationCategory::Product => ParamKey::ProductAllocation,
            AllocationCategory::Marketing => ParamKey::MarketingAllocation,
            AllocationCategory::Operations => ParamKey::OperationsAllocation,
            AllocationCategory::WorkingCapital => ParamKey::WorkingCapitalAllocation,
        }
    }
}

impl fmt::Display for AllocationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One category's slice of the round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub category: AllocationCategory,
    /// Percentage as entered, before normalization
    pub raw_percent: f64,
    /// Percentage after normalizing the four to sum to 100
    pub normalized_percent: f64,
    /// Dollars of the funding amount
    pub amount: f64,
}

/// Normalize raw percentages to 100% and split the funding amount.
///
/// `raw_percents` are in [`AllocationCategory::ALL`] order. A raw sum of
/// zero (or below) is a configuration error — normalization would divide by
/// zero — as is any single negative percentage.
pub fn allocate(funding_amount: f64, raw_percents: [f64; 4]) -> Result<[Allocation; 4]> {
    for (category, percent) in AllocationCategory::ALL.into_iter().zip(raw_percents) {
        if percent < 0.0 {
            return Err(ConfigError::NegativeAllocation {
                category: category.label(),
                percent,
            });
        }
    }

    let sum: f64 = raw_percents.iter().sum();
    if sum <= 0.0 {
        return Err(ConfigError::AllocationSumNotPositive { sum });
    }

    Ok(std::array::from_fn(|i| {
        let raw_percent = raw_percents[i];
        let normalized_percent = raw_percent / sum * 100.0;
        Allocation {
            category: AllocationCategory::ALL[i],
            raw_percent,
            normalized_percent,
            amount: funding_amount * normalized_percent / 100.0,
        }
    }))
}

/// Post-money and dilution figures for the round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundMetrics {
    pub pre_money: f64,
    pub post_money: f64,
    /// Investor equity as a whole percentage (20 = 20%)
    pub equity_percent: f64,
}

/// Round metrics against the fixed pre-money valuation
#[must_use]
pub fn round_metrics(funding_amount: f64) -> RoundMetrics {
    let post_money = PRE_MONEY_VALUATION + funding_amount;
    RoundMetrics {
        pre_money: PRE_MONEY_VALUATION,
        post_money,
        equity_percent: funding_amount / post_money * 100.0,
    }
}
