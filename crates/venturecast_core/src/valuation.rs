//! Startup valuation methods
//!
//! Four independent heuristics, each a pure function over the parameter
//! store, averaged into a single estimate. The aggregator retains the latest
//! value for every method, so the average never depends on which method was
//! recomputed last.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::params::{ParamKey, ParameterStore};

/// Base valuation for the scorecard method (comparable companies)
pub const SCORECARD_BASE_VALUATION: f64 = 35_000_000.0;
/// Base valuation for the risk-factor method
pub const RISK_FACTOR_BASE_VALUATION: f64 = 40_000_000.0;

/// Scorecard factor weights; fixed and summing to 1.0
const SCORECARD_FACTORS: [(ParamKey, f64); 6] = [
    (ParamKey::ScorecardManagement, 0.30),
    (ParamKey::ScorecardMarket, 0.25),
    (ParamKey::ScorecardProduct, 0.15),
    (ParamKey::ScorecardCompetition, 0.10),
    (ParamKey::ScorecardMarketing, 0.10),
    (ParamKey::ScorecardFinancials, 0.10),
];

const BERKUS_FACTORS: [ParamKey; 5] = [
    ParamKey::BerkusIdea,
    ParamKey::BerkusPrototype,
    ParamKey::BerkusManagement,
    ParamKey::BerkusRelationships,
    ParamKey::BerkusSales,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValuationMethod {
    Berkus,
    Scorecard,
    RiskFactor,
    CostToDuplicate,
}

impl ValuationMethod {
    pub const ALL: [ValuationMethod; 4] = [
        ValuationMethod::Berkus,
        ValuationMethod::Scorecard,
        ValuationMethod::RiskFactor,
        ValuationMethod::CostToDuplicate,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ValuationMethod::Berkus => "Berkus",
            ValuationMethod::Scorecard => "Scorecard",
            ValuationMethod::RiskFactor => "Risk Factor",
            ValuationMethod::CostToDuplicate => "Cost to Duplicate",
        }
    }

    const fn index(self) -> usize {
        match self {
            ValuationMethod::Berkus => 0,
            ValuationMethod::Scorecard => 1,
            ValuationMethod::RiskFactor => 2,
            ValuationMethod::CostToDuplicate => 3,
        }
    }
}

impl fmt::Display for ValuationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One method's latest output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationEstimate {
    pub method: ValuationMethod,
    pub amount: f64,
}

/// Sum of the five capped factor values, each entered directly in dollars
#[must_use]
pub fn berkus_valuation(store: &ParameterStore) -> f64 {
    BERKUS_FACTORS.iter().map(|&key| store.get(key)).sum()
}

/// Base valuation scaled by the weighted sum of factor multipliers
#[must_use]
pub fn scorecard_valuation(store: &ParameterStore) -> f64 {
    let weighted: f64 = SCORECARD_FACTORS
        .iter()
        .map(|&(key, weight)| store.get(key) * weight)
        .sum();
    SCORECARD_BASE_VALUATION * weighted
}

/// Base valuation plus additive risk deltas (deltas may be negative)
#[must_use]
pub fn risk_factor_valuation(store: &ParameterStore) -> f64 {
    RISK_FACTOR_BASE_VALUATION
        + store.get(ParamKey::RiskManagement)
        + store.get(ParamKey::RiskStage)
}

/// Development cost times the market premium multiplier
#[must_use]
pub fn cost_to_duplicate_valuation(store: &ParameterStore) -> f64 {
    store.get(ParamKey::DevCost) * store.get(ParamKey::MarketPremium)
}

/// Latest estimate per method, plus the derived average.
///
/// All four estimates are always present; `average` is computed from them on
/// demand and never stored independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationSet {
    amounts: [f64; 4],
}

impl ValuationSet {
    /// Run all four methods over the store
    #[must_use]
    pub fn compute(store: &ParameterStore) -> Self {
        let mut amounts = [0.0; 4];
        amounts[ValuationMethod::Berkus.index()] = berkus_valuation(store);
        amounts[ValuationMethod::Scorecard.index()] = scorecard_valuation(store);
        amounts[ValuationMethod::RiskFactor.index()] = risk_factor_valuation(store);
        amounts[ValuationMethod::CostToDuplicate.index()] = cost_to_duplicate_valuation(store);
        Self { amounts }
    }

    #[must_use]
    pub fn amount(&self, method: ValuationMethod) -> f64 {
        self.amounts[method.index()]
    }

    /// Arithmetic mean of the four stored estimates
    #[must_use]
    pub fn average(&self) -> f64 {
        self.amounts.iter().sum::<f64>() / self.amounts.len() as f64
    }

    /// Estimates in fixed method order
    #[must_use]
    pub fn estimates(&self) -> [ValuationEstimate; 4] {
        ValuationMethod::ALL.map(|method| ValuationEstimate {
            method,
            amount: self.amount(method),
        })
    }
}
