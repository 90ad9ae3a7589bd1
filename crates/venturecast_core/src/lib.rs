//! Startup financial calculation engine
//!
//! This crate turns a small set of adjustable business parameters into a
//! consistent set of derived financial outputs:
//! - DCF valuation with scenario-scaled revenue and a perpetuity terminal value
//! - NPV, closed-form IRR approximation, WACC, and payback period
//! - Four startup-valuation heuristics (Berkus, Scorecard, Risk-Factor,
//!   Cost-to-Duplicate) and their average
//! - Per-segment revenue projections over 1/3/5-year horizons
//! - Infrastructure cost estimates per cloud provider and AI hosting mode
//! - Funding allocation and round metrics
//!
//! Every model is a pure function over in-memory numbers; the
//! [`engine::Engine`] coordinates recomputation, re-running only the models
//! that depend on a changed parameter and notifying registered sinks.
//!
//! ```
//! use venturecast_core::engine::Engine;
//! use venturecast_core::params::ParamKey;
//! use venturecast_core::scenario::ScenarioKind;
//!
//! let mut engine = Engine::new()?;
//! engine.select_scenario(ScenarioKind::Optimistic)?;
//! engine.set_parameter(ParamKey::MarketingSpend, 250_000.0)?;
//!
//! let dcf = engine.dcf_result();
//! assert_eq!(dcf.equity_value, dcf.enterprise_value);
//! # Ok::<(), venturecast_core::error::ConfigError>(())
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod dcf;
pub mod engine;
pub mod error;
pub mod funding;
pub mod infra;
pub mod revenue;
pub mod usage;
pub mod valuation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod params;
pub mod scenario;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use dcf::{CashFlowYear, DcfResult, FinancialMetrics, compute_dcf};
pub use engine::{Engine, EngineSnapshot, EngineUpdate, Model, ResultSink};
pub use error::{ConfigError, Result};
pub use funding::{Allocation, AllocationCategory, RoundMetrics, allocate, round_metrics};
pub use infra::{AiHosting, CloudProvider, InfraCosts, estimate_costs};
pub use params::{ParamKey, ParameterStore, Unit};
pub use revenue::{RevenueProjection, Segment, SegmentRevenue, derive_npv, project_revenue};
pub use scenario::{Scenario, ScenarioKind};
pub use usage::{TierRecommendation, UsageWorkload, recommend_tier};
pub use valuation::{ValuationEstimate, ValuationMethod, ValuationSet};
