//! Discounted cash flow engine
//!
//! Projects the fixed reference revenue base forward, derives EBITDA, free
//! cash flow, and present value per year, and adds a perpetuity-growth
//! terminal value. Also hosts the headline financial metrics derived from a
//! DCF result: NPV against the initial investment, the closed-form IRR
//! approximation, WACC, and the payback period.
//!
//! Everything here is a pure function of its inputs and the reference
//! projection; calling twice with identical inputs returns identical results.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result, ensure_finite};
use crate::scenario::Scenario;

/// Fixed five-year reference revenue projection, in dollars.
///
/// Not user-editable; scenarios scale it through `revenue_multiplier`.
/// Horizons beyond five years reuse the final entry.
pub const REFERENCE_REVENUES: [f64; 5] = [
    2_100_000.0,
    15_800_000.0,
    85_400_000.0,
    285_600_000.0,
    723_400_000.0,
];

/// EBITDA as a fraction of revenue for a given year index (1-based).
/// Linear in the year, applied independently each year.
const fn ebitda_margin(year: u32) -> f64 {
    0.4 + year as f64 * 0.05
}

/// Free cash flow as a fraction of EBITDA
const FCF_CONVERSION: f64 = 0.8;

/// One projected year of the DCF table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlowYear {
    pub year: u32,
    pub revenue: f64,
    pub ebitda: f64,
    pub free_cash_flow: f64,
    pub pv_factor: f64,
    pub present_value: f64,
}

/// Complete DCF output. `equity_value` always equals `enterprise_value`
/// (zero-debt assumption) — an invariant, not an approximation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DcfResult {
    /// Per-year cash flows, ordered by year ascending
    pub cash_flows: Vec<CashFlowYear>,
    pub total_pv: f64,
    pub terminal_value: f64,
    pub terminal_pv: f64,
    pub enterprise_value: f64,
    pub equity_value: f64,
}

/// Compute the DCF valuation.
///
/// `discount_rate_pct` and `terminal_growth_pct` are whole percentage points
/// (12 means 12%). The scenario contributes only its revenue multiplier.
///
/// Errors when `discount <= terminal growth` (the terminal-value perpetuity
/// is undefined) or when the horizon is zero years. Never clamps.
pub fn compute_dcf(
    years: u32,
    discount_rate_pct: f64,
    terminal_growth_pct: f64,
    scenario: &Scenario,
) -> Result<DcfResult> {
    if years == 0 {
        return Err(ConfigError::ZeroProjectionYears);
    }

    let discount_rate = discount_rate_pct / 100.0;
    let terminal_growth = terminal_growth_pct / 100.0;
    if discount_rate <= terminal_growth {
        return Err(ConfigError::DiscountNotAboveTerminalGrowth {
            discount: discount_rate,
            terminal_growth,
        });
    }

    let mut cash_flows = Vec::with_capacity(years as usize);
    let mut total_pv = 0.0;

    for year in 1..=years {
        let base = REFERENCE_REVENUES[(year as usize - 1).min(REFERENCE_REVENUES.len() - 1)];
        let revenue = base * scenario.revenue_multiplier;
        let ebitda = revenue * ebitda_margin(year);
        let free_cash_flow = ebitda * FCF_CONVERSION;

        let pv_factor = 1.0 / (1.0 + discount_rate).powi(year as i32);
        let present_value = free_cash_flow * pv_factor;

        cash_flows.push(CashFlowYear {
            year,
            revenue,
            ebitda,
            free_cash_flow,
            pv_factor,
            present_value,
        });

        total_pv += present_value;
    }

    // Grow the final year's FCF one more period, capitalize as a perpetuity,
    // and discount back over the explicit horizon.
    let final_fcf = cash_flows[cash_flows.len() - 1].free_cash_flow;
    let terminal_cash_flow = final_fcf * (1.0 + terminal_growth);
    let terminal_value = terminal_cash_flow / (discount_rate - terminal_growth);
    let terminal_pv = terminal_value / (1.0 + discount_rate).powi(years as i32);

    let enterprise_value = ensure_finite(total_pv + terminal_pv, "enterprise value")?;

    Ok(DcfResult {
        cash_flows,
        total_pv,
        terminal_value,
        terminal_pv,
        enterprise_value,
        equity_value: enterprise_value,
    })
}

// ============================================================================
// Derived financial metrics
// ============================================================================

/// Fixed monthly revenue assumption for the payback calculation
pub const PAYBACK_MONTHLY_REVENUE: f64 = 60_283_333.0;
/// Fixed monthly operating expense assumption for the payback calculation
pub const PAYBACK_MONTHLY_EXPENSES: f64 = 35_000_000.0;

/// WACC component defaults (all-equity capital structure)
pub const DEFAULT_EQUITY_RATIO: f64 = 1.0;
pub const DEFAULT_DEBT_RATIO: f64 = 0.0;
pub const DEFAULT_COST_OF_EQUITY: f64 = 0.12;
pub const DEFAULT_COST_OF_DEBT: f64 = 0.06;
pub const DEFAULT_TAX_RATE: f64 = 0.25;

/// Headline metrics computed from a DCF result and the initial investment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialMetrics {
    /// Equity value minus the initial investment
    pub npv: f64,
    /// Closed-form IRR approximation, as a fraction
    pub irr: f64,
    /// Months to recover the initial investment from monthly profit
    pub payback_months: f64,
    /// Weighted average cost of capital, as a fraction
    pub wacc: f64,
}

/// NPV relative to the money put in
#[must_use]
pub fn npv_against_investment(dcf: &DcfResult, initial_investment: f64) -> f64 {
    dcf.equity_value - initial_investment
}

/// CAGR-style IRR approximation: `(final/initial)^(1/years) - 1`.
///
/// Deliberately NOT a root-find over the cash-flow series; downstream
/// figures are calibrated to this closed form.
pub fn irr_approximation(initial_investment: f64, final_value: f64, years: u32) -> Result<f64> {
    if initial_investment <= 0.0 {
        return Err(ConfigError::NonPositiveInvestment {
            amount: initial_investment,
        });
    }
    if years == 0 {
        return Err(ConfigError::ZeroProjectionYears);
    }
    ensure_finite(
        (final_value / initial_investment).powf(1.0 / years as f64) - 1.0,
        "IRR approximation",
    )
}

/// Weighted average cost of capital
#[must_use]
pub fn wacc(
    equity_ratio: f64,
    debt_ratio: f64,
    cost_of_equity: f64,
    cost_of_debt: f64,
    tax_rate: f64,
) -> f64 {
    equity_ratio * cost_of_equity + debt_ratio * cost_of_debt * (1.0 - tax_rate)
}

/// Months until cumulative monthly profit covers the initial investment.
///
/// Errors when monthly profit is not positive; payback would never occur.
pub fn payback_period_months(
    initial_investment: f64,
    monthly_revenue: f64,
    monthly_expenses: f64,
) -> Result<f64> {
    if initial_investment <= 0.0 {
        return Err(ConfigError::NonPositiveInvestment {
            amount: initial_investment,
        });
    }
    let monthly_profit = monthly_revenue - monthly_expenses;
    if monthly_profit <= 0.0 {
        return Err(ConfigError::NonPositiveMonthlyProfit {
            profit: monthly_profit,
        });
    }
    Ok(initial_investment / monthly_profit)
}

/// Bundle the headline metrics for a DCF result
pub fn financial_metrics(
    dcf: &DcfResult,
    initial_investment: f64,
    years: u32,
) -> Result<FinancialMetrics> {
    Ok(FinancialMetrics {
        npv: npv_against_investment(dcf, initial_investment),
        irr: irr_approximation(initial_investment, dcf.equity_value, years)?,
        payback_months: payback_period_months(
            initial_investment,
            PAYBACK_MONTHLY_REVENUE,
            PAYBACK_MONTHLY_EXPENSES,
        )?,
        wacc: wacc(
            DEFAULT_EQUITY_RATIO,
            DEFAULT_DEBT_RATIO,
            DEFAULT_COST_OF_EQUITY,
            DEFAULT_COST_OF_DEBT,
            DEFAULT_TAX_RATE,
        ),
    })
}
