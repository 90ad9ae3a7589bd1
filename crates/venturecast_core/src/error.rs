use std::fmt;

/// Errors for input combinations that make a formula undefined.
///
/// These are surfaced to the caller instead of being clamped or allowed to
/// propagate as NaN/Infinity into display values. An *absent* parameter is
/// never an error; every key carries a documented default.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The perpetuity terminal-value formula divides by
    /// `discount - terminal_growth`; it is undefined when that is <= 0.
    DiscountNotAboveTerminalGrowth { discount: f64, terminal_growth: f64 },
    /// A projection over zero years has no cash flows to discount.
    ZeroProjectionYears,
    /// Allocation percentages cannot be normalized when their sum is <= 0.
    AllocationSumNotPositive { sum: f64 },
    /// A single allocation percentage below zero.
    NegativeAllocation { category: &'static str, percent: f64 },
    UnknownScenario(String),
    UnknownProvider(String),
    UnknownHosting(String),
    /// IRR and payback are meaningless for a non-positive investment.
    NonPositiveInvestment { amount: f64 },
    /// Payback never occurs when monthly profit is <= 0.
    NonPositiveMonthlyProfit { profit: f64 },
    /// A usage quantity (user counts, request rates, workload sizes) below zero.
    NegativeUsage { what: &'static str, value: f64 },
    /// A computation produced a non-finite value that no other variant caught.
    NonFinite { context: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::DiscountNotAboveTerminalGrowth {
                discount,
                terminal_growth,
            } => {
                write!(
                    f,
                    "discount rate {discount} must exceed terminal growth rate {terminal_growth}"
                )
            }
            ConfigError::ZeroProjectionYears => {
                write!(f, "projection horizon must cover at least one year")
            }
            ConfigError::AllocationSumNotPositive { sum } => {
                write!(f, "allocation percentages sum to {sum}, cannot normalize")
            }
            ConfigError::NegativeAllocation { category, percent } => {
                write!(f, "{category} allocation {percent}% is negative")
            }
            ConfigError::UnknownScenario(name) => write!(f, "unknown scenario {name:?}"),
            ConfigError::UnknownProvider(name) => write!(f, "unknown cloud provider {name:?}"),
            ConfigError::UnknownHosting(name) => write!(f, "unknown AI hosting mode {name:?}"),
            ConfigError::NonPositiveInvestment { amount } => {
                write!(f, "initial investment {amount} must be positive")
            }
            ConfigError::NonPositiveMonthlyProfit { profit } => {
                write!(f, "monthly profit {profit} must be positive to reach payback")
            }
            ConfigError::NegativeUsage { what, value } => {
                write!(f, "{what} {value} is negative")
            }
            ConfigError::NonFinite { context } => {
                write!(f, "{context} produced a non-finite value")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Reject non-finite values at the model boundary.
pub fn ensure_finite(value: f64, context: &'static str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFinite { context })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite(1.5, "x"), Ok(1.5));
        assert_eq!(
            ensure_finite(f64::NAN, "npv"),
            Err(ConfigError::NonFinite { context: "npv" })
        );
        assert_eq!(
            ensure_finite(f64::INFINITY, "npv"),
            Err(ConfigError::NonFinite { context: "npv" })
        );
    }

    #[test]
    fn test_display_messages() {
        let err = ConfigError::DiscountNotAboveTerminalGrowth {
            discount: 0.03,
            terminal_growth: 0.03,
        };
        assert!(err.to_string().contains("must exceed"));

        let err = ConfigError::UnknownScenario("wild".to_string());
        assert!(err.to_string().contains("wild"));
    }
}
