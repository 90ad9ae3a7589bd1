//! Scenario table
//!
//! Three fixed optimism levels, each a tuple of multipliers applied across
//! the models. The table is immutable configuration data; exactly one
//! scenario is active at a time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Named optimism level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioKind {
    Conservative,
    Realistic,
    Optimistic,
}

/// Multipliers for one scenario row. Rates are fractions (0.12 = 12%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub growth_rate: f64,
    pub discount_rate: f64,
    pub churn_rate: f64,
    pub conversion_rate: f64,
    pub revenue_multiplier: f64,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 3] = [
        ScenarioKind::Conservative,
        ScenarioKind::Realistic,
        ScenarioKind::Optimistic,
    ];

    /// The fixed multiplier row for this scenario
    #[must_use]
    pub const fn scenario(self) -> Scenario {
        match self {
            ScenarioKind::Conservative => Scenario {
                growth_rate: 0.02,
                discount_rate: 0.15,
                churn_rate: 0.05,
                conversion_rate: 0.02,
                revenue_multiplier: 0.7,
            },
            ScenarioKind::Realistic => Scenario {
                growth_rate: 0.03,
                discount_rate: 0.12,
                churn_rate: 0.03,
                conversion_rate: 0.05,
                revenue_multiplier: 1.0,
            },
            ScenarioKind::Optimistic => Scenario {
                growth_rate: 0.04,
                discount_rate: 0.10,
                churn_rate: 0.02,
                conversion_rate: 0.08,
                revenue_multiplier: 1.3,
            },
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ScenarioKind::Conservative => "conservative",
            ScenarioKind::Realistic => "realistic",
            ScenarioKind::Optimistic => "optimistic",
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScenarioKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "conservative" => Ok(ScenarioKind::Conservative),
            "realistic" => Ok(ScenarioKind::Realistic),
            "optimistic" => Ok(ScenarioKind::Optimistic),
            other => Err(ConfigError::UnknownScenario(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_values() {
        let realistic = ScenarioKind::Realistic.scenario();
        assert_eq!(realistic.revenue_multiplier, 1.0);
        assert_eq!(realistic.discount_rate, 0.12);

        let conservative = ScenarioKind::Conservative.scenario();
        assert_eq!(conservative.revenue_multiplier, 0.7);

        let optimistic = ScenarioKind::Optimistic.scenario();
        assert_eq!(optimistic.revenue_multiplier, 1.3);
        assert_eq!(optimistic.churn_rate, 0.02);
    }

    #[test]
    fn test_parse_round_trips() {
        for kind in ScenarioKind::ALL {
            assert_eq!(kind.label().parse::<ScenarioKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_name_is_config_error() {
        let err = "euphoric".parse::<ScenarioKind>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownScenario("euphoric".to_string()));
    }
}
