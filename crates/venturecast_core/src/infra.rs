//! Infrastructure cost model
//!
//! Scales a per-provider base cost vector by user count (square-root
//! scaling) and request volume, with categorical adjustments for where the
//! AI workload is hosted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Reference user count at which the base cost vector applies unscaled
const SCALE_REFERENCE_USERS: f64 = 10_000.0;
/// Reference requests-per-user at which request-sensitive costs apply unscaled
const SCALE_REFERENCE_REQUESTS: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CloudProvider {
    Aws,
    Gcp,
    Azure,
    OnPremise,
    HomeServer,
}

/// Monthly base costs per category, in dollars, at the reference scale
#[derive(Debug, Clone, Copy, PartialEq)]
struct BaseCosts {
    compute: f64,
    ai: f64,
    storage: f64,
    bandwidth: f64,
}

impl CloudProvider {
    pub const ALL: [CloudProvider; 5] = [
        CloudProvider::Aws,
        CloudProvider::Gcp,
        CloudProvider::Azure,
        CloudProvider::OnPremise,
        CloudProvider::HomeServer,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CloudProvider::Aws => "AWS",
            CloudProvider::Gcp => "GCP",
            CloudProvider::Azure => "Azure",
            CloudProvider::OnPremise => "On-premise",
            CloudProvider::HomeServer => "Home server",
        }
    }

    const fn base_costs(self) -> BaseCosts {
        match self {
            CloudProvider::Aws => BaseCosts {
                compute: 8500.0,
                ai: 12000.0,
                storage: 1200.0,
                bandwidth: 800.0,
            },
            CloudProvider::Gcp => BaseCosts {
                compute: 7800.0,
                ai: 11000.0,
                storage: 1100.0,
                bandwidth: 700.0,
            },
            CloudProvider::Azure => BaseCosts {
                compute: 8200.0,
                ai: 11500.0,
                storage: 1150.0,
                bandwidth: 750.0,
            },
            CloudProvider::OnPremise => BaseCosts {
                compute: 15000.0,
                ai: 5000.0,
                storage: 2000.0,
                bandwidth: 500.0,
            },
            CloudProvider::HomeServer => BaseCosts {
                compute: 3000.0,
                ai: 8000.0,
                storage: 500.0,
                bandwidth: 200.0,
            },
        }
    }
}

impl fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CloudProvider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "aws" => Ok(CloudProvider::Aws),
            "gcp" => Ok(CloudProvider::Gcp),
            "azure" => Ok(CloudProvider::Azure),
            "on-premise" => Ok(CloudProvider::OnPremise),
            "home-server" => Ok(CloudProvider::HomeServer),
            other => Err(ConfigError::UnknownProvider(other.to_string())),
        }
    }
}

/// Where the AI inference workload runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AiHosting {
    /// Foundation-model API; no adjustment (the default)
    CloudApi,
    /// Own models: lower API spend, much higher compute
    SelfHosted,
    /// Mix of both
    Hybrid,
}

impl AiHosting {
    pub const ALL: [AiHosting; 3] = [AiHosting::CloudApi, AiHosting::SelfHosted, AiHosting::Hybrid];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AiHosting::CloudApi => "cloud API",
            AiHosting::SelfHosted => "self-hosted",
            AiHosting::Hybrid => "hybrid",
        }
    }

    /// Multiplicative adjustments as (ai, compute)
    const fn adjustments(self) -> (f64, f64) {
        match self {
            AiHosting::CloudApi => (1.0, 1.0),
            AiHosting::SelfHosted => (0.3, 1.8),
            AiHosting::Hybrid => (0.7, 1.3),
        }
    }
}

impl fmt::Display for AiHosting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AiHosting {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cloud-api" | "foundation" => Ok(AiHosting::CloudApi),
            "self-hosted" => Ok(AiHosting::SelfHosted),
            "hybrid" => Ok(AiHosting::Hybrid),
            other => Err(ConfigError::UnknownHosting(other.to_string())),
        }
    }
}

/// Monthly infrastructure costs by category, in dollars
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InfraCosts {
    pub compute: f64,
    pub ai: f64,
    pub storage: f64,
    pub bandwidth: f64,
    pub total: f64,
}

/// Estimate monthly infrastructure costs.
///
/// Compute and storage scale with the square root of the user count; AI and
/// bandwidth additionally scale linearly with requests per user. The result
/// is monotonically non-decreasing in `monthly_users`.
pub fn estimate_costs(
    provider: CloudProvider,
    hosting: AiHosting,
    monthly_users: f64,
    requests_per_user: f64,
) -> Result<InfraCosts> {
    if monthly_users < 0.0 {
        return Err(ConfigError::NegativeUsage {
            what: "monthly users",
            value: monthly_users,
        });
    }
    if requests_per_user < 0.0 {
        return Err(ConfigError::NegativeUsage {
            what: "requests per user",
            value: requests_per_user,
        });
    }

    let base = provider.base_costs();
    let scale_factor = (monthly_users / SCALE_REFERENCE_USERS).sqrt();
    let request_factor = requests_per_user / SCALE_REFERENCE_REQUESTS;

    let (ai_adjust, compute_adjust) = hosting.adjustments();

    let compute = base.compute * scale_factor * compute_adjust;
    let ai = base.ai * scale_factor * request_factor * ai_adjust;
    let storage = base.storage * scale_factor;
    let bandwidth = base.bandwidth * scale_factor * request_factor;

    Ok(InfraCosts {
        compute,
        ai,
        storage,
        bandwidth,
        total: compute + ai + storage + bandwidth,
    })
}
