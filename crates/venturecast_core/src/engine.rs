//! Recomputation coordinator
//!
//! The [`Engine`] owns the parameter store, the active scenario, and the
//! latest derived result of every model. A parameter mutation looks the key
//! up in a static parameter-to-model dependency map, synchronously re-runs
//! only the affected models (each recomputation is total for its model,
//! never partial), and then notifies registered sinks.
//!
//! Execution is single-threaded and has no suspension points, so mutations
//! never observe a half-finished recomputation. A model error leaves both
//! the parameter and every derived value as they were.

use serde::Serialize;

use crate::dcf::{self, DcfResult, FinancialMetrics};
use crate::error::Result;
use crate::funding::{self, Allocation, AllocationCategory, RoundMetrics};
use crate::infra::{self, AiHosting, CloudProvider, InfraCosts};
use crate::params::{ParamKey, ParameterStore};
use crate::revenue::{self, RevenueProjection, Segment};
use crate::scenario::ScenarioKind;
use crate::valuation::{ValuationEstimate, ValuationSet};

/// The recomputable models, in recomputation order.
///
/// Metrics reads the DCF result, so it always comes after Dcf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Model {
    Dcf,
    Metrics,
    Valuation,
    Revenue,
    Infrastructure,
    Funding,
}

impl Model {
    pub const ALL: [Model; 6] = [
        Model::Dcf,
        Model::Metrics,
        Model::Valuation,
        Model::Revenue,
        Model::Infrastructure,
        Model::Funding,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Model::Dcf => "DCF",
            Model::Metrics => "financial metrics",
            Model::Valuation => "valuation",
            Model::Revenue => "revenue projection",
            Model::Infrastructure => "infrastructure costs",
            Model::Funding => "funding allocation",
        }
    }
}

/// Static parameter-to-model membership.
///
/// Dependency is declared here, not traced dynamically; the coordinator
/// re-runs exactly these models when the key changes.
#[must_use]
pub fn dependents(key: ParamKey) -> &'static [Model] {
    match key {
        ParamKey::DcfDiscountRate | ParamKey::DcfTerminalGrowth | ParamKey::ProjectionYears => {
            &[Model::Dcf, Model::Metrics]
        }
        ParamKey::InitialInvestment => &[Model::Metrics],

        ParamKey::DiscountRate | ParamKey::MarketingSpend | ParamKey::ConversionRate => {
            &[Model::Revenue]
        }
        ParamKey::FreelancerPrice
        | ParamKey::HealthcarePrice
        | ParamKey::EnterprisePrice
        | ParamKey::GovernmentPrice => &[Model::Revenue],

        ParamKey::BerkusIdea
        | ParamKey::BerkusPrototype
        | ParamKey::BerkusManagement
        | ParamKey::BerkusRelationships
        | ParamKey::BerkusSales
        | ParamKey::ScorecardManagement
        | ParamKey::ScorecardMarket
        | ParamKey::ScorecardProduct
        | ParamKey::ScorecardCompetition
        | ParamKey::ScorecardMarketing
        | ParamKey::ScorecardFinancials
        | ParamKey::RiskManagement
        | ParamKey::RiskStage
        | ParamKey::DevCost
        | ParamKey::MarketPremium => &[Model::Valuation],

        ParamKey::FundingAmount
        | ParamKey::ProductAllocation
        | ParamKey::MarketingAllocation
        | ParamKey::OperationsAllocation
        | ParamKey::WorkingCapitalAllocation => &[Model::Funding],

        ParamKey::MonthlyUsers | ParamKey::RequestsPerUser => &[Model::Infrastructure],
    }
}

/// Which models were freshly recomputed
#[derive(Debug, Clone, PartialEq)]
pub struct EngineUpdate {
    pub changed: Vec<Model>,
}

/// Output sink notified after every successful recomputation.
///
/// Sinks receive which models changed and read the fresh results back
/// through the engine's getters; the engine never reads sink state.
pub trait ResultSink {
    fn results_updated(&mut self, update: &EngineUpdate);
}

/// Revenue projection plus the NPV derived from its stream
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueOutputs {
    pub projection: RevenueProjection,
    pub npv: f64,
}

/// Funding allocation plus round metrics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundingOutputs {
    pub allocations: [Allocation; 4],
    pub round: RoundMetrics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EngineState {
    Idle,
    Recomputing,
}

/// The calculation engine and its latest derived results
pub struct Engine {
    params: ParameterStore,
    scenario: ScenarioKind,
    provider: CloudProvider,
    hosting: AiHosting,
    state: EngineState,

    dcf: DcfResult,
    metrics: FinancialMetrics,
    valuations: ValuationSet,
    revenue: RevenueOutputs,
    infra: InfraCosts,
    funding: FundingOutputs,

    sinks: Vec<Box<dyn ResultSink>>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("scenario", &self.scenario)
            .field("provider", &self.provider)
            .field("hosting", &self.hosting)
            .field("state", &self.state)
            .field("sinks", &self.sinks.len())
            .finish_non_exhaustive()
    }
}

impl Engine {
    /// Build an engine with default parameters and the realistic scenario.
    ///
    /// Defaults are valid, so this only fails if the default tables are
    /// inconsistent.
    pub fn new() -> Result<Self> {
        Self::with_scenario(ScenarioKind::Realistic)
    }

    pub fn with_scenario(scenario: ScenarioKind) -> Result<Self> {
        let params = ParameterStore::new();
        let provider = CloudProvider::Aws;
        let hosting = AiHosting::CloudApi;

        let dcf = compute_dcf_model(&params, scenario)?;
        let metrics = compute_metrics_model(&params, &dcf)?;
        let valuations = ValuationSet::compute(&params);
        let revenue = compute_revenue_model(&params)?;
        let infra = compute_infra_model(&params, provider, hosting)?;
        let funding = compute_funding_model(&params)?;

        Ok(Self {
            params,
            scenario,
            provider,
            hosting,
            state: EngineState::Idle,
            dcf,
            metrics,
            valuations,
            revenue,
            infra,
            funding,
            sinks: Vec::new(),
        })
    }

    /// Register an output sink
    pub fn add_sink(&mut self, sink: Box<dyn ResultSink>) {
        self.sinks.push(sink);
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Set a parameter and re-run the models that depend on it.
    ///
    /// On error the override is rolled back, keeping the store consistent
    /// with the derived values.
    pub fn set_parameter(&mut self, key: ParamKey, value: f64) -> Result<()> {
        let previous = self.params.set(key, value);
        let affected = dependents(key);
        match self.recompute(affected) {
            Ok(()) => {
                self.notify(affected);
                Ok(())
            }
            Err(err) => {
                self.params.set(key, previous);
                Err(err)
            }
        }
    }

    /// Apply several overrides at once, then recompute every model.
    ///
    /// Related parameters (both DCF rates, several allocation percentages)
    /// often only make sense together; applying them one at a time could
    /// fail transiently depending on order. On error every override is
    /// rolled back.
    pub fn apply_overrides<I>(&mut self, overrides: I) -> Result<()>
    where
        I: IntoIterator<Item = (ParamKey, f64)>,
    {
        let mut previous: Vec<(ParamKey, f64)> = Vec::new();
        for (key, value) in overrides {
            previous.push((key, self.params.set(key, value)));
        }
        match self.recompute(&Model::ALL) {
            Ok(()) => {
                self.notify(&Model::ALL);
                Ok(())
            }
            Err(err) => {
                for (key, value) in previous.into_iter().rev() {
                    self.params.set(key, value);
                }
                Err(err)
            }
        }
    }

    /// Switch the active scenario; everything scenario-scaled recomputes.
    pub fn select_scenario(&mut self, kind: ScenarioKind) -> Result<()> {
        const AFFECTED: &[Model] = &[Model::Dcf, Model::Metrics];
        let previous = std::mem::replace(&mut self.scenario, kind);
        match self.recompute(AFFECTED) {
            Ok(()) => {
                self.notify(AFFECTED);
                Ok(())
            }
            Err(err) => {
                self.scenario = previous;
                Err(err)
            }
        }
    }

    /// Switch the cloud provider
    pub fn select_provider(&mut self, provider: CloudProvider) -> Result<()> {
        const AFFECTED: &[Model] = &[Model::Infrastructure];
        let previous = std::mem::replace(&mut self.provider, provider);
        match self.recompute(AFFECTED) {
            Ok(()) => {
                self.notify(AFFECTED);
                Ok(())
            }
            Err(err) => {
                self.provider = previous;
                Err(err)
            }
        }
    }

    /// Switch the AI hosting mode
    pub fn select_hosting(&mut self, hosting: AiHosting) -> Result<()> {
        const AFFECTED: &[Model] = &[Model::Infrastructure];
        let previous = std::mem::replace(&mut self.hosting, hosting);
        match self.recompute(AFFECTED) {
            Ok(()) => {
                self.notify(AFFECTED);
                Ok(())
            }
            Err(err) => {
                self.hosting = previous;
                Err(err)
            }
        }
    }

    // ========================================================================
    // Read-only access
    // ========================================================================

    #[must_use]
    pub fn params(&self) -> &ParameterStore {
        &self.params
    }

    #[must_use]
    pub fn scenario(&self) -> ScenarioKind {
        self.scenario
    }

    #[must_use]
    pub fn provider(&self) -> CloudProvider {
        self.provider
    }

    #[must_use]
    pub fn hosting(&self) -> AiHosting {
        self.hosting
    }

    #[must_use]
    pub fn dcf_result(&self) -> &DcfResult {
        &self.dcf
    }

    #[must_use]
    pub fn financial_metrics(&self) -> FinancialMetrics {
        self.metrics
    }

    #[must_use]
    pub fn valuation_estimates(&self) -> &ValuationSet {
        &self.valuations
    }

    #[must_use]
    pub fn revenue_projection(&self) -> &RevenueProjection {
        &self.revenue.projection
    }

    /// NPV derived from the projected revenue stream
    #[must_use]
    pub fn revenue_npv(&self) -> f64 {
        self.revenue.npv
    }

    #[must_use]
    pub fn infrastructure_costs(&self) -> InfraCosts {
        self.infra
    }

    #[must_use]
    pub fn funding_allocation(&self) -> &[Allocation; 4] {
        &self.funding.allocations
    }

    #[must_use]
    pub fn funding_round(&self) -> RoundMetrics {
        self.funding.round
    }

    /// Current monthly prices in [`Segment::ALL`] order
    #[must_use]
    pub fn segment_prices(&self) -> [f64; 4] {
        segment_prices(&self.params)
    }

    /// Serializable copy of every derived result
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            scenario: self.scenario,
            provider: self.provider,
            hosting: self.hosting,
            dcf: self.dcf.clone(),
            metrics: self.metrics,
            valuations: self.valuations.estimates().to_vec(),
            average_valuation: self.valuations.average(),
            revenue: self.revenue.projection.clone(),
            revenue_npv: self.revenue.npv,
            infrastructure: self.infra,
            allocations: self.funding.allocations.to_vec(),
            round: self.funding.round,
        }
    }

    // ========================================================================
    // Recomputation
    // ========================================================================

    /// Re-run the given models in declaration order, committing all results
    /// only when every one of them succeeds.
    fn recompute(&mut self, models: &[Model]) -> Result<()> {
        debug_assert_eq!(self.state, EngineState::Idle, "recomputation re-entered");
        self.state = EngineState::Recomputing;
        let outcome = self.recompute_inner(models);
        self.state = EngineState::Idle;
        outcome
    }

    fn recompute_inner(&mut self, models: &[Model]) -> Result<()> {
        let mut dcf = None;
        let mut metrics = None;
        let mut valuations = None;
        let mut revenue = None;
        let mut infra = None;
        let mut funding = None;

        for model in Model::ALL.into_iter().filter(|m| models.contains(m)) {
            match model {
                Model::Dcf => dcf = Some(compute_dcf_model(&self.params, self.scenario)?),
                Model::Metrics => {
                    let current = dcf.as_ref().unwrap_or(&self.dcf);
                    metrics = Some(compute_metrics_model(&self.params, current)?);
                }
                Model::Valuation => valuations = Some(ValuationSet::compute(&self.params)),
                Model::Revenue => revenue = Some(compute_revenue_model(&self.params)?),
                Model::Infrastructure => {
                    infra = Some(compute_infra_model(&self.params, self.provider, self.hosting)?);
                }
                Model::Funding => funding = Some(compute_funding_model(&self.params)?),
            }
        }

        if let Some(v) = dcf {
            self.dcf = v;
        }
        if let Some(v) = metrics {
            self.metrics = v;
        }
        if let Some(v) = valuations {
            self.valuations = v;
        }
        if let Some(v) = revenue {
            self.revenue = v;
        }
        if let Some(v) = infra {
            self.infra = v;
        }
        if let Some(v) = funding {
            self.funding = v;
        }
        Ok(())
    }

    fn notify(&mut self, models: &[Model]) {
        if self.sinks.is_empty() {
            return;
        }
        let update = EngineUpdate {
            changed: models.to_vec(),
        };
        for sink in &mut self.sinks {
            sink.results_updated(&update);
        }
    }
}

/// Serializable view of every derived result
#[derive(Debug, Clone, Serialize)]
pub struct EngineSnapshot {
    pub scenario: ScenarioKind,
    pub provider: CloudProvider,
    pub hosting: AiHosting,
    pub dcf: DcfResult,
    pub metrics: FinancialMetrics,
    pub valuations: Vec<ValuationEstimate>,
    pub average_valuation: f64,
    pub revenue: RevenueProjection,
    pub revenue_npv: f64,
    pub infrastructure: InfraCosts,
    pub allocations: Vec<Allocation>,
    pub round: RoundMetrics,
}

// ============================================================================
// Model drivers (pure over the store and selections)
// ============================================================================

fn segment_prices(params: &ParameterStore) -> [f64; 4] {
    Segment::ALL.map(|segment| params.get(segment.price_key()))
}

fn projection_years(params: &ParameterStore) -> u32 {
    let years = params.get(ParamKey::ProjectionYears);
    if years.is_sign_negative() { 0 } else { years as u32 }
}

fn compute_dcf_model(params: &ParameterStore, scenario: ScenarioKind) -> Result<DcfResult> {
    dcf::compute_dcf(
        projection_years(params),
        params.get(ParamKey::DcfDiscountRate),
        params.get(ParamKey::DcfTerminalGrowth),
        &scenario.scenario(),
    )
}

fn compute_metrics_model(params: &ParameterStore, dcf: &DcfResult) -> Result<FinancialMetrics> {
    dcf::financial_metrics(
        dcf,
        params.get(ParamKey::InitialInvestment),
        projection_years(params),
    )
}

fn compute_revenue_model(params: &ParameterStore) -> Result<RevenueOutputs> {
    let projection = revenue::project_revenue(
        params.get(ParamKey::MarketingSpend),
        params.get_fraction(ParamKey::ConversionRate),
        segment_prices(params),
    )?;
    let npv = revenue::derive_npv(
        Some(&projection),
        params.get_fraction(ParamKey::DiscountRate),
    )?;
    Ok(RevenueOutputs { projection, npv })
}

fn compute_infra_model(
    params: &ParameterStore,
    provider: CloudProvider,
    hosting: AiHosting,
) -> Result<InfraCosts> {
    infra::estimate_costs(
        provider,
        hosting,
        params.get(ParamKey::MonthlyUsers),
        params.get(ParamKey::RequestsPerUser),
    )
}

fn compute_funding_model(params: &ParameterStore) -> Result<FundingOutputs> {
    let raw = AllocationCategory::ALL.map(|category| params.get(category.param_key()));
    let allocations = funding::allocate(params.get(ParamKey::FundingAmount), raw)?;
    let round = funding::round_metrics(params.get(ParamKey::FundingAmount));
    Ok(FundingOutputs { allocations, round })
}
