//! Debt-collection case allocation: agency trust scoring, governance tiers,
//! recovery prediction, and the greedy case-to-agency matcher.
//!
//! Everything here is a pure, single-pass computation over in-memory records.
//! Inputs arrive as loosely-typed [`CaseRecord`]/[`AgencyRecord`] values, are
//! validated by the [`CollectionsGuard`], and flow through the [`Allocator`].

mod allocator;
pub mod config;
pub mod demo;
pub mod domain;
pub mod error;
mod governance;
mod guard;
mod recovery;
pub mod report;
pub mod router;
mod sla;
mod trust;

#[cfg(test)]
mod tests;

pub use allocator::Allocator;
pub use config::{
    AllocationConfig, RecoveryModel, RestrictionPolicy, SlaPolicy, TierThresholds, TrustWeights,
    DEFAULT_FALLBACK_BUCKET,
};
pub use domain::{
    AgencyBucket, AgencyRecord, AllocationResult, Assignment, Case, CaseId, CaseRecord,
    FallbackBucket, ScoredAgency,
};
pub use error::{
    CollectionsError, ConfigurationError, RangeError, RecordKind, RecordRef, ValidationError,
};
pub use governance::{GovernanceClassifier, GovernanceTier};
pub use guard::CollectionsGuard;
pub use recovery::RecoveryPredictor;
pub use router::collections_router;
pub use sla::{check_sla, SlaAlert, SlaSeverity};
pub use trust::{TrustScorer, MAX_TRUST_SCORE};

use tracing::debug;

pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Allocate already-validated cases across scored agencies.
pub fn allocate(
    cases: &[Case],
    agencies: &[ScoredAgency],
    config: &AllocationConfig,
) -> AllocationResult {
    Allocator::new(config).allocate(cases, agencies)
}

/// Validated inputs together with everything derived from them in one run.
#[derive(Debug, Clone)]
pub struct AllocationRun {
    pub cases: Vec<Case>,
    pub agencies: Vec<ScoredAgency>,
    pub allocation: AllocationResult,
    pub alerts: Vec<SlaAlert>,
}

/// Stateless pipeline applying one configuration to raw case and agency records.
#[derive(Debug, Clone)]
pub struct CollectionsEngine {
    config: AllocationConfig,
    guard: CollectionsGuard,
    allocator: Allocator,
}

impl CollectionsEngine {
    pub fn new(config: AllocationConfig) -> Result<Self, CollectionsError> {
        config.validate()?;
        let guard = CollectionsGuard::from_config(&config);
        let allocator = Allocator::new(&config);

        Ok(Self {
            config,
            guard,
            allocator,
        })
    }

    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    /// Validate both record sets, then allocate. Any bad record fails the whole
    /// run; there is no partial result.
    pub fn run(
        &self,
        cases: Vec<CaseRecord>,
        agencies: Vec<AgencyRecord>,
    ) -> Result<AllocationRun, CollectionsError> {
        let agencies = self.guard.agencies(agencies)?;
        let cases = self.guard.cases(cases)?;

        for agency in &agencies {
            debug!(
                agency = %agency.name,
                trust_score = agency.trust_score,
                tier = agency.tier.label(),
                "scored agency"
            );
        }

        let allocation = self.allocator.allocate(&cases, &agencies);
        let alerts = check_sla(&cases, &self.config.sla);

        Ok(AllocationRun {
            cases,
            agencies,
            allocation,
            alerts,
        })
    }
}

impl Default for CollectionsEngine {
    fn default() -> Self {
        let config = AllocationConfig::default();
        Self {
            guard: CollectionsGuard::from_config(&config),
            allocator: Allocator::new(&config),
            config,
        }
    }
}
