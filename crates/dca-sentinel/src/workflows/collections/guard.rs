use std::collections::HashSet;

use super::config::AllocationConfig;
use super::domain::{AgencyRecord, Case, CaseId, CaseRecord, ScoredAgency};
use super::error::{CollectionsError, ConfigurationError, RangeError, RecordRef, ValidationError};
use super::governance::GovernanceClassifier;
use super::trust::TrustScorer;

/// Guard turning loosely-typed input records into validated, scored records.
///
/// Every check fails fast: the first bad record aborts the whole run.
#[derive(Debug, Clone)]
pub struct CollectionsGuard {
    scorer: TrustScorer,
    classifier: GovernanceClassifier,
    fallback_bucket: String,
}

impl Default for CollectionsGuard {
    fn default() -> Self {
        Self::from_config(&AllocationConfig::default())
    }
}

impl CollectionsGuard {
    pub fn from_config(config: &AllocationConfig) -> Self {
        Self {
            scorer: TrustScorer::new(config.trust),
            classifier: GovernanceClassifier::new(config.tiers),
            fallback_bucket: config.fallback_bucket.clone(),
        }
    }

    pub fn cases(&self, records: Vec<CaseRecord>) -> Result<Vec<Case>, CollectionsError> {
        let mut seen = HashSet::new();
        let mut cases = Vec::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            let at = RecordRef::case(index + 1);
            let id = required_text(record.case_id, &at, "case_id")?;
            let amount = required(record.invoice_amount, &at, "invoice_amount")?;
            let days_overdue = required(record.days_overdue, &at, "days_overdue")?;

            if !amount.is_finite() || amount <= 0.0 {
                return Err(RangeError {
                    record: at,
                    field: "invoice_amount",
                    value: amount,
                    expected: "a positive finite amount",
                }
                .into());
            }

            let days_overdue = u32::try_from(days_overdue).map_err(|_| RangeError {
                record: at.clone(),
                field: "days_overdue",
                value: days_overdue as f64,
                expected: "0..=4294967295 days",
            })?;

            if !seen.insert(id.clone()) {
                return Err(ValidationError::DuplicateCase {
                    record: at,
                    case_id: id,
                }
                .into());
            }

            cases.push(Case {
                id: CaseId(id),
                amount,
                days_overdue,
            });
        }

        Ok(cases)
    }

    pub fn agencies(
        &self,
        records: Vec<AgencyRecord>,
    ) -> Result<Vec<ScoredAgency>, CollectionsError> {
        if records.is_empty() {
            return Err(ConfigurationError::NoAgencies.into());
        }

        let mut seen = HashSet::new();
        let mut agencies = Vec::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            let at = RecordRef::agency(index + 1);
            let name = required_text(record.name, &at, "name")?;
            let recovery_rate = unit_rate(record.recovery_rate, &at, "recovery_rate")?;
            let sla_adherence = unit_rate(record.sla_adherence, &at, "sla_adherence")?;

            if name == self.fallback_bucket {
                return Err(ConfigurationError::ReservedAgencyName(name).into());
            }
            if !seen.insert(name.clone()) {
                return Err(ConfigurationError::DuplicateAgency(name).into());
            }

            let trust_score = self.scorer.score(recovery_rate, sla_adherence);
            agencies.push(ScoredAgency {
                name,
                recovery_rate,
                sla_adherence,
                trust_score,
                tier: self.classifier.classify(trust_score),
            });
        }

        Ok(agencies)
    }
}

fn required<T>(
    value: Option<T>,
    at: &RecordRef,
    field: &'static str,
) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::MissingField {
        record: at.clone(),
        field,
    })
}

fn required_text(
    value: Option<String>,
    at: &RecordRef,
    field: &'static str,
) -> Result<String, ValidationError> {
    let value = value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty());
    required(value, at, field)
}

fn unit_rate(
    value: Option<f64>,
    at: &RecordRef,
    field: &'static str,
) -> Result<f64, CollectionsError> {
    let rate = required(value, at, field)?;
    if !(0.0..=1.0).contains(&rate) {
        return Err(RangeError {
            record: at.clone(),
            field,
            value: rate,
            expected: "[0, 1]",
        }
        .into());
    }
    Ok(rate)
}
