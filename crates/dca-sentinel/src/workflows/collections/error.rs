use std::fmt;

/// Which kind of input record an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Case,
    Agency,
}

impl RecordKind {
    pub const fn label(self) -> &'static str {
        match self {
            RecordKind::Case => "case",
            RecordKind::Agency => "agency",
        }
    }
}

/// Location of a failing record: its kind and 1-based position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRef {
    pub kind: RecordKind,
    pub position: usize,
}

impl RecordRef {
    pub fn case(position: usize) -> Self {
        Self {
            kind: RecordKind::Case,
            position,
        }
    }

    pub fn agency(position: usize) -> Self {
        Self {
            kind: RecordKind::Agency,
            position,
        }
    }
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} record #{}", self.kind.label(), self.position)
    }
}

/// Malformed or missing input data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{record} is missing required field `{field}`")]
    MissingField {
        record: RecordRef,
        field: &'static str,
    },
    #[error("{record} reuses case id `{case_id}`")]
    DuplicateCase { record: RecordRef, case_id: String },
}

/// Numeric input outside its expected domain.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{record} field `{field}` = {value} is outside {expected}")]
pub struct RangeError {
    pub record: RecordRef,
    pub field: &'static str,
    pub value: f64,
    pub expected: &'static str,
}

/// Inconsistent agency roster or allocation parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("at least one agency is required")]
    NoAgencies,
    #[error("agency `{0}` is configured more than once")]
    DuplicateAgency(String),
    #[error("agency `{0}` collides with the fallback bucket name")]
    ReservedAgencyName(String),
    #[error("fallback bucket name must not be blank")]
    EmptyFallbackBucket,
    #[error("trust weights must be non-negative and sum to 1.0 (recovery_rate {recovery_rate}, sla_adherence {sla_adherence})")]
    TrustWeights {
        recovery_rate: f64,
        sla_adherence: f64,
    },
    #[error("tier thresholds must descend within (0, 100] (premier {premier}, trusted {trusted}, monitored {monitored})")]
    TierThresholds {
        premier: f64,
        trusted: f64,
        monitored: f64,
    },
    #[error("invalid recovery model: {0}")]
    RecoveryModel(&'static str),
    #[error("SLA warning threshold {warning} exceeds critical threshold {critical}")]
    SlaPolicy { warning: u32, critical: u32 },
}

/// Error raised by an allocation run. No partial result accompanies it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CollectionsError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("range error: {0}")]
    Range(#[from] RangeError),
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}
