//! CSV intake for case and agency exports.

mod normalizer;
mod parser;

use crate::workflows::collections::{
    AgencyRecord, AllocationRun, CaseRecord, CollectionsEngine, CollectionsError,
};
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug)]
pub enum IntakeError {
    Io(std::io::Error),
    Csv(csv::Error),
    Collections(CollectionsError),
}

impl std::fmt::Display for IntakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntakeError::Io(err) => write!(f, "failed to read collections export: {}", err),
            IntakeError::Csv(err) => write!(f, "invalid collections CSV data: {}", err),
            IntakeError::Collections(err) => {
                write!(f, "could not allocate imported records: {}", err)
            }
        }
    }
}

impl std::error::Error for IntakeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IntakeError::Io(err) => Some(err),
            IntakeError::Csv(err) => Some(err),
            IntakeError::Collections(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for IntakeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for IntakeError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<CollectionsError> for IntakeError {
    fn from(err: CollectionsError) -> Self {
        Self::Collections(err)
    }
}

/// Reads `case_id,invoice_amount,days_overdue` and
/// `dca_name,recovery_rate,sla_adherence` exports into raw records.
pub struct CsvIntake;

impl CsvIntake {
    pub fn cases_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<CaseRecord>, IntakeError> {
        let file = std::fs::File::open(path)?;
        Self::cases_from_reader(file)
    }

    pub fn cases_from_reader<R: Read>(reader: R) -> Result<Vec<CaseRecord>, IntakeError> {
        Ok(parser::parse_cases(reader)?)
    }

    pub fn agencies_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<AgencyRecord>, IntakeError> {
        let file = std::fs::File::open(path)?;
        Self::agencies_from_reader(file)
    }

    pub fn agencies_from_reader<R: Read>(reader: R) -> Result<Vec<AgencyRecord>, IntakeError> {
        Ok(parser::parse_agencies(reader)?)
    }

    /// Load both exports and run them through the engine.
    pub fn run_from_paths<C: AsRef<Path>, A: AsRef<Path>>(
        engine: &CollectionsEngine,
        cases_path: C,
        agencies_path: A,
    ) -> Result<AllocationRun, IntakeError> {
        let cases = Self::cases_from_path(cases_path.as_ref())?;
        let agencies = Self::agencies_from_path(agencies_path.as_ref())?;
        info!(
            cases = cases.len(),
            agencies = agencies.len(),
            cases_path = %cases_path.as_ref().display(),
            "loaded collections exports"
        );
        Ok(engine.run(cases, agencies)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::collections::demo;
    use std::io::Cursor;

    #[test]
    fn parses_demo_exports() {
        let cases = CsvIntake::cases_from_reader(demo::CASES_CSV.as_bytes()).expect("cases parse");
        let agencies =
            CsvIntake::agencies_from_reader(demo::AGENCIES_CSV.as_bytes()).expect("agencies parse");

        assert_eq!(cases, demo::cases());
        assert_eq!(agencies, demo::agencies());
    }

    #[test]
    fn blank_cells_become_missing_fields() {
        let cases = CsvIntake::cases_from_reader(Cursor::new(
            "case_id,invoice_amount,days_overdue\n  ,1200, \n",
        ))
        .expect("parse");

        assert_eq!(cases.len(), 1);
        assert!(cases[0].case_id.is_none());
        assert_eq!(cases[0].invoice_amount, Some(1200.0));
        assert!(cases[0].days_overdue.is_none());
    }

    #[test]
    fn missing_column_becomes_missing_field() {
        let agencies = CsvIntake::agencies_from_reader(Cursor::new(
            "dca_name,recovery_rate\nAlpha,0.9\n",
        ))
        .expect("parse");

        assert_eq!(agencies[0].name.as_deref(), Some("Alpha"));
        assert!(agencies[0].sla_adherence.is_none());
    }

    #[test]
    fn non_numeric_cells_are_csv_errors() {
        let error = CsvIntake::cases_from_reader(Cursor::new(
            "case_id,invoice_amount,days_overdue\nC1,lots,3\n",
        ))
        .expect_err("expected csv error");

        assert!(matches!(error, IntakeError::Csv(_)));
    }

    #[test]
    fn identifiers_are_normalized() {
        assert_eq!(
            normalizer::normalize_identifier("\u{feff}Beta   Recoveries "),
            "Beta Recoveries"
        );
    }

    #[test]
    fn missing_files_surface_io_errors() {
        let error = CsvIntake::cases_from_path("./does-not-exist.csv").expect_err("io error");
        match error {
            IntakeError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
