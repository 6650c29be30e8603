use super::normalizer::normalize_identifier;
use crate::workflows::collections::{AgencyRecord, CaseRecord};
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_cases<R: Read>(reader: R) -> Result<Vec<CaseRecord>, csv::Error> {
    let mut csv_reader = reader_builder().from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<CaseRow>() {
        let row = row?;
        records.push(CaseRecord {
            case_id: row.case_id.as_deref().map(normalize_identifier),
            invoice_amount: row.invoice_amount,
            days_overdue: row.days_overdue,
        });
    }

    Ok(records)
}

pub(crate) fn parse_agencies<R: Read>(reader: R) -> Result<Vec<AgencyRecord>, csv::Error> {
    let mut csv_reader = reader_builder().from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<AgencyRow>() {
        let row = row?;
        records.push(AgencyRecord {
            name: row.name.as_deref().map(normalize_identifier),
            recovery_rate: row.recovery_rate,
            sla_adherence: row.sla_adherence,
        });
    }

    Ok(records)
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.trim(csv::Trim::All);
    builder
}

#[derive(Debug, Deserialize)]
struct CaseRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    case_id: Option<String>,
    #[serde(default, alias = "amount")]
    invoice_amount: Option<f64>,
    #[serde(default)]
    days_overdue: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct AgencyRow {
    #[serde(
        rename = "dca_name",
        alias = "name",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    name: Option<String>,
    #[serde(default)]
    recovery_rate: Option<f64>,
    #[serde(default)]
    sla_adherence: Option<f64>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
