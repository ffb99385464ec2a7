//! CSV emission for the three curated tables.
//!
//! Rendering is deterministic: options render as empty cells, floats use
//! the shortest round-trip representation, booleans render lowercase.

use std::path::Path;

use anyhow::{Context, Result};
use faers_model::{CanonicalDrugEntry, CanonicalReactionEntry, CanonicalReport};

pub const REPORTS_HEADER: &[&str] = &[
    "safetyreportid",
    "received_date",
    "event_date",
    "patient_age_years",
    "age_unit_raw",
    "patient_sex",
    "reporter_type",
    "reporter_type_raw",
    "country",
    "country_raw",
    "death",
    "hospitalization",
    "life_threatening",
    "disability",
    "congenital_anomaly",
    "intervention",
    "other",
];

pub const DRUGS_HEADER: &[&str] = &[
    "safetyreportid",
    "drug_role",
    "drug_name_original",
    "rxcui",
    "ingredient_rxcui",
    "ingredient_name",
    "brand_name",
];

pub const REACTIONS_HEADER: &[&str] = &["safetyreportid", "reaction_term_text"];

pub(crate) fn opt_cell(value: Option<&str>) -> String {
    value.unwrap_or("").to_string()
}

pub(crate) fn age_cell(value: Option<f64>) -> String {
    value.map_or_else(String::new, |v| format!("{v}"))
}

pub(crate) fn bool_cell(value: bool) -> String {
    value.to_string()
}

pub(crate) fn report_fields(row: &CanonicalReport) -> Vec<String> {
    vec![
        row.safetyreportid.clone(),
        opt_cell(row.received_date.as_deref()),
        opt_cell(row.event_date.as_deref()),
        age_cell(row.patient_age_years),
        row.age_unit_raw.clone(),
        row.patient_sex.to_string(),
        row.reporter_type.to_string(),
        row.reporter_type_raw.clone(),
        row.country.clone(),
        row.country_raw.clone(),
        bool_cell(row.death),
        bool_cell(row.hospitalization),
        bool_cell(row.life_threatening),
        bool_cell(row.disability),
        bool_cell(row.congenital_anomaly),
        bool_cell(row.intervention),
        bool_cell(row.other),
    ]
}

fn drug_fields(row: &CanonicalDrugEntry) -> Vec<String> {
    vec![
        row.safetyreportid.clone(),
        row.drug_role.to_string(),
        row.drug_name_original.clone(),
        opt_cell(row.rxcui.as_deref()),
        opt_cell(row.ingredient_rxcui.as_deref()),
        opt_cell(row.ingredient_name.as_deref()),
        opt_cell(row.brand_name.as_deref()),
    ]
}

fn write_table<R>(
    path: &Path,
    header: &[&str],
    rows: &[R],
    to_fields: impl Fn(&R) -> Vec<String>,
) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create output table {}", path.display()))?;
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(to_fields(row))?;
    }
    writer.flush()?;
    Ok(rows.len())
}

pub fn write_reports(path: &Path, rows: &[CanonicalReport]) -> Result<usize> {
    write_table(path, REPORTS_HEADER, rows, report_fields)
}

pub fn write_drugs(path: &Path, rows: &[CanonicalDrugEntry]) -> Result<usize> {
    write_table(path, DRUGS_HEADER, rows, drug_fields)
}

pub fn write_reactions(path: &Path, rows: &[CanonicalReactionEntry]) -> Result<usize> {
    write_table(path, REACTIONS_HEADER, rows, |row| {
        vec![row.safetyreportid.clone(), row.reaction_term_text.clone()]
    })
}
