//! The aggregated surveillance view.
//!
//! One row per retained report (left-join semantics): the report's own
//! columns, followed by its drug columns and reaction terms rendered as
//! ordered `|`-joined lists. Reports with no drugs or reactions keep
//! their row with empty list cells.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use faers_model::CuratedTables;

use crate::csv_out::{REPORTS_HEADER, opt_cell, report_fields};

/// Separator for list cells. Drug names may contain commas and spaces
/// but never a pipe in practice.
const LIST_SEPARATOR: &str = "|";

const AGGREGATE_GROUP_HEADER: &[&str] = &[
    "drug_role",
    "drug_name_original",
    "rxcui",
    "ingredient_rxcui",
    "ingredient_name",
    "brand_name",
    "reaction_term_text",
];

fn join_list(values: &[String]) -> String {
    values.join(LIST_SEPARATOR)
}

/// Write `Safety_surveillance.csv`; returns the row count, which always
/// equals the number of retained reports.
pub fn write_aggregate(path: &Path, tables: &CuratedTables) -> Result<usize> {
    // Group child rows by report id, preserving source order within each
    // group.
    let mut drug_groups: HashMap<&str, Vec<&faers_model::CanonicalDrugEntry>> = HashMap::new();
    for drug in &tables.drugs {
        drug_groups
            .entry(drug.safetyreportid.as_str())
            .or_default()
            .push(drug);
    }
    let mut reaction_groups: HashMap<&str, Vec<&str>> = HashMap::new();
    for reaction in &tables.reactions {
        reaction_groups
            .entry(reaction.safetyreportid.as_str())
            .or_default()
            .push(reaction.reaction_term_text.as_str());
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create output table {}", path.display()))?;
    let header: Vec<&str> = REPORTS_HEADER
        .iter()
        .chain(AGGREGATE_GROUP_HEADER.iter())
        .copied()
        .collect();
    writer.write_record(&header)?;

    for report in &tables.reports {
        let mut fields = report_fields(report);
        let drugs = drug_groups
            .get(report.safetyreportid.as_str())
            .map(Vec::as_slice)
            .unwrap_or_default();
        let columns: [Vec<String>; 6] = [
            drugs.iter().map(|d| d.drug_role.to_string()).collect(),
            drugs.iter().map(|d| d.drug_name_original.clone()).collect(),
            drugs.iter().map(|d| opt_cell(d.rxcui.as_deref())).collect(),
            drugs
                .iter()
                .map(|d| opt_cell(d.ingredient_rxcui.as_deref()))
                .collect(),
            drugs
                .iter()
                .map(|d| opt_cell(d.ingredient_name.as_deref()))
                .collect(),
            drugs
                .iter()
                .map(|d| opt_cell(d.brand_name.as_deref()))
                .collect(),
        ];
        for column in &columns {
            fields.push(join_list(column));
        }
        let reactions = reaction_groups
            .get(report.safetyreportid.as_str())
            .map(Vec::as_slice)
            .unwrap_or_default();
        fields.push(reactions.join(LIST_SEPARATOR));
        writer.write_record(&fields)?;
    }
    writer.flush()?;
    Ok(tables.reports.len())
}
