//! Canonical row types for the curated tables.

use serde::{Deserialize, Serialize};

use crate::enums::{DrugRole, ReporterType, Sex};

/// One row per unique `safetyreportid` surviving dedup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalReport {
    pub safetyreportid: String,
    /// ISO partial-precision date (`YYYY-MM-DD`, `YYYY-MM`, or `YYYY`).
    pub received_date: Option<String>,
    pub event_date: Option<String>,
    pub patient_age_years: Option<f64>,
    pub age_unit_raw: String,
    pub patient_sex: Sex,
    pub reporter_type: ReporterType,
    pub reporter_type_raw: String,
    pub country: String,
    pub country_raw: String,
    pub death: bool,
    pub hospitalization: bool,
    pub life_threatening: bool,
    pub disability: bool,
    pub congenital_anomaly: bool,
    pub intervention: bool,
    pub other: bool,
}

/// One row per drug entry inside a retained report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalDrugEntry {
    pub safetyreportid: String,
    pub drug_role: DrugRole,
    pub drug_name_original: String,
    pub rxcui: Option<String>,
    pub ingredient_rxcui: Option<String>,
    pub ingredient_name: Option<String>,
    /// Reserved column; no brand resolution is performed yet.
    pub brand_name: Option<String>,
}

/// One row per reaction term inside a retained report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalReactionEntry {
    pub safetyreportid: String,
    pub reaction_term_text: String,
}

/// The three curated row-sets, in emission order.
#[derive(Debug, Clone, Default)]
pub struct CuratedTables {
    pub reports: Vec<CanonicalReport>,
    pub drugs: Vec<CanonicalDrugEntry>,
    pub reactions: Vec<CanonicalReactionEntry>,
}
