//! Type-safe enumerations for curated FAERS fields.
//!
//! Raw FAERS records encode these concepts as loosely-structured strings
//! or numeric codes; the curated tables carry them as closed enums and
//! render them with their canonical submission strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Standardized patient sex.
///
/// `U` covers every value that is not recognizably female or male,
/// including missing values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Female,
    Male,
    Unknown,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Female => "F",
            Sex::Male => "M",
            Sex::Unknown => "U",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Standardized reporter qualification.
///
/// Lawyers report on behalf of patients and are folded into `Consumer`,
/// matching the source classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReporterType {
    Physician,
    Pharmacist,
    Consumer,
    Other,
}

impl ReporterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReporterType::Physician => "PHYSICIAN",
            ReporterType::Pharmacist => "PHARMACIST",
            ReporterType::Consumer => "CONSUMER",
            ReporterType::Other => "OTHER",
        }
    }
}

impl fmt::Display for ReporterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Standardized drug role within a report.
///
/// FAERS `drugcharacterization` codes: 1 = primary suspect,
/// 2 = secondary suspect, everything else is concomitant/associated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrugRole {
    Primary,
    Secondary,
    Associated,
}

impl DrugRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrugRole::Primary => "PRIMARY",
            DrugRole::Secondary => "SECONDARY",
            DrugRole::Associated => "ASSOCIATED",
        }
    }
}

impl fmt::Display for DrugRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
