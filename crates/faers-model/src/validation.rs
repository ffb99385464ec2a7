//! Validation outcome types for raw report screening.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a raw record was excluded from curation.
///
/// The `as_str` codes are stable: they appear in the QA summary's
/// rejection histogram and downstream consumers key on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RejectReason {
    NotAnObject,
    MissingSafetyReportId,
    InvalidPatient,
    NoDrugNoReaction,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::NotAnObject => "not_a_object",
            RejectReason::MissingSafetyReportId => "missing_safetyreportid",
            RejectReason::InvalidPatient => "invalid_patient",
            RejectReason::NoDrugNoReaction => "no_drug_no_reaction",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one raw record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted,
    Rejected(RejectReason),
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted)
    }
}
