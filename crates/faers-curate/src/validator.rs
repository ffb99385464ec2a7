//! Raw record screening.

use faers_model::raw;
use faers_model::{RejectReason, ValidationOutcome};
use serde_json::Value;

/// Classify one raw record. Rules apply in order, first match wins; the
/// function is total over arbitrary JSON shapes.
pub fn validate(record: &Value) -> ValidationOutcome {
    if !record.is_object() {
        return ValidationOutcome::Rejected(RejectReason::NotAnObject);
    }
    match raw::report_id(record) {
        Some(id) if !id.trim().is_empty() => {}
        _ => return ValidationOutcome::Rejected(RejectReason::MissingSafetyReportId),
    }
    if raw::patient(record).is_none() {
        return ValidationOutcome::Rejected(RejectReason::InvalidPatient);
    }
    if raw::drug_entries(record).is_empty() && raw::reaction_entries(record).is_empty() {
        return ValidationOutcome::Rejected(RejectReason::NoDrugNoReaction);
    }
    ValidationOutcome::Accepted
}
