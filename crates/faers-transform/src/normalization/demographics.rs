//! Sex, reporter, and country standardization.

use faers_model::{ReporterType, Sex};

/// Standardize a raw sex value. Anything not recognizably female or male,
/// including absent input, maps to `U`.
pub fn standardize_sex(raw: Option<&str>) -> Sex {
    let Some(raw) = raw else {
        return Sex::Unknown;
    };
    match raw.trim().to_uppercase().as_str() {
        "F" | "FEMALE" => Sex::Female,
        "M" | "MALE" => Sex::Male,
        _ => Sex::Unknown,
    }
}

/// Standardize a raw reporter qualification, retaining the raw text.
///
/// Substring checks run in a fixed order so that a value matching several
/// classes resolves deterministically (PHYSICIAN before PHARMACIST before
/// CONSUMER/LAWYER).
pub fn standardize_reporter(raw: Option<&str>) -> (ReporterType, String) {
    let Some(raw) = raw else {
        return (ReporterType::Other, String::new());
    };
    let upper = raw.trim().to_uppercase();
    let code = if upper.contains("PHYSICIAN") {
        ReporterType::Physician
    } else if upper.contains("PHARMACIST") {
        ReporterType::Pharmacist
    } else if upper.contains("CONSUMER") || upper.contains("LAWYER") {
        ReporterType::Consumer
    } else {
        ReporterType::Other
    };
    (code, raw.to_string())
}

/// Uppercase-trim a raw country value, retaining the raw text.
pub fn standardize_country(raw: Option<&str>) -> (String, String) {
    match raw {
        Some(raw) => (raw.trim().to_uppercase(), raw.to_string()),
        None => (String::new(), String::new()),
    }
}
