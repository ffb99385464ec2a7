//! Drug role mapping and the target-drug enrichment heuristic.

use faers_model::DrugRole;

/// Generic and brand names of the drugs under surveillance. Only drug
/// entries whose original name contains one of these substrings are sent
/// to the terminology service.
pub const DEFAULT_TARGET_DRUGS: &[&str] = &[
    "semaglutide",
    "tirzepatide",
    "ozempic",
    "mounjaro",
    "wegovy",
    "rybelsus",
    "zepbound",
];

/// Map a raw `drugcharacterization` value onto a standardized role.
pub fn standardize_role(raw: Option<&str>) -> DrugRole {
    match raw.unwrap_or("").trim().to_uppercase().as_str() {
        "1" | "PRIMARY" => DrugRole::Primary,
        "2" | "SECONDARY" => DrugRole::Secondary,
        _ => DrugRole::Associated,
    }
}

/// Whether a drug name matches the target list (case-insensitive
/// substring match). Empty names never match.
pub fn is_target_drug<S: AsRef<str>>(name: &str, targets: &[S]) -> bool {
    if name.is_empty() {
        return false;
    }
    let lower = name.to_lowercase();
    targets
        .iter()
        .any(|t| lower.contains(&t.as_ref().to_lowercase()))
}
