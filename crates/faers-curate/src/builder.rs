//! Pure row builders over one retained record.
//!
//! Each builder is an independent pass over the validated, deduplicated
//! record; terminology enrichment is layered on afterwards by the
//! pipeline so these stay side-effect free.

use faers_model::raw;
use faers_model::{CanonicalDrugEntry, CanonicalReactionEntry, CanonicalReport};
use faers_transform::{
    age_to_years, clean_term, parse_faers_date_opt, standardize_country, standardize_reporter,
    standardize_role, standardize_sex,
};
use serde_json::Value;

/// Build the report row for one retained record.
pub fn build_report_row(id: &str, record: &Value) -> CanonicalReport {
    let patient = raw::patient(record);
    let patient_field = |key: &str| patient.and_then(|p| raw::scalar_field(p, key));

    let received_date = parse_faers_date_opt(raw::record_field(record, "receivedate").as_deref());
    let event_date = parse_faers_date_opt(raw::record_field(record, "receiptdate").as_deref());

    let patient_sex = standardize_sex(patient_field("sex").as_deref());
    let age_value = patient_field("patientonsetage");
    let age_unit = patient_field("patientonsetageunit");
    let (patient_age_years, age_unit_raw) =
        age_to_years(age_value.as_deref(), age_unit.as_deref());

    let occupation = patient_field("patientreporter")
        .filter(|s| !s.is_empty())
        .or_else(|| raw::record_field(record, "fulfillexpeditecriteria").filter(|s| !s.is_empty()));
    let (reporter_type, reporter_type_raw) = standardize_reporter(occupation.as_deref());
    let (country, country_raw) =
        standardize_country(raw::record_field(record, "occurcountry").as_deref());

    let flag = |key: &str| raw::bool_flag(record.get(key));

    // NOTE: intervention and other both read seriousnessother, matching
    // the published tables; a distinct intervention source field has not
    // been confirmed upstream.
    let seriousness_other = flag("seriousnessother");

    CanonicalReport {
        safetyreportid: id.to_string(),
        received_date,
        event_date,
        patient_age_years,
        age_unit_raw,
        patient_sex,
        reporter_type,
        reporter_type_raw,
        country,
        country_raw,
        death: flag("seriousnessdeath"),
        hospitalization: flag("seriousnesshospitalization"),
        life_threatening: flag("seriousnesslifethreatening"),
        disability: flag("seriousnessdisabling"),
        congenital_anomaly: flag("seriousnesscongenitalanomali"),
        intervention: seriousness_other,
        other: seriousness_other,
    }
}

/// Build one unenriched drug row; non-object entries yield no row.
pub fn build_drug_row(id: &str, entry: &Value) -> Option<CanonicalDrugEntry> {
    let obj = entry.as_object()?;
    let drug_name_original = raw::scalar_field(obj, "medicinalproduct").unwrap_or_default();
    let drug_role = standardize_role(raw::scalar_field(obj, "drugcharacterization").as_deref());
    Some(CanonicalDrugEntry {
        safetyreportid: id.to_string(),
        drug_role,
        drug_name_original,
        rxcui: None,
        ingredient_rxcui: None,
        ingredient_name: None,
        brand_name: None,
    })
}

/// Build one reaction row; only string terms produce rows.
pub fn build_reaction_row(id: &str, entry: &Value) -> Option<CanonicalReactionEntry> {
    let term = entry.as_object()?.get("reactionmeddrapt")?.as_str()?;
    Some(CanonicalReactionEntry {
        safetyreportid: id.to_string(),
        reaction_term_text: clean_term(term),
    })
}
