use faers_model::{CanonicalReport, RejectReason, ReporterType, Sex, ValidationOutcome};

#[test]
fn reject_reason_codes_are_stable() {
    assert_eq!(RejectReason::NotAnObject.as_str(), "not_a_object");
    assert_eq!(
        RejectReason::MissingSafetyReportId.as_str(),
        "missing_safetyreportid"
    );
    assert_eq!(RejectReason::InvalidPatient.as_str(), "invalid_patient");
    assert_eq!(RejectReason::NoDrugNoReaction.as_str(), "no_drug_no_reaction");
}

#[test]
fn outcome_acceptance() {
    assert!(ValidationOutcome::Accepted.is_accepted());
    assert!(!ValidationOutcome::Rejected(RejectReason::InvalidPatient).is_accepted());
}

#[test]
fn report_row_serializes() {
    let row = CanonicalReport {
        safetyreportid: "100".to_string(),
        received_date: Some("2023-06-15".to_string()),
        event_date: None,
        patient_age_years: Some(2.0),
        age_unit_raw: "MON".to_string(),
        patient_sex: Sex::Female,
        reporter_type: ReporterType::Physician,
        reporter_type_raw: "Licensed Physician".to_string(),
        country: "US".to_string(),
        country_raw: "us".to_string(),
        death: false,
        hospitalization: true,
        life_threatening: false,
        disability: false,
        congenital_anomaly: false,
        intervention: false,
        other: false,
    };
    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(json["safetyreportid"], "100");
    assert_eq!(json["patient_sex"], "Female");
    assert!(json["event_date"].is_null());
}
