//! Integration tests for deliverable emission.

use std::fs;

use faers_curate::{CurationResult, QaSummary, RejectionCounts};
use faers_model::{
    CanonicalDrugEntry, CanonicalReactionEntry, CanonicalReport, CuratedTables, DrugRole,
    ReporterType, Sex,
};
use faers_report::{
    AGGREGATE_CSV, MANIFEST_FILE, QA_SUMMARY_FILE, REPORTS_CSV, write_deliverables,
};

fn report(id: &str) -> CanonicalReport {
    CanonicalReport {
        safetyreportid: id.to_string(),
        received_date: Some("2023-06-15".to_string()),
        event_date: None,
        patient_age_years: Some(2.0),
        age_unit_raw: "MON".to_string(),
        patient_sex: Sex::Female,
        reporter_type: ReporterType::Physician,
        reporter_type_raw: "Physician".to_string(),
        country: "US".to_string(),
        country_raw: "US".to_string(),
        death: false,
        hospitalization: true,
        life_threatening: false,
        disability: false,
        congenital_anomaly: false,
        intervention: false,
        other: false,
    }
}

fn drug(id: &str, name: &str, role: DrugRole) -> CanonicalDrugEntry {
    CanonicalDrugEntry {
        safetyreportid: id.to_string(),
        drug_role: role,
        drug_name_original: name.to_string(),
        rxcui: Some("1991302".to_string()),
        ingredient_rxcui: None,
        ingredient_name: None,
        brand_name: None,
    }
}

fn sample_result() -> CurationResult {
    let tables = CuratedTables {
        reports: vec![report("100"), report("200")],
        drugs: vec![
            drug("100", "OZEMPIC", DrugRole::Primary),
            drug("100", "METFORMIN", DrugRole::Secondary),
        ],
        reactions: vec![CanonicalReactionEntry {
            safetyreportid: "100".to_string(),
            reaction_term_text: "Nausea".to_string(),
        }],
    };
    CurationResult {
        tables,
        qa: QaSummary {
            raw_file: "raw.json".to_string(),
            total_input: 3,
            total_valid: 3,
            total_rejected: 0,
            rejections: RejectionCounts::default(),
            completeness: vec![("received_date", 100.0)],
        },
    }
}

#[test]
fn writes_all_six_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let deliverables = write_deliverables(dir.path(), &sample_result()).unwrap();

    assert_eq!(deliverables.tables.len(), 4);
    for table in &deliverables.tables {
        assert!(table.path.exists(), "{} missing", table.name);
        assert_eq!(table.sha256.len(), 64);
    }
    assert!(deliverables.qa_summary.exists());
    assert!(deliverables.manifest.exists());

    let manifest = fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap();
    assert!(manifest.contains("- Reports.csv: 2 rows"));
    assert!(manifest.contains("- Drugs.csv: 2 rows"));
    assert!(manifest.contains("- Reactions.csv: 1 rows"));
    assert!(manifest.contains("- Safety_surveillance.csv: 2 rows"));

    let qa = fs::read_to_string(dir.path().join(QA_SUMMARY_FILE)).unwrap();
    assert!(qa.contains("Total input records: 3"));
}

#[test]
fn aggregate_is_a_left_join_over_reports() {
    let dir = tempfile::tempdir().unwrap();
    write_deliverables(dir.path(), &sample_result()).unwrap();

    let aggregate = fs::read_to_string(dir.path().join(AGGREGATE_CSV)).unwrap();
    let lines: Vec<&str> = aggregate.lines().collect();
    assert_eq!(lines.len(), 3, "header plus one row per retained report");

    // Report 100 carries pipe-joined drug lists in source order.
    let row_100 = lines.iter().find(|l| l.starts_with("100,")).unwrap();
    assert!(row_100.contains("PRIMARY|SECONDARY"));
    assert!(row_100.contains("OZEMPIC|METFORMIN"));
    assert!(row_100.contains("Nausea"));

    // Report 200 has no drugs or reactions but keeps its row.
    let row_200 = lines.iter().find(|l| l.starts_with("200,")).unwrap();
    assert!(row_200.ends_with(",,,,,,,"), "empty group cells: {row_200}");
}

#[test]
fn reports_csv_renders_age_and_flags() {
    let dir = tempfile::tempdir().unwrap();
    write_deliverables(dir.path(), &sample_result()).unwrap();

    let reports = fs::read_to_string(dir.path().join(REPORTS_CSV)).unwrap();
    let mut lines = reports.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("safetyreportid,received_date,event_date,patient_age_years"));
    let row = lines.next().unwrap();
    assert_eq!(
        row,
        "100,2023-06-15,,2,MON,F,PHYSICIAN,Physician,US,US,false,true,false,false,false,false,false"
    );
}

#[test]
fn reruns_are_byte_identical() {
    let dir_a = tempfile::tempdir().unwrap();
    let dir_b = tempfile::tempdir().unwrap();
    let a = write_deliverables(dir_a.path(), &sample_result()).unwrap();
    let b = write_deliverables(dir_b.path(), &sample_result()).unwrap();

    for (left, right) in a.tables.iter().zip(b.tables.iter()) {
        assert_eq!(left.sha256, right.sha256, "{} checksum drifted", left.name);
    }
    assert_eq!(
        fs::read_to_string(a.manifest).unwrap(),
        fs::read_to_string(b.manifest).unwrap()
    );
}
