//! End-to-end curation pipeline tests with a scripted terminology fake.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use faers_curate::{CurationOptions, curate};
use faers_model::{DrugRole, Sex};
use faers_terminology::{
    Ingredient, MemoryStore, TerminologyCache, TerminologyConfig, TerminologyError,
    TerminologyService,
};
use serde_json::{Value, json};

#[derive(Default)]
struct FakeService {
    rxcui_by_name: HashMap<String, String>,
    ingredient_by_rxcui: HashMap<String, Ingredient>,
    calls: Mutex<Vec<String>>,
}

impl FakeService {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl TerminologyService for FakeService {
    fn lookup_rxcui(&self, name: &str) -> Result<Option<String>, TerminologyError> {
        self.calls.lock().unwrap().push(format!("rxcui:{name}"));
        Ok(self.rxcui_by_name.get(name).cloned())
    }

    fn lookup_ingredient(&self, rxcui: &str) -> Result<Option<Ingredient>, TerminologyError> {
        self.calls.lock().unwrap().push(format!("ingredient:{rxcui}"));
        Ok(self.ingredient_by_rxcui.get(rxcui).cloned())
    }
}

fn cache_with(service: Arc<FakeService>) -> TerminologyCache {
    let config = TerminologyConfig {
        requests_per_minute: 60_000,
        ..TerminologyConfig::default()
    };
    TerminologyCache::new(Box::new(Arc::new(MemoryStore::new())), Box::new(service), &config)
}

fn run(records: Vec<Value>, service: Arc<FakeService>) -> faers_curate::CurationResult {
    let mut cache = cache_with(service);
    curate(records, &mut cache, &CurationOptions::default(), "test.json")
}

#[test]
fn duplicate_ids_collapse_to_most_complete() {
    // Five populated fields.
    let sparse = json!({
        "safetyreportid": "900",
        "receivedate": "20230101",
        "occurcountry": "US",
        "seriousnessdeath": "1",
        "patient": {"reaction": [{"reactionmeddrapt": "Nausea"}]}
    });
    // Eight populated fields.
    let full = json!({
        "safetyreportid": "900",
        "receivedate": "20230201",
        "receiptdate": "20230215",
        "occurcountry": "US",
        "seriousnessdeath": "1",
        "seriousnesshospitalization": "1",
        "fulfillexpeditecriteria": "1",
        "patient": {
            "sex": "F",
            "reaction": [{"reactionmeddrapt": "Vomiting"}]
        }
    });
    let result = run(vec![sparse, full], Arc::new(FakeService::default()));

    assert_eq!(result.tables.reports.len(), 1);
    let report = &result.tables.reports[0];
    assert_eq!(report.safetyreportid, "900");
    assert_eq!(report.received_date.as_deref(), Some("2023-02-01"));
    assert_eq!(report.patient_sex, Sex::Female);
    assert!(report.hospitalization);
    assert_eq!(result.tables.reactions.len(), 1);
    assert_eq!(result.tables.reactions[0].reaction_term_text, "Vomiting");
}

#[test]
fn rejection_histogram_counts_every_reason() {
    let records = vec![
        json!("not an object"),
        json!({"patient": {}}),
        json!({"safetyreportid": "1"}),
        json!({"safetyreportid": "2", "patient": {}}),
        json!({"safetyreportid": "3", "patient": {"drug": [{"medicinalproduct": "X"}]}}),
    ];
    let result = run(records, Arc::new(FakeService::default()));

    assert_eq!(result.qa.total_input, 5);
    assert_eq!(result.qa.total_valid, 1);
    assert_eq!(result.qa.total_rejected, 4);
    let histogram: Vec<_> = result.qa.rejections.iter().collect();
    assert_eq!(
        histogram,
        vec![
            ("invalid_patient", 1),
            ("missing_safetyreportid", 1),
            ("no_drug_no_reaction", 1),
            ("not_a_object", 1),
        ]
    );
}

#[test]
fn only_target_drugs_are_enriched() {
    let mut service = FakeService::default();
    service
        .rxcui_by_name
        .insert("OZEMPIC 0.5MG PEN".to_string(), "1991302".to_string());
    service.ingredient_by_rxcui.insert(
        "1991302".to_string(),
        Ingredient {
            rxcui: "1991302".to_string(),
            name: "semaglutide".to_string(),
        },
    );
    let service = Arc::new(service);

    let record = json!({
        "safetyreportid": "1",
        "patient": {
            "drug": [
                {"medicinalproduct": "OZEMPIC 0.5MG PEN", "drugcharacterization": "1"},
                {"medicinalproduct": "METFORMIN", "drugcharacterization": "2"},
                "not an object"
            ]
        }
    });
    let result = run(vec![record], Arc::clone(&service));

    assert_eq!(result.tables.drugs.len(), 2, "non-object entry is dropped");
    let ozempic = &result.tables.drugs[0];
    assert_eq!(ozempic.drug_role, DrugRole::Primary);
    assert_eq!(ozempic.rxcui.as_deref(), Some("1991302"));
    assert_eq!(ozempic.ingredient_rxcui.as_deref(), Some("1991302"));
    assert_eq!(ozempic.ingredient_name.as_deref(), Some("semaglutide"));

    let metformin = &result.tables.drugs[1];
    assert_eq!(metformin.drug_role, DrugRole::Secondary);
    assert!(metformin.rxcui.is_none());

    // The non-target name never reached the service.
    let calls = service.calls();
    assert_eq!(
        calls,
        vec![
            "rxcui:OZEMPIC 0.5MG PEN".to_string(),
            "ingredient:1991302".to_string()
        ]
    );
}

#[test]
fn drug_and_reaction_rows_keep_source_order() {
    let record = json!({
        "safetyreportid": "1",
        "patient": {
            "drug": [
                {"medicinalproduct": "B-DRUG"},
                {"medicinalproduct": "A-DRUG"}
            ],
            "reaction": [
                {"reactionmeddrapt": "Second listed  first"},
                {"reactionmeddrapt": "Alphabetically first"}
            ]
        }
    });
    let result = run(vec![record], Arc::new(FakeService::default()));
    let names: Vec<&str> = result
        .tables
        .drugs
        .iter()
        .map(|d| d.drug_name_original.as_str())
        .collect();
    assert_eq!(names, ["B-DRUG", "A-DRUG"]);
    let terms: Vec<&str> = result
        .tables
        .reactions
        .iter()
        .map(|r| r.reaction_term_text.as_str())
        .collect();
    assert_eq!(terms, ["Second listed first", "Alphabetically first"]);
}

#[test]
fn empty_input_produces_empty_result() {
    let result = run(Vec::new(), Arc::new(FakeService::default()));
    assert!(result.tables.reports.is_empty());
    assert_eq!(result.qa.total_input, 0);
    assert!(result.qa.rejections.is_empty());
}
