//! Duplicate resolution by completeness.
//!
//! FAERS republishes reports as follow-ups under the same
//! `safetyreportid`; curation keeps exactly one record per id. The most
//! complete record wins, ties fall to the later received date, and full
//! ties keep the first-seen record.

use std::collections::HashMap;

use faers_model::raw;
use faers_transform::parse_faers_date_opt;
use serde_json::Value;

/// Count of populated top-level fields. Rewards records with more data
/// regardless of which fields carry it.
pub fn completeness_score(record: &Value) -> usize {
    record
        .as_object()
        .map_or(0, |obj| obj.values().filter(|v| raw::is_populated(v)).count())
}

fn received_date_key(record: &Value) -> String {
    parse_faers_date_opt(raw::record_field(record, "receivedate").as_deref()).unwrap_or_default()
}

/// Collapse validated records to one best record per id, preserving
/// first-seen id order so downstream output is deterministic.
pub fn dedupe_reports(records: Vec<Value>) -> Vec<(String, Value)> {
    let mut order: Vec<String> = Vec::new();
    let mut best: HashMap<String, (Value, usize)> = HashMap::new();

    for record in records {
        let Some(id) = raw::report_id(&record) else {
            continue;
        };
        let score = completeness_score(&record);
        match best.get(&id) {
            None => {
                order.push(id.clone());
                best.insert(id, (record, score));
            }
            Some((stored, stored_score)) => {
                let replace = if score > *stored_score {
                    true
                } else if score == *stored_score {
                    // Absent dates sort lowest; replacement requires a
                    // strictly later date, so full ties keep first-seen.
                    received_date_key(&record) > received_date_key(stored)
                } else {
                    false
                };
                if replace {
                    best.insert(id, (record, score));
                }
            }
        }
    }

    order
        .into_iter()
        .filter_map(|id| {
            let (record, _) = best.remove(&id)?;
            Some((id, record))
        })
        .collect()
}
