//! Curation pipeline orchestration.
//!
//! Stages over the raw record sequence: validate (with a rejection
//! histogram) → dedupe by completeness → build canonical rows, enriching
//! target drugs through the terminology cache. Single-threaded and
//! sequential; the cache's post-call sleep is the only backpressure.

use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use tracing::info;

use faers_model::raw;
use faers_model::{CuratedTables, ValidationOutcome};
use faers_terminology::TerminologyCache;
use faers_transform::{DEFAULT_TARGET_DRUGS, is_target_drug};

use crate::builder::{build_drug_row, build_reaction_row, build_report_row};
use crate::dedupe::dedupe_reports;
use crate::qa::{QaSummary, RejectionCounts, report_completeness};
use crate::validator::validate;

/// Curation options.
#[derive(Debug, Clone)]
pub struct CurationOptions {
    /// Substrings gating terminology enrichment.
    pub target_drugs: Vec<String>,
    /// Render progress bars on stderr.
    pub progress: bool,
}

impl Default for CurationOptions {
    fn default() -> Self {
        Self {
            target_drugs: DEFAULT_TARGET_DRUGS.iter().map(|s| (*s).to_string()).collect(),
            progress: false,
        }
    }
}

/// Result of one curation run: the three row-sets plus QA statistics.
#[derive(Debug)]
pub struct CurationResult {
    pub tables: CuratedTables,
    pub qa: QaSummary,
}

/// Run the full curation pass over an already-loaded record sequence.
///
/// `raw_file_label` only annotates the QA summary; loading is the
/// caller's concern.
pub fn curate(
    records: Vec<Value>,
    terminology: &mut TerminologyCache,
    options: &CurationOptions,
    raw_file_label: &str,
) -> CurationResult {
    let total_input = records.len();
    info!(records = total_input, "starting curation");

    let mut rejections = RejectionCounts::default();
    let mut valid = Vec::new();
    let bar = progress_bar(options, total_input as u64, "validating");
    for record in records {
        match validate(&record) {
            ValidationOutcome::Accepted => valid.push(record),
            ValidationOutcome::Rejected(reason) => rejections.record(reason),
        }
        bar.inc(1);
    }
    bar.finish_and_clear();
    let total_valid = valid.len();
    let total_rejected = total_input - total_valid;
    info!(valid = total_valid, rejected = total_rejected, "validation complete");

    let retained = dedupe_reports(valid);
    info!(unique_reports = retained.len(), "deduplication complete");

    let mut tables = CuratedTables::default();
    let bar = progress_bar(options, retained.len() as u64, "processing");
    for (id, record) in retained {
        tables.reports.push(build_report_row(&id, &record));

        for entry in raw::drug_entries(&record) {
            let Some(mut row) = build_drug_row(&id, entry) else {
                continue;
            };
            if is_target_drug(&row.drug_name_original, &options.target_drugs) {
                row.rxcui = terminology.resolve_rxcui(&row.drug_name_original);
                if let Some(rxcui) = row.rxcui.as_deref() {
                    let (ing_rxcui, ing_name) = terminology.resolve_ingredient(rxcui);
                    row.ingredient_rxcui = ing_rxcui;
                    row.ingredient_name = ing_name;
                }
            }
            tables.drugs.push(row);
        }

        for entry in raw::reaction_entries(&record) {
            if let Some(row) = build_reaction_row(&id, entry) {
                tables.reactions.push(row);
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();
    info!(
        reports = tables.reports.len(),
        drugs = tables.drugs.len(),
        reactions = tables.reactions.len(),
        "row building complete"
    );

    let completeness = report_completeness(&tables);
    CurationResult {
        tables,
        qa: QaSummary {
            raw_file: raw_file_label.to_string(),
            total_input,
            total_valid,
            total_rejected,
            rejections,
            completeness,
        },
    }
}

fn progress_bar(options: &CurationOptions, len: u64, stage: &str) -> ProgressBar {
    if !options.progress {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len);
    bar.set_style(
        ProgressStyle::with_template("{msg:>12} [{bar:40}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );
    bar.set_message(stage.to_string());
    bar
}
