//! Deliverable assembly: the four CSVs, the QA summary, and the manifest.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use faers_curate::CurationResult;
use tracing::info;

use crate::aggregate::write_aggregate;
use crate::csv_out::{write_drugs, write_reactions, write_reports};
use crate::hash::sha256_file;
use crate::qa_report::render_qa_summary;

pub const REPORTS_CSV: &str = "Reports.csv";
pub const DRUGS_CSV: &str = "Drugs.csv";
pub const REACTIONS_CSV: &str = "Reactions.csv";
pub const AGGREGATE_CSV: &str = "Safety_surveillance.csv";
pub const QA_SUMMARY_FILE: &str = "QA_SUMMARY.md";
pub const MANIFEST_FILE: &str = "MANIFEST.txt";

/// One written output table.
#[derive(Debug, Clone)]
pub struct TableArtifact {
    pub name: &'static str,
    pub path: PathBuf,
    pub rows: usize,
    pub sha256: String,
}

/// Everything written by one curation run.
#[derive(Debug, Clone)]
pub struct Deliverables {
    pub tables: Vec<TableArtifact>,
    pub qa_summary: PathBuf,
    pub manifest: PathBuf,
}

/// Write all deliverables into `out_dir`, creating it if needed.
///
/// An unwritable output directory is fatal; nothing in the curation
/// result can recover from it.
pub fn write_deliverables(out_dir: &Path, result: &CurationResult) -> Result<Deliverables> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("create output directory {}", out_dir.display()))?;

    let mut tables = Vec::with_capacity(4);
    for (name, rows) in [
        (REPORTS_CSV, write_reports(&out_dir.join(REPORTS_CSV), &result.tables.reports)?),
        (DRUGS_CSV, write_drugs(&out_dir.join(DRUGS_CSV), &result.tables.drugs)?),
        (
            REACTIONS_CSV,
            write_reactions(&out_dir.join(REACTIONS_CSV), &result.tables.reactions)?,
        ),
        (AGGREGATE_CSV, write_aggregate(&out_dir.join(AGGREGATE_CSV), &result.tables)?),
    ] {
        let path = out_dir.join(name);
        let sha256 = sha256_file(&path)
            .with_context(|| format!("checksum output table {}", path.display()))?;
        tables.push(TableArtifact {
            name,
            path,
            rows,
            sha256,
        });
    }

    let qa_summary = out_dir.join(QA_SUMMARY_FILE);
    fs::write(&qa_summary, render_qa_summary(&result.qa))
        .with_context(|| format!("write {}", qa_summary.display()))?;

    let manifest = out_dir.join(MANIFEST_FILE);
    fs::write(&manifest, render_manifest(&tables))
        .with_context(|| format!("write {}", manifest.display()))?;

    info!(out_dir = %out_dir.display(), tables = tables.len(), "deliverables written");
    Ok(Deliverables {
        tables,
        qa_summary,
        manifest,
    })
}

/// Render `MANIFEST.txt` contents.
pub fn render_manifest(tables: &[TableArtifact]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "MANIFEST");
    let _ = writeln!(out, "========");
    let _ = writeln!(out);
    let _ = writeln!(out, "Row counts:");
    for table in tables {
        let _ = writeln!(out, "- {}: {} rows", table.name, table.rows);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "SHA-256 checksums:");
    for table in tables {
        let _ = writeln!(out, "- {}: {}", table.name, table.sha256);
    }
    out
}
