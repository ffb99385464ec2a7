//! Deliverable emission for curated FAERS tables.

pub mod aggregate;
pub mod csv_out;
pub mod deliverables;
pub mod hash;
pub mod qa_report;

pub use aggregate::write_aggregate;
pub use csv_out::{write_drugs, write_reactions, write_reports};
pub use deliverables::{
    AGGREGATE_CSV, DRUGS_CSV, Deliverables, MANIFEST_FILE, QA_SUMMARY_FILE, REACTIONS_CSV,
    REPORTS_CSV, TableArtifact, render_manifest, write_deliverables,
};
pub use hash::{sha256_file, sha256_hex};
pub use qa_report::render_qa_summary;
