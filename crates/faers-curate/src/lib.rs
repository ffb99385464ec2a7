//! Core FAERS curation: validation, deduplication, normalization, and
//! terminology enrichment over a raw report sequence.

pub mod builder;
pub mod dedupe;
pub mod pipeline;
pub mod qa;
pub mod validator;

pub use builder::{build_drug_row, build_reaction_row, build_report_row};
pub use dedupe::{completeness_score, dedupe_reports};
pub use pipeline::{CurationOptions, CurationResult, curate};
pub use qa::{QaSummary, RejectionCounts, report_completeness};
pub use validator::validate;
