//! CLI library components for the FAERS curation pipeline.

pub mod logging;
