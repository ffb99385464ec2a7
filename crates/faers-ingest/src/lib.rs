pub mod json_ingest;

pub use json_ingest::{IngestError, load_raw_reports};
