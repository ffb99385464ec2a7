//! Whole-file ingestion of a raw FAERS JSON array.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read raw file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse raw file {path} as JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the raw report sequence from a JSON array file.
///
/// The file is read and parsed in full. A top-level value that is not an
/// array is treated as an empty record set; an unreadable file or invalid
/// JSON is fatal, since no partial output should be produced from a raw
/// file we cannot trust.
pub fn load_raw_reports(path: &Path) -> Result<Vec<Value>, IngestError> {
    let bytes = fs::read(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: Value = serde_json::from_slice(&bytes).map_err(|source| IngestError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    match parsed {
        Value::Array(records) => {
            info!(records = records.len(), path = %path.display(), "loaded raw reports");
            Ok(records)
        }
        other => {
            warn!(
                path = %path.display(),
                found = other_kind(&other),
                "raw file is not a JSON array; treating as empty record set"
            );
            Ok(Vec::new())
        }
    }
}

fn other_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
