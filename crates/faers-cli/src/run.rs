//! Run identifiers and run metadata logging.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::Value;

/// Directory for run metadata files.
pub const LOGS_DIR: &str = "logs";

/// A sortable run id: UTC timestamp plus a short uniqueness suffix.
pub fn new_run_id() -> String {
    let stamp = Utc::now().format("%Y%m%dT%H%M%S");
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.subsec_nanos());
    format!("{stamp}_{nanos:08x}")
}

/// Write `logs/run_<run_id>.json` describing this invocation.
pub fn write_run_metadata(run_id: &str, metadata: &Value) -> Result<PathBuf> {
    let logs_dir = Path::new(LOGS_DIR);
    fs::create_dir_all(logs_dir)
        .with_context(|| format!("create logs directory {}", logs_dir.display()))?;
    let path = logs_dir.join(format!("run_{run_id}.json"));
    fs::write(&path, serde_json::to_vec_pretty(metadata)?)
        .with_context(|| format!("write run metadata {}", path.display()))?;
    Ok(path)
}
