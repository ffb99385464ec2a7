//! Paged fetch loop against the openFDA endpoint.

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::config::OpenFdaConfig;
use crate::error::{AcquireError, Result};
use crate::query::{FetchParams, build_search_query};
use crate::writer::ArrayWriter;

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Pause before deciding what to do with a non-success page.
const FAILURE_PAUSE: Duration = Duration::from_secs(2);

/// Client-error statuses that end the run (bad query or auth; retrying
/// the same request cannot succeed).
const TERMINAL_STATUSES: [u16; 4] = [400, 401, 403, 404];

#[derive(Debug, Clone, Serialize)]
pub struct FetchManifest {
    pub run_id: String,
    pub raw_file: PathBuf,
    pub records: usize,
    pub sha256: String,
}

#[derive(Debug)]
pub struct FetchStats {
    pub records: usize,
    pub raw_file: PathBuf,
    pub manifest_file: PathBuf,
}

/// Fetch all matching reports into `<out_dir>/faers_<run_id>.json` and
/// write `manifest_<run_id>.json` beside it.
pub fn fetch_reports(
    config: &OpenFdaConfig,
    params: &FetchParams,
    run_id: &str,
    out_dir: &Path,
    progress: bool,
) -> Result<FetchStats> {
    fs::create_dir_all(out_dir).map_err(|source| AcquireError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;
    let raw_file = out_dir.join(format!("faers_{run_id}.json"));
    let mut writer = ArrayWriter::create(&raw_file)?;

    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    let search = build_search_query(params);
    info!(%search, "starting openFDA fetch");

    let mut bar: Option<ProgressBar> = None;
    let mut skip: u32 = 0;
    loop {
        let limit = config.page_limit.to_string();
        let skip_value = skip.to_string();
        let mut query: Vec<(&str, &str)> = vec![
            ("search", search.as_str()),
            ("limit", limit.as_str()),
            ("skip", skip_value.as_str()),
        ];
        if let Some(key) = config.api_key.as_deref() {
            query.push(("api_key", key));
        }

        let started = Instant::now();
        let response = client.get(&config.base_url).query(&query).send()?;
        let status = response.status();
        let elapsed_ms = started.elapsed().as_millis();

        if status.is_success() {
            let body: Value = response.json()?;
            let results = body
                .get("results")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();
            if bar.is_none() && progress {
                let total = body
                    .pointer("/meta/results/total")
                    .and_then(Value::as_u64)
                    .unwrap_or(0);
                bar = Some(records_bar(total));
            }
            info!(
                status = status.as_u16(),
                results = results.len(),
                skip,
                elapsed_ms,
                "fetched page"
            );
            if results.is_empty() {
                break;
            }
            for record in &results {
                writer.push(record)?;
            }
            if let Some(bar) = bar.as_ref() {
                bar.inc(results.len() as u64);
            }
            skip += config.page_limit;
        } else {
            warn!(status = status.as_u16(), skip, elapsed_ms, "page fetch failed");
            thread::sleep(FAILURE_PAUSE);
            if TERMINAL_STATUSES.contains(&status.as_u16()) {
                break;
            }
        }

        thread::sleep(config.throttle_delay());
    }
    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    let records = writer.finish()?;
    let sha256 = faers_report::sha256_file(&raw_file).map_err(|source| AcquireError::Io {
        path: raw_file.clone(),
        source,
    })?;
    let manifest = FetchManifest {
        run_id: run_id.to_string(),
        raw_file: raw_file.clone(),
        records,
        sha256,
    };
    let manifest_file = out_dir.join(format!("manifest_{run_id}.json"));
    fs::write(&manifest_file, serde_json::to_vec_pretty(&manifest)?).map_err(|source| {
        AcquireError::Io {
            path: manifest_file.clone(),
            source,
        }
    })?;
    info!(records, raw_file = %raw_file.display(), "fetch complete");

    Ok(FetchStats {
        records,
        raw_file,
        manifest_file,
    })
}

fn records_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::with_template("{msg:>12} [{bar:40}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );
    bar.set_message("records");
    bar
}
