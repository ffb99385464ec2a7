//! Subcommand implementations.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use serde_json::json;
use tracing::{info, info_span};

use faers_acquire::{FetchParams, FetchStats, OpenFdaConfig, fetch_reports};
use faers_curate::{CurationOptions, CurationResult, curate};
use faers_ingest::load_raw_reports;
use faers_report::{Deliverables, write_deliverables};
use faers_terminology::{JsonFileStore, RxNormService, TerminologyCache, TerminologyConfig};

use crate::cli::{AcquireArgs, ProcessArgs};
use crate::run::{new_run_id, write_run_metadata};

pub struct ProcessSummary {
    pub deliverables: Deliverables,
    pub result: CurationResult,
}

pub fn run_acquire(args: &AcquireArgs) -> Result<FetchStats> {
    let run_id = args.run_id.clone().unwrap_or_else(new_run_id);
    let span = info_span!("acquire", run_id = %run_id);
    let _guard = span.enter();

    let params = FetchParams {
        drugs: split_names(&args.drugs),
        brands: split_names(&args.brands),
        start_date: args.from_date.clone(),
        end_date: args.to_date.clone(),
        country: args.country.clone(),
    };
    let metadata = json!({
        "run_id": run_id,
        "source": "openFDA FAERS",
        "window": {"from": args.from_date, "to": args.to_date, "country": args.country},
        "drugs": params.drugs,
        "brands": params.brands,
        "out": args.out_dir,
    });
    let metadata_path = write_run_metadata(&run_id, &metadata)?;
    info!(metadata = %metadata_path.display(), "run metadata written");

    let config = OpenFdaConfig::default();
    let stats = fetch_reports(
        &config,
        &params,
        &run_id,
        &args.out_dir,
        io::stderr().is_terminal(),
    )
    .context("fetch raw reports")?;
    Ok(stats)
}

pub fn run_process(args: &ProcessArgs) -> Result<ProcessSummary> {
    let span = info_span!("process", raw_file = %args.raw_file.display());
    let _guard = span.enter();

    let records = load_raw_reports(&args.raw_file).context("load raw reports")?;

    let terminology_config = TerminologyConfig::default();
    let store = JsonFileStore::new(terminology_config.cache_file.clone());
    let service = RxNormService::new(terminology_config.base_url.clone())
        .context("build terminology client")?;
    let mut terminology =
        TerminologyCache::new(Box::new(store), Box::new(service), &terminology_config);

    let options = CurationOptions {
        progress: io::stderr().is_terminal(),
        ..CurationOptions::default()
    };
    let result = curate(
        records,
        &mut terminology,
        &options,
        &args.raw_file.display().to_string(),
    );

    let deliverables =
        write_deliverables(&args.out_dir, &result).context("write deliverables")?;
    Ok(ProcessSummary {
        deliverables,
        result,
    })
}

fn split_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::split_names;

    #[test]
    fn split_names_trims_and_drops_empties() {
        assert_eq!(
            split_names("semaglutide, tirzepatide,,  "),
            vec!["semaglutide".to_string(), "tirzepatide".to_string()]
        );
        assert!(split_names("").is_empty());
    }
}
