//! Raw FAERS acquisition from the openFDA adverse-event endpoint.
//!
//! Pages through the search window with a fixed request budget and
//! streams results into a single raw JSON array file, finishing with a
//! checksummed fetch manifest.

pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod writer;

pub use client::{FetchManifest, FetchStats, fetch_reports};
pub use config::{API_KEY_ENV_VAR, OPENFDA_BASE_URL, OpenFdaConfig};
pub use error::{AcquireError, Result};
pub use query::{FetchParams, build_search_query};
pub use writer::ArrayWriter;
