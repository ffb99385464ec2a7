//! RxNorm terminology resolution for FAERS curation.
//!
//! The cache sits between the curation driver and the RxNav REST API:
//! resolved identifiers persist to disk across runs, unresolved names are
//! remembered via a negative sentinel, and every remote call is followed
//! by a mandatory delay enforcing the request budget. Both the storage
//! strategy and the remote service are traits so tests run with fakes.

pub mod cache;
pub mod config;
pub mod error;
pub mod rxnorm;
pub mod service;
pub mod store;

pub use cache::TerminologyCache;
pub use config::{CACHE_DIR_ENV_VAR, RXNORM_BASE_URL, TerminologyConfig};
pub use error::{Result, TerminologyError};
pub use rxnorm::RxNormService;
pub use service::{Ingredient, TerminologyService};
pub use store::{CacheEntry, CacheMap, CacheStore, JsonFileStore, MemoryStore};
