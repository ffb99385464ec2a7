//! Terminology service configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the cache directory.
pub const CACHE_DIR_ENV_VAR: &str = "RXNORM_CACHE_DIR";

/// RxNav REST API base URL.
pub const RXNORM_BASE_URL: &str = "https://rxnav.nlm.nih.gov/REST";

#[derive(Debug, Clone)]
pub struct TerminologyConfig {
    pub base_url: String,
    pub cache_file: PathBuf,
    /// Remote-call budget; every lookup miss sleeps `60s / rpm` after the
    /// call, success or failure.
    pub requests_per_minute: u32,
}

impl Default for TerminologyConfig {
    fn default() -> Self {
        Self {
            base_url: RXNORM_BASE_URL.to_string(),
            cache_file: default_cache_file(),
            requests_per_minute: 60,
        }
    }
}

impl TerminologyConfig {
    /// The mandatory post-call delay derived from the request budget.
    pub fn throttle_delay(&self) -> Duration {
        Duration::from_secs_f64(60.0 / f64::from(self.requests_per_minute.max(1)))
    }
}

fn default_cache_file() -> PathBuf {
    let dir = std::env::var(CACHE_DIR_ENV_VAR)
        .map_or_else(|_| PathBuf::from("artifacts/cache"), PathBuf::from);
    dir.join("rxnorm_cache.json")
}
