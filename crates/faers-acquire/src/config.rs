//! openFDA endpoint configuration.

use std::time::Duration;

/// Environment variable holding an optional openFDA API key.
pub const API_KEY_ENV_VAR: &str = "OPENFDA_API_KEY";

/// Drug adverse-event endpoint.
pub const OPENFDA_BASE_URL: &str = "https://api.fda.gov/drug/event.json";

#[derive(Debug, Clone)]
pub struct OpenFdaConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Page size per request; openFDA caps at 100 without special access.
    pub page_limit: u32,
    pub requests_per_minute: u32,
}

impl Default for OpenFdaConfig {
    fn default() -> Self {
        let api_key = std::env::var(API_KEY_ENV_VAR).ok().filter(|k| !k.is_empty());
        // Keyed access gets the higher budget.
        let requests_per_minute = if api_key.is_some() { 240 } else { 60 };
        Self {
            base_url: OPENFDA_BASE_URL.to_string(),
            api_key,
            page_limit: 100,
            requests_per_minute,
        }
    }
}

impl OpenFdaConfig {
    pub fn throttle_delay(&self) -> Duration {
        Duration::from_secs_f64(60.0 / f64::from(self.requests_per_minute.max(1)))
    }
}
