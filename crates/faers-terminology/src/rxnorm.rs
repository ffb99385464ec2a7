//! RxNav REST client.
//!
//! Two endpoints are consumed:
//! - `GET /rxcui.json?name=<name>` for name → RxCUI resolution
//! - `GET /rxcui/<rxcui>/related.json?tty=IN` for the active ingredient

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, TerminologyError};
use crate::service::{Ingredient, TerminologyService};

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

pub struct RxNormService {
    client: Client,
    base_url: String,
}

impl RxNormService {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(TerminologyError::Network)?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value> {
        let response = self.client.get(url).query(query).send()?;
        let status = response.status();
        if !status.is_success() {
            debug!(url, status = status.as_u16(), "terminology lookup failed");
            return Err(TerminologyError::Status(status.as_u16()));
        }
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl TerminologyService for RxNormService {
    fn lookup_rxcui(&self, name: &str) -> Result<Option<String>> {
        let url = format!("{}/rxcui.json", self.base_url);
        let body = self.get_json(&url, &[("name", name)])?;
        Ok(first_rxnorm_id(&body))
    }

    fn lookup_ingredient(&self, rxcui: &str) -> Result<Option<Ingredient>> {
        let url = format!("{}/rxcui/{rxcui}/related.json", self.base_url);
        let body = self.get_json(&url, &[("tty", "IN")])?;
        Ok(first_ingredient(&body))
    }
}

fn first_rxnorm_id(body: &Value) -> Option<String> {
    let ids = body.get("idGroup")?.get("rxnormId")?.as_array()?;
    ids.first()?.as_str().map(str::to_string)
}

fn first_ingredient(body: &Value) -> Option<Ingredient> {
    let groups = body
        .get("relatedGroup")?
        .get("conceptGroup")?
        .as_array()?;
    for group in groups {
        if group.get("tty").and_then(Value::as_str) != Some("IN") {
            continue;
        }
        let Some(concepts) = group.get("conceptProperties").and_then(Value::as_array) else {
            continue;
        };
        if let Some(first) = concepts.first() {
            let rxcui = first.get("rxcui").and_then(Value::as_str)?;
            let name = first.get("name").and_then(Value::as_str)?;
            return Some(Ingredient {
                rxcui: rxcui.to_string(),
                name: name.to_string(),
            });
        }
    }
    None
}
