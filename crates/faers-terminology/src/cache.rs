//! Throttled, persistent terminology resolution.
//!
//! Lookup flow per key: cache hit returns immediately with no network
//! activity; a miss queries the service once, then sleeps the throttle
//! delay unconditionally before returning. Entries are never invalidated
//! within a run, and the store is rewritten after every new entry.

use std::thread;
use std::time::Duration;

use tracing::warn;

use crate::config::TerminologyConfig;
use crate::service::TerminologyService;
use crate::store::{CacheEntry, CacheMap, CacheStore};

/// Key prefix for ingredient entries; name entries are keyed by the
/// lowercased trimmed drug name itself.
const INGREDIENT_KEY_PREFIX: &str = "ingredient:";

pub struct TerminologyCache {
    entries: CacheMap,
    store: Box<dyn CacheStore>,
    service: Box<dyn TerminologyService>,
    delay: Duration,
}

impl TerminologyCache {
    /// Build a cache over the given store and service. The store is read
    /// eagerly; a corrupt or missing store loads as empty.
    pub fn new(
        store: Box<dyn CacheStore>,
        service: Box<dyn TerminologyService>,
        config: &TerminologyConfig,
    ) -> Self {
        let entries = store.load();
        Self {
            entries,
            store,
            service,
            delay: config.throttle_delay(),
        }
    }

    /// Number of entries currently cached.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a drug name to an RxCUI.
    ///
    /// Blank names resolve to `None` without touching cache or network.
    pub fn resolve_rxcui(&mut self, name: &str) -> Option<String> {
        let key = name.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }
        if let Some(entry) = self.entries.get(&key) {
            return non_sentinel(entry.rxcui.as_deref());
        }
        match self.service.lookup_rxcui(name) {
            Ok(found) => {
                self.insert(
                    key,
                    CacheEntry {
                        rxcui: Some(found.clone().unwrap_or_default()),
                        ..CacheEntry::default()
                    },
                );
                self.throttle();
                found
            }
            Err(error) => {
                warn!(name, %error, "rxcui lookup failed; treating as not found");
                self.throttle();
                None
            }
        }
    }

    /// Resolve an RxCUI to its active ingredient (rxcui, name) pair.
    pub fn resolve_ingredient(&mut self, rxcui: &str) -> (Option<String>, Option<String>) {
        let trimmed = rxcui.trim();
        if trimmed.is_empty() {
            return (None, None);
        }
        let key = format!("{INGREDIENT_KEY_PREFIX}{trimmed}");
        if let Some(entry) = self.entries.get(&key) {
            return (
                non_sentinel(entry.ingredient_rxcui.as_deref()),
                non_sentinel(entry.ingredient_name.as_deref()),
            );
        }
        match self.service.lookup_ingredient(trimmed) {
            Ok(found) => {
                let (ing_rxcui, ing_name) = match found {
                    Some(ingredient) => (ingredient.rxcui, ingredient.name),
                    None => (String::new(), String::new()),
                };
                self.insert(
                    key,
                    CacheEntry {
                        ingredient_rxcui: Some(ing_rxcui.clone()),
                        ingredient_name: Some(ing_name.clone()),
                        ..CacheEntry::default()
                    },
                );
                self.throttle();
                (non_sentinel(Some(&ing_rxcui)), non_sentinel(Some(&ing_name)))
            }
            Err(error) => {
                warn!(rxcui = trimmed, %error, "ingredient lookup failed; treating as not found");
                self.throttle();
                (None, None)
            }
        }
    }

    fn insert(&mut self, key: String, entry: CacheEntry) {
        self.entries.insert(key, entry);
        if let Err(error) = self.store.persist(&self.entries) {
            warn!(%error, "failed to persist terminology cache");
        }
    }

    fn throttle(&self) {
        thread::sleep(self.delay);
    }
}

fn non_sentinel(value: Option<&str>) -> Option<String> {
    match value {
        Some("") | None => None,
        Some(v) => Some(v.to_string()),
    }
}
