//! The remote lookup seam.

use crate::error::Result;

/// One resolved ingredient concept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub rxcui: String,
    pub name: String,
}

/// Read-only terminology lookups.
///
/// `Ok(None)` means the service answered and had no match (a cacheable
/// negative); `Err` means transport failure, non-success status, or a
/// malformed body (not cached, not retried within the run).
pub trait TerminologyService {
    fn lookup_rxcui(&self, name: &str) -> Result<Option<String>>;
    fn lookup_ingredient(&self, rxcui: &str) -> Result<Option<Ingredient>>;
}

impl<S: TerminologyService + ?Sized> TerminologyService for std::sync::Arc<S> {
    fn lookup_rxcui(&self, name: &str) -> Result<Option<String>> {
        (**self).lookup_rxcui(name)
    }

    fn lookup_ingredient(&self, rxcui: &str) -> Result<Option<Ingredient>> {
        (**self).lookup_ingredient(rxcui)
    }
}
