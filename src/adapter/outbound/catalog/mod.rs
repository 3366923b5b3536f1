//! Feature providers backed by local data.
//!
//! - [`CatalogProvider`] reads a TOML catalog of instruments with raw quote
//!   snapshots and adapts them into candidates.
//! - [`StaticProvider`] serves an already-scored candidate list, for example
//!   one loaded from a JSON file.

mod quote;

pub use quote::{Adapted, InstrumentRecord, DEFAULT_BETA};

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::domain::candidate::Candidate;
use crate::error::{Error, Result};
use crate::port::outbound::feature::{FeatureProvider, InstrumentQuery};

/// A flag that fires once per owner.
#[derive(Debug, Default)]
pub struct WarnOnce(AtomicBool);

impl WarnOnce {
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Return true the first time it is called, false afterwards.
    pub fn first(&self) -> bool {
        !self.0.swap(true, Ordering::Relaxed)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    instruments: Vec<InstrumentRecord>,
}

/// Instrument catalog with raw quote snapshots.
#[derive(Debug)]
pub struct CatalogProvider {
    records: Vec<InstrumentRecord>,
    beta_warning: WarnOnce,
}

impl CatalogProvider {
    #[must_use]
    pub fn new(records: Vec<InstrumentRecord>) -> Self {
        Self {
            records,
            beta_warning: WarnOnce::new(),
        }
    }

    /// Parse a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for malformed TOML or non-finite numbers.
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|e| Error::Parse(format!("catalog: {e}")))?;
        Ok(Self::new(file.instruments))
    }

    /// Load a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let provider = Self::from_toml(&content)?;
        info!(
            path = %path.display(),
            instruments = provider.records.len(),
            "Loaded instrument catalog"
        );
        Ok(provider)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn search(&self, query: &InstrumentQuery) -> Vec<&InstrumentRecord> {
        let text = query.text.trim().to_lowercase();
        let mut matches: Vec<&InstrumentRecord> = self
            .records
            .iter()
            .filter(|r| query.category.map_or(true, |c| r.category == c))
            .filter(|r| r.matches(&text))
            .collect();
        // Exact symbol hits first; sort is stable.
        matches.sort_by_key(|r| r.symbol.to_lowercase() != text);
        matches.truncate(query.limit);
        matches
    }
}

impl FeatureProvider for CatalogProvider {
    fn name(&self) -> &'static str {
        "catalog"
    }

    fn candidates(&self, query: &InstrumentQuery) -> Result<Vec<Candidate>> {
        let mut candidates = Vec::new();
        for record in self.search(query) {
            match record.adapt() {
                Adapted::Scored {
                    candidate,
                    beta_defaulted,
                } => {
                    if beta_defaulted {
                        if self.beta_warning.first() {
                            warn!(
                                symbol = %candidate.symbol,
                                beta = %DEFAULT_BETA,
                                "Instrument has no beta, using default volatility"
                            );
                        } else {
                            debug!(symbol = %candidate.symbol, "Defaulted beta");
                        }
                    }
                    candidates.push(candidate);
                }
                Adapted::NoData => {
                    debug!(symbol = %record.symbol, "Skipping instrument without price data");
                }
            }
        }
        debug!(
            query = %query.text,
            candidates = candidates.len(),
            "Catalog search complete"
        );
        Ok(candidates)
    }
}

/// Pre-scored candidates.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    candidates: Vec<Candidate>,
}

impl StaticProvider {
    #[must_use]
    pub const fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    /// Load a JSON array of candidates.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a candidate array.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let candidates: Vec<Candidate> = serde_json::from_str(&content)?;
        Ok(Self::new(candidates))
    }
}

impl FeatureProvider for StaticProvider {
    fn name(&self) -> &'static str {
        "static"
    }

    /// Category filters do not apply: static candidates carry no category.
    fn candidates(&self, query: &InstrumentQuery) -> Result<Vec<Candidate>> {
        let text = query.text.trim().to_lowercase();
        Ok(self
            .candidates
            .iter()
            .filter(|c| text.is_empty() || c.symbol.as_str().to_lowercase().contains(&text))
            .take(query.limit)
            .cloned()
            .collect())
    }
}
