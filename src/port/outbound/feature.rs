//! Instrument feature provider port.
//!
//! Supplies scored candidates to the trade selector. Implementations are
//! responsible for unit normalization (fractions, not percentages) and for
//! defaulting missing sector or volatility values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::candidate::Candidate;
use crate::error::Result;

/// Broad instrument category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetCategory {
    Stock,
    Etf,
    Crypto,
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stock => write!(f, "stock"),
            Self::Etf => write!(f, "etf"),
            Self::Crypto => write!(f, "crypto"),
        }
    }
}

impl FromStr for AssetCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stock" | "stocks" | "equity" => Ok(Self::Stock),
            "etf" | "etfs" => Ok(Self::Etf),
            "crypto" => Ok(Self::Crypto),
            other => Err(format!("unknown category '{other}'")),
        }
    }
}

/// Which instruments to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentQuery {
    /// Case-insensitive substring of symbol or name; empty matches all.
    pub text: String,
    /// Restrict to one category.
    pub category: Option<AssetCategory>,
    /// Maximum number of candidates returned.
    pub limit: usize,
}

impl InstrumentQuery {
    pub const DEFAULT_LIMIT: usize = 50;

    /// Match every instrument, up to `limit`.
    #[must_use]
    pub fn all(limit: usize) -> Self {
        Self {
            text: String::new(),
            category: None,
            limit,
        }
    }
}

impl Default for InstrumentQuery {
    fn default() -> Self {
        Self::all(Self::DEFAULT_LIMIT)
    }
}

/// Source of scored candidates.
pub trait FeatureProvider: Send + Sync {
    /// Return the provider name for logging.
    fn name(&self) -> &'static str;

    /// Fetch candidates matching `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data cannot be read.
    fn candidates(&self, query: &InstrumentQuery) -> Result<Vec<Candidate>>;
}
