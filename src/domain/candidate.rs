//! Instrument candidates fed to the trade selector.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::{Sector, Symbol};

/// An instrument eligible for selection.
///
/// Values are fractional: an `expected_return` of `0.05` is 5%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub symbol: Symbol,
    #[serde(with = "rust_decimal::serde::float")]
    pub expected_return: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub volatility: Decimal,
    pub sector: Sector,
}

impl Candidate {
    /// Create a candidate without validating it.
    pub fn new(
        symbol: impl Into<Symbol>,
        expected_return: Decimal,
        volatility: Decimal,
        sector: impl Into<Sector>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            expected_return,
            volatility,
            sector: sector.into(),
        }
    }

    /// Check the per-candidate invariants.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] for an empty symbol, an empty sector or a
    /// negative volatility.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.symbol.as_str().trim().is_empty() {
            return Err(DomainError::EmptySymbol);
        }
        if self.sector.as_str().trim().is_empty() {
            return Err(DomainError::EmptySector {
                symbol: self.symbol.to_string(),
            });
        }
        if self.volatility < Decimal::ZERO {
            return Err(DomainError::NegativeVolatility {
                symbol: self.symbol.to_string(),
                volatility: self.volatility,
            });
        }
        Ok(())
    }

    /// Return true when this candidate passes the volatility gate.
    #[must_use]
    pub fn within_volatility(&self, max_volatility: Decimal) -> bool {
        self.volatility <= max_volatility
    }
}

/// Validate every candidate and check symbol uniqueness.
///
/// # Errors
///
/// Returns the first [`DomainError`] found.
pub fn validate_candidates(candidates: &[Candidate]) -> Result<(), DomainError> {
    let mut seen = HashSet::with_capacity(candidates.len());
    for candidate in candidates {
        candidate.validate()?;
        if !seen.insert(&candidate.symbol) {
            return Err(DomainError::DuplicateSymbol {
                symbol: candidate.symbol.to_string(),
            });
        }
    }
    Ok(())
}
