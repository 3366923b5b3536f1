//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are violated.
//! They are returned by validation methods on candidates and policies.
//!
//! # Examples
//!
//! ```
//! use traderiser::domain::candidate::Candidate;
//! use traderiser::domain::error::DomainError;
//! use rust_decimal_macros::dec;
//!
//! let candidate = Candidate::new("AAPL", dec!(0.05), dec!(-0.1), "Technology");
//!
//! assert!(matches!(
//!     candidate.validate(),
//!     Err(DomainError::NegativeVolatility { .. })
//! ));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Every candidate must carry a non-empty symbol.
    #[error("symbol cannot be empty")]
    EmptySymbol,

    /// Every candidate must carry a sector; use "Unknown" when none is known.
    #[error("sector cannot be empty for {symbol}")]
    EmptySector {
        /// Symbol of the offending candidate.
        symbol: String,
    },

    /// Volatility is a magnitude and cannot be negative.
    #[error("volatility must be non-negative for {symbol}, got {volatility}")]
    NegativeVolatility {
        /// Symbol of the offending candidate.
        symbol: String,
        /// The invalid volatility that was provided.
        volatility: Decimal,
    },

    /// Symbols key the decision variables and must be unique.
    #[error("duplicate symbol: {symbol}")]
    DuplicateSymbol {
        /// The repeated symbol.
        symbol: String,
    },
}
