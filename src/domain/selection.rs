//! Selection results returned to callers.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::candidate::Candidate;
use super::id::{Sector, Symbol};

/// One selected instrument.
///
/// Optimal and fallback results share this record so consumers need no
/// branching to read either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedTrade {
    pub symbol: Symbol,
    #[serde(with = "rust_decimal::serde::float")]
    pub expected_return: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub volatility: Decimal,
    pub sector: Sector,
}

impl From<&Candidate> for SelectedTrade {
    fn from(candidate: &Candidate) -> Self {
        Self {
            symbol: candidate.symbol.clone(),
            expected_return: candidate.expected_return,
            volatility: candidate.volatility,
            sector: candidate.sector.clone(),
        }
    }
}

/// Which path produced a [`Selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionSource {
    /// The solver proved the selection optimal.
    Optimal,
    /// The fixed fallback basket.
    Fallback,
}

impl fmt::Display for SelectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Optimal => write!(f, "optimal"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// Final result of a trade selection. Always non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub source: SelectionSource,
    /// Why the fallback was used; `None` on the optimal path.
    pub fallback_reason: Option<String>,
    pub trades: Vec<SelectedTrade>,
}

impl Selection {
    #[must_use]
    pub const fn optimal(trades: Vec<SelectedTrade>) -> Self {
        Self {
            source: SelectionSource::Optimal,
            fallback_reason: None,
            trades,
        }
    }

    #[must_use]
    pub fn fallback(trades: Vec<SelectedTrade>, reason: impl Into<String>) -> Self {
        Self {
            source: SelectionSource::Fallback,
            fallback_reason: Some(reason.into()),
            trades,
        }
    }

    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.source == SelectionSource::Optimal
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.trades.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    /// Sum of expected returns over the selected trades.
    #[must_use]
    pub fn total_expected_return(&self) -> Decimal {
        self.trades.iter().map(|t| t.expected_return).sum()
    }

    /// Number of distinct known sectors in the selection.
    #[must_use]
    pub fn sector_count(&self) -> usize {
        let mut sectors: Vec<&Sector> = self
            .trades
            .iter()
            .map(|t| &t.sector)
            .filter(|s| !s.is_unknown())
            .collect();
        sectors.sort();
        sectors.dedup();
        sectors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn trade(symbol: &str, ret: Decimal, sector: &str) -> SelectedTrade {
        SelectedTrade::from(&Candidate::new(symbol, ret, dec!(0.1), sector))
    }

    #[test]
    fn sector_count_ignores_unknown() {
        let selection = Selection::optimal(vec![
            trade("A", dec!(0.01), "Technology"),
            trade("B", dec!(0.02), "Technology"),
            trade("C", dec!(0.03), "Unknown"),
            trade("D", dec!(0.04), "Energy"),
        ]);
        assert_eq!(selection.sector_count(), 2);
        assert_eq!(selection.total_expected_return(), dec!(0.10));
    }

    #[test]
    fn serializes_source_and_float_fields() {
        let selection = Selection::fallback(vec![trade("A", dec!(0.05), "Energy")], "infeasible");
        let value = serde_json::to_value(&selection).unwrap();
        assert_eq!(value["source"], "fallback");
        assert_eq!(value["fallback_reason"], "infeasible");
        assert_eq!(value["trades"][0]["expected_return"], 0.05);
        assert_eq!(value["trades"][0]["sector"], "Energy");
    }
}
