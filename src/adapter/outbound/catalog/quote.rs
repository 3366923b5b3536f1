//! Raw quote snapshots and their adaptation into candidates.
//!
//! Equities and ETFs use the daily change percent as expected return and beta
//! as volatility (beta defaults to 1.0). Crypto uses the 24h price change for
//! both: the signed change as return and its magnitude as volatility.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use crate::domain::candidate::Candidate;
use crate::domain::id::{Sector, Symbol};
use crate::port::outbound::feature::AssetCategory;

/// Volatility assumed for an equity without a beta.
pub const DEFAULT_BETA: Decimal = dec!(1.0);

const PERCENT: Decimal = dec!(100);

/// One `[[instruments]]` entry of a catalog file.
#[derive(Debug, Clone, Deserialize)]
pub struct InstrumentRecord {
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    pub category: AssetCategory,
    #[serde(default)]
    pub sector: Option<String>,
    /// Daily change in percent (equities, ETFs).
    #[serde(default)]
    pub change_percent: Option<Decimal>,
    /// Market beta (equities, ETFs).
    #[serde(default)]
    pub beta: Option<Decimal>,
    /// 24h price change in percent (crypto).
    #[serde(default)]
    pub price_change_24h: Option<Decimal>,
}

/// Result of adapting one record.
#[derive(Debug, Clone, PartialEq)]
pub enum Adapted {
    /// A complete candidate; `beta_defaulted` marks an equity without beta.
    Scored {
        candidate: Candidate,
        beta_defaulted: bool,
    },
    /// Not enough data to score the instrument.
    NoData,
}

impl InstrumentRecord {
    /// Return true if `text` (lowercased) is a substring of symbol or name.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        text.is_empty()
            || self.symbol.to_lowercase().contains(text)
            || self.name.to_lowercase().contains(text)
    }

    /// Convert the raw snapshot into a candidate.
    #[must_use]
    pub fn adapt(&self) -> Adapted {
        let sector = Sector::or_unknown(self.sector.as_deref());
        match self.category {
            AssetCategory::Stock | AssetCategory::Etf => {
                let change = self.change_percent.unwrap_or(Decimal::ZERO);
                let (volatility, beta_defaulted) = match self.beta {
                    Some(beta) => (beta, false),
                    None => (DEFAULT_BETA, true),
                };
                Adapted::Scored {
                    candidate: Candidate {
                        symbol: Symbol::new(self.symbol.trim()),
                        expected_return: change / PERCENT,
                        volatility,
                        sector,
                    },
                    beta_defaulted,
                }
            }
            AssetCategory::Crypto => match self.price_change_24h {
                Some(change) => Adapted::Scored {
                    candidate: Candidate {
                        symbol: Symbol::new(self.symbol.trim()),
                        expected_return: change / PERCENT,
                        volatility: change.abs() / PERCENT,
                        sector,
                    },
                    beta_defaulted: false,
                },
                None => Adapted::NoData,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: AssetCategory) -> InstrumentRecord {
        InstrumentRecord {
            symbol: "X".into(),
            name: "Example Corp".into(),
            category,
            sector: None,
            change_percent: None,
            beta: None,
            price_change_24h: None,
        }
    }

    #[test]
    fn equity_uses_change_percent_and_beta() {
        let mut r = record(AssetCategory::Stock);
        r.sector = Some("Technology".into());
        r.change_percent = Some(dec!(1.5));
        r.beta = Some(dec!(0.8));

        let Adapted::Scored { candidate, beta_defaulted } = r.adapt() else {
            panic!("expected scored candidate");
        };
        assert_eq!(candidate.expected_return, dec!(0.015));
        assert_eq!(candidate.volatility, dec!(0.8));
        assert_eq!(candidate.sector.as_str(), "Technology");
        assert!(!beta_defaulted);
    }

    #[test]
    fn equity_defaults_beta_and_sector() {
        let Adapted::Scored { candidate, beta_defaulted } = record(AssetCategory::Etf).adapt()
        else {
            panic!("expected scored candidate");
        };
        assert_eq!(candidate.expected_return, Decimal::ZERO);
        assert_eq!(candidate.volatility, DEFAULT_BETA);
        assert!(candidate.sector.is_unknown());
        assert!(beta_defaulted);
    }

    #[test]
    fn crypto_uses_absolute_change_as_volatility() {
        let mut r = record(AssetCategory::Crypto);
        r.price_change_24h = Some(dec!(-4.2));

        let Adapted::Scored { candidate, .. } = r.adapt() else {
            panic!("expected scored candidate");
        };
        assert_eq!(candidate.expected_return, dec!(-0.042));
        assert_eq!(candidate.volatility, dec!(0.042));
    }

    #[test]
    fn crypto_without_change_has_no_data() {
        assert_eq!(record(AssetCategory::Crypto).adapt(), Adapted::NoData);
    }

    #[test]
    fn matches_symbol_or_name() {
        let r = record(AssetCategory::Stock);
        assert!(r.matches(""));
        assert!(r.matches("x"));
        assert!(r.matches("example"));
        assert!(!r.matches("apple"));
    }
}
