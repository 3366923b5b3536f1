//! Fixed fallback basket.
//!
//! Returned whenever the optimizer cannot produce a selection. The values are
//! static, not derived from live data; the basket only guarantees callers a
//! well-formed, non-empty result.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::id::{Sector, Symbol};
use super::selection::SelectedTrade;

/// (symbol, expected return, volatility, sector)
const BASKET: [(&str, Decimal, Decimal, &str); 5] = [
    ("AAPL", dec!(0.08), dec!(0.25), "Technology"),
    ("MSFT", dec!(0.07), dec!(0.22), "Technology"),
    ("JPM", dec!(0.06), dec!(0.20), "Financial"),
    ("JNJ", dec!(0.05), dec!(0.15), "Healthcare"),
    ("XOM", dec!(0.04), dec!(0.28), "Energy"),
];

/// Number of trades in the fallback basket.
pub const FALLBACK_SIZE: usize = BASKET.len();

/// Build the fallback basket.
#[must_use]
pub fn fallback_basket() -> Vec<SelectedTrade> {
    BASKET
        .iter()
        .map(|(symbol, expected_return, volatility, sector)| SelectedTrade {
            symbol: Symbol::new(*symbol),
            expected_return: *expected_return,
            volatility: *volatility,
            sector: Sector::new(*sector),
        })
        .collect()
}
