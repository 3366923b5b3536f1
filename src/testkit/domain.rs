//! Builders for domain primitives used across tests.
//!
//! Returns and volatilities are given in thousandths so tests read as
//! integers and stay exact: `candidate("A", 50, 200, "Tech")` is a 5%
//! return with 0.2 volatility.

use rust_decimal::Decimal;

use crate::domain::candidate::Candidate;
use crate::domain::id::Sector;

/// Convert thousandths to a [`Decimal`].
pub fn milli(value: i64) -> Decimal {
    Decimal::new(value, 3)
}

/// Create a [`Candidate`] with return and volatility in thousandths.
pub fn candidate(symbol: &str, ret_milli: i64, vol_milli: i64, sector: &str) -> Candidate {
    Candidate::new(symbol, milli(ret_milli), milli(vol_milli), sector)
}

/// Create a [`Candidate`] in the `Unknown` sector.
pub fn unknown(symbol: &str, ret_milli: i64, vol_milli: i64) -> Candidate {
    Candidate::new(symbol, milli(ret_milli), milli(vol_milli), Sector::unknown())
}

/// Build a pool from `(symbol, return, volatility, sector)` tuples in
/// thousandths.
pub fn pool(rows: &[(&str, i64, i64, &str)]) -> Vec<Candidate> {
    rows.iter()
        .map(|(symbol, ret, vol, sector)| candidate(symbol, *ret, *vol, sector))
        .collect()
}

/// Ten well-known equities across five sectors, all below 0.3 volatility
/// except `TSLA` and `NVDA`.
pub fn equities() -> Vec<Candidate> {
    pool(&[
        ("AAPL", 80, 250, "Technology"),
        ("MSFT", 70, 220, "Technology"),
        ("NVDA", 150, 450, "Technology"),
        ("TSLA", 120, 500, "Consumer"),
        ("JPM", 60, 200, "Financial"),
        ("BAC", 55, 210, "Financial"),
        ("JNJ", 50, 150, "Healthcare"),
        ("PFE", 30, 180, "Healthcare"),
        ("XOM", 40, 280, "Energy"),
        ("KO", 35, 120, "Consumer"),
    ])
}

