//! Traderiser - constrained trade selection.
//!
//! Picks exactly `max_trades` instruments from a scored candidate pool,
//! maximizing total expected return subject to a sector budget and a
//! volatility cap. The problem is a 0/1 integer program solved by HiGHS
//! via `good_lp`. When no optimal answer is available the caller gets a
//! fixed, diversified fallback basket instead of an error.
//!
//! # Modules
//!
//! - [`domain`] - Candidates, policy limits, selections, the fallback basket
//! - [`port`] - Traits for feature providers and ILP solvers
//! - [`adapter`] - Catalog and static providers, the HiGHS solver, the CLI
//! - [`application`] - Model construction and the selection service
//! - [`infrastructure`] - Configuration, logging and wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use rust_decimal_macros::dec;
//! use traderiser::adapter::outbound::solver::HiGHSSolver;
//! use traderiser::application::selection::TradeSelector;
//! use traderiser::domain::{Candidate, SelectionPolicy};
//!
//! let candidates = vec![
//!     Candidate::new("AAPL", dec!(0.08), dec!(0.25), "Technology"),
//!     Candidate::new("JPM", dec!(0.06), dec!(0.20), "Financial"),
//! ];
//! let selector = TradeSelector::new(HiGHSSolver::new());
//! let selection = selector.select(&candidates, &SelectionPolicy::new(2, 2, dec!(0.3)));
//! assert_eq!(selection.len(), 2);
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
