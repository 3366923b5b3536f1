//! Trade selection configuration.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::policy::SelectionPolicy;
use crate::port::outbound::feature::InstrumentQuery;

/// Policy limits and solver budget for trade selection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SelectionConfig {
    /// Exact number of instruments to select (default: 5).
    #[serde(default = "default_max_trades")]
    pub max_trades: usize,
    /// Maximum distinct known sectors in a selection (default: 3).
    #[serde(default = "default_max_sectors")]
    pub max_sectors: usize,
    /// Volatility cap; candidates above it are excluded (default: 0.3).
    #[serde(default = "default_max_volatility")]
    pub max_volatility: Decimal,
    /// Wall-clock budget for one solve in seconds (default: 10).
    #[serde(default = "default_solve_timeout_secs")]
    pub solve_timeout_secs: u64,
    /// Maximum candidates fetched from the provider (default: 50).
    #[serde(default = "default_candidate_limit")]
    pub candidate_limit: usize,
}

const fn default_max_trades() -> usize {
    SelectionPolicy::DEFAULT_MAX_TRADES
}

const fn default_max_sectors() -> usize {
    SelectionPolicy::DEFAULT_MAX_SECTORS
}

const fn default_max_volatility() -> Decimal {
    SelectionPolicy::DEFAULT_MAX_VOLATILITY
}

const fn default_solve_timeout_secs() -> u64 {
    10
}

const fn default_candidate_limit() -> usize {
    InstrumentQuery::DEFAULT_LIMIT
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            max_trades: default_max_trades(),
            max_sectors: default_max_sectors(),
            max_volatility: default_max_volatility(),
            solve_timeout_secs: default_solve_timeout_secs(),
            candidate_limit: default_candidate_limit(),
        }
    }
}

impl SelectionConfig {
    /// Policy limits for the selector.
    #[must_use]
    pub const fn policy(&self) -> SelectionPolicy {
        SelectionPolicy::new(self.max_trades, self.max_sectors, self.max_volatility)
    }

    /// Solver time budget.
    #[must_use]
    pub const fn solve_timeout(&self) -> Duration {
        Duration::from_secs(self.solve_timeout_secs)
    }
}
