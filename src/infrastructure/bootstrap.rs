//! Infrastructure bootstrap helpers for runtime wiring.

use std::path::Path;

use tracing::info;

use crate::adapter::outbound::catalog::{CatalogProvider, StaticProvider};
use crate::adapter::outbound::solver::HiGHSSolver;
use crate::application::selection::TradeSelector;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::feature::{AssetCategory, FeatureProvider, InstrumentQuery};

/// Build the selector with the configured solver budget.
#[must_use]
pub fn build_selector(config: &Config) -> TradeSelector<HiGHSSolver> {
    let solver = HiGHSSolver::new().with_time_limit(config.selection.solve_timeout());
    TradeSelector::new(solver)
}

/// Build the feature provider.
///
/// A pre-scored JSON candidate file takes precedence over the configured
/// catalog.
///
/// # Errors
///
/// Returns an error if no source is configured or the source cannot be loaded.
#[allow(clippy::result_large_err)]
pub fn build_provider(
    config: &Config,
    candidates: Option<&Path>,
) -> Result<Box<dyn FeatureProvider>> {
    if let Some(path) = candidates {
        info!(path = %path.display(), "Using pre-scored candidates");
        return Ok(Box::new(StaticProvider::load_json(path)?));
    }

    match &config.catalog.path {
        Some(path) => Ok(Box::new(CatalogProvider::load(path)?)),
        None => Err(ConfigError::InvalidValue {
            field: "catalog.path",
            reason: "no catalog configured and no candidates file given".to_string(),
        }
        .into()),
    }
}

/// Build the candidate query from configuration and CLI filters.
#[must_use]
pub fn build_query(
    config: &Config,
    text: Option<&str>,
    category: Option<AssetCategory>,
) -> InstrumentQuery {
    InstrumentQuery {
        text: text.unwrap_or_default().to_string(),
        category,
        limit: config.selection.candidate_limit,
    }
}
