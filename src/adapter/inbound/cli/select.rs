//! Handlers for `select` and `fallback`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::json;
use tabled::{Table, Tabled};

use super::command::SelectArgs;
use super::output;
use crate::application::selection::fallback_selection;
use crate::domain::fallback::fallback_basket;
use crate::domain::policy::SelectionPolicy;
use crate::domain::selection::{SelectedTrade, Selection, SelectionSource};
use crate::error::{Error, Result, SelectionError};
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

#[derive(Tabled)]
struct TradeRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Sector")]
    sector: String,
    #[tabled(rename = "Exp. Return")]
    expected_return: String,
    #[tabled(rename = "Volatility")]
    volatility: String,
}

impl From<&SelectedTrade> for TradeRow {
    fn from(trade: &SelectedTrade) -> Self {
        Self {
            symbol: trade.symbol.to_string(),
            sector: trade.sector.to_string(),
            expected_return: percent(trade.expected_return),
            volatility: percent(trade.volatility),
        }
    }
}

fn percent(value: Decimal) -> String {
    format!("{:.2}%", value * Decimal::ONE_HUNDRED)
}

/// Apply CLI overrides on top of the configured policy.
#[must_use]
pub fn resolve_policy(config: &Config, args: &SelectArgs) -> SelectionPolicy {
    let base = config.selection.policy();
    SelectionPolicy::new(
        args.max_trades.unwrap_or(base.max_trades),
        args.max_sectors.unwrap_or(base.max_sectors),
        args.max_volatility.unwrap_or(base.max_volatility),
    )
}

/// Execute `select`.
///
/// Configuration problems are errors; everything after that degrades to the
/// fallback basket.
pub fn execute(config: &Config, args: &SelectArgs) -> Result<()> {
    let policy = resolve_policy(config, args);
    let selector = bootstrap::build_selector(config);
    let query = bootstrap::build_query(config, args.query.as_deref(), args.category);

    let selection = match bootstrap::build_provider(config, args.candidates.as_deref()) {
        Ok(provider) => selector.select_from(provider.as_ref(), &query, &policy),
        Err(Error::Config(e)) => return Err(e.into()),
        Err(e) => fallback_selection(&SelectionError::ProviderFailed(e.to_string())),
    };

    render("select", &selection, Some(&policy));
    Ok(())
}

/// Execute `fallback`.
pub fn execute_fallback() {
    let selection = Selection {
        source: SelectionSource::Fallback,
        fallback_reason: None,
        trades: fallback_basket(),
    };
    render("fallback", &selection, None);
}

fn render(command: &str, selection: &Selection, policy: Option<&SelectionPolicy>) {
    if output::is_json() {
        output::json_output(json!({
            "command": command,
            "source": selection.source,
            "fallback_reason": selection.fallback_reason,
            "total_expected_return": selection.total_expected_return().to_f64().unwrap_or(0.0),
            "trades": selection.trades,
        }));
        return;
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Selection");
    let source = match selection.source {
        SelectionSource::Optimal => output::positive(selection.source),
        SelectionSource::Fallback => output::caution(selection.source),
    };
    output::field("Source", source);
    if let Some(policy) = policy {
        output::field(
            "Policy",
            format!(
                "{} trades, <= {} sectors, volatility <= {}",
                policy.max_trades, policy.max_sectors, policy.max_volatility
            ),
        );
    }
    output::field("Sectors", selection.sector_count());
    output::field("Exp. return", percent(selection.total_expected_return()));
    if let Some(reason) = &selection.fallback_reason {
        output::warning(reason);
    }

    output::section("Trades");
    let rows: Vec<TradeRow> = selection.trades.iter().map(TradeRow::from).collect();
    output::lines(&Table::new(rows).to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn overrides_replace_configured_limits() {
        let config = Config::default();
        let args = SelectArgs {
            max_trades: Some(3),
            max_volatility: Some(dec!(0.5)),
            ..SelectArgs::default()
        };
        let policy = resolve_policy(&config, &args);
        assert_eq!(policy.max_trades, 3);
        assert_eq!(policy.max_sectors, 3);
        assert_eq!(policy.max_volatility, dec!(0.5));
    }

    #[test]
    fn formats_fractions_as_percent() {
        assert_eq!(percent(dec!(0.0525)), "5.25%");
        assert_eq!(percent(dec!(-0.01)), "-1.00%");
    }
}
