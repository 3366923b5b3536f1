//! Integration tests for the catalog provider against the demo catalog.

use std::path::{Path, PathBuf};

use rust_decimal_macros::dec;
use traderiser::adapter::outbound::catalog::{CatalogProvider, StaticProvider};
use traderiser::adapter::outbound::solver::HiGHSSolver;
use traderiser::application::selection::TradeSelector;
use traderiser::domain::id::Sector;
use traderiser::domain::policy::SelectionPolicy;
use traderiser::port::outbound::feature::{AssetCategory, FeatureProvider, InstrumentQuery};
use traderiser::testkit::domain::equities;

fn demo_catalog() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/catalog.toml")
}

#[test]
fn demo_catalog_loads_and_scores() {
    let provider = CatalogProvider::load(demo_catalog()).expect("demo catalog");
    assert_eq!(provider.len(), 13);

    let candidates = provider.candidates(&InstrumentQuery::default()).unwrap();
    // DOGE has no price data.
    assert_eq!(candidates.len(), 12);
    assert!(candidates.iter().all(|c| c.symbol.as_str() != "DOGE"));

    let ko = candidates.iter().find(|c| c.symbol.as_str() == "KO").unwrap();
    assert_eq!(ko.volatility, dec!(1.0));
    assert_eq!(ko.expected_return, dec!(0.002));

    let eth = candidates.iter().find(|c| c.symbol.as_str() == "ETH").unwrap();
    assert_eq!(eth.expected_return, dec!(-0.04));
    assert_eq!(eth.volatility, dec!(0.04));
    assert_eq!(eth.sector, Sector::unknown());
}

#[test]
fn demo_catalog_category_query() {
    let provider = CatalogProvider::load(demo_catalog()).unwrap();
    let query = InstrumentQuery {
        category: Some(AssetCategory::Crypto),
        ..InstrumentQuery::default()
    };
    let symbols: Vec<String> = provider
        .candidates(&query)
        .unwrap()
        .into_iter()
        .map(|c| c.symbol.to_string())
        .collect();
    assert_eq!(symbols, ["BTC", "ETH"]);
}

#[test]
fn demo_catalog_selects_optimal_basket() {
    let provider = CatalogProvider::load(demo_catalog()).unwrap();
    let selector = TradeSelector::new(HiGHSSolver::new());

    let selection =
        selector.select_from(&provider, &InstrumentQuery::default(), &SelectionPolicy::default());

    assert!(selection.is_optimal());
    let mut symbols: Vec<&str> = selection.trades.iter().map(|t| t.symbol.as_str()).collect();
    symbols.sort_unstable();
    assert_eq!(symbols, ["AAPL", "BTC", "JPM", "MSFT", "XOM"]);
    assert_eq!(selection.total_expected_return(), dec!(0.071));
    assert_eq!(selection.sector_count(), 3);
}

#[test]
fn narrow_query_falls_back() {
    let provider = CatalogProvider::load(demo_catalog()).unwrap();
    let selector = TradeSelector::new(HiGHSSolver::new());
    let query = InstrumentQuery {
        text: "apple".to_string(),
        ..InstrumentQuery::default()
    };

    let selection = selector.select_from(&provider, &query, &SelectionPolicy::default());

    assert!(!selection.is_optimal());
    assert_eq!(selection.len(), 5);
}

#[test]
fn static_provider_feeds_selector() {
    let provider = StaticProvider::new(equities());
    let selector = TradeSelector::new(HiGHSSolver::new());

    let selection = selector.select_from(
        &provider,
        &InstrumentQuery::default(),
        &SelectionPolicy::new(3, 2, dec!(0.3)),
    );

    assert!(selection.is_optimal());
    let mut symbols: Vec<&str> = selection.trades.iter().map(|t| t.symbol.as_str()).collect();
    symbols.sort_unstable();
    assert_eq!(symbols, ["AAPL", "JPM", "MSFT"]);
}
