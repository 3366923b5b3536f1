//! Command-line interface definitions.
//!
//! Defines the CLI structure for the traderiser application using `clap`.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::port::outbound::feature::AssetCategory;

/// Constrained trade selection CLI
#[derive(Parser, Debug)]
#[command(name = "traderiser")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to configuration file (defaults apply when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the traderiser CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Select the optimal trade basket
    Select(SelectArgs),

    /// Print the fallback basket
    Fallback,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `traderiser config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate a configuration file for correctness.
    Validate,
}

/// Arguments for `traderiser select`.
#[derive(Parser, Debug, Default)]
pub struct SelectArgs {
    /// JSON file with pre-scored candidates (overrides the catalog)
    #[arg(long)]
    pub candidates: Option<PathBuf>,

    /// Only consider instruments whose symbol or name contains this text
    #[arg(long)]
    pub query: Option<String>,

    /// Only consider one category [stock, etf, crypto]
    #[arg(long)]
    pub category: Option<AssetCategory>,

    /// Override: exact number of trades to select
    #[arg(long)]
    pub max_trades: Option<usize>,

    /// Override: maximum number of distinct sectors
    #[arg(long)]
    pub max_sectors: Option<usize>,

    /// Override: volatility cap (fraction, e.g. 0.3)
    #[arg(long)]
    pub max_volatility: Option<Decimal>,
}
