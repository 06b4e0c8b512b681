//! CLI argument definitions for basketlens.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `kpi` | KPIs for one per-ticker series file |
//! | `index` | Weighted portfolio index + KPIs for a basket |
//! | `peers` | Similar-risk winners from the universe table |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Basket analytics over static per-ticker series files.
///
/// Loads the JSON files the data pipeline produces, reconciles integer
/// share counts into weights, and prints the normalized portfolio
/// index, its KPIs, and risk-matched peer comparisons.
#[derive(Debug, Parser)]
#[command(name = "basketlens", version, about = "Portfolio basket analytics CLI")]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single JSON object output.
    Json,
    /// Key/value table for terminal display.
    Table,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute total return, CAGR, and max drawdown for one series file.
    Kpi(KpiArgs),
    /// Compute the weighted portfolio index and KPIs for a basket.
    Index(IndexArgs),
    /// Rank similar-risk winners against the portfolio.
    Peers(PeersArgs),
}

#[derive(Debug, Args)]
pub struct KpiArgs {
    /// Path to a per-ticker series JSON file.
    pub file: PathBuf,

    /// Lookback window: 1D, 5D, 6M, YTD, 1Y, 5Y, ALL.
    #[arg(long, default_value = "ALL")]
    pub range: String,
}

#[derive(Debug, Args)]
pub struct IndexArgs {
    /// Directory of per-ticker series JSON files.
    #[arg(long)]
    pub data_dir: PathBuf,

    /// Holdings as TICKER=SHARES pairs; repeat per ticker.
    #[arg(long = "holding", required = true)]
    pub holdings: Vec<String>,

    /// Lookback window: 1D, 5D, 6M, YTD, 1Y, 5Y, ALL.
    #[arg(long, default_value = "ALL")]
    pub range: String,

    /// Benchmark ticker to compare against, if any.
    #[arg(long)]
    pub benchmark: Option<String>,
}

#[derive(Debug, Args)]
pub struct PeersArgs {
    /// Directory of per-ticker series JSON files.
    #[arg(long)]
    pub data_dir: PathBuf,

    /// Path to the universe reference table JSON file.
    #[arg(long)]
    pub universe: PathBuf,

    /// Holdings as TICKER=SHARES pairs; repeat per ticker.
    #[arg(long = "holding", required = true)]
    pub holdings: Vec<String>,

    /// Lookback window: 1D, 5D, 6M, YTD, 1Y, 5Y, ALL.
    #[arg(long, default_value = "ALL")]
    pub range: String,

    /// Active benchmark ticker, excluded from peer candidates.
    #[arg(long)]
    pub benchmark: Option<String>,
}
