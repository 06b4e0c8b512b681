mod index;
mod kpi;
mod peers;

use std::str::FromStr;

use serde_json::Value;

use basketlens_core::{Holdings, RangeKey, Symbol, TickerSeries};

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub fn run(cli: &Cli) -> Result<Value, CliError> {
    match &cli.command {
        Command::Kpi(args) => kpi::run(args),
        Command::Index(args) => index::run(args),
        Command::Peers(args) => peers::run(args),
    }
}

/// Parse repeated `TICKER=SHARES` arguments into a holdings ledger,
/// preserving argument order.
pub fn parse_holdings(args: &[String]) -> Result<Holdings, CliError> {
    let mut holdings = Holdings::new();
    for raw in args {
        let (ticker, shares) = raw
            .split_once('=')
            .ok_or_else(|| CliError::InvalidHolding { value: raw.clone() })?;
        let shares: u64 = shares
            .trim()
            .parse()
            .map_err(|_| CliError::InvalidHolding { value: raw.clone() })?;

        let symbol = Symbol::parse(ticker)?;
        holdings.add(symbol.clone());
        holdings
            .set_shares(&symbol, shares)
            .expect("symbol was just added");
    }
    Ok(holdings)
}

pub fn parse_range(raw: &str) -> Result<RangeKey, CliError> {
    Ok(RangeKey::from_str(raw)?)
}

/// Pull the held tickers' series out of the loaded dataset, erroring
/// on tickers with no series file at all. Tickers present but empty
/// are legitimate and flow through to the pipeline's `None` handling.
pub fn select_held<'a>(
    dataset: &'a [TickerSeries],
    holdings: &Holdings,
) -> Result<Vec<&'a TickerSeries>, CliError> {
    holdings
        .entries()
        .iter()
        .map(|holding| {
            dataset
                .iter()
                .find(|series| series.symbol == holding.symbol)
                .ok_or_else(|| CliError::MissingSeries {
                    ticker: holding.symbol.to_string(),
                })
        })
        .collect()
}

pub fn find_series<'a>(dataset: &'a [TickerSeries], symbol: &Symbol) -> Option<&'a TickerSeries> {
    dataset.iter().find(|series| &series.symbol == symbol)
}
