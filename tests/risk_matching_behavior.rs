//! Behavior-driven tests for risk-bucket matching
//!
//! These tests verify HOW the portfolio's bucket is inferred from its
//! constituents and HOW peer candidates are selected and ranked
//! end-to-end through the same windowing as the portfolio.

use basketlens_core::{
    comparison_snapshot, compute_snapshot, portfolio_bucket, rank_peers, BasketWindow, Holdings,
    RangeKey, RiskBucket, TickerSeries, UniverseRow,
};
use basketlens_tests::{series, sym};

fn row(ticker: &str, name: &str, asset_class: &str, bucket: &str) -> UniverseRow {
    UniverseRow {
        ticker: sym(ticker),
        name: name.to_owned(),
        asset_class: asset_class.to_owned(),
        risk_bucket: bucket.to_owned(),
    }
}

fn flat_then(ticker: &str, last: f64) -> TickerSeries {
    series(
        ticker,
        &["2024-01-02", "2024-01-03", "2024-01-04"],
        &[100.0, 100.0, last],
    )
}

// =============================================================================
// Bucket inference
// =============================================================================

#[test]
fn heavier_bucket_wins_the_portfolio_classification() {
    // Given: a bond-heavy basket with a small high-risk sleeve
    let universe = vec![
        row("BND", "Total Bond Market", "etf", "low"),
        row("ARKK", "Innovation Fund", "etf", "high"),
    ];
    let mut holdings = Holdings::new();
    holdings.add(sym("BND"));
    holdings.add(sym("ARKK"));
    holdings.set_shares(&sym("BND"), 9).expect("symbol present");

    // Then: the low bucket's weight mass dominates
    assert_eq!(portfolio_bucket(&holdings, &universe), RiskBucket::Low);
}

#[test]
fn tickers_outside_the_universe_count_as_unknown() {
    let universe = vec![row("BND", "Total Bond Market", "etf", "low")];
    let holdings = Holdings::equal_shares([sym("MYSTERY")]);

    assert_eq!(portfolio_bucket(&holdings, &universe), RiskBucket::Unknown);
}

#[test]
fn free_text_labels_and_heuristics_cooperate() {
    // Given: one row with a usable label, one that needs the keyword
    // heuristic, one that defaults to medium
    let labeled = row("AAA", "Something", "equity", "LOW volatility");
    let keyword = row("BBB", "Emerging Markets Leveraged", "etf", "n/a");
    let default = row("CCC", "Plain Equity Fund", "equity", "n/a");

    assert_eq!(labeled.bucket(), RiskBucket::Low);
    assert_eq!(keyword.bucket(), RiskBucket::High);
    assert_eq!(default.bucket(), RiskBucket::Medium);
}

// =============================================================================
// Peer selection and ranking
// =============================================================================

#[test]
fn peer_search_widens_to_adjacent_buckets_only() {
    // Given: a low-risk portfolio and a universe spanning all buckets
    let universe = vec![
        row("BND", "Bond Fund", "etf", "low"),
        row("LOW2", "Treasury Ladder", "etf", "low"),
        row("MED1", "Balanced Fund", "etf", "medium"),
        row("HI1", "Crypto Basket", "etf", "high"),
    ];
    let holdings = Holdings::equal_shares([sym("BND")]);

    // When: peers are ranked with uniform KPIs
    let flat = basketlens_core::Kpi {
        total_return: 0.05,
        cagr: 0.05,
        max_drawdown: 0.0,
    };
    let peers = rank_peers(&universe, &holdings, None, flat, |_| Some(flat));

    // Then: low and medium candidates are eligible, high is not
    let symbols: Vec<&str> = peers.iter().map(|p| p.symbol.as_str()).collect();
    assert!(symbols.contains(&"LOW2"));
    assert!(symbols.contains(&"MED1"));
    assert!(!symbols.contains(&"HI1"));
    assert!(!symbols.contains(&"BND"), "held tickers are excluded");
}

#[test]
fn winners_beat_the_portfolio_through_the_shared_window() {
    // Given: a portfolio returning 5% and three candidates with data
    let basket = flat_then("AAA", 105.0);
    let holdings = Holdings::equal_shares([sym("AAA")]);
    let snapshot = compute_snapshot(std::slice::from_ref(&basket), &holdings, RangeKey::All)
        .expect("computable");
    let window = BasketWindow::new(std::slice::from_ref(&basket), RangeKey::All);

    let universe = vec![
        row("AAA", "Held", "equity", "medium"),
        row("WIN", "Winner", "equity", "medium"),
        row("LAG", "Laggard", "equity", "medium"),
        row("NODATA", "Missing", "equity", "medium"),
    ];
    let dataset = vec![flat_then("WIN", 112.0), flat_then("LAG", 101.0)];

    // When: candidates are KPI'd exactly like the portfolio
    let peers = rank_peers(&universe, &holdings, None, snapshot.kpi, |symbol| {
        dataset
            .iter()
            .find(|s| &s.symbol == symbol)
            .and_then(|s| comparison_snapshot(s, &window))
            .map(|c| c.kpi)
    });

    // Then: only the strict winner remains, the laggard and the
    // data-less candidate are gone
    let symbols: Vec<&str> = peers.iter().map(|p| p.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["WIN"]);
}

#[test]
fn without_winners_the_full_ranking_is_returned_sorted() {
    // Given: a hot portfolio nobody beats
    let basket = flat_then("AAA", 150.0);
    let holdings = Holdings::equal_shares([sym("AAA")]);
    let snapshot = compute_snapshot(std::slice::from_ref(&basket), &holdings, RangeKey::All)
        .expect("computable");
    let window = BasketWindow::new(std::slice::from_ref(&basket), RangeKey::All);

    let universe = vec![
        row("AAA", "Held", "equity", "medium"),
        row("ONE", "One", "equity", "medium"),
        row("TWO", "Two", "equity", "medium"),
    ];
    let dataset = vec![flat_then("ONE", 103.0), flat_then("TWO", 108.0)];

    // When: peers are ranked
    let peers = rank_peers(&universe, &holdings, None, snapshot.kpi, |symbol| {
        dataset
            .iter()
            .find(|s| &s.symbol == symbol)
            .and_then(|s| comparison_snapshot(s, &window))
            .map(|c| c.kpi)
    });

    // Then: everyone comes back, best first
    let symbols: Vec<&str> = peers.iter().map(|p| p.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["TWO", "ONE"]);
}
