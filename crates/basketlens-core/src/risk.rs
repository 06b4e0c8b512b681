//! Risk-bucket classification and peer candidate ranking.
//!
//! Buckets are coarse by design: free-text labels normalize to
//! low/medium/high/unknown, tickers without a usable label get a
//! keyword heuristic from their asset-class/name text, and peer search
//! widens to adjacent buckets so a thin universe still produces
//! comparisons.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{Holdings, Kpi, Symbol};

const MAX_PEERS: usize = 6;

const LOW_RISK_KEYWORDS: &[&str] = &["bond", "treasury", "cash", "utilities", "staples"];
const HIGH_RISK_KEYWORDS: &[&str] = &["emerging", "sector", "leveraged", "crypto"];

/// Coarse categorical risk label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBucket {
    Low,
    Medium,
    High,
    Unknown,
}

impl RiskBucket {
    /// Normalize a free-text label by substring match; anything
    /// unmatched is `Unknown`.
    pub fn normalize(label: &str) -> Self {
        let lower = label.trim().to_lowercase();
        if lower.is_empty() {
            return Self::Unknown;
        }
        if lower.contains("low") {
            Self::Low
        } else if lower.contains("medium") || lower.contains("mid") {
            Self::Medium
        } else if lower.contains("high") {
            Self::High
        } else {
            Self::Unknown
        }
    }

    /// Heuristic fallback bucket from asset-class/name text.
    pub fn infer(asset_class: &str, name: &str) -> Self {
        let text = format!("{} {}", asset_class, name).to_lowercase();
        if LOW_RISK_KEYWORDS.iter().any(|kw| text.contains(kw)) {
            Self::Low
        } else if HIGH_RISK_KEYWORDS.iter().any(|kw| text.contains(kw)) {
            Self::High
        } else {
            Self::Medium
        }
    }

    /// Buckets considered comparable for peer search. Fixed policy
    /// table; `Unknown` portfolios match everything.
    pub fn adjacent(self) -> &'static [RiskBucket] {
        match self {
            Self::Low => &[Self::Low, Self::Medium],
            Self::Medium => &[Self::Medium, Self::Low, Self::High],
            Self::High => &[Self::High, Self::Medium],
            Self::Unknown => &[Self::Unknown, Self::Low, Self::Medium, Self::High],
        }
    }
}

impl Display for RiskBucket {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// Static reference metadata for one universe ticker. Read-only to
/// the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniverseRow {
    pub ticker: Symbol,
    pub name: String,
    pub asset_class: String,
    pub risk_bucket: String,
}

impl UniverseRow {
    /// Effective bucket: the normalized label, or the keyword
    /// heuristic when the label is unusable.
    pub fn bucket(&self) -> RiskBucket {
        match RiskBucket::normalize(&self.risk_bucket) {
            RiskBucket::Unknown => RiskBucket::infer(&self.asset_class, &self.name),
            bucket => bucket,
        }
    }
}

/// Dominant bucket of the portfolio: each holding's weight accumulates
/// into its ticker's bucket, the heaviest bucket wins, ties break by
/// encounter order of the holdings.
pub fn portfolio_bucket(holdings: &Holdings, universe: &[UniverseRow]) -> RiskBucket {
    let mut seen: Vec<(RiskBucket, f64)> = Vec::new();

    for (symbol, weight) in holdings.weights() {
        let bucket = universe
            .iter()
            .find(|row| row.ticker == symbol)
            .map(|row| row.bucket())
            .unwrap_or(RiskBucket::Unknown);

        match seen.iter_mut().find(|(b, _)| *b == bucket) {
            Some((_, mass)) => *mass += weight,
            None => seen.push((bucket, weight)),
        }
    }

    let mut best = RiskBucket::Unknown;
    let mut best_mass = f64::NEG_INFINITY;
    for (bucket, mass) in seen {
        // Strict comparison keeps the first-encountered bucket on ties.
        if mass > best_mass {
            best = bucket;
            best_mass = mass;
        }
    }
    best
}

/// A ranked similar-risk comparison candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeerCandidate {
    pub symbol: Symbol,
    pub name: String,
    pub bucket: RiskBucket,
    pub kpi: Kpi,
}

/// Rank "similar-risk winners" for the portfolio.
///
/// Candidates come from the universe rows whose bucket is adjacent to
/// the portfolio's, excluding held tickers and the active benchmark.
/// `candidate_kpi` must compute each candidate's KPI over the same
/// window and normalization as the portfolio itself and return `None`
/// when the candidate has no price data. Candidates strictly beating
/// the portfolio's total return are preferred; if none do, the full
/// ranking is returned. At most six results.
pub fn rank_peers(
    universe: &[UniverseRow],
    holdings: &Holdings,
    benchmark: Option<&Symbol>,
    portfolio_kpi: Kpi,
    mut candidate_kpi: impl FnMut(&Symbol) -> Option<Kpi>,
) -> Vec<PeerCandidate> {
    let bucket = portfolio_bucket(holdings, universe);
    let adjacent = bucket.adjacent();

    let mut candidates: Vec<PeerCandidate> = universe
        .iter()
        .filter(|row| adjacent.contains(&row.bucket()))
        .filter(|row| !holdings.contains(&row.ticker))
        .filter(|row| benchmark != Some(&row.ticker))
        .filter_map(|row| {
            candidate_kpi(&row.ticker).map(|kpi| PeerCandidate {
                symbol: row.ticker.clone(),
                name: row.name.clone(),
                bucket: row.bucket(),
                kpi,
            })
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.kpi
            .total_return
            .partial_cmp(&a.kpi.total_return)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let winners: Vec<PeerCandidate> = candidates
        .iter()
        .filter(|c| c.kpi.total_return > portfolio_kpi.total_return)
        .cloned()
        .collect();

    let mut result = if winners.is_empty() { candidates } else { winners };
    result.truncate(MAX_PEERS);
    result
}
