//! Integer share ledger and weight derivation.
//!
//! Shares are the source of truth; percentages are always derived so
//! the two representations cannot drift. Every edit is integer-exact:
//! apportionment uses the largest-remainder method with ties broken by
//! ascending ticker name.

use serde::{Deserialize, Serialize};

use crate::{Symbol, ValidationError};

pub const DEFAULT_SHARES: u64 = 1;

/// One position: a ticker and its non-negative integer share count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: Symbol,
    pub shares: u64,
}

/// Order-preserving, unique-by-ticker collection of holdings.
///
/// Encounter order is kept stable because it is the deterministic
/// tie-break for portfolio bucket inference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holdings {
    entries: Vec<Holding>,
}

impl Holdings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a ledger with one default share per selected ticker.
    pub fn equal_shares(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        let mut holdings = Self::new();
        for symbol in symbols {
            holdings.add(symbol);
        }
        holdings
    }

    pub fn entries(&self) -> &[Holding] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|h| h.shares).sum()
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.position(symbol).is_some()
    }

    pub fn shares(&self, symbol: &Symbol) -> Option<u64> {
        self.position(symbol).map(|i| self.entries[i].shares)
    }

    fn position(&self, symbol: &Symbol) -> Option<usize> {
        self.entries.iter().position(|h| &h.symbol == symbol)
    }

    /// True until any holding has been moved away from the one-share
    /// default. Load-bearing for [`Holdings::add`].
    fn is_untouched(&self) -> bool {
        self.entries.iter().all(|h| h.shares == DEFAULT_SHARES)
    }

    /// Add a ticker to the selection.
    ///
    /// While the ledger is untouched (every holding still at the
    /// default of one share) the whole ledger resets to equal shares
    /// so the entrant is not silently diluted. After any user edit the
    /// entrant enters at one share and the rest are left alone.
    pub fn add(&mut self, symbol: Symbol) {
        if self.contains(&symbol) {
            return;
        }
        let untouched = self.is_untouched();
        self.entries.push(Holding {
            symbol,
            shares: DEFAULT_SHARES,
        });
        if untouched {
            for holding in &mut self.entries {
                holding.shares = DEFAULT_SHARES;
            }
        }
    }

    /// Drop a ticker's holding outright.
    pub fn remove(&mut self, symbol: &Symbol) {
        self.entries.retain(|h| &h.symbol != symbol);
    }

    /// Edit 1: set one ticker's shares directly, no rebalancing.
    pub fn set_shares(&mut self, symbol: &Symbol, shares: u64) -> Result<(), ValidationError> {
        let index = self
            .position(symbol)
            .ok_or_else(|| ValidationError::UnknownHolding {
                symbol: symbol.to_string(),
            })?;
        self.entries[index].shares = shares;
        Ok(())
    }

    /// Edit 2: set one ticker's target percent of the basket and
    /// rebalance the rest proportionally.
    ///
    /// The edited ticker receives `ceil(pct/100 * total)` shares
    /// (clamped to the current total); the others apportion
    /// `total - floor(pct/100 * total)` in proportion to their current
    /// shares (evenly, by ascending ticker name, if all are zero). The
    /// grand total therefore grows by one unit exactly when the ceil
    /// rounds up, and is preserved otherwise.
    pub fn set_percent(&mut self, symbol: &Symbol, pct: f64) -> Result<(), ValidationError> {
        if !pct.is_finite() || !(0.0..=100.0).contains(&pct) {
            return Err(ValidationError::PercentOutOfRange { value: pct });
        }
        let index = self
            .position(symbol)
            .ok_or_else(|| ValidationError::UnknownHolding {
                symbol: symbol.to_string(),
            })?;

        let total = self.total();
        if total == 0 {
            return Ok(());
        }

        let exact = pct / 100.0 * total as f64;
        let desired = (exact.ceil() as u64).min(total);
        let pool = total - (exact.floor() as u64).min(total);

        let mut others: Vec<(Symbol, f64)> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, h)| (h.symbol.clone(), h.shares as f64))
            .collect();
        if others.iter().all(|(_, w)| *w == 0.0) {
            for (_, w) in &mut others {
                *w = 1.0;
            }
        }

        let apportioned = apportion(&others, pool);
        self.entries[index].shares = desired;
        for ((symbol, _), shares) in others.into_iter().zip(apportioned) {
            let position = self.position(&symbol).expect("symbol taken from entries");
            self.entries[position].shares = shares;
        }
        Ok(())
    }

    /// Edit 3: set a new grand total, preserving current ratios.
    ///
    /// A zero current total falls back to an even split with the
    /// remainder handed out by ascending ticker name.
    pub fn set_total(&mut self, new_total: u64) {
        if self.entries.is_empty() {
            return;
        }

        let weights: Vec<(Symbol, f64)> = if self.total() == 0 {
            self.entries
                .iter()
                .map(|h| (h.symbol.clone(), 1.0))
                .collect()
        } else {
            self.entries
                .iter()
                .map(|h| (h.symbol.clone(), h.shares as f64))
                .collect()
        };

        let apportioned = apportion(&weights, new_total);
        for ((symbol, _), shares) in weights.into_iter().zip(apportioned) {
            let position = self.position(&symbol).expect("symbol taken from entries");
            self.entries[position].shares = shares;
        }
    }

    /// Derived percentage weight per holding, in encounter order.
    ///
    /// Weights sum to 1 whenever any shares exist; a ledger with no
    /// shares at all yields all-zero weights.
    pub fn weights(&self) -> Vec<(Symbol, f64)> {
        let total = self.total();
        self.entries
            .iter()
            .map(|h| {
                let w = if total == 0 {
                    0.0
                } else {
                    h.shares as f64 / total as f64
                };
                (h.symbol.clone(), w)
            })
            .collect()
    }

    /// Derived percent for one ticker, recomputed on demand.
    pub fn percent(&self, symbol: &Symbol) -> Option<f64> {
        let total = self.total();
        self.shares(symbol).map(|shares| {
            if total == 0 {
                0.0
            } else {
                shares as f64 / total as f64 * 100.0
            }
        })
    }
}

/// Largest-remainder apportionment: distribute `total` integer units
/// proportionally to `weights` (not necessarily normalized). Each
/// entry gets the floor of its exact quota; leftover units go one by
/// one to the largest fractional remainders, ties broken by ascending
/// ticker name.
pub fn apportion(weights: &[(Symbol, f64)], total: u64) -> Vec<u64> {
    if weights.is_empty() {
        return Vec::new();
    }

    let sum: f64 = weights.iter().map(|(_, w)| w.max(0.0)).sum();
    let quotas: Vec<f64> = if sum > 0.0 {
        weights
            .iter()
            .map(|(_, w)| w.max(0.0) / sum * total as f64)
            .collect()
    } else {
        vec![total as f64 / weights.len() as f64; weights.len()]
    };

    let mut allocated: Vec<u64> = quotas.iter().map(|q| q.floor() as u64).collect();
    let mut leftover = total.saturating_sub(allocated.iter().sum());

    let mut order: Vec<usize> = (0..weights.len()).collect();
    order.sort_by(|&a, &b| {
        let frac_a = quotas[a] - quotas[a].floor();
        let frac_b = quotas[b] - quotas[b].floor();
        frac_b
            .partial_cmp(&frac_a)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| weights[a].0.cmp(&weights[b].0))
    });

    // Floating-point quotas cannot leave more than one unit per entry,
    // but guard the loop anyway.
    while leftover > 0 {
        for &index in &order {
            if leftover == 0 {
                break;
            }
            allocated[index] += 1;
            leftover -= 1;
        }
    }

    allocated
}
