//! In-memory memoization of fetched series.
//!
//! The fetch layer resolves each `(market, frequency, ticker)` request
//! once per process; repeats are served from here. The cache has an
//! injectable lifetime rather than living as ambient global state, and
//! staleness is tracked by a selection generation counter, not by
//! time: inputs are static snapshots refreshed once per load.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use basketlens_core::{Symbol, TickerSeries};

/// Sampling frequency of a cached series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Daily,
    /// Intraday bars with the given interval in minutes.
    Intraday(u32),
}

/// Cache key for one fetched series.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeriesKey {
    pub market: String,
    pub frequency: Frequency,
    pub ticker: Symbol,
}

impl SeriesKey {
    pub fn daily(market: impl Into<String>, ticker: Symbol) -> Self {
        Self {
            market: market.into(),
            frequency: Frequency::Daily,
            ticker,
        }
    }
}

#[derive(Debug, Default)]
struct CacheInner {
    map: HashMap<SeriesKey, Arc<TickerSeries>>,
}

/// Thread-safe, process-wide memo of fetched per-ticker series.
#[derive(Debug, Clone, Default)]
pub struct SeriesCache {
    inner: Arc<RwLock<CacheInner>>,
}

impl SeriesCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &SeriesKey) -> Option<Arc<TickerSeries>> {
        let store = self.inner.read().expect("cache lock poisoned");
        store.map.get(key).cloned()
    }

    pub fn put(&self, key: SeriesKey, series: TickerSeries) -> Arc<TickerSeries> {
        let mut store = self.inner.write().expect("cache lock poisoned");
        let series = Arc::new(series);
        store.map.insert(key, Arc::clone(&series));
        series
    }

    /// Fetch-through: return the cached series or compute, store, and
    /// return it.
    pub fn get_or_insert_with(
        &self,
        key: SeriesKey,
        fetch: impl FnOnce() -> TickerSeries,
    ) -> Arc<TickerSeries> {
        if let Some(hit) = self.get(&key) {
            return hit;
        }
        self.put(key, fetch())
    }

    pub fn len(&self) -> usize {
        let store = self.inner.read().expect("cache lock poisoned");
        store.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut store = self.inner.write().expect("cache lock poisoned");
        store.map.clear();
    }
}

/// Monotonic generation counter for stale-result rejection.
///
/// The driving layer bumps the generation whenever the ticker
/// selection or range changes; a fetch resolving with an older token
/// must be dropped instead of applied. The pure core never sees stale
/// inputs because it simply is not invoked with them.
#[derive(Debug, Default)]
pub struct Generation {
    counter: AtomicU64,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token for work started now.
    pub fn current(&self) -> u64 {
        self.counter.load(Ordering::Acquire)
    }

    /// Invalidate all outstanding work; returns the new generation.
    pub fn bump(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Whether a result produced under `token` may still be applied.
    pub fn is_current(&self, token: u64) -> bool {
        self.current() == token
    }
}
