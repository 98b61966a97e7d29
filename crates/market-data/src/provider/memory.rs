//! In-memory quote source.
//!
//! Serves snapshots and charts from maps filled in by the caller. Counts
//! requests per symbol so callers can check how often a source was hit.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::MarketDataError;
use crate::models::{ChartPeriod, RawSnapshot};
use crate::provider::QuoteSource;

const PROVIDER_ID: &str = "MEMORY";

#[derive(Default)]
pub struct InMemoryQuoteSource {
    snapshots: Mutex<HashMap<String, RawSnapshot>>,
    charts: Mutex<HashMap<String, Vec<Decimal>>>,
    failing: Mutex<HashSet<String>>,
    requests: Mutex<HashMap<String, usize>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl InMemoryQuoteSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(self, snapshot: RawSnapshot) -> Self {
        self.insert(snapshot);
        self
    }

    pub fn with_chart(self, symbol: &str, closes: Vec<Decimal>) -> Self {
        lock(&self.charts).insert(symbol.to_string(), closes);
        self
    }

    /// Make every request for `symbol` fail with a provider error.
    pub fn with_failure(self, symbol: &str) -> Self {
        lock(&self.failing).insert(symbol.to_string());
        self
    }

    /// Add or replace the snapshot served for its symbol.
    pub fn insert(&self, snapshot: RawSnapshot) {
        lock(&self.snapshots).insert(snapshot.symbol.clone(), snapshot);
    }

    /// Number of `get_raw_quote` calls made for `symbol`.
    pub fn request_count(&self, symbol: &str) -> usize {
        lock(&self.requests).get(symbol).copied().unwrap_or(0)
    }

    fn check_failure(&self, symbol: &str) -> Result<(), MarketDataError> {
        if lock(&self.failing).contains(symbol) {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("request for {} failed", symbol),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl QuoteSource for InMemoryQuoteSource {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_raw_quote(&self, symbol: &str) -> Result<Option<RawSnapshot>, MarketDataError> {
        *lock(&self.requests).entry(symbol.to_string()).or_insert(0) += 1;
        self.check_failure(symbol)?;
        Ok(lock(&self.snapshots).get(symbol).cloned())
    }

    async fn get_chart(
        &self,
        symbol: &str,
        _period: ChartPeriod,
    ) -> Result<Vec<Decimal>, MarketDataError> {
        self.check_failure(symbol)?;
        lock(&self.charts)
            .get(symbol)
            .cloned()
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))
    }
}
