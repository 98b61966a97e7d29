use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use finstats_market_data::{compute_session_info, MarketDataError, QuoteSource};
use log::debug;

use super::model::{active_price, Quote};
use crate::errors::{Error, Result};

/// Resolves symbols to [`Quote`]s for one valuation pass.
///
/// Create one per pass and drop it afterwards: the memo it keeps is what
/// lets several orders of the same symbol (and repeated FX lookups) share a
/// single request, and it must never outlive the pass.
pub struct QuoteResolver {
    source: Arc<dyn QuoteSource>,
    reference_time: Option<DateTime<Utc>>,
    cache: Option<DashMap<String, Quote>>,
}

impl QuoteResolver {
    /// Memoizing resolver over `source`.
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        Self {
            source,
            reference_time: None,
            cache: Some(DashMap::new()),
        }
    }

    /// Resolver that hits the source on every call.
    pub fn uncached(source: Arc<dyn QuoteSource>) -> Self {
        Self {
            cache: None,
            ..Self::new(source)
        }
    }

    /// Compute session countdowns relative to `now` instead of the wall clock.
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.reference_time = Some(now);
        self
    }

    /// Resolve `symbol` to its active quote.
    ///
    /// With `fail_on_zero_price`, a zero active price is reported as
    /// [`Error::InvalidSymbol`]; this check runs on cached quotes too.
    pub async fn resolve(&self, symbol: &str, fail_on_zero_price: bool) -> Result<Quote> {
        let quote = match self.cached(symbol) {
            Some(quote) => quote,
            None => {
                let quote = self.fetch(symbol).await?;
                if let Some(cache) = &self.cache {
                    cache.insert(symbol.to_string(), quote.clone());
                }
                quote
            }
        };

        if fail_on_zero_price && quote.price.is_zero() {
            return Err(Error::InvalidSymbol(symbol.to_string()));
        }

        Ok(quote)
    }

    fn cached(&self, symbol: &str) -> Option<Quote> {
        self.cache
            .as_ref()
            .and_then(|cache| cache.get(symbol).map(|entry| entry.value().clone()))
    }

    async fn fetch(&self, symbol: &str) -> Result<Quote> {
        debug!("Resolving {} via {}", symbol, self.source.id());

        let snapshot = match self.source.get_raw_quote(symbol).await {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) | Err(MarketDataError::SymbolNotFound(_)) => {
                return Err(Error::SymbolNotFound(symbol.to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        let (price, percent_change) = active_price(&snapshot);
        let now = self.reference_time.unwrap_or_else(Utc::now);
        let market_info =
            compute_session_info(&snapshot.exchange_id, &snapshot.exchange_timezone, now);

        Ok(Quote {
            symbol: snapshot.symbol,
            price,
            percent_change,
            session_state: snapshot.session_state,
            display_name: snapshot.display_name,
            market_info,
        })
    }
}
