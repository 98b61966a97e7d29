//! Quote source trait definition.
//!
//! This module defines the `QuoteSource` capability the core crate
//! depends on. Concrete providers live next to it.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::MarketDataError;
use crate::models::{ChartPeriod, RawSnapshot};

/// Capability for fetching raw market snapshots.
///
/// Implement this trait to plug a new data source into the valuation
/// engine. Timeouts belong here: the core never cancels a call on its own.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use finstats_market_data::{MarketDataError, QuoteSource, RawSnapshot};
///
/// struct MySource;
///
/// #[async_trait]
/// impl QuoteSource for MySource {
///     fn id(&self) -> &'static str {
///         "MY_SOURCE"
///     }
///
///     async fn get_raw_quote(
///         &self,
///         symbol: &str,
///     ) -> Result<Option<RawSnapshot>, MarketDataError> {
///         Ok(None)
///     }
/// }
/// ```
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Unique identifier for this source, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Fetch the latest raw snapshot for a symbol.
    ///
    /// Returns `Ok(None)` when the provider has no data for the symbol.
    async fn get_raw_quote(&self, symbol: &str) -> Result<Option<RawSnapshot>, MarketDataError>;

    /// Fetch closing prices for a symbol over a period, oldest first.
    ///
    /// Default implementation returns `NotSupported`.
    async fn get_chart(
        &self,
        symbol: &str,
        period: ChartPeriod,
    ) -> Result<Vec<Decimal>, MarketDataError> {
        let _ = (symbol, period);
        Err(MarketDataError::NotSupported {
            operation: "chart".to_string(),
            provider: self.id().to_string(),
        })
    }
}
