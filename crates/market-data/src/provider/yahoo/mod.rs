//! Yahoo Finance quote source.
//!
//! Latest snapshots come from the v7 quote endpoint, which needs a
//! cookie/crumb pair. Charts go through the `yahoo_finance_api` connector.
//! Works for equities (AAPL, SAP.DE), crypto (BTC-USD) and FX rates (EUR=X).

mod models;

use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use num_traits::FromPrimitive;
use reqwest::header;
use rust_decimal::Decimal;
use time::OffsetDateTime;
use tracing::{debug, warn};
use urlencoding::encode;
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::{ChartPeriod, RawSnapshot, SessionState};
use crate::provider::QuoteSource;

use models::{YahooQuoteData, YahooQuoteResponse};

const PROVIDER_ID: &str = "YAHOO";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

// ============================================================================
// Crumb/Cookie Authentication
// ============================================================================

/// Cached Yahoo authentication data
#[derive(Debug, Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

// ============================================================================
// Yahoo Provider
// ============================================================================

/// Yahoo Finance quote source.
pub struct YahooProvider {
    client: reqwest::Client,
    connector: yahoo::YahooConnector,
    crumb: RwLock<Option<CrumbData>>,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider whose HTTP calls give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, MarketDataError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let connector = yahoo::YahooConnector::new().map_err(|e| {
            provider_error(format!("Failed to initialize Yahoo connector: {}", e))
        })?;

        Ok(Self {
            client,
            connector,
            crumb: RwLock::new(None),
        })
    }

    // ========================================================================
    // Crumb/Cookie Authentication
    // ========================================================================

    /// Ensure we have a valid Yahoo authentication crumb.
    async fn ensure_crumb(&self) -> Result<CrumbData, MarketDataError> {
        let cached = self.crumb.read().ok().and_then(|guard| guard.clone());
        if let Some(crumb) = cached {
            return Ok(crumb);
        }

        self.fetch_crumb().await
    }

    /// Fetch a new Yahoo authentication crumb.
    async fn fetch_crumb(&self) -> Result<CrumbData, MarketDataError> {
        // Step 1: Get cookie from fc.yahoo.com
        let response = self
            .client
            .get("https://fc.yahoo.com")
            .send()
            .await
            .map_err(|e| map_request_error(e, "Failed to get cookie"))?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(v, _)| v.to_string()))
            .ok_or_else(|| provider_error("Failed to parse Yahoo cookie".to_string()))?;

        // Step 2: Get crumb using cookie
        let crumb = self
            .client
            .get("https://query1.finance.yahoo.com/v1/test/getcrumb")
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &cookie)
            .send()
            .await
            .map_err(|e| map_request_error(e, "Failed to get crumb"))?
            .text()
            .await
            .map_err(|e| map_request_error(e, "Failed to read crumb"))?;

        let crumb_data = CrumbData { cookie, crumb };

        if let Ok(mut guard) = self.crumb.write() {
            *guard = Some(crumb_data.clone());
        }

        Ok(crumb_data)
    }

    /// Clear the cached crumb (used when authentication fails)
    fn clear_crumb(&self) {
        if let Ok(mut guard) = self.crumb.write() {
            *guard = None;
        }
    }

    // ========================================================================
    // Quote Fetching
    // ========================================================================

    /// Request the v7 quote payload. `Ok(None)` means the crumb was rejected.
    async fn fetch_quote_response(
        &self,
        symbol: &str,
    ) -> Result<Option<YahooQuoteResponse>, MarketDataError> {
        let crumb = self.ensure_crumb().await?;

        let url = format!(
            "https://query1.finance.yahoo.com/v7/finance/quote?symbols={}&crumb={}",
            encode(symbol),
            encode(&crumb.crumb)
        );

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &crumb.cookie)
            .send()
            .await
            .map_err(|e| map_request_error(e, "Quote request failed"))?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            self.clear_crumb();
            return Ok(None);
        }

        let data: YahooQuoteResponse = response
            .json()
            .await
            .map_err(|e| provider_error(format!("Failed to parse quote response: {}", e)))?;

        Ok(Some(data))
    }

    /// Convert chrono DateTime<Utc> to time::OffsetDateTime for the Yahoo API.
    fn chrono_to_offset_datetime(dt: DateTime<Utc>) -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(dt.timestamp())
            .unwrap_or_else(|_| OffsetDateTime::now_utc())
    }
}

#[async_trait]
impl QuoteSource for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_raw_quote(&self, symbol: &str) -> Result<Option<RawSnapshot>, MarketDataError> {
        debug!("Fetching latest quote for {} from Yahoo", symbol);

        let response = match self.fetch_quote_response(symbol).await? {
            Some(response) => response,
            None => {
                debug!("Yahoo crumb expired, retrying {} with a fresh one", symbol);
                self.fetch_quote_response(symbol).await?.ok_or_else(|| {
                    provider_error("Yahoo authentication expired".to_string())
                })?
            }
        };

        Ok(response
            .quote_response
            .result
            .into_iter()
            .find(|data| data.symbol.eq_ignore_ascii_case(symbol))
            .map(snapshot_from_quote_data))
    }

    async fn get_chart(
        &self,
        symbol: &str,
        period: ChartPeriod,
    ) -> Result<Vec<Decimal>, MarketDataError> {
        debug!(
            "Fetching {:?} chart for {} at {} from Yahoo",
            period,
            symbol,
            period.interval()
        );

        let response = match period.lookback() {
            None => {
                self.connector
                    .get_quote_range(symbol, period.interval(), "1d")
                    .await
            }
            Some(lookback) => {
                let end = Utc::now();
                self.connector
                    .get_quote_history_interval(
                        symbol,
                        Self::chrono_to_offset_datetime(end - lookback),
                        Self::chrono_to_offset_datetime(end),
                        period.interval(),
                    )
                    .await
            }
        }
        .map_err(|e| {
            if matches!(e, yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) {
                MarketDataError::SymbolNotFound(symbol.to_string())
            } else {
                provider_error(e.to_string())
            }
        })?;

        match response.quotes() {
            Ok(bars) => {
                let closes: Vec<Decimal> = bars
                    .into_iter()
                    .filter_map(|bar| Decimal::from_f64(bar.close))
                    .map(|close| close.round_dp(2))
                    .collect();

                if closes.is_empty() {
                    return Err(MarketDataError::NoDataForRange);
                }

                Ok(closes)
            }
            Err(yahoo::YahooError::NoQuotes) => {
                warn!("No chart data returned for '{}' ({:?})", symbol, period);
                Err(MarketDataError::NoDataForRange)
            }
            Err(e) => Err(provider_error(e.to_string())),
        }
    }
}

/// Map the provider's optional floats onto a snapshot; missing prices are zero.
fn snapshot_from_quote_data(data: YahooQuoteData) -> RawSnapshot {
    let display_name = data
        .short_name
        .or(data.long_name)
        .unwrap_or_else(|| data.symbol.clone());

    RawSnapshot {
        display_name,
        regular_price: to_decimal(data.regular_market_price),
        regular_pct_change: to_decimal(data.regular_market_change_percent),
        pre_price: to_decimal(data.pre_market_price),
        pre_pct_change: to_decimal(data.pre_market_change_percent),
        post_price: to_decimal(data.post_market_price),
        post_pct_change: to_decimal(data.post_market_change_percent),
        session_state: data
            .market_state
            .as_deref()
            .map(SessionState::from)
            .unwrap_or_default(),
        exchange_id: data.market.unwrap_or_default(),
        exchange_timezone: data.exchange_timezone_name.unwrap_or_default(),
        symbol: data.symbol,
    }
}

fn to_decimal(value: Option<f64>) -> Decimal {
    value.and_then(Decimal::from_f64).unwrap_or_default()
}

fn provider_error(message: String) -> MarketDataError {
    MarketDataError::ProviderError {
        provider: PROVIDER_ID.to_string(),
        message,
    }
}

fn map_request_error(error: reqwest::Error, context: &str) -> MarketDataError {
    if error.is_timeout() {
        MarketDataError::Timeout {
            provider: PROVIDER_ID.to_string(),
        }
    } else {
        provider_error(format!("{}: {}", context, error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn quote_data() -> YahooQuoteData {
        YahooQuoteData {
            symbol: "AAPL".to_string(),
            short_name: Some("Apple Inc.".to_string()),
            long_name: Some("Apple Inc. Common Stock".to_string()),
            market_state: Some("POST".to_string()),
            market: Some("us_market".to_string()),
            exchange_timezone_name: Some("America/New_York".to_string()),
            regular_market_price: Some(150.25),
            regular_market_change_percent: Some(-0.5),
            pre_market_price: None,
            pre_market_change_percent: None,
            post_market_price: Some(151.0),
            post_market_change_percent: Some(0.5),
        }
    }

    #[test]
    fn test_snapshot_from_quote_data() {
        let snapshot = snapshot_from_quote_data(quote_data());

        assert_eq!(snapshot.symbol, "AAPL");
        assert_eq!(snapshot.display_name, "Apple Inc.");
        assert_eq!(snapshot.regular_price, dec!(150.25));
        assert_eq!(snapshot.regular_pct_change, dec!(-0.5));
        assert_eq!(snapshot.pre_price, Decimal::ZERO);
        assert_eq!(snapshot.post_price, dec!(151));
        assert_eq!(snapshot.session_state, SessionState::Post);
        assert_eq!(snapshot.exchange_id, "us_market");
        assert_eq!(snapshot.exchange_timezone, "America/New_York");
    }

    #[test]
    fn test_snapshot_name_fallbacks() {
        let mut data = quote_data();
        data.short_name = None;
        assert_eq!(
            snapshot_from_quote_data(data).display_name,
            "Apple Inc. Common Stock"
        );

        let mut data = quote_data();
        data.short_name = None;
        data.long_name = None;
        assert_eq!(snapshot_from_quote_data(data).display_name, "AAPL");
    }

    #[test]
    fn test_missing_market_state_is_closed() {
        let mut data = quote_data();
        data.market_state = None;
        data.market = None;
        let snapshot = snapshot_from_quote_data(data);
        assert_eq!(snapshot.session_state, SessionState::Closed);
        assert!(snapshot.exchange_id.is_empty());
    }

    #[test]
    fn test_to_decimal_handles_non_finite() {
        assert_eq!(to_decimal(Some(f64::NAN)), Decimal::ZERO);
        assert_eq!(to_decimal(None), Decimal::ZERO);
        assert_eq!(to_decimal(Some(12.5)), dec!(12.5));
    }
}
