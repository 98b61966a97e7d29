//! Yahoo Finance API response models.
//!
//! These models parse the v7 `quote` endpoint, which carries the
//! pre/post market fields and exchange metadata the chart endpoint lacks.

use serde::Deserialize;

/// Main response wrapper for the quote API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteResponse {
    pub quote_response: YahooQuoteResult,
}

/// Quote result container
#[derive(Debug, Deserialize)]
pub struct YahooQuoteResult {
    #[serde(default)]
    pub result: Vec<YahooQuoteData>,
    // Note: error field exists in API but we handle errors via HTTP status/empty results
}

/// One symbol's quote data
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteData {
    pub symbol: String,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub market_state: Option<String>,
    /// Exchange id such as "us_market"
    pub market: Option<String>,
    pub exchange_timezone_name: Option<String>,
    pub regular_market_price: Option<f64>,
    pub regular_market_change_percent: Option<f64>,
    pub pre_market_price: Option<f64>,
    pub pre_market_change_percent: Option<f64>,
    pub post_market_price: Option<f64>,
    pub post_market_change_percent: Option<f64>,
}
