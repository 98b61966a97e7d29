//! Error types for the market data crate.
//!
//! [`MarketDataError`] covers everything a quote source can report, from
//! unknown symbols to transport failures. The core crate wraps it when a
//! resolution has to abort a valuation pass.

use thiserror::Error;

/// Errors that can occur while talking to a market data provider.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol was not found by the provider.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// No chart data available for the requested period.
    #[error("No data for date range")]
    NoDataForRange,

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The operation is not implemented by this provider.
    #[error("{operation} is not supported by {provider}")]
    NotSupported {
        operation: String,
        provider: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Whether retrying the same request later could succeed.
    ///
    /// Watch loops use this to decide between a quiet retry on the next
    /// tick and surfacing the failure.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Network(_) => true,
            Self::ProviderError { .. } => true,
            Self::SymbolNotFound(_)
            | Self::NoDataForRange
            | Self::NotSupported { .. } => false,
        }
    }
}
