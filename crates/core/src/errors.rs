//! Core error types for fin-stats.
//!
//! Resolution failures abort a whole valuation pass. Schedule problems are
//! not errors at all: they only leave `MarketInfo` fields empty.

use thiserror::Error;

use finstats_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the core crate.
#[derive(Error, Debug)]
pub enum Error {
    /// The quote source has no data for the symbol.
    #[error("Could not find quote by symbol {0}")]
    SymbolNotFound(String),

    /// A non-zero price was required but the source reported zero.
    /// Almost always a typo'd or delisted symbol.
    #[error("Invalid symbol {0}: quote price is zero")]
    InvalidSymbol(String),

    /// The FX rate needed to normalize an amount could not be resolved.
    #[error("Exchange rate for {currency} is unavailable: {reason}")]
    QuoteUnavailable { currency: String, reason: String },

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("History error: {0}")]
    History(String),

    /// A valuation amount left the range `Decimal` can represent.
    #[error("Arithmetic overflow while valuating {0}")]
    Overflow(String),
}

impl Error {
    /// Whether the same pass could succeed if simply run again.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::MarketData(e) => e.is_transient(),
            _ => false,
        }
    }
}
