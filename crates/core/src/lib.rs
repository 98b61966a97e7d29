//! fin-stats core: portfolio valuation on top of live quotes.
//!
//! Market access lives in `finstats-market-data`; this crate turns a finance
//! document and a [`finstats_market_data::QuoteSource`] into typed results
//! for the presentation layer.
//!
//! ```text
//! FinanceConfig ──> summarize ──> valuate ──> QuoteResolver ──> QuoteSource
//!                       │             └────> CurrencyConverter ──┘
//!                       └──> HistoryStore
//! ```

pub mod errors;
pub mod fx;
pub mod history;
pub mod portfolio;
pub mod quotes;
pub mod settings;

pub use portfolio::*;

pub use errors::Error;
pub use errors::Result;
