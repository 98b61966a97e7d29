//! fin-stats Market Data Crate
//!
//! This crate provides provider-agnostic access to live market snapshots
//! and trading-session schedules for the fin-stats tool.
//!
//! # Overview
//!
//! - [`QuoteSource`] - capability trait for fetching raw snapshots and charts
//! - [`YahooProvider`] - Yahoo Finance implementation of [`QuoteSource`]
//! - [`compute_session_info`] - countdowns to an exchange's session boundaries
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |   Core crate     | --> |   QuoteSource    |  (capability trait)
//! +------------------+     +------------------+
//!          |                        |
//!          v                        v
//! +------------------+     +------------------+
//! | Session schedule |     |  YahooProvider   |  (v7 quote API, charts)
//! +------------------+     +------------------+
//!          |                        |
//!          v                        v
//! +------------------+     +------------------+
//! |   MarketInfo     |     |   RawSnapshot    |
//! +------------------+     +------------------+
//! ```

pub mod errors;
pub mod models;
pub mod provider;
pub mod session;

pub use errors::MarketDataError;
pub use models::{ChartPeriod, RawSnapshot, SessionState};
pub use provider::memory::InMemoryQuoteSource;
pub use provider::yahoo::YahooProvider;
pub use provider::QuoteSource;
pub use session::{
    compute_session_info, exchange_schedule, next_business_day, ExchangeSchedule, MarketInfo,
    SessionEvent,
};
