//! Currency normalization against the portfolio's base currency.

pub mod currency_converter;

pub use currency_converter::{fx_symbol, CurrencyConverter};
