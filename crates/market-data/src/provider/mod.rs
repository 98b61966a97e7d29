//! Quote source abstractions and implementations.
//!
//! This module contains:
//! - The `QuoteSource` trait the core crate depends on
//! - The Yahoo Finance implementation used by the command line tool
//! - An in-memory source for tests and offline runs

mod traits;

pub mod memory;
pub mod yahoo;

pub use traits::QuoteSource;
