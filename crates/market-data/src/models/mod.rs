//! Market data models
//!
//! This module contains the data types exchanged with quote sources:
//! - `snapshot` - Raw provider snapshot (RawSnapshot) and trading session state
//! - `chart` - Chart periods and their lookback/interval parameters

mod chart;
mod snapshot;

pub use chart::ChartPeriod;
pub use snapshot::{RawSnapshot, SessionState};
