use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Trading phase a snapshot was captured in.
///
/// Yahoo reports these as upper-case strings (`PREPRE`, `PRE`, `REGULAR`,
/// `POST`, `CLOSED`). Anything else is kept verbatim in `Unknown` and
/// behaves like a closed market.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum SessionState {
    PrePre,
    Pre,
    Regular,
    Post,
    #[default]
    Closed,
    Unknown(String),
}

impl SessionState {
    pub fn as_str(&self) -> &str {
        match self {
            Self::PrePre => "PREPRE",
            Self::Pre => "PRE",
            Self::Regular => "REGULAR",
            Self::Post => "POST",
            Self::Closed => "CLOSED",
            Self::Unknown(raw) => raw,
        }
    }
}

impl From<&str> for SessionState {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "PREPRE" => Self::PrePre,
            "PRE" => Self::Pre,
            "REGULAR" => Self::Regular,
            "POST" => Self::Post,
            "CLOSED" => Self::Closed,
            _ => Self::Unknown(value.to_string()),
        }
    }
}

impl From<String> for SessionState {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<SessionState> for String {
    fn from(value: SessionState) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw market snapshot for one symbol, exactly as the provider reported it.
///
/// Price fields the provider omitted are zero. No active price has been
/// selected yet; that is the job of the quote resolver in the core crate.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSnapshot {
    pub symbol: String,
    pub display_name: String,
    pub regular_price: Decimal,
    pub regular_pct_change: Decimal,
    pub pre_price: Decimal,
    pub pre_pct_change: Decimal,
    pub post_price: Decimal,
    pub post_pct_change: Decimal,
    pub session_state: SessionState,
    pub exchange_id: String,
    pub exchange_timezone: String,
}

impl RawSnapshot {
    /// Snapshot with only the regular session filled in.
    pub fn regular(symbol: impl Into<String>, price: Decimal, pct_change: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            regular_price: price,
            regular_pct_change: pct_change,
            session_state: SessionState::Regular,
            ..Self::default()
        }
    }
}
