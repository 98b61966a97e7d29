//! Trading session countdowns.
//!
//! Given an exchange id, its timezone and a reference instant, works out how
//! long until the exchange's pre-market, regular and post-market sessions
//! open or close. Weekends are skipped; holidays are not modeled.

mod calculator;
mod exchange_schedule;

pub use calculator::{compute_session_info, next_business_day};
pub use exchange_schedule::{exchange_schedule, ExchangeSchedule};

use chrono::Duration;

use crate::models::SessionState;

/// Time left until each session boundary of an exchange.
///
/// A field is `None` when the exchange has no such boundary or its
/// schedule could not be evaluated. Present durations are never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarketInfo {
    pub until_open_pre: Option<Duration>,
    pub until_open: Option<Duration>,
    pub until_close: Option<Duration>,
    pub until_close_post: Option<Duration>,
}

/// The next boundary worth showing for a given session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    PreMarketOpens(Duration),
    MarketOpens(Duration),
    MarketCloses(Duration),
    PostMarketCloses(Duration),
}

impl SessionEvent {
    pub fn label(&self) -> &'static str {
        match self {
            Self::PreMarketOpens(_) => "Pre market opens in",
            Self::MarketOpens(_) => "Market opens in",
            Self::MarketCloses(_) => "Market closes in",
            Self::PostMarketCloses(_) => "Post market closes in",
        }
    }

    pub fn until(&self) -> Duration {
        match self {
            Self::PreMarketOpens(d)
            | Self::MarketOpens(d)
            | Self::MarketCloses(d)
            | Self::PostMarketCloses(d) => *d,
        }
    }
}

impl MarketInfo {
    pub fn is_empty(&self) -> bool {
        self.until_open_pre.is_none()
            && self.until_open.is_none()
            && self.until_close.is_none()
            && self.until_close_post.is_none()
    }

    /// Pick the countdown relevant to the current session state.
    pub fn next_event(&self, state: &SessionState) -> Option<SessionEvent> {
        match state {
            SessionState::Closed | SessionState::PrePre => self
                .until_open_pre
                .map(SessionEvent::PreMarketOpens)
                .or_else(|| self.until_open.map(SessionEvent::MarketOpens)),
            SessionState::Pre => self.until_open.map(SessionEvent::MarketOpens),
            SessionState::Regular => self.until_close.map(SessionEvent::MarketCloses),
            SessionState::Post => self.until_close_post.map(SessionEvent::PostMarketCloses),
            SessionState::Unknown(_) => None,
        }
    }
}
