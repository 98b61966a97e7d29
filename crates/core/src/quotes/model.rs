use finstats_market_data::{MarketInfo, RawSnapshot, SessionState};
use rust_decimal::Decimal;

/// A resolved quote: the active price for the current session plus the
/// exchange's session countdowns.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub symbol: String,
    pub price: Decimal,
    pub percent_change: Decimal,
    pub session_state: SessionState,
    pub display_name: String,
    pub market_info: MarketInfo,
}

/// Select the (price, percent change) pair that reflects the current session.
///
/// Pre-market numbers win during the pre session and post-market numbers
/// during the post session, as long as the provider reported a positive
/// price for them. Otherwise the regular session pair is used, even if zero.
pub fn active_price(snapshot: &RawSnapshot) -> (Decimal, Decimal) {
    match snapshot.session_state {
        SessionState::Pre if snapshot.pre_price > Decimal::ZERO => {
            (snapshot.pre_price, snapshot.pre_pct_change)
        }
        SessionState::Post if snapshot.post_price > Decimal::ZERO => {
            (snapshot.post_price, snapshot.post_pct_change)
        }
        _ => (snapshot.regular_price, snapshot.regular_pct_change),
    }
}
