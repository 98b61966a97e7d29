//! Static trading-hours table.
//!
//! Boundaries are wall-clock times in the exchange's own timezone, written
//! the way they are published ("09:30 AM"). `None` means the exchange has no
//! such session.

/// Session boundaries for one exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeSchedule {
    pub open_pre_at: Option<&'static str>,
    pub open_at: Option<&'static str>,
    pub close_at: Option<&'static str>,
    pub close_post_at: Option<&'static str>,
}

impl ExchangeSchedule {
    const fn extended(
        open_pre_at: &'static str,
        open_at: &'static str,
        close_at: &'static str,
        close_post_at: &'static str,
    ) -> Self {
        Self {
            open_pre_at: Some(open_pre_at),
            open_at: Some(open_at),
            close_at: Some(close_at),
            close_post_at: Some(close_post_at),
        }
    }

    const fn regular(open_at: &'static str, close_at: &'static str) -> Self {
        Self {
            open_pre_at: None,
            open_at: Some(open_at),
            close_at: Some(close_at),
            close_post_at: None,
        }
    }
}

/// Look up the trading hours for an exchange id as reported by the provider.
///
/// # Arguments
/// * `exchange_id` - Provider exchange id such as "us_market"
///
/// # Returns
/// The schedule if known, or None for exchanges without published hours.
pub fn exchange_schedule(exchange_id: &str) -> Option<ExchangeSchedule> {
    match exchange_id {
        // Extended-hours markets
        "de_market" => Some(ExchangeSchedule::extended(
            "08:00 AM", "09:00 AM", "05:30 PM", "08:00 PM",
        )),
        "us_market" => Some(ExchangeSchedule::extended(
            "04:00 AM", "09:30 AM", "04:00 PM", "08:00 PM",
        )),

        // Europe
        "dk_market" => Some(ExchangeSchedule::regular("09:00 AM", "05:00 PM")),
        "gb_market" => Some(ExchangeSchedule::regular("09:00 AM", "05:00 PM")),
        "fr_market" => Some(ExchangeSchedule::regular("09:00 AM", "05:30 PM")),

        // Asia-Pacific
        "hk_market" => Some(ExchangeSchedule::regular("09:30 AM", "04:00 PM")),
        "cn_market" => Some(ExchangeSchedule::regular("09:15 AM", "03:00 PM")),
        "au_market" => Some(ExchangeSchedule::regular("09:30 AM", "04:00 PM")),
        "jp_market" => Some(ExchangeSchedule::regular("09:00 AM", "03:00 PM")),

        _ => None,
    }
}
