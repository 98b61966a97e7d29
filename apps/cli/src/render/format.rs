use chrono::Duration;
use rust_decimal::{Decimal, RoundingStrategy};

fn fixed(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", dp as usize, rounded)
}

/// Two decimals, or four for sub-unit prices such as FX rates and small caps.
pub fn format_price(price: Decimal) -> String {
    if price.abs() < Decimal::ONE {
        fixed(price, 4)
    } else {
        fixed(price, 2)
    }
}

pub fn format_amount(amount: Decimal) -> String {
    fixed(amount, 2)
}

pub fn format_duration(duration: Duration) -> String {
    format!(
        "{} hours {} min {} sec",
        duration.num_hours(),
        duration.num_minutes() % 60,
        duration.num_seconds() % 60
    )
}
