use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;
use log::debug;

use super::exchange_schedule::exchange_schedule;
use super::MarketInfo;

/// Accepted wall-clock formats, most common first.
const TIME_OF_DAY_FORMATS: &[&str] = &["%I:%M %p", "%H:%M"];

/// Upper bound on calendar days searched for the next boundary.
const MAX_LOOKAHEAD_DAYS: usize = 8;

/// Compute the countdown to each session boundary of an exchange.
///
/// Never fails: an unknown exchange, an unknown timezone or a malformed
/// schedule entry only leaves the affected fields empty.
///
/// # Arguments
/// * `exchange_id` - Provider exchange id such as "us_market"
/// * `exchange_timezone` - IANA timezone name such as "America/New_York"
/// * `now` - Reference instant
pub fn compute_session_info(
    exchange_id: &str,
    exchange_timezone: &str,
    now: DateTime<Utc>,
) -> MarketInfo {
    let Some(schedule) = exchange_schedule(exchange_id) else {
        debug!("No trading hours known for exchange '{}'", exchange_id);
        return MarketInfo::default();
    };

    let tz: Tz = match exchange_timezone.parse() {
        Ok(tz) => tz,
        Err(e) => {
            debug!(
                "Unknown timezone '{}' for exchange '{}': {}",
                exchange_timezone, exchange_id, e
            );
            return MarketInfo::default();
        }
    };

    let until = |boundary: Option<&str>| boundary.and_then(|at| until_next_boundary(at, tz, now));

    MarketInfo {
        until_open_pre: until(schedule.open_pre_at),
        until_open: until(schedule.open_at),
        until_close: until(schedule.close_at),
        until_close_post: until(schedule.close_post_at),
    }
}

/// First Monday-to-Friday date on or after `date`.
pub fn next_business_day(date: NaiveDate) -> NaiveDate {
    let mut current = date;
    while matches!(current.weekday(), Weekday::Sat | Weekday::Sun) {
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    current
}

/// Time until the next business-day occurrence of a wall-clock boundary.
///
/// Starts from today's date in the exchange timezone. A boundary that has
/// already passed today rolls over to the next business day, as does a
/// wall-clock time swallowed by a DST gap. A time repeated by a DST
/// fall-back counts until its second occurrence has passed.
fn until_next_boundary(time_of_day: &str, tz: Tz, now: DateTime<Utc>) -> Option<Duration> {
    let Some(time) = parse_time_of_day(time_of_day) else {
        debug!("Malformed schedule entry '{}'", time_of_day);
        return None;
    };

    let mut date = now.with_timezone(&tz).date_naive();

    for _ in 0..MAX_LOOKAHEAD_DAYS {
        date = next_business_day(date);

        // An ambiguous time (DST fall-back) occurs twice; the later one may still be ahead
        let local = tz.from_local_datetime(&date.and_time(time));
        let upcoming = [local.earliest(), local.latest()]
            .into_iter()
            .flatten()
            .map(|boundary| boundary.with_timezone(&Utc))
            .find(|boundary| *boundary >= now);
        if let Some(boundary) = upcoming {
            return Some(boundary - now);
        }

        date = date.succ_opt()?;
    }

    None
}

fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    TIME_OF_DAY_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(value, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn us_market_at(rfc3339: &str) -> MarketInfo {
        compute_session_info("us_market", "America/New_York", at(rfc3339))
    }

    fn minutes(m: i64) -> Option<Duration> {
        Some(Duration::minutes(m))
    }

    #[test]
    fn test_next_business_day() {
        // 2024-06-15 is a Saturday
        assert_eq!(next_business_day(date(2024, 6, 15)), date(2024, 6, 17));
        assert_eq!(next_business_day(date(2024, 6, 16)), date(2024, 6, 17));
        assert_eq!(next_business_day(date(2024, 6, 17)), date(2024, 6, 17));
        assert_eq!(next_business_day(date(2024, 6, 14)), date(2024, 6, 14));
    }

    #[test]
    fn test_saturday_maps_to_monday() {
        // Saturday 08:00 in New York (EDT, UTC-4)
        let info = us_market_at("2024-06-15T12:00:00Z");

        // Monday 04:00 EDT = 08:00Z, 44h away
        assert_eq!(info.until_open_pre, minutes(44 * 60));
        // Monday 09:30 EDT = 13:30Z
        assert_eq!(info.until_open, minutes(49 * 60 + 30));
        // Monday 16:00 EDT = 20:00Z
        assert_eq!(info.until_close, minutes(56 * 60));
        // Monday 20:00 EDT = Tuesday 00:00Z
        assert_eq!(info.until_close_post, minutes(60 * 60));
    }

    #[test]
    fn test_sunday_maps_to_monday() {
        let info = us_market_at("2024-06-16T12:00:00Z");
        assert_eq!(info.until_open, minutes(25 * 60 + 30));
    }

    #[test]
    fn test_monday_uses_same_day() {
        // Monday 08:00 EDT: pre-market already open, regular opens at 09:30
        let info = us_market_at("2024-06-17T12:00:00Z");

        assert_eq!(info.until_open, minutes(90));
        assert_eq!(info.until_close, minutes(8 * 60));
        assert_eq!(info.until_close_post, minutes(12 * 60));
        // Today's 04:00 has passed, next pre-market open is Tuesday
        assert_eq!(info.until_open_pre, minutes(20 * 60));
    }

    #[test]
    fn test_friday_after_close_rolls_to_monday() {
        // Friday 17:00 EDT
        let info = us_market_at("2024-06-14T21:00:00Z");

        assert_eq!(info.until_close_post, minutes(3 * 60));
        // Monday 16:00 EDT = 2024-06-17T20:00Z
        assert_eq!(info.until_close, minutes(71 * 60));
    }

    #[test]
    fn test_uses_calendar_date_of_exchange_timezone() {
        // Saturday 02:00Z is still Friday 22:00 in New York
        let info = us_market_at("2024-06-15T02:00:00Z");

        // Friday's 20:00 EDT close has passed; next is Monday 20:00 EDT = Tuesday 00:00Z
        assert_eq!(info.until_close_post, minutes(70 * 60));
    }

    #[test]
    fn test_durations_never_negative() {
        let start = at("2024-06-10T00:00:00Z");
        for hour in 0..(24 * 7) {
            let now = start + Duration::hours(hour);
            let info = compute_session_info("us_market", "America/New_York", now);
            for duration in [
                info.until_open_pre,
                info.until_open,
                info.until_close,
                info.until_close_post,
            ] {
                let duration = duration.unwrap();
                assert!(duration >= Duration::zero());
                assert!(duration <= Duration::days(4));
            }
        }
    }

    #[test]
    fn test_exact_boundary_is_zero() {
        // Monday 09:30 EDT exactly
        let info = us_market_at("2024-06-17T13:30:00Z");
        assert_eq!(info.until_open, Some(Duration::zero()));
    }

    #[test]
    fn test_european_exchange() {
        // Saturday 12:00Z; Monday 09:00 CEST = 07:00Z
        let info = compute_session_info("de_market", "Europe/Berlin", at("2024-06-15T12:00:00Z"));
        assert_eq!(info.until_open, minutes(43 * 60));
    }

    #[test]
    fn test_regular_only_exchange_has_no_extended_fields() {
        let info = compute_session_info("hk_market", "Asia/Hong_Kong", at("2024-06-17T00:00:00Z"));
        assert_eq!(info.until_open_pre, None);
        assert_eq!(info.until_close_post, None);
        // Monday 09:30 HKT = 01:30Z
        assert_eq!(info.until_open, minutes(90));
    }

    #[test]
    fn test_unknown_exchange_is_empty() {
        let now = at("2024-06-17T12:00:00Z");
        let info = compute_session_info("xx_market", "America/New_York", now);
        assert!(info.is_empty());
    }

    #[test]
    fn test_unknown_timezone_is_empty() {
        let now = at("2024-06-17T12:00:00Z");
        let info = compute_session_info("us_market", "Mars/Olympus_Mons", now);
        assert!(info.is_empty());
    }

    #[test]
    fn test_malformed_time_of_day_is_absent() {
        let tz: Tz = "America/New_York".parse().unwrap();
        let now = at("2024-06-17T12:00:00Z");
        assert_eq!(until_next_boundary("25:99 XM", tz, now), None);
        assert_eq!(until_next_boundary("", tz, now), None);
        assert_eq!(until_next_boundary("09:30", tz, now), minutes(90));
    }

    #[test]
    fn test_dst_gap_rolls_to_next_business_day() {
        // Cairo skips 00:00-01:00 on Friday 2024-04-26
        let tz: Tz = "Africa/Cairo".parse().unwrap();
        let now = at("2024-04-25T20:00:00Z");
        assert_eq!(
            until_next_boundary("12:30 AM", tz, now),
            Some(Duration::hours(73) + Duration::minutes(30))
        );
    }

    #[test]
    fn test_repeated_hour_uses_second_occurrence() {
        // Cairo repeats 23:00-24:00 on Thursday 2024-10-31: 20:30Z (EEST) then 21:30Z (EET)
        let tz: Tz = "Africa/Cairo".parse().unwrap();
        let now = at("2024-10-31T21:00:00Z");
        assert_eq!(until_next_boundary("11:30 PM", tz, now), minutes(30));

        // Before the first occurrence the earlier instant wins
        let now = at("2024-10-31T20:00:00Z");
        assert_eq!(until_next_boundary("11:30 PM", tz, now), minutes(30));
    }
}
