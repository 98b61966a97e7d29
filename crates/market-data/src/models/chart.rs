use std::str::FromStr;

use chrono::Duration;

/// Lookback period for a price chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartPeriod {
    /// Today's intraday bars.
    Day,
    Week,
    TwoWeeks,
    #[default]
    Month,
    SixMonths,
    Year,
    FiveYears,
}

impl ChartPeriod {
    /// How far back the chart reaches. `None` means "today only".
    pub fn lookback(&self) -> Option<Duration> {
        match self {
            Self::Day => None,
            Self::Week => Some(Duration::days(7)),
            Self::TwoWeeks => Some(Duration::days(14)),
            Self::Month => Some(Duration::days(30)),
            Self::SixMonths => Some(Duration::days(6 * 30)),
            Self::Year => Some(Duration::days(12 * 30)),
            Self::FiveYears => Some(Duration::days(5 * 12 * 30)),
        }
    }

    /// Bar interval in Yahoo notation.
    pub fn interval(&self) -> &'static str {
        match self {
            Self::Day => "5m",
            Self::Week | Self::TwoWeeks => "1h",
            Self::Month => "1d",
            Self::SixMonths | Self::Year => "5d",
            Self::FiveYears => "1mo",
        }
    }
}

impl FromStr for ChartPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1d" => Ok(Self::Day),
            "1wk" => Ok(Self::Week),
            "2wk" => Ok(Self::TwoWeeks),
            "" | "1mo" => Ok(Self::Month),
            "6mo" => Ok(Self::SixMonths),
            "1yr" => Ok(Self::Year),
            "5yr" => Ok(Self::FiveYears),
            other => Err(format!(
                "unknown period '{}', allowed: 1d,1wk,2wk,1mo,6mo,1yr,5yr",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_periods() {
        assert_eq!("1d".parse::<ChartPeriod>(), Ok(ChartPeriod::Day));
        assert_eq!("2wk".parse::<ChartPeriod>(), Ok(ChartPeriod::TwoWeeks));
        assert_eq!("".parse::<ChartPeriod>(), Ok(ChartPeriod::Month));
        assert!("3d".parse::<ChartPeriod>().is_err());
    }

    #[test]
    fn test_interval_and_lookback() {
        assert_eq!(ChartPeriod::Day.lookback(), None);
        assert_eq!(ChartPeriod::Day.interval(), "5m");
        assert_eq!(ChartPeriod::Week.lookback(), Some(Duration::days(7)));
        assert_eq!(ChartPeriod::FiveYears.interval(), "1mo");
    }
}
