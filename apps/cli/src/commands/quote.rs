use std::collections::VecDeque;
use std::time::Duration;

use clap::Args;
use finstats_core::quotes::{Quote, QuoteResolver};
use finstats_market_data::SessionState;
use rust_decimal::prelude::ToPrimitive;
use tracing::warn;

use crate::main_lib::AppContext;
use crate::render::{format_amount, format_duration, format_price, plot, PlotOptions, Table};
use crate::watch::Watch;

const WATCH_PERIOD: Duration = Duration::from_secs(2);
const GRAPH_POINTS: usize = 80;
const GRAPH_HEIGHT: usize = 16;

#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Comma-separated symbols, e.g. AAPL,EUR=X
    pub symbols: String,
    /// Redraw every 2 seconds
    #[arg(short, long)]
    pub watch: bool,
}

pub fn parse_symbols(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Prices of a single symbol across watch ticks, newest last.
#[derive(Debug, Default)]
pub struct RollingSeries {
    points: VecDeque<f64>,
}

impl RollingSeries {
    pub fn push(&mut self, value: f64) {
        if self.points.len() == GRAPH_POINTS {
            self.points.pop_front();
        }
        self.points.push_back(value);
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().copied().collect()
    }
}

pub async fn run(ctx: &AppContext, args: &QuoteArgs) -> anyhow::Result<()> {
    let symbols = parse_symbols(&args.symbols);
    if symbols.is_empty() {
        anyhow::bail!("No symbol passed to command");
    }

    if !args.watch {
        let quotes = resolve_all(&ctx.resolver(), &symbols).await;
        println!("{}", quote_table(&quotes));
        return Ok(());
    }

    let mut rolling = RollingSeries::default();
    let mut watch = Watch::every(WATCH_PERIOD);
    loop {
        watch.next().await;
        let quotes = resolve_all(&ctx.resolver(), &symbols).await;
        println!("{}", quote_table(&quotes));

        if let [quote] = quotes.as_slice() {
            if draws_graph(&quote.session_state) {
                if let Some(price) = quote.price.to_f64() {
                    rolling.push(price);
                }
                println!();
                println!("{}", plot(&rolling.values(), PlotOptions::height(GRAPH_HEIGHT)));
            }
        }
    }
}

/// The rolling graph keeps running through pre-market, including PrePre.
fn draws_graph(state: &SessionState) -> bool {
    !matches!(state, SessionState::Closed | SessionState::Unknown(_))
}

/// Resolve each symbol in order; failures are logged and skipped.
async fn resolve_all(resolver: &QuoteResolver, symbols: &[String]) -> Vec<Quote> {
    let mut quotes = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        match resolver.resolve(symbol, true).await {
            Ok(quote) => quotes.push(quote),
            Err(e) => warn!("Skipping {}: {}", symbol, e),
        }
    }
    quotes
}

/// Countdown to the boundary that matters for the quote's session.
pub fn trading_hours(quote: &Quote) -> String {
    quote
        .market_info
        .next_event(&quote.session_state)
        .map(|event| format!("{} {}", event.label(), format_duration(event.until())))
        .unwrap_or_default()
}

pub fn quote_table(quotes: &[Quote]) -> Table {
    let mut table =
        Table::with_headers(&["Symbol", "Price", "Pct", "State", "Name", "Trading Hours"]);
    for quote in quotes {
        table.push(vec![
            quote.symbol.clone(),
            format_price(quote.price),
            format_amount(quote.percent_change),
            quote.session_state.to_string(),
            quote.display_name.clone(),
            trading_hours(quote),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;
    use finstats_market_data::MarketInfo;
    use rust_decimal_macros::dec;

    fn quote(state: SessionState) -> Quote {
        Quote {
            symbol: "AAPL".to_string(),
            price: dec!(150.5),
            percent_change: dec!(-1.234),
            session_state: state,
            display_name: "Apple Inc.".to_string(),
            market_info: MarketInfo {
                until_open_pre: Some(ChronoDuration::hours(44)),
                until_open: Some(ChronoDuration::minutes(90)),
                until_close: Some(ChronoDuration::minutes(61) + ChronoDuration::seconds(5)),
                until_close_post: None,
            },
        }
    }

    #[test]
    fn test_parse_symbols() {
        assert_eq!(parse_symbols("AAPL, EUR=X,,tsla "), vec!["AAPL", "EUR=X", "tsla"]);
        assert!(parse_symbols(" , ").is_empty());
    }

    #[test]
    fn test_trading_hours_by_state() {
        assert_eq!(
            trading_hours(&quote(SessionState::Closed)),
            "Pre market opens in 44 hours 0 min 0 sec"
        );
        assert_eq!(
            trading_hours(&quote(SessionState::Pre)),
            "Market opens in 1 hours 30 min 0 sec"
        );
        assert_eq!(
            trading_hours(&quote(SessionState::Regular)),
            "Market closes in 1 hours 1 min 5 sec"
        );
        assert_eq!(trading_hours(&quote(SessionState::Post)), "");
    }

    #[test]
    fn test_quote_table() {
        let rendered = quote_table(&[quote(SessionState::Regular)]).to_string();
        assert!(rendered.contains("TRADING HOURS"));
        assert!(rendered.contains("| AAPL   | 150.50 | -1.23 | REGULAR | Apple Inc. |"));
    }

    #[test]
    fn test_graph_only_stops_when_closed() {
        assert!(draws_graph(&SessionState::PrePre));
        assert!(draws_graph(&SessionState::Pre));
        assert!(draws_graph(&SessionState::Regular));
        assert!(draws_graph(&SessionState::Post));
        assert!(!draws_graph(&SessionState::Closed));
        assert!(!draws_graph(&SessionState::Unknown("POSTPOST".to_string())));
    }

    #[test]
    fn test_rolling_series_keeps_last_points() {
        let mut rolling = RollingSeries::default();
        for i in 0..100 {
            rolling.push(f64::from(i));
        }
        let values = rolling.values();
        assert_eq!(values.len(), GRAPH_POINTS);
        assert_eq!(values[0], 20.0);
        assert_eq!(values[GRAPH_POINTS - 1], 99.0);
    }
}
