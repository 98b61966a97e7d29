use clap::Args;
use finstats_market_data::ChartPeriod;
use tracing::warn;

use crate::main_lib::AppContext;
use crate::render::{plot, series, PlotOptions};

const GRAPH_HEIGHT: usize = 16;

#[derive(Args, Debug)]
pub struct GraphArgs {
    pub symbol: String,
    /// One of 1d, 1wk, 2wk, 1mo, 6mo, 1yr, 5yr
    #[arg(short, long, default_value = "1mo")]
    pub period: ChartPeriod,
}

pub async fn run(ctx: &AppContext, args: &GraphArgs) -> anyhow::Result<()> {
    let mut closes = ctx.source.get_chart(&args.symbol, args.period).await?;

    // Latest pre/post market price extends the chart past the last close
    match ctx.resolver().resolve(&args.symbol, true).await {
        Ok(quote) => closes.push(quote.price),
        Err(e) => warn!("No current price for {}: {}", args.symbol, e),
    }

    if closes.is_empty() {
        anyhow::bail!("Could not find chart data for {}", args.symbol);
    }

    println!("{}", plot(&series(closes), PlotOptions::height(GRAPH_HEIGHT)));
    Ok(())
}
