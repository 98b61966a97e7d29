use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use finstats_core::valuate;
use finstats_core::InvestmentDetail;

use crate::main_lib::AppContext;
use crate::render::{format_amount, format_price, Table};
use crate::watch::{report_tick_error, Watch};

const WATCH_PERIOD: Duration = Duration::from_secs(10);

#[derive(Args, Debug)]
pub struct PortfolioArgs {
    /// Finance document
    #[arg(short, long)]
    pub file: Option<PathBuf>,
    /// Redraw every 10 seconds
    #[arg(short, long)]
    pub watch: bool,
}

pub async fn run(ctx: &AppContext, args: &PortfolioArgs) -> anyhow::Result<()> {
    if !args.watch {
        return run_once(ctx, args).await;
    }

    let mut watch = Watch::every(WATCH_PERIOD);
    loop {
        watch.next().await;
        if let Err(e) = run_once(ctx, args).await {
            report_tick_error("Portfolio", &e);
        }
    }
}

async fn run_once(ctx: &AppContext, args: &PortfolioArgs) -> anyhow::Result<()> {
    let (_, config) = ctx.load_finances(args.file.as_deref())?;
    let resolver = ctx.resolver();

    let mut details = Vec::new();
    for (_, holdings) in config.categories() {
        let stats = valuate(&resolver, holdings, &config.market_currency).await?;
        details.extend(stats.details.into_values().flatten());
    }

    println!("{}", details_table(details));
    Ok(())
}

/// One row per order, symbols in descending order.
pub fn details_table(mut details: Vec<InvestmentDetail>) -> Table {
    details.sort_by(|a, b| b.quote.symbol.cmp(&a.quote.symbol));

    let mut table =
        Table::with_headers(&["Symbol", "Sum", "In", "Diff", "Quote Price", "Quote Pct"]);
    for detail in &details {
        table.push(vec![
            detail.quote.symbol.clone(),
            format_amount(detail.market_value_total),
            format_amount(detail.cost_basis_total),
            format_amount(detail.diff),
            format_price(detail.quote.price),
            format_amount(detail.quote.percent_change),
        ]);
    }
    table
}
