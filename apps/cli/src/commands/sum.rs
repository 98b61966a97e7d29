use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;
use clap::Args;
use finstats_core::history::HistoryStore;
use finstats_core::{summarize, Summary};
use rust_decimal::Decimal;
use tracing::warn;

use crate::main_lib::AppContext;
use crate::render::{format_amount, plot, series, PlotOptions, Table};
use crate::watch::{report_tick_error, Watch};

const WATCH_PERIOD: Duration = Duration::from_secs(10);
const GRAPH_HEIGHT: usize = 8;
const GRAPH_MAX_WIDTH: usize = 80;

#[derive(Args, Debug)]
pub struct SumArgs {
    /// Finance document
    #[arg(short, long)]
    pub file: Option<PathBuf>,
    /// Redraw every 10 seconds
    #[arg(short, long)]
    pub watch: bool,
    /// Neither print nor record the summary
    #[arg(long)]
    pub no_summary: bool,
    /// Skip the history graph
    #[arg(long)]
    pub no_graph: bool,
}

pub async fn run(ctx: &AppContext, args: &SumArgs) -> anyhow::Result<()> {
    if !args.watch {
        return run_once(ctx, args).await;
    }

    let mut watch = Watch::every(WATCH_PERIOD);
    loop {
        watch.next().await;
        if let Err(e) = run_once(ctx, args).await {
            report_tick_error("Summary", &e);
        }
    }
}

async fn run_once(ctx: &AppContext, args: &SumArgs) -> anyhow::Result<()> {
    let (path, config) = ctx.load_finances(args.file.as_deref())?;
    let resolver = ctx.resolver();
    let summary = summarize(&resolver, &config, Utc::now()).await?;

    if !args.no_summary {
        println!("{}", summary_table(&summary));
    }

    let store = HistoryStore::for_config(&path);
    let history = store.load();
    if !args.no_summary {
        if let Err(e) = store.write(&summary) {
            warn!("Summary not recorded: {}", e);
        }
    }

    if !args.no_graph && !history.is_empty() {
        println!("Total:");
        println!("{}", total_graph(&history, &summary));
    }

    Ok(())
}

/// Key/value table; categories without holdings value are left out.
pub fn summary_table(summary: &Summary) -> Table {
    let mut table = Table::new();
    table.push(vec!["Savings".to_string(), format_amount(summary.savings)]);

    for (label, stats) in summary.categories() {
        if stats.sum > Decimal::ZERO {
            table.push(vec![format!("{} Sum", label), format_amount(stats.sum)]);
            table.push(vec![format!("{} In", label), format_amount(stats.cost_basis)]);
            table.push(vec![format!("{} Diff", label), format_amount(stats.diff)]);
            table.push(vec![format!("{} Loss", label), format_amount(stats.loss)]);
        }
    }

    table.push(vec![
        "Investments Sum".to_string(),
        format_amount(summary.investments_sum),
    ]);
    table.push(vec!["Total".to_string(), format_amount(summary.total)]);
    table
}

/// Plot of recorded totals followed by the current one.
pub fn total_graph(history: &[Summary], current: &Summary) -> String {
    let totals = series(
        history
            .iter()
            .chain(std::iter::once(current))
            .map(|s| s.total),
    );

    let mut options = PlotOptions::height(GRAPH_HEIGHT);
    if totals.len() > GRAPH_MAX_WIDTH {
        options = options.with_width(GRAPH_MAX_WIDTH);
    }
    plot(&totals, options)
}
