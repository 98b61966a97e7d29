use clap::Subcommand;

use crate::main_lib::AppContext;

pub mod graph;
pub mod portfolio;
pub mod quote;
pub mod sum;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the finance summary and record it in the history
    Sum(sum::SumArgs),
    /// Print live quotes for comma-separated symbols
    Quote(quote::QuoteArgs),
    /// Print investment stats per order
    Portfolio(portfolio::PortfolioArgs),
    /// Print a price graph for a symbol
    Graph(graph::GraphArgs),
}

pub async fn run(command: Command, ctx: &AppContext) -> anyhow::Result<()> {
    match command {
        Command::Sum(args) => sum::run(ctx, &args).await,
        Command::Quote(args) => quote::run(ctx, &args).await,
        Command::Portfolio(args) => portfolio::run(ctx, &args).await,
        Command::Graph(args) => graph::run(ctx, &args).await,
    }
}
