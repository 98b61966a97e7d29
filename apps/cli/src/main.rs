mod commands;
mod main_lib;
mod render;
mod settings;
mod watch;

use clap::Parser;
use commands::Command;
use main_lib::{init_tracing, AppContext};
use settings::AppSettings;

/// Personal finance snapshot: portfolio value, gain/loss and market hours
#[derive(Parser, Debug)]
#[command(name = "fin-stats", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = AppSettings::from_env();
    init_tracing(settings.log_format);

    let ctx = AppContext::new(settings)?;
    if let Err(e) = commands::run(cli.command, &ctx).await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
    Ok(())
}
