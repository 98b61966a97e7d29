use std::path::{Path, PathBuf};
use std::sync::Arc;

use finstats_core::quotes::QuoteResolver;
use finstats_core::settings::{find_config_file, load_config, FinanceConfig};
use finstats_market_data::{QuoteSource, YahooProvider};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::settings::{AppSettings, LogFormat};

/// Shared state for one command invocation.
pub struct AppContext {
    pub settings: AppSettings,
    pub source: Arc<dyn QuoteSource>,
}

impl AppContext {
    pub fn new(settings: AppSettings) -> anyhow::Result<Self> {
        let source: Arc<dyn QuoteSource> = Arc::new(YahooProvider::new(settings.http_timeout)?);
        Ok(Self { settings, source })
    }

    /// Fresh resolver for one pass; quotes are never reused across passes.
    pub fn resolver(&self) -> QuoteResolver {
        QuoteResolver::new(self.source.clone())
    }

    /// Locate and parse the finance document.
    pub fn load_finances(&self, file: Option<&Path>) -> anyhow::Result<(PathBuf, FinanceConfig)> {
        let explicit = file.or(self.settings.config_file.as_deref());
        let home = std::env::var_os("HOME").map(PathBuf::from);
        let path = find_config_file(explicit, home.as_deref())?;
        let config = load_config(&path)?;
        Ok((path, config))
    }
}

/// Logs go to stderr so they never interleave with tables on stdout.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init(),
    }
}
