use std::time::Duration;

use tokio::time::{interval, Interval, MissedTickBehavior};
use tracing::{error, warn};

use crate::render::CLEAR_SCREEN;

/// Fixed-period redraw loop for `--watch`. The first tick fires immediately.
pub struct Watch {
    interval: Interval,
}

impl Watch {
    pub fn every(period: Duration) -> Self {
        let mut interval = interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }

    /// Wait for the next tick and clear the screen for the redraw.
    pub async fn next(&mut self) {
        self.interval.tick().await;
        print!("{}", CLEAR_SCREEN);
    }
}

/// Log a failed watch tick. Transient provider trouble is only a warning
/// since the next tick retries anyway.
pub fn report_tick_error(context: &str, e: &anyhow::Error) {
    let transient = e
        .downcast_ref::<finstats_core::Error>()
        .is_some_and(finstats_core::Error::is_transient);

    if transient {
        warn!("{} failed, retrying on next tick: {:#}", context, e);
    } else {
        error!("{} failed: {:#}", context, e);
    }
}
