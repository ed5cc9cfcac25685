//! Periodic tick driving the countdown

use std::{sync::Arc, time::Duration};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info};

use crate::state::AppState;

/// Background task that accounts elapsed time into the countdown every `period`
pub async fn countdown_tick_task(state: Arc<AppState>, period: Duration) {
    info!("Starting countdown tick task ({:?} period)", period);

    let mut interval = interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        if let Err(e) = state.advance() {
            error!("Failed to advance countdown: {}", e);
        }
    }
}
