//! Expiry alert background task

use tokio::sync::mpsc;
use tracing::info;

use crate::services::{DesktopAlert, ExpiryEvent};

/// Background task that shows a notification for every expiry event.
///
/// Runs until the sending side of the channel is gone.
pub async fn expiry_alert_task(
    mut expiry_rx: mpsc::UnboundedReceiver<ExpiryEvent>,
    mut alert: DesktopAlert,
) {
    info!("Starting expiry alert task");

    while let Some(event) = expiry_rx.recv().await {
        info!("Countdown expired at {}: {}", event.at, event.message);
        alert.show(&event.message).await;
    }

    info!("Expiry channel closed, stopping alert task");
}
