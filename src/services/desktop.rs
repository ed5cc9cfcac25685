//! Desktop notifications shown when a countdown expires

use notify_rust::Notification;
use tracing::{debug, info, warn};

const APP_NAME: &str = "Countdown";
const SUMMARY: &str = "Time's up!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    NotifyRust,
    LogOnly,
}

/// Shows the expiry notification, downgrading to log output when the
/// desktop notification service is unavailable.
#[derive(Debug)]
pub struct DesktopAlert {
    kind: AlertKind,
}

impl DesktopAlert {
    pub fn new() -> Self {
        debug!("Desktop alert created: using notify-rust backend");
        Self {
            kind: AlertKind::NotifyRust,
        }
    }

    /// Alert that only writes to the log
    pub fn log_only() -> Self {
        Self {
            kind: AlertKind::LogOnly,
        }
    }

    pub fn kind(&self) -> AlertKind {
        self.kind
    }

    /// Show the expiry notification with `message` as body
    pub async fn show(&mut self, message: &str) {
        match self.kind {
            AlertKind::NotifyRust => {
                let body = message.to_string();
                let res = tokio::task::spawn_blocking(move || {
                    let mut n = Notification::new();
                    n.appname(APP_NAME)
                        .summary(SUMMARY)
                        .body(&body)
                        .show()
                        .map(|_| ())
                        .map_err(|e| e.to_string())
                })
                .await
                .map_err(|e| format!("notification task failed: {}", e))
                .and_then(|res| res);

                match res {
                    Ok(()) => debug!("Expiry notification shown"),
                    Err(e) => {
                        warn!(error = %e, "notify-rust failed; downgrading to log-only alerts");
                        self.kind = AlertKind::LogOnly;
                        info!("[{}] {}", SUMMARY, message);
                    }
                }
            }
            AlertKind::LogOnly => {
                info!("[{}] {}", SUMMARY, message);
            }
        }
    }
}

impl Default for DesktopAlert {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn log_only_alert_stays_log_only() {
        let mut alert = DesktopAlert::log_only();
        alert.show("tea is ready").await;
        assert_eq!(alert.kind(), AlertKind::LogOnly);
    }
}
