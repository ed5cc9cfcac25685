//! Expiry notification signal

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Receives the "expired" signal from the timer controller.
///
/// Called on the tick path, so implementations must return immediately.
pub trait Notifier {
    fn expired(&self);
}

/// Event queued for the expiry alert task
#[derive(Debug, Clone)]
pub struct ExpiryEvent {
    pub at: DateTime<Utc>,
    /// Message of the countdown that expired
    pub message: String,
}

/// Notifier that enqueues an [`ExpiryEvent`] on an unbounded channel
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<ExpiryEvent>,
    message: String,
}

impl ChannelNotifier {
    /// Create a notifier and the receiving end of its channel
    pub fn new(message: &str) -> (Self, mpsc::UnboundedReceiver<ExpiryEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let notifier = Self {
            tx,
            message: message.to_string(),
        };
        (notifier, rx)
    }

    /// Message attached to the next expiry event
    pub fn set_message(&mut self, message: &str) {
        self.message = message.to_string();
    }
}

impl Notifier for ChannelNotifier {
    fn expired(&self) {
        let event = ExpiryEvent {
            at: Utc::now(),
            message: self.message.clone(),
        };
        debug!("Queueing expiry event at {}", event.at);
        if let Err(e) = self.tx.send(event) {
            warn!("Expiry event dropped, no receiver: {}", e);
        }
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn expired(&self) {
        (**self).expired();
    }
}
