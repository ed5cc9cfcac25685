//! Notification services module
//!
//! This module contains the expiry signal raised by the timer and the
//! desktop notification shown in response.

pub mod desktop;
pub mod notifier;

// Re-export main types
pub use desktop::DesktopAlert;
pub use notifier::{ChannelNotifier, ExpiryEvent, Notifier};
