//! Countdown - A countdown timer service with themes and expiry notifications
//!
//! This library provides the countdown state machine, the light/dark theme
//! palettes, and the HTTP control surface a presentation layer drives.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use error::{AppError, TimerError};
pub use state::{AppState, Timer, TimerState};
pub use utils::signals::shutdown_signal;
