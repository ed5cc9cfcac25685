//! State management module
//!
//! This module contains the countdown state machine, the theme selection
//! and the shared application state wrapping both.

pub mod app_state;
pub mod theme_state;
pub mod timer_state;

// Re-export main types
pub use app_state::{AppState, TimerSnapshot, DEFAULT_MESSAGE};
pub use theme_state::{ColorRole, Palette, Theme, ThemeManager};
pub use timer_state::{Timer, TimerState};
