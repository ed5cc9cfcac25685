//! Error types for timer commands and the application state

use std::fmt;

use thiserror::Error;

use crate::state::TimerState;

/// A user command accepted by the timer controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Configure,
    Start,
    Pause,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::Configure => "configure",
            Command::Start => "start",
            Command::Pause => "pause",
        };
        f.write_str(name)
    }
}

/// Errors raised by the timer controller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    #[error("duration must be greater than zero")]
    InvalidDuration,

    #[error("cannot {command} while timer is {state}")]
    InvalidState { command: Command, state: TimerState },
}

/// Errors surfaced by [`crate::state::AppState`]
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Timer(#[from] TimerError),

    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("failed to lock {0}")]
    LockPoisoned(&'static str),
}
