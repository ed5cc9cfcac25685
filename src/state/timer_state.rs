//! Countdown timer state machine

use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    error::{Command, TimerError},
    services::Notifier,
};

/// Lifecycle state of a countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    Expired,
}

impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimerState::Idle => "idle",
            TimerState::Running => "running",
            TimerState::Paused => "paused",
            TimerState::Expired => "expired",
        };
        f.write_str(name)
    }
}

/// Timer controller: owns the configured duration, the remaining time and
/// the lifecycle state, and signals `N` once per expiry.
///
/// `remaining` never exceeds `duration` and only moves while running.
#[derive(Debug)]
pub struct Timer<N> {
    state: TimerState,
    duration: Option<Duration>,
    remaining: Duration,
    notifier: N,
}

impl<N: Notifier> Timer<N> {
    /// Create an idle timer with no duration configured
    pub fn new(notifier: N) -> Self {
        Self {
            state: TimerState::Idle,
            duration: None,
            remaining: Duration::ZERO,
            notifier,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Set the countdown length. Only allowed while idle.
    pub fn configure(&mut self, duration: Duration) -> Result<(), TimerError> {
        self.require(Command::Configure, &[TimerState::Idle])?;
        if duration.is_zero() {
            return Err(TimerError::InvalidDuration);
        }

        debug!("Timer configured for {:?}", duration);
        self.duration = Some(duration);
        Ok(())
    }

    /// Start from idle (loading the full duration) or resume from paused
    pub fn start(&mut self) -> Result<(), TimerError> {
        self.require(Command::Start, &[TimerState::Idle, TimerState::Paused])?;

        if self.state == TimerState::Idle {
            let duration = self.duration.ok_or(TimerError::InvalidState {
                command: Command::Start,
                state: self.state,
            })?;
            self.remaining = duration;
            info!("Timer started: {:?}", duration);
        } else {
            info!("Timer resumed: {:?} remaining", self.remaining);
        }

        self.state = TimerState::Running;
        Ok(())
    }

    pub fn pause(&mut self) -> Result<(), TimerError> {
        self.require(Command::Pause, &[TimerState::Running])?;
        self.state = TimerState::Paused;
        info!("Timer paused: {:?} remaining", self.remaining);
        Ok(())
    }

    /// Return to idle from any state. The configured duration is kept.
    pub fn reset(&mut self) {
        if self.state != TimerState::Idle {
            info!("Timer reset from {}", self.state);
        }
        self.state = TimerState::Idle;
        self.remaining = Duration::ZERO;
    }

    /// Consume `elapsed` time. Ignored unless running.
    ///
    /// Returns the state after the tick.
    pub fn tick(&mut self, elapsed: Duration) -> TimerState {
        if self.state != TimerState::Running || elapsed.is_zero() {
            return self.state;
        }

        self.remaining = self.remaining.saturating_sub(elapsed);
        if self.remaining.is_zero() {
            self.state = TimerState::Expired;
            info!("Timer expired");
            self.notifier.expired();
        }

        self.state
    }

    fn require(&self, command: Command, allowed: &[TimerState]) -> Result<(), TimerError> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(TimerError::InvalidState {
                command,
                state: self.state,
            })
        }
    }
}
