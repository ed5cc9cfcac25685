//! API request and response structures

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, TimerError},
    state::{Palette, Theme, ThemeManager, TimerSnapshot, TimerState},
    utils::{display_seconds, format_clock},
};

/// Body of `POST /timer/configure`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigureRequest {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub message: String,
    /// Start immediately, replacing any running countdown
    pub start: bool,
}

impl ConfigureRequest {
    /// Total duration; overflowing input is treated as invalid
    pub fn duration(&self) -> Result<Duration, TimerError> {
        self.hours
            .checked_mul(3600)
            .and_then(|h| self.minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
            .and_then(|hm| hm.checked_add(self.seconds))
            .map(Duration::from_secs)
            .ok_or(TimerError::InvalidDuration)
    }
}

/// What a presentation layer needs to draw the countdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerView {
    pub state: TimerState,
    pub duration_seconds: Option<u64>,
    pub remaining_seconds: u64,
    /// Clock text, `HH:MM:SS`
    pub display: String,
    pub message: String,
    /// Hex colour for the clock in the current theme
    pub time_color: String,
}

impl TimerView {
    pub fn new(snapshot: &TimerSnapshot, palette: &Palette) -> Self {
        Self {
            state: snapshot.state,
            duration_seconds: snapshot.duration.map(|d| d.as_secs()),
            remaining_seconds: display_seconds(snapshot.remaining),
            display: format_clock(display_seconds(snapshot.shown())),
            message: snapshot.message.clone(),
            time_color: palette
                .clock_color(snapshot.state == TimerState::Expired)
                .to_string(),
        }
    }
}

/// Response to timer commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerView,
}

impl TimerResponse {
    pub fn ok(message: impl Into<String>, timer: TimerView) -> Self {
        Self {
            status: "ok".to_string(),
            message: message.into(),
            timestamp: Utc::now(),
            timer,
        }
    }
}

/// Current theme with its palette
#[derive(Debug, Clone, Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
    pub toggle_icon: String,
    pub palette: Palette,
}

impl From<&ThemeManager> for ThemeResponse {
    fn from(themes: &ThemeManager) -> Self {
        Self {
            theme: themes.current(),
            toggle_icon: themes.toggle_icon().to_string(),
            palette: themes.palette().clone(),
        }
    }
}

/// Status response with timer and server information
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub timer: TimerView,
    pub theme: Theme,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Error body returned for rejected commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub kind: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, kind) = match &self {
            AppError::Timer(TimerError::InvalidDuration) => {
                (StatusCode::BAD_REQUEST, "invalid_duration")
            }
            AppError::Timer(TimerError::InvalidState { .. }) => {
                (StatusCode::CONFLICT, "invalid_state")
            }
            AppError::UnknownTheme(_) => (StatusCode::NOT_FOUND, "unknown_theme"),
            AppError::LockPoisoned(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        };

        let body = ErrorResponse {
            status: "error".to_string(),
            kind: kind.to_string(),
            message: self.to_string(),
            timestamp: Utc::now(),
        };
        (code, Json(body)).into_response()
    }
}
