//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    response::Json,
};
use tracing::{info, warn};

use crate::{
    error::AppError,
    state::{AppState, Theme, TimerSnapshot},
};
use super::responses::{
    ConfigureRequest, HealthResponse, StatusResponse, ThemeResponse, TimerResponse, TimerView,
};

fn timer_response(
    state: &AppState,
    message: &str,
    snapshot: TimerSnapshot,
) -> Result<Json<TimerResponse>, AppError> {
    let themes = state.theme()?;
    let view = TimerView::new(&snapshot, themes.palette());
    Ok(Json(TimerResponse::ok(message, view)))
}

fn rejected(command: &str, e: AppError) -> AppError {
    warn!("{} rejected: {}", command, e);
    e
}

/// Handle POST /timer/configure - Set duration and message, optionally starting
pub async fn configure_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ConfigureRequest>,
) -> Result<Json<TimerResponse>, AppError> {
    let duration = request
        .duration()
        .map_err(|e| rejected("configure", e.into()))?;

    let snapshot = if request.start {
        state.restart(duration, &request.message)
    } else {
        state.configure(duration, &request.message)
    }
    .map_err(|e| rejected("configure", e))?;

    info!("Configure endpoint called - {:?} (start={})", duration, request.start);
    let message = if request.start {
        "Timer configured and started"
    } else {
        "Timer configured"
    };
    timer_response(&state, message, snapshot)
}

/// Handle POST /timer/start - Start or resume the countdown
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TimerResponse>, AppError> {
    let snapshot = state.start().map_err(|e| rejected("start", e))?;
    info!("Start endpoint called - countdown running");
    timer_response(&state, "Timer running", snapshot)
}

/// Handle POST /timer/pause - Pause the countdown
pub async fn pause_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TimerResponse>, AppError> {
    let snapshot = state.pause().map_err(|e| rejected("pause", e))?;
    info!("Pause endpoint called - countdown paused");
    timer_response(&state, "Timer paused", snapshot)
}

/// Handle POST /timer/toggle - Play/pause button
pub async fn toggle_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TimerResponse>, AppError> {
    let snapshot = state.toggle().map_err(|e| rejected("toggle", e))?;
    let message = format!("Timer {}", snapshot.state);
    timer_response(&state, &message, snapshot)
}

/// Handle POST /timer/reset - Return to idle
pub async fn reset_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TimerResponse>, AppError> {
    let snapshot = state.reset()?;
    info!("Reset endpoint called - countdown idle");
    timer_response(&state, "Timer reset", snapshot)
}

/// Handle GET /timer - Current countdown
pub async fn timer_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TimerView>, AppError> {
    let snapshot = state.snapshot()?;
    let themes = state.theme()?;
    Ok(Json(TimerView::new(&snapshot, themes.palette())))
}

/// Handle GET /status - Countdown, theme and server information
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, AppError> {
    let snapshot = state.snapshot()?;
    let themes = state.theme()?;
    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        timer: TimerView::new(&snapshot, themes.palette()),
        theme: themes.current(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /theme - Current theme and palette
pub async fn theme_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ThemeResponse>, AppError> {
    let themes = state.theme()?;
    Ok(Json(ThemeResponse::from(&themes)))
}

/// Handle POST /theme/toggle - Switch between light and dark
pub async fn theme_toggle_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ThemeResponse>, AppError> {
    let themes = state.toggle_theme()?;
    Ok(Json(ThemeResponse::from(&themes)))
}

/// Handle POST /theme/:name - Select a theme by name
pub async fn theme_set_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<ThemeResponse>, AppError> {
    let theme: Theme = name.parse().map_err(|e| rejected("theme", e))?;
    let themes = state.set_theme(theme)?;
    Ok(Json(ThemeResponse::from(&themes)))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
