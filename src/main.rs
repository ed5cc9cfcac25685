//! Countdown - A countdown timer service with themes and expiry notifications
//!
//! This is the main entry point for the countdown application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use countdown::{
    api::create_router,
    config::Config,
    services::DesktopAlert,
    state::AppState,
    tasks::{countdown_tick_task, expiry_alert_task},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("countdown={},tower_http=info", config.log_level()))
        .init();

    info!("Starting countdown v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, tick={}ms, theme={}",
          config.host, config.port, config.tick_ms, config.theme);

    // Create application state
    let (state, expiry_rx) = AppState::new(config.port, config.host.clone(), config.theme);
    let state = Arc::new(state);

    // Apply the countdown given on the command line
    if let Some(duration) = config.duration {
        let snapshot = if config.start {
            state.restart(duration, &config.message)?
        } else {
            state.configure(duration, &config.message)?
        };
        info!("Initial countdown: {:?} ({})", duration, snapshot.state);
    }

    // Start the background tasks
    let alert = if config.no_notify {
        DesktopAlert::log_only()
    } else {
        DesktopAlert::new()
    };
    tokio::spawn(expiry_alert_task(expiry_rx, alert));
    tokio::spawn(countdown_tick_task(Arc::clone(&state), config.tick_period()));

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /timer/configure - Set duration and message");
    info!("  POST /timer/start     - Start or resume");
    info!("  POST /timer/pause     - Pause");
    info!("  POST /timer/toggle    - Play/pause");
    info!("  POST /timer/reset     - Reset to idle");
    info!("  GET  /timer           - Current countdown");
    info!("  GET  /theme           - Current theme");
    info!("  POST /theme/toggle    - Switch light/dark");
    info!("  GET  /status          - Status");
    info!("  GET  /health          - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
