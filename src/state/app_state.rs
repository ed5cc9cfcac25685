//! Main application state management

use std::{
    sync::{Mutex, MutexGuard},
    time::Duration,
};

use chrono::{DateTime, Utc};
use tokio::{sync::mpsc, time::Instant};
use tracing::{debug, info};

use super::{Theme, ThemeManager, Timer, TimerState};
use crate::{
    error::{AppError, TimerError},
    services::{ChannelNotifier, ExpiryEvent},
    utils::format_uptime,
};

/// Message shown when the user leaves it empty
pub const DEFAULT_MESSAGE: &str = "Countdown";

/// Point-in-time copy of the countdown for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerSnapshot {
    pub state: TimerState,
    pub duration: Option<Duration>,
    pub remaining: Duration,
    pub message: String,
}

impl TimerSnapshot {
    /// Time the clock should show: the configured length while idle,
    /// the live countdown otherwise.
    pub fn shown(&self) -> Duration {
        match self.state {
            TimerState::Idle => self.duration.unwrap_or_default(),
            _ => self.remaining,
        }
    }
}

/// Countdown plus the instant up to which elapsed time has been accounted
#[derive(Debug)]
struct Session {
    timer: Timer<ChannelNotifier>,
    anchor: Option<Instant>,
    message: String,
}

impl Session {
    /// Feed the time elapsed since the anchor into the timer
    fn advance(&mut self, now: Instant) -> TimerState {
        let Some(anchor) = self.anchor else {
            return self.timer.state();
        };

        let state = self.timer.tick(now.saturating_duration_since(anchor));
        self.anchor = (state == TimerState::Running).then_some(now);
        state
    }

    /// Store the message shown with the countdown and carried by its expiry event
    fn set_message(&mut self, message: &str) {
        self.message = normalize_message(message);
        self.timer.notifier_mut().set_message(&self.message);
    }

    fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            state: self.timer.state(),
            duration: self.timer.duration(),
            remaining: self.timer.remaining(),
            message: self.message.clone(),
        }
    }
}

/// Shared state of the countdown service
#[derive(Debug)]
pub struct AppState {
    session: Mutex<Session>,
    themes: Mutex<ThemeManager>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    last_action: Mutex<Option<(String, DateTime<Utc>)>>,
}

impl AppState {
    /// Create the state and the receiving end of the expiry channel
    pub fn new(
        port: u16,
        host: String,
        theme: Theme,
    ) -> (Self, mpsc::UnboundedReceiver<ExpiryEvent>) {
        let (notifier, expiry_rx) = ChannelNotifier::new(DEFAULT_MESSAGE);

        let state = Self {
            session: Mutex::new(Session {
                timer: Timer::new(notifier),
                anchor: None,
                message: DEFAULT_MESSAGE.to_string(),
            }),
            themes: Mutex::new(ThemeManager::new(theme)),
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
        };

        (state, expiry_rx)
    }

    fn session(&self) -> Result<MutexGuard<'_, Session>, AppError> {
        self.session
            .lock()
            .map_err(|_| AppError::LockPoisoned("timer session"))
    }

    fn themes(&self) -> Result<MutexGuard<'_, ThemeManager>, AppError> {
        self.themes
            .lock()
            .map_err(|_| AppError::LockPoisoned("theme manager"))
    }

    /// Run `command` against the session and record it as the last action
    fn command<F>(&self, action: &str, command: F) -> Result<TimerSnapshot, AppError>
    where
        F: FnOnce(&mut Session, Instant) -> Result<(), AppError>,
    {
        let mut session = self.session()?;
        command(&mut *session, Instant::now())?;
        let snapshot = session.snapshot();
        drop(session);

        self.record_action(action);
        debug!("{} -> {:?}", action, snapshot);
        Ok(snapshot)
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some((action.to_string(), Utc::now()));
        }
    }

    /// Set the countdown length and message. Only allowed while idle.
    pub fn configure(&self, duration: Duration, message: &str) -> Result<TimerSnapshot, AppError> {
        self.command("configure", |session, _| {
            session.timer.configure(duration)?;
            session.set_message(message);
            Ok(())
        })
    }

    pub fn start(&self) -> Result<TimerSnapshot, AppError> {
        self.command("start", |session, now| {
            session.timer.start()?;
            session.anchor = Some(now);
            Ok(())
        })
    }

    /// Pause, crediting the time since the last tick first
    pub fn pause(&self) -> Result<TimerSnapshot, AppError> {
        self.command("pause", |session, now| {
            session.advance(now);
            session.timer.pause()?;
            session.anchor = None;
            Ok(())
        })
    }

    /// Pause when running, start or resume otherwise
    pub fn toggle(&self) -> Result<TimerSnapshot, AppError> {
        self.command("toggle", |session, now| {
            if session.advance(now) == TimerState::Running {
                session.timer.pause()?;
                session.anchor = None;
            } else {
                session.timer.start()?;
                session.anchor = Some(now);
            }
            Ok(())
        })
    }

    pub fn reset(&self) -> Result<TimerSnapshot, AppError> {
        self.command("reset", |session, _| {
            session.timer.reset();
            session.anchor = None;
            Ok(())
        })
    }

    /// Reset, configure and start in one step.
    ///
    /// A zero duration is rejected before the current countdown is touched.
    pub fn restart(&self, duration: Duration, message: &str) -> Result<TimerSnapshot, AppError> {
        self.command("restart", |session, now| {
            if duration.is_zero() {
                return Err(TimerError::InvalidDuration.into());
            }
            session.timer.reset();
            session.anchor = None;
            session.timer.configure(duration)?;
            session.set_message(message);
            session.timer.start()?;
            session.anchor = Some(now);
            Ok(())
        })
    }

    /// Account for the time elapsed since the previous call. Called by the tick task.
    pub fn advance(&self) -> Result<TimerState, AppError> {
        let mut session = self.session()?;
        let before = session.timer.state();
        let after = session.advance(Instant::now());
        drop(session);

        if before != after {
            info!("Timer state changed: {} -> {}", before, after);
        }
        Ok(after)
    }

    /// Current countdown, with elapsed time accounted
    pub fn snapshot(&self) -> Result<TimerSnapshot, AppError> {
        let mut session = self.session()?;
        session.advance(Instant::now());
        Ok(session.snapshot())
    }

    pub fn theme(&self) -> Result<ThemeManager, AppError> {
        Ok(self.themes()?.clone())
    }

    pub fn set_theme(&self, theme: Theme) -> Result<ThemeManager, AppError> {
        let mut themes = self.themes()?;
        themes.set_theme(theme);
        let current = themes.clone();
        drop(themes);

        info!("Theme set to {}", theme);
        self.record_action("theme");
        Ok(current)
    }

    pub fn toggle_theme(&self) -> Result<ThemeManager, AppError> {
        let mut themes = self.themes()?;
        let theme = themes.toggle();
        let current = themes.clone();
        drop(themes);

        info!("Theme toggled to {}", theme);
        self.record_action("theme-toggle");
        Ok(current)
    }

    /// Server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        format_uptime(self.start_time.elapsed())
    }

    /// Last command name and when it happened
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        match self.last_action.lock().ok().and_then(|a| a.clone()) {
            Some((action, at)) => (Some(action), Some(at)),
            None => (None, None),
        }
    }
}

fn normalize_message(message: &str) -> String {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        DEFAULT_MESSAGE.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> (AppState, mpsc::UnboundedReceiver<ExpiryEvent>) {
        AppState::new(0, "127.0.0.1".to_string(), Theme::Light)
    }

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_follows_the_clock_and_notifies_once() {
        let (state, mut expiry_rx) = app();
        state.configure(secs(300), "tea").expect("configure");
        state.start().expect("start");

        tokio::time::advance(secs(120)).await;
        assert_eq!(state.advance().expect("advance"), TimerState::Running);
        assert_eq!(state.snapshot().expect("snapshot").remaining, secs(180));

        tokio::time::advance(secs(180)).await;
        assert_eq!(state.advance().expect("advance"), TimerState::Expired);

        tokio::time::advance(secs(60)).await;
        assert_eq!(state.advance().expect("advance"), TimerState::Expired);

        assert!(expiry_rx.try_recv().is_ok());
        assert!(expiry_rx.try_recv().is_err());
        assert_eq!(state.snapshot().expect("snapshot").message, "tea");
    }

    #[tokio::test(start_paused = true)]
    async fn pause_credits_partial_interval_and_freezes() {
        let (state, _rx) = app();
        state.configure(secs(10), "").expect("configure");
        state.start().expect("start");

        tokio::time::advance(Duration::from_millis(4500)).await;
        let paused = state.pause().expect("pause");
        assert_eq!(paused.state, TimerState::Paused);
        assert_eq!(paused.remaining, Duration::from_millis(5500));

        tokio::time::advance(secs(30)).await;
        state.advance().expect("advance");
        assert_eq!(
            state.snapshot().expect("snapshot").remaining,
            Duration::from_millis(5500)
        );

        state.start().expect("resume");
        tokio::time::advance(Duration::from_millis(5500)).await;
        assert_eq!(state.advance().expect("advance"), TimerState::Expired);
    }

    #[tokio::test(start_paused = true)]
    async fn toggle_switches_between_running_and_paused() {
        let (state, _rx) = app();
        state.configure(secs(5), "").expect("configure");

        assert_eq!(state.toggle().expect("toggle").state, TimerState::Running);
        tokio::time::advance(secs(2)).await;
        let paused = state.toggle().expect("toggle");
        assert_eq!(paused.state, TimerState::Paused);
        assert_eq!(paused.remaining, secs(3));
        assert_eq!(state.toggle().expect("toggle").state, TimerState::Running);
    }

    #[tokio::test(start_paused = true)]
    async fn toggle_on_expired_timer_is_rejected() {
        let (state, _rx) = app();
        state.configure(secs(1), "").expect("configure");
        state.start().expect("start");
        tokio::time::advance(secs(1)).await;

        assert!(matches!(
            state.toggle(),
            Err(AppError::Timer(TimerError::InvalidState {
                state: TimerState::Expired,
                ..
            }))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn restart_replaces_a_running_countdown() {
        let (state, _rx) = app();
        state.configure(secs(60), "first").expect("configure");
        state.start().expect("start");
        tokio::time::advance(secs(10)).await;

        let snapshot = state.restart(secs(20), "second").expect("restart");
        assert_eq!(snapshot.state, TimerState::Running);
        assert_eq!(snapshot.remaining, secs(20));
        assert_eq!(snapshot.message, "second");
    }

    #[tokio::test(start_paused = true)]
    async fn restart_with_zero_duration_keeps_running_countdown() {
        let (state, _rx) = app();
        state.configure(secs(60), "first").expect("configure");
        state.start().expect("start");
        tokio::time::advance(secs(15)).await;

        assert!(matches!(
            state.restart(Duration::ZERO, "second"),
            Err(AppError::Timer(TimerError::InvalidDuration))
        ));
        let snapshot = state.snapshot().expect("snapshot");
        assert_eq!(snapshot.state, TimerState::Running);
        assert_eq!(snapshot.remaining, secs(45));
        assert_eq!(snapshot.duration, Some(secs(60)));
        assert_eq!(snapshot.message, "first");
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_event_carries_message_set_before_expiry() {
        let (state, mut expiry_rx) = app();
        state.restart(secs(5), "tea").expect("restart");
        tokio::time::advance(secs(5)).await;
        state.advance().expect("advance");

        state.restart(secs(30), "pasta").expect("restart");
        let event = expiry_rx.try_recv().expect("expiry event");
        assert_eq!(event.message, "tea");
    }

    #[tokio::test]
    async fn reset_returns_to_idle_and_shows_duration() {
        let (state, _rx) = app();
        state.configure(secs(90), "").expect("configure");
        state.start().expect("start");

        let snapshot = state.reset().expect("reset");
        assert_eq!(snapshot.state, TimerState::Idle);
        assert_eq!(snapshot.remaining, Duration::ZERO);
        assert_eq!(snapshot.shown(), secs(90));
    }

    #[tokio::test]
    async fn empty_message_falls_back_to_default() {
        let (state, _rx) = app();
        let snapshot = state.configure(secs(5), "   ").expect("configure");
        assert_eq!(snapshot.message, DEFAULT_MESSAGE);
    }

    #[tokio::test]
    async fn records_last_action() {
        let (state, _rx) = app();
        assert_eq!(state.get_last_action(), (None, None));

        state.configure(secs(5), "").expect("configure");
        state.toggle_theme().expect("theme");
        let (action, at) = state.get_last_action();
        assert_eq!(action.as_deref(), Some("theme-toggle"));
        assert!(at.is_some());
    }

    #[tokio::test]
    async fn failed_command_is_not_recorded() {
        let (state, _rx) = app();
        assert!(state.pause().is_err());
        assert_eq!(state.get_last_action().0, None);
    }

    #[tokio::test]
    async fn theme_can_be_set_and_toggled() {
        let (state, _rx) = app();
        assert_eq!(state.theme().expect("theme").current(), Theme::Light);
        assert_eq!(state.toggle_theme().expect("toggle").current(), Theme::Dark);
        assert_eq!(
            state.set_theme(Theme::Light).expect("set").current(),
            Theme::Light
        );
    }
}
