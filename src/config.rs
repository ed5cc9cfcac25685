//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

use crate::{state::Theme, utils::parse_clock};

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "countdown")]
#[command(about = "A countdown timer service with themes and desktop notifications")]
#[command(version)]
pub struct Config {
    /// Port to bind the control API to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Tick interval in milliseconds
    #[arg(long, default_value = "1000", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Initial colour theme
    #[arg(long, value_enum, default_value_t = Theme::Light)]
    pub theme: Theme,

    /// Countdown length to configure at launch (HH:MM:SS, MM:SS or SS)
    #[arg(short, long, value_parser = parse_clock)]
    pub duration: Option<Duration>,

    /// Message shown with the countdown and in the notification
    #[arg(short, long, default_value = "")]
    pub message: String,

    /// Start the configured countdown immediately
    #[arg(short, long, requires = "duration")]
    pub start: bool,

    /// Log expiry instead of showing a desktop notification
    #[arg(long)]
    pub no_notify: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_to_localhost() {
        let config = Config::try_parse_from(["countdown"]).expect("parse");
        assert_eq!(config.address(), "127.0.0.1:20554");
        assert_eq!(config.tick_period(), Duration::from_secs(1));
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.duration, None);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn parses_duration_theme_and_start() {
        let config = Config::try_parse_from([
            "countdown", "--duration", "00:25:00", "--theme", "dark", "--start", "-v",
        ])
        .expect("parse");
        assert_eq!(config.duration, Some(Duration::from_secs(1500)));
        assert_eq!(config.theme, Theme::Dark);
        assert!(config.start);
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn start_requires_duration() {
        assert!(Config::try_parse_from(["countdown", "--start"]).is_err());
    }

    #[test]
    fn rejects_zero_tick_and_bad_duration() {
        assert!(Config::try_parse_from(["countdown", "--tick-ms", "0"]).is_err());
        assert!(Config::try_parse_from(["countdown", "--duration", "soon"]).is_err());
    }
}
