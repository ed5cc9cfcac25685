//! Clock and uptime formatting helpers

use std::time::Duration;

/// Format whole seconds as `HH:MM:SS`. Hours are not wrapped at 24.
pub fn format_clock(seconds: u64) -> String {
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}

/// Whole seconds shown for a remaining time, rounded up so the clock
/// only reads zero once the countdown is over.
pub fn display_seconds(remaining: Duration) -> u64 {
    let millis = remaining.as_millis().div_ceil(1000);
    u64::try_from(millis).unwrap_or(u64::MAX)
}

/// Parse `HH:MM:SS`, `MM:SS` or `SS` into a duration
pub fn parse_clock(input: &str) -> Result<Duration, String> {
    let parts: Vec<&str> = input.trim().split(':').collect();
    if parts.len() > 3 {
        return Err(format!("expected HH:MM:SS, MM:SS or SS, got '{}'", input));
    }

    let mut total: u64 = 0;
    for part in &parts {
        let value: u64 = part
            .trim()
            .parse()
            .map_err(|_| format!("invalid number '{}' in '{}'", part, input))?;
        total = total
            .checked_mul(60)
            .and_then(|t| t.checked_add(value))
            .ok_or_else(|| format!("duration '{}' is too large", input))?;
    }

    Ok(Duration::from_secs(total))
}

/// Human readable uptime such as `1h 2m 3s`
pub fn format_uptime(duration: Duration) -> String {
    let hours = duration.as_secs() / 3600;
    let minutes = (duration.as_secs() % 3600) / 60;
    let seconds = duration.as_secs() % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_clock_with_zero_padding() {
        assert_eq!(format_clock(0), "00:00:00");
        assert_eq!(format_clock(65), "00:01:05");
        assert_eq!(format_clock(3600 + 2 * 60 + 3), "01:02:03");
        assert_eq!(format_clock(100 * 3600), "100:00:00");
    }

    #[test]
    fn display_rounds_partial_seconds_up() {
        assert_eq!(display_seconds(Duration::ZERO), 0);
        assert_eq!(display_seconds(Duration::from_millis(1)), 1);
        assert_eq!(display_seconds(Duration::from_millis(4000)), 4);
        assert_eq!(display_seconds(Duration::from_millis(4001)), 5);
    }

    #[test]
    fn parses_clock_forms() {
        assert_eq!(parse_clock("45"), Ok(Duration::from_secs(45)));
        assert_eq!(parse_clock("05:00"), Ok(Duration::from_secs(300)));
        assert_eq!(parse_clock("1:30:15"), Ok(Duration::from_secs(5415)));
        assert_eq!(parse_clock("0:0:0"), Ok(Duration::ZERO));
    }

    #[test]
    fn rejects_malformed_clock() {
        assert!(parse_clock("").is_err());
        assert!(parse_clock("1:2:3:4").is_err());
        assert!(parse_clock("ten").is_err());
        assert!(parse_clock("-5").is_err());
    }

    #[test]
    fn formats_uptime() {
        assert_eq!(format_uptime(Duration::from_secs(42)), "42s");
        assert_eq!(format_uptime(Duration::from_secs(125)), "2m 5s");
        assert_eq!(format_uptime(Duration::from_secs(3723)), "1h 2m 3s");
    }
}
