//! Display formatting for derived table values.

pub const TICKS_PER_SECOND: u32 = 20;

/// Sentinel for an unknown age: sorts after every real duration and renders
/// as "--".
pub const UNKNOWN_SECONDS: u32 = u32::MAX;

/// Convert an item age in ticks to whole seconds. Age 0 means the save did
/// not carry a usable age, which maps to the unknown sentinel.
pub fn age_seconds(age_ticks: u32) -> u32 {
    if age_ticks == 0 {
        UNKNOWN_SECONDS
    } else {
        age_ticks / TICKS_PER_SECOND
    }
}

/// Format whole seconds as h:mm:ss (m:ss under an hour).
pub fn format_duration(secs: u32) -> String {
    if secs == UNKNOWN_SECONDS {
        return "--".to_string();
    }
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Format a tick offset relative to now; negative offsets lie in the past.
pub fn format_relative_time(ticks: i64) -> String {
    let secs = ticks / TICKS_PER_SECOND as i64;
    if secs == 0 {
        "now".to_string()
    } else if secs < 0 {
        format!("{} ago", format_span(secs.unsigned_abs()))
    } else {
        format!("in {}", format_span(secs as u64))
    }
}

/// Render a span of seconds with its two largest units.
fn format_span(secs: u64) -> String {
    const MINUTE: u64 = 60;
    const HOUR: u64 = 60 * MINUTE;
    const DAY: u64 = 24 * HOUR;
    if secs >= DAY {
        format!("{}d {}h", secs / DAY, (secs % DAY) / HOUR)
    } else if secs >= HOUR {
        format!("{}h {}m", secs / HOUR, (secs % HOUR) / MINUTE)
    } else if secs >= MINUTE {
        format!("{}m {}s", secs / MINUTE, secs % MINUTE)
    } else {
        format!("{}s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_zero_maps_to_unknown() {
        assert_eq!(age_seconds(0), UNKNOWN_SECONDS);
        assert_eq!(age_seconds(100), 5);
    }

    #[test]
    fn duration_renders_minutes_and_hours() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(125), "2:05");
        assert_eq!(format_duration(3725), "1:02:05");
        assert_eq!(format_duration(UNKNOWN_SECONDS), "--");
    }

    #[test]
    fn relative_time_renders_past_and_future() {
        assert_eq!(format_relative_time(0), "now");
        assert_eq!(format_relative_time(-19), "now");
        assert_eq!(format_relative_time(-2400), "2m 0s ago");
        assert_eq!(format_relative_time(2400), "in 2m 0s");
        assert_eq!(format_relative_time(-30_000_000), "17d 8h ago");
    }
}
