// SPDX-License-Identifier: MPL-2.0
//! Playback time formatting for the seek overlay and the controls bar.

/// Formats milliseconds as `m:ss`, or `h:mm:ss` from one hour on.
///
/// Minutes are not zero-padded below one hour. Sub-second remainders are
/// truncated.
#[must_use]
pub fn format_time(millis: u64) -> String {
    let total_secs = millis / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// Formats a `position / duration` pair.
#[must_use]
pub fn format_progress(position_ms: u64, duration_ms: u64) -> String {
    format!("{} / {}", format_time(position_ms), format_time(duration_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_handles_zero() {
        assert_eq!(format_time(0), "0:00");
    }

    #[test]
    fn format_time_handles_seconds() {
        assert_eq!(format_time(45_999), "0:45");
    }

    #[test]
    fn format_time_handles_minutes() {
        assert_eq!(format_time(125_000), "2:05");
    }

    #[test]
    fn format_time_handles_hours() {
        assert_eq!(format_time(3_665_000), "1:01:05");
    }

    #[test]
    fn progress_joins_both_times() {
        assert_eq!(format_progress(60_000, 120_000), "1:00 / 2:00");
    }
}
