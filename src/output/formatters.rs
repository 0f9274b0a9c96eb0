//! Formatting utilities for terminal output

use crate::core::MAX_ATTEMPTS;

/// Format whole seconds as `45s` or `1m 32s`
///
/// # Examples
/// ```
/// use moviemoji::output::formatters::format_duration;
///
/// assert_eq!(format_duration(45), "45s");
/// assert_eq!(format_duration(92), "1m 32s");
/// ```
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        return format!("{seconds}s");
    }
    let minutes = seconds / 60;
    let remaining = seconds % 60;
    format!("{minutes}m {remaining}s")
}

/// Render consumed attempts as a track of filled and empty dots
#[must_use]
pub fn attempt_track(used: usize) -> String {
    let used = used.min(MAX_ATTEMPTS);
    format!("{}{}", "●".repeat(used), "○".repeat(MAX_ATTEMPTS - used))
}
