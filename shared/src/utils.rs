//! # Shared Utility Functions
//!
//! Display helpers used across the student client and any future frontends.
//!
//! - [`format_duration`] - Format elapsed seconds as `m:ss` / `h:mm:ss`
//! - [`truncate_name`] - Truncate long display names with an ellipsis

/// Format a number of elapsed seconds for display.
///
/// Durations under an hour render as `m:ss`; longer ones as `h:mm:ss`.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_duration;
///
/// assert_eq!(format_duration(42), "0:42");
/// assert_eq!(format_duration(125), "2:05");
/// assert_eq!(format_duration(3725), "1:02:05");
/// ```
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Truncate a display name to `max_chars` characters, appending an ellipsis.
///
/// Operates on characters, not bytes, so multi-byte names are safe.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_name;
///
/// assert_eq!(truncate_name("Alexandria Hamilton", 10), "Alexandria…");
/// assert_eq!(truncate_name("Kim", 10), "Kim");
/// ```
pub fn truncate_name(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        return name.to_string();
    }

    let truncated: String = name.chars().take(max_chars).collect();
    format!("{}…", truncated)
}
