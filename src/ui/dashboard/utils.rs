//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::classify::Status;
use crate::events::EventType;
use ratatui::prelude::Color;

/// Color used for a classification everywhere on the dashboard
pub fn status_color(status: Status) -> Color {
    match status {
        Status::Active => Color::Green,
        Status::Passive => Color::Yellow,
        Status::Distracted => Color::Red,
    }
}

pub fn event_color(event_type: EventType) -> Color {
    match event_type {
        EventType::Success => Color::Green,
        EventType::Warning => Color::Yellow,
        EventType::Error => Color::LightRed,
        EventType::Refresh | EventType::Waiting => Color::Cyan,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // MM-DD and HH:MM:SS; polls are seconds apart
            if let (Some(month_day), Some(clock)) = (date_part.get(5..10), time_part.get(0..8)) {
                return format!("{} {}", month_day, clock);
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("Reqwest error") && msg.contains("timed out") {
        return "Request timed out - retrying on next poll".to_string();
    }
    if msg.contains("Reqwest error") && msg.contains("connect") {
        return "Server unreachable - retrying on next poll".to_string();
    }
    if msg.contains("Reqwest error") {
        return "Network error - retrying on next poll".to_string();
    }
    msg.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(
            format_compact_timestamp("2026-10-19 14:03:27"),
            "10-19 14:03:27"
        );
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_clean_http_error_message() {
        assert_eq!(
            clean_http_error_message(
                "Failed to fetch students: Reqwest error: error sending request: operation timed out"
            ),
            "Request timed out - retrying on next poll"
        );
        assert_eq!(
            clean_http_error_message("Failed to fetch students: Reqwest error: tcp connect error"),
            "Server unreachable - retrying on next poll"
        );
        assert_eq!(
            clean_http_error_message("HTTP error with status 500: boom"),
            "HTTP error with status 500: boom"
        );
    }

    #[test]
    fn test_status_colors_are_distinct() {
        assert_ne!(status_color(Status::Active), status_color(Status::Passive));
        assert_ne!(status_color(Status::Passive), status_color(Status::Distracted));
    }
}
