//! Event System
//!
//! Types and implementations for poller events and logging

use crate::logging::{LogLevel, get_rust_log_level, should_log};
use crate::student::StudentsSnapshot;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Warning,
    Error,
    Refresh,
    Waiting,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// The decoded snapshot, present only on successful polls
    pub snapshot: Option<StudentsSnapshot>,
}

impl Event {
    pub fn new(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            snapshot: None,
        }
    }

    /// A successful poll carrying the snapshot to render.
    pub fn snapshot(snapshot: StudentsSnapshot) -> Self {
        let msg = format!("Received snapshot of {} students", snapshot.len());
        Self {
            snapshot: Some(snapshot),
            ..Self::new(msg, EventType::Success, LogLevel::Debug)
        }
    }

    /// Whether the event passes the `RUST_LOG` threshold.
    pub fn should_display(&self) -> bool {
        self.should_display_at(get_rust_log_level())
    }

    pub fn should_display_at(&self, threshold: LogLevel) -> bool {
        should_log(self.log_level, threshold)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::StudentRecord;

    #[test]
    fn test_snapshot_event_carries_payload() {
        let snapshot: StudentsSnapshot = [("s1", StudentRecord::new(0.2, 30.0))]
            .into_iter()
            .collect();
        let event = Event::snapshot(snapshot.clone());
        assert_eq!(event.event_type, EventType::Success);
        assert_eq!(event.snapshot, Some(snapshot));
        assert!(event.msg.contains("1 students"));
    }

    #[test]
    fn test_display_format() {
        let event = Event::new("Polling".to_string(), EventType::Refresh, LogLevel::Info);
        let text = event.to_string();
        assert!(text.starts_with("Refresh ["));
        assert!(text.ends_with("] Polling"));
    }

    #[test]
    fn test_threshold_applies_to_every_level() {
        let failure = Event::new(
            "Failed to fetch students".to_string(),
            EventType::Error,
            LogLevel::Warn,
        );
        assert!(!failure.should_display_at(LogLevel::Error));
        assert!(failure.should_display_at(LogLevel::Warn));
        assert!(failure.should_display_at(LogLevel::Info));

        let waiting = Event::new("Watching".to_string(), EventType::Waiting, LogLevel::Info);
        assert!(!waiting.should_display_at(LogLevel::Warn));
    }
}
