//! Console notices printed around a watch session
//!
//! These go to stdout before the dashboard takes over the screen and after it
//! gives it back, so they use plain ANSI colors rather than ratatui styles.

use std::fmt;
use std::time::Duration;

const COLOR_INFO: &str = "\x1b[1;36m"; // Bold Cyan
const COLOR_SUCCESS: &str = "\x1b[1;32m"; // Bold Green
const COLOR_WARNING: &str = "\x1b[1;33m"; // Bold Yellow
const COLOR_RESET: &str = "\x1b[0m";

/// A one-line session notice, tagged by severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionNotice {
    Info(String),
    Success(String),
    /// Something ended the session other than the user
    Warning(String),
}

impl SessionNotice {
    fn tag(&self) -> (&'static str, &'static str) {
        match self {
            Self::Info(_) => ("INFO", COLOR_INFO),
            Self::Success(_) => ("SUCCESS", COLOR_SUCCESS),
            Self::Warning(_) => ("WARNING", COLOR_WARNING),
        }
    }

    fn text(&self) -> &str {
        match self {
            Self::Info(msg) | Self::Success(msg) | Self::Warning(msg) => msg,
        }
    }

    pub fn print(&self) {
        println!("{}", self);
    }
}

impl fmt::Display for SessionNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (label, color) = self.tag();
        write!(f, "{}[{}]{} {}", color, label, COLOR_RESET, self.text())
    }
}

/// Announces which server is being watched and how often.
pub fn print_session_starting(mode: &str, server_url: &str, poll_interval: Duration) {
    SessionNotice::Info(format!(
        "Starting {} mode, polling {} every {} ms",
        mode,
        server_url,
        poll_interval.as_millis()
    ))
    .print();
}

pub fn print_session_shutdown() {
    SessionNotice::Info("Shutting down...".to_string()).print();
}

/// The poller went away without being asked to stop.
pub fn print_poller_stopped() {
    SessionNotice::Warning("Poller stopped; no further snapshots will arrive".to_string())
        .print();
}

pub fn print_session_exit_success() {
    SessionNotice::Success("Class monitor exited successfully".to_string()).print();
}
