//! Centralized error classification for monitor requests

use crate::logging::LogLevel;
use crate::monitor::error::MonitorError;

/// Maps request failures to the level they are reported at
#[derive(Debug, Clone, Default)]
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn new() -> Self {
        Self
    }

    /// Classify error and determine appropriate log level
    pub fn classify_error(&self, error: &MonitorError) -> LogLevel {
        match error {
            // Rate limiting - low priority
            MonitorError::Http { status, .. } if *status == 429 => LogLevel::Debug,

            // Server errors - temporary issues
            MonitorError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Wrong URL or endpoint - won't fix itself
            MonitorError::Http { status, .. } if (400..=499).contains(status) => LogLevel::Error,

            // Not a students payload - probably pointed at the wrong server
            MonitorError::Decode(_) => LogLevel::Error,

            // Network issues - usually temporary
            MonitorError::Reqwest(_) => LogLevel::Warn,

            _ => LogLevel::Warn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> MonitorError {
        MonitorError::Http {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn test_classify_http_statuses() {
        let handler = ErrorHandler::new();
        assert_eq!(handler.classify_error(&http(429)), LogLevel::Debug);
        assert_eq!(handler.classify_error(&http(502)), LogLevel::Warn);
        assert_eq!(handler.classify_error(&http(404)), LogLevel::Error);
        assert_eq!(handler.classify_error(&http(302)), LogLevel::Warn);
    }

    #[test]
    fn test_classify_decode_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(
            ErrorHandler::new().classify_error(&MonitorError::Decode(err)),
            LogLevel::Error
        );
    }
}
