pub mod cli_consts {
    //! Monitor Configuration Constants
    //!
    //! Constants for the polling dashboard, organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Capacity of the poller -> UI event channel
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // CLASSIFICATION
    // =============================================================================

    /// Fatigue thresholds. Each bound is inclusive for the higher category.
    pub mod fatigue {
        /// Scores at or above this are at least Passive
        pub const PASSIVE_THRESHOLD: f64 = 40.0;

        /// Scores at or above this are Distracted
        pub const DISTRACTED_THRESHOLD: f64 = 70.0;
    }

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// Snapshot polling configuration
    pub mod polling {
        use std::time::Duration;

        /// Interval between polls of the students endpoint (milliseconds)
        pub const DEFAULT_INTERVAL_MS: u64 = 2000;

        /// Lower bound accepted for a configured interval (milliseconds)
        pub const MIN_INTERVAL_MS: u64 = 100;

        /// Per-request timeout (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        /// Connect timeout (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 5;

        pub const fn default_interval() -> Duration {
            Duration::from_millis(DEFAULT_INTERVAL_MS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }
    }

    /// Server endpoints and defaults
    pub mod server {
        /// Used when neither the CLI, the environment nor the config file names a server
        pub const DEFAULT_URL: &str = "http://localhost:8000";

        /// Environment variable overriding the configured server URL
        pub const URL_ENV_VAR: &str = "CLASS_MONITOR_URL";

        pub const STUDENTS_ENDPOINT: &str = "/students";
        pub const END_CLASS_ENDPOINT: &str = "/end_class";
    }
}
