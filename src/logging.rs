use log::LevelFilter;
use std::{env, io};
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    // Handle common RUST_LOG formats
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info,
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

impl From<LogLevel> for tracing_subscriber::filter::LevelFilter {
    fn from(level: LogLevel) -> Self {
        use tracing_subscriber::filter::LevelFilter as Filter;
        match level {
            LogLevel::Trace => Filter::TRACE,
            LogLevel::Debug => Filter::DEBUG,
            LogLevel::Info => Filter::INFO,
            LogLevel::Warn => Filter::WARN,
            LogLevel::Error => Filter::ERROR,
        }
    }
}

/// Routes `log` records to stderr at the `RUST_LOG` threshold.
///
/// Stdout stays reserved for command output and the headless table.
pub fn init_stderr_logger() {
    let level = get_rust_log_level();
    let installed = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
    if installed.is_ok() {
        log::set_max_level(level.into());
    }
}

/// Silences `log` output while the terminal dashboard owns the screen.
///
/// Returns the previous threshold so it can be restored afterwards.
pub fn suspend_stderr_logger() -> LevelFilter {
    let previous = log::max_level();
    log::set_max_level(LevelFilter::Off);
    previous
}

pub fn resume_stderr_logger(previous: LevelFilter) {
    log::set_max_level(previous);
}
