use crate::monitor::error::MonitorError;
use crate::report::ClassReport;
use crate::student::StudentsSnapshot;

pub(crate) mod client;
pub use client::MonitorClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// Source of student snapshots and session reports.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait StudentSource: Send + Sync {
    /// Fetch the current population of monitored students.
    async fn fetch_students(&self) -> Result<StudentsSnapshot, MonitorError>;

    /// End the class session and fetch the final report.
    ///
    /// The server clears its session state when this is called.
    async fn end_class(&self) -> Result<ClassReport, MonitorError>;
}
