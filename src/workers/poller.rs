//! Snapshot polling loop
//!
//! Polls are serialized: a new request is never issued while the previous one is
//! still in flight, and ticks missed in the meantime are skipped rather than
//! replayed. The last rendered snapshot is therefore always the newest request's.

use super::core::{EventSender, WorkerConfig};
use crate::consts::cli_consts::server::STUDENTS_ENDPOINT;
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::monitor::StudentSource;
use crate::monitor::error::MonitorError;
use crate::network::ErrorHandler;
use crate::student::StudentsSnapshot;
use log::debug;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

/// Periodically fetches student snapshots and forwards them as events
pub struct SnapshotPoller {
    source: Box<dyn StudentSource>,
    event_sender: EventSender,
    config: WorkerConfig,
    error_handler: ErrorHandler,
}

impl SnapshotPoller {
    pub fn new(
        source: Box<dyn StudentSource>,
        event_sender: EventSender,
        config: WorkerConfig,
    ) -> Self {
        Self {
            source,
            event_sender,
            config,
            error_handler: ErrorHandler::new(),
        }
    }

    /// Perform one poll and report its outcome.
    ///
    /// Success sends a snapshot event; failure sends an error event and nothing else,
    /// so the display keeps whatever it showed before.
    pub async fn poll_once(&self) -> Result<StudentsSnapshot, MonitorError> {
        self.event_sender
            .send_poll_event(
                format!("Polling {}...", STUDENTS_ENDPOINT),
                EventType::Refresh,
                LogLevel::Debug,
            )
            .await;

        match self.source.fetch_students().await {
            Ok(snapshot) => {
                debug!(
                    "Fetched {} students from {}",
                    snapshot.len(),
                    self.config.server_url
                );
                let missing = snapshot.missing_fatigue_count();
                if missing > 0 {
                    self.event_sender
                        .send_poll_event(
                            format!("{} student(s) reported no fatigue score", missing),
                            EventType::Warning,
                            LogLevel::Warn,
                        )
                        .await;
                }
                self.event_sender
                    .send_event(Event::snapshot(snapshot.clone()))
                    .await;
                Ok(snapshot)
            }
            Err(e) => {
                let log_level = self.error_handler.classify_error(&e);
                debug!("Poll of {} failed: {:?}", self.config.server_url, e);
                self.event_sender
                    .send_poll_event(
                        format!("Failed to fetch students: {}", e),
                        EventType::Error,
                        log_level,
                    )
                    .await;
                Err(e)
            }
        }
    }

    /// Start the polling loop. The first poll happens immediately.
    pub fn run(self, mut shutdown: broadcast::Receiver<()>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = interval(self.config.poll_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            self.event_sender
                .send_poll_event(
                    format!(
                        "Watching {} every {} ms",
                        self.config.server_url,
                        self.config.poll_interval.as_millis()
                    ),
                    EventType::Waiting,
                    LogLevel::Info,
                )
                .await;

            loop {
                tokio::select! {
                    _ = shutdown.recv() => break,
                    _ = ticker.tick() => {}
                }
                // Shutdown also cancels an outstanding request
                tokio::select! {
                    _ = shutdown.recv() => break,
                    _ = self.poll_once() => {}
                }
                if self.event_sender.is_closed() {
                    break;
                }
            }
        })
    }
}
