//! Session setup and initialization

use crate::config::Config;
use crate::events::Event;
use crate::monitor::MonitorClient;
use crate::runtime::start_poller;
use crate::workers::core::WorkerConfig;
use std::error::Error;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Event receiver for poller events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Join handle of the poller task
    pub join_handle: JoinHandle<()>,
    /// Shutdown sender to stop the poller
    pub shutdown_sender: broadcast::Sender<()>,
    /// Server being watched
    pub server_url: String,
    /// Effective poll interval
    pub poll_interval: std::time::Duration,
}

/// Sets up a polling session
///
/// Builds the HTTP client, creates the shutdown channel and starts the poller.
pub fn setup_session(config: &Config) -> Result<SessionData, Box<dyn Error>> {
    let client = MonitorClient::new(config.server_url.clone())?;
    let (shutdown_sender, _) = broadcast::channel(1);

    let worker_config =
        WorkerConfig::new(config.server_url.clone()).with_poll_interval(config.poll_interval());
    let (event_receiver, join_handle) = start_poller(
        Box::new(client),
        worker_config,
        shutdown_sender.subscribe(),
    );

    Ok(SessionData {
        event_receiver,
        join_handle,
        shutdown_sender,
        server_url: config.server_url.clone(),
        poll_interval: config.poll_interval(),
    })
}
