//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::display::TableSurface;
use crate::events::Event as WorkerEvent;
use crate::ui::app::UIConfig;

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Where the poller is in its cycle
#[derive(Debug, Clone)]
pub enum PollState {
    /// No poll has completed yet
    Connecting,
    /// Request in flight
    Polling { started_at: Instant },
    /// Last poll succeeded; waiting for the next tick
    Idle { since: Instant },
    /// Last poll failed; the table still shows the previous snapshot
    Failed { since: Instant },
}

/// Dashboard state: the rendered table plus poll bookkeeping.
#[derive(Debug)]
pub struct DashboardState {
    /// Base URL of the monitor server
    pub server_url: String,
    /// Configured time between polls
    pub poll_interval: Duration,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// The currently displayed table and counters
    pub table: TableSurface,
    /// Animation tick counter
    pub tick: usize,
    /// Number of snapshots rendered so far
    pub snapshots_rendered: u64,
    /// Failed polls since the last success
    pub consecutive_failures: u32,

    /// Timestamp of the snapshot currently on screen
    last_update_timestamp: Option<String>,
    poll_state: PollState,
}

impl DashboardState {
    pub fn new(start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            server_url: ui_config.server_url,
            poll_interval: ui_config.poll_interval,
            start_time,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            table: TableSurface::new(),
            tick: 0,
            snapshots_rendered: 0,
            consecutive_failures: 0,
            last_update_timestamp: None,
            poll_state: PollState::Connecting,
        }
    }

    pub fn poll_state(&self) -> &PollState {
        &self.poll_state
    }

    pub fn set_poll_state(&mut self, state: PollState) {
        self.poll_state = state;
    }

    pub fn last_update_timestamp(&self) -> &Option<String> {
        &self.last_update_timestamp
    }

    pub fn set_last_update_timestamp(&mut self, timestamp: Option<String>) {
        self.last_update_timestamp = timestamp;
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }
}
