//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from events

use super::state::{DashboardState, PollState};

use crate::display::render_snapshot;
use crate::events::{Event as WorkerEvent, EventType};

use std::time::Instant;

impl DashboardState {
    /// Advance one UI tick, applying every queued event in arrival order.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(event);
        }
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, mut event: WorkerEvent) {
        // The log keeps the message only; the snapshot goes straight to the table
        let snapshot = event.snapshot.take();

        match event.event_type {
            EventType::Refresh => {
                self.set_poll_state(PollState::Polling {
                    started_at: Instant::now(),
                });
            }
            EventType::Error => {
                self.consecutive_failures += 1;
                self.set_poll_state(PollState::Failed {
                    since: Instant::now(),
                });
            }
            EventType::Success | EventType::Warning | EventType::Waiting => {}
        }

        if let Some(snapshot) = snapshot {
            render_snapshot(&snapshot, &mut self.table);
            self.snapshots_rendered += 1;
            self.consecutive_failures = 0;
            self.set_last_update_timestamp(Some(event.timestamp.clone()));
            self.set_poll_state(PollState::Idle {
                since: Instant::now(),
            });
        }

        self.add_to_activity_log(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Status;
    use crate::display::Counter;
    use crate::logging::LogLevel;
    use crate::student::{StudentRecord, StudentsSnapshot};
    use crate::ui::UIConfig;
    use std::time::Duration;

    fn state() -> DashboardState {
        DashboardState::new(
            Instant::now(),
            UIConfig::new(false, "http://test".to_string(), Duration::from_secs(2)),
        )
    }

    fn snapshot(entries: &[(&str, f64)]) -> StudentsSnapshot {
        entries
            .iter()
            .map(|(id, fatigue)| (*id, StudentRecord::new(0.3, *fatigue)))
            .collect()
    }

    fn failure() -> WorkerEvent {
        WorkerEvent::new(
            "Failed to fetch students: timeout".to_string(),
            EventType::Error,
            LogLevel::Warn,
        )
    }

    #[test]
    fn snapshot_event_renders_table() {
        let mut state = state();
        state.add_event(WorkerEvent::snapshot(snapshot(&[
            ("s1", 10.0),
            ("s2", 45.0),
            ("s3", 80.0),
        ])));
        state.update();

        assert_eq!(state.table.rows().len(), 3);
        assert_eq!(state.table.counter(Counter::Total), 3);
        assert_eq!(state.snapshots_rendered, 1);
        assert!(state.last_update_timestamp().is_some());
        assert!(matches!(state.poll_state(), PollState::Idle { .. }));
        // The logged copy does not keep the payload
        assert!(state.activity_logs.iter().all(|e| e.snapshot.is_none()));
    }

    #[test]
    fn later_snapshot_replaces_earlier_one() {
        let mut state = state();
        state.add_event(WorkerEvent::snapshot(snapshot(&[("s1", 10.0), ("s2", 50.0)])));
        state.add_event(WorkerEvent::snapshot(snapshot(&[("s7", 90.0)])));
        state.update();

        let ids: Vec<&str> = state.table.rows().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["s7"]);
        assert_eq!(state.table.rows()[0].status, Status::Distracted);
        assert_eq!(state.table.counter(Counter::Active), 0);
        assert_eq!(state.table.counter(Counter::Distracted), 1);
    }

    #[test]
    fn failed_poll_keeps_previous_table() {
        let mut state = state();
        state.add_event(WorkerEvent::snapshot(snapshot(&[("s1", 10.0)])));
        state.update();
        let before = state.table.clone();

        state.add_event(failure());
        state.add_event(failure());
        state.update();

        assert_eq!(state.table, before);
        assert_eq!(state.consecutive_failures, 2);
        assert!(matches!(state.poll_state(), PollState::Failed { .. }));

        state.add_event(WorkerEvent::snapshot(snapshot(&[])));
        state.update();
        assert_eq!(state.consecutive_failures, 0);
        assert!(state.table.rows().is_empty());
    }

    #[test]
    fn activity_log_is_bounded() {
        let mut state = state();
        for _ in 0..(crate::consts::cli_consts::MAX_ACTIVITY_LOGS + 25) {
            state.add_event(failure());
        }
        state.update();
        assert_eq!(
            state.activity_logs.len(),
            crate::consts::cli_consts::MAX_ACTIVITY_LOGS
        );
    }
}
