//! Fatigue classification and aggregate counts

use crate::consts::cli_consts::fatigue::{DISTRACTED_THRESHOLD, PASSIVE_THRESHOLD};
use crate::student::StudentsSnapshot;

/// Engagement category derived from a fatigue score.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, strum::Display)]
pub enum Status {
    Active,
    Passive,
    Distracted,
}

impl Status {
    /// Classifies a fatigue score. Thresholds are inclusive lower bounds, so 40 is
    /// Passive and 70 is Distracted.
    ///
    /// A missing score falls through every threshold and is classified `Active`.
    pub fn from_fatigue(fatigue: Option<f64>) -> Self {
        match fatigue {
            Some(f) if f >= DISTRACTED_THRESHOLD => Status::Distracted,
            Some(f) if f >= PASSIVE_THRESHOLD => Status::Passive,
            _ => Status::Active,
        }
    }
}

/// Per-poll aggregate counts. `active + passive + distracted == total` always holds.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct AggregateCounts {
    pub total: u64,
    pub active: u64,
    pub passive: u64,
    pub distracted: u64,
}

impl AggregateCounts {
    /// Counts one classified record.
    pub fn record(&mut self, status: Status) {
        self.total += 1;
        match status {
            Status::Active => self.active += 1,
            Status::Passive => self.passive += 1,
            Status::Distracted => self.distracted += 1,
        }
    }

    /// Counts every record in a snapshot.
    #[allow(unused)]
    pub fn tally(snapshot: &StudentsSnapshot) -> Self {
        let mut counts = Self::default();
        for (_, record) in snapshot {
            counts.record(Status::from_fatigue(record.fatigue));
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::StudentRecord;

    #[test]
    fn classification_follows_thresholds() {
        assert_eq!(Status::from_fatigue(Some(0.0)), Status::Active);
        assert_eq!(Status::from_fatigue(Some(39.9)), Status::Active);
        assert_eq!(Status::from_fatigue(Some(40.0)), Status::Passive);
        assert_eq!(Status::from_fatigue(Some(69.99)), Status::Passive);
        assert_eq!(Status::from_fatigue(Some(70.0)), Status::Distracted);
        assert_eq!(Status::from_fatigue(Some(100.0)), Status::Distracted);
        assert_eq!(Status::from_fatigue(Some(-5.0)), Status::Active);
    }

    #[test]
    fn missing_fatigue_is_active() {
        assert_eq!(Status::from_fatigue(None), Status::Active);
    }

    #[test]
    fn labels_match_dashboard_text() {
        assert_eq!(Status::Active.to_string(), "Active");
        assert_eq!(Status::Passive.to_string(), "Passive");
        assert_eq!(Status::Distracted.to_string(), "Distracted");
    }

    #[test]
    fn counts_always_sum_to_total() {
        let snapshot: StudentsSnapshot = (0..50)
            .map(|i| (format!("s{i}"), StudentRecord::new(0.3, (i * 2) as f64)))
            .collect();
        let counts = AggregateCounts::tally(&snapshot);
        assert_eq!(counts.total, 50);
        assert_eq!(counts.active + counts.passive + counts.distracted, counts.total);
        // 0..=38 active, 40..=68 passive, 70..=98 distracted
        assert_eq!(counts.active, 20);
        assert_eq!(counts.passive, 15);
        assert_eq!(counts.distracted, 15);
    }

    #[test]
    fn empty_snapshot_has_zero_counts() {
        assert_eq!(
            AggregateCounts::tally(&StudentsSnapshot::new()),
            AggregateCounts::default()
        );
    }
}
