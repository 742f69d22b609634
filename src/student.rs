//! Student monitoring records as served by the monitor's `/students` endpoint.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map;

/// One monitored student's latest observation.
///
/// Only `ear` and `fatigue` are used by the dashboard logic. Both are optional so
/// that a record with missing signals still decodes; see [`crate::classify`] for how
/// a missing fatigue score is classified.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct StudentRecord {
    /// Eye aspect ratio, displayed verbatim
    #[serde(default)]
    pub ear: Option<f64>,
    /// Fatigue score (PERCLOS %)
    #[serde(default)]
    pub fatigue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eye_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yawning_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_status: Option<String>,
    /// Status string reported by the student client itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Server receive time, seconds since the epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
}

impl StudentRecord {
    #[allow(unused)]
    pub fn new(ear: f64, fatigue: f64) -> Self {
        Self {
            ear: Some(ear),
            fatigue: Some(fatigue),
            ..Default::default()
        }
    }

    #[allow(unused)]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// The full population returned by one poll, keyed by student id.
///
/// A snapshot always replaces the previous one wholesale. Iteration is in ascending
/// id order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct StudentsSnapshot {
    students: BTreeMap<String, StudentRecord>,
}

impl StudentsSnapshot {
    #[allow(unused)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a `/students` response body.
    #[cfg(test)]
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    #[allow(unused)]
    pub fn insert(&mut self, id: impl Into<String>, record: StudentRecord) {
        self.students.insert(id.into(), record);
    }

    #[allow(unused)]
    pub fn get(&self, id: &str) -> Option<&StudentRecord> {
        self.students.get(id)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    #[allow(unused)]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, StudentRecord> {
        self.students.iter()
    }

    /// Number of records that arrived without a fatigue score.
    pub fn missing_fatigue_count(&self) -> usize {
        self.students
            .values()
            .filter(|record| record.fatigue.is_none())
            .count()
    }
}

impl<'a> IntoIterator for &'a StudentsSnapshot {
    type Item = (&'a String, &'a StudentRecord);
    type IntoIter = btree_map::Iter<'a, String, StudentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, StudentRecord)> for StudentsSnapshot {
    fn from_iter<T: IntoIterator<Item = (K, StudentRecord)>>(iter: T) -> Self {
        Self {
            students: iter.into_iter().map(|(id, r)| (id.into(), r)).collect(),
        }
    }
}

/// Formats an optional metric the way the dashboard shows it.
pub fn format_metric(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

/// Formats an optional descriptive field, e.g. `eye_status`.
pub fn format_label(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

/// Formats a server receive time (epoch seconds) as local `HH:MM:SS`.
pub fn format_seen(timestamp: Option<f64>) -> String {
    timestamp
        .filter(|secs| secs.is_finite())
        .and_then(|secs| {
            DateTime::from_timestamp(secs.trunc() as i64, (secs.fract() * 1e9) as u32)
        })
        .map(|utc| utc.with_timezone(&Local).format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}
