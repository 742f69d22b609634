//! Display surfaces and snapshot rendering
//!
//! Rendering is split from the concrete target: [`render_snapshot`] drives any
//! [`DisplaySurface`], and [`refresh`] is one complete poll, fetch then render.

use crate::classify::{AggregateCounts, Status};
use crate::monitor::StudentSource;
use crate::monitor::error::MonitorError;
use crate::student::{
    StudentRecord, StudentsSnapshot, format_label, format_metric, format_seen,
};
use std::io::{self, Write};

/// Identifier of the element that receives the student rows.
#[allow(unused)]
pub const STUDENT_TABLE_ID: &str = "studentTable";

/// The four counter fields on the dashboard.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Counter {
    Total,
    Active,
    Passive,
    Distracted,
}

impl Counter {
    pub const ALL: [Counter; 4] = [
        Counter::Total,
        Counter::Active,
        Counter::Passive,
        Counter::Distracted,
    ];

    /// Identifier of the element displaying this counter.
    pub fn element_id(&self) -> &'static str {
        match self {
            Counter::Total => "total",
            Counter::Active => "active",
            Counter::Passive => "passive",
            Counter::Distracted => "distracted",
        }
    }

    pub fn value_in(&self, counts: &AggregateCounts) -> u64 {
        match self {
            Counter::Total => counts.total,
            Counter::Active => counts.active,
            Counter::Passive => counts.passive,
            Counter::Distracted => counts.distracted,
        }
    }
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRow {
    pub id: String,
    pub name: Option<String>,
    pub ear: Option<f64>,
    pub fatigue: Option<f64>,
    pub eye_status: Option<String>,
    pub yawning_status: Option<String>,
    pub head_status: Option<String>,
    /// Status the student's own client reported, e.g. `DROWSY`
    pub reported_status: Option<String>,
    /// Server receive time, epoch seconds
    pub last_seen: Option<f64>,
    /// Dashboard classification from the fatigue score
    pub status: Status,
}

impl StudentRow {
    pub fn from_record(id: &str, record: &StudentRecord, status: Status) -> Self {
        Self {
            id: id.to_string(),
            name: record.name.clone(),
            ear: record.ear,
            fatigue: record.fatigue,
            eye_status: record.eye_status.clone(),
            yawning_status: record.yawning_status.clone(),
            head_status: record.head_status.clone(),
            reported_status: record.status.clone(),
            last_seen: record.timestamp,
            status,
        }
    }

    pub fn name_text(&self) -> String {
        format_label(self.name.as_deref())
    }

    pub fn ear_text(&self) -> String {
        format_metric(self.ear)
    }

    pub fn fatigue_text(&self) -> String {
        format_metric(self.fatigue)
    }

    pub fn eyes_text(&self) -> String {
        format_label(self.eye_status.as_deref())
    }

    pub fn yawn_text(&self) -> String {
        format_label(self.yawning_status.as_deref())
    }

    pub fn head_text(&self) -> String {
        format_label(self.head_status.as_deref())
    }

    pub fn reported_text(&self) -> String {
        format_label(self.reported_status.as_deref())
    }

    pub fn seen_text(&self) -> String {
        format_seen(self.last_seen)
    }
}

/// Anything the dashboard can be painted onto.
pub trait DisplaySurface {
    /// Remove every row from the student table.
    fn clear(&mut self);

    /// Append one row to the student table.
    fn append_row(&mut self, row: StudentRow);

    /// Write a value into one of the counter fields.
    fn set_counter(&mut self, counter: Counter, value: u64);
}

/// Replaces the surface's table with `snapshot` and writes the aggregate counters.
///
/// Classification and counting happen in the same pass, so the rows and the counters
/// always describe the same snapshot.
pub fn render_snapshot(
    snapshot: &StudentsSnapshot,
    surface: &mut dyn DisplaySurface,
) -> AggregateCounts {
    let mut counts = AggregateCounts::default();
    surface.clear();

    for (id, record) in snapshot {
        let status = Status::from_fatigue(record.fatigue);
        counts.record(status);
        surface.append_row(StudentRow::from_record(id, record, status));
    }

    for counter in Counter::ALL {
        surface.set_counter(counter, counter.value_in(&counts));
    }
    counts
}

/// Fetches one snapshot and renders it.
///
/// On failure the surface is left untouched and still shows the previous snapshot.
pub async fn refresh(
    source: &dyn StudentSource,
    surface: &mut dyn DisplaySurface,
) -> Result<AggregateCounts, MonitorError> {
    let snapshot = source.fetch_students().await?;
    Ok(render_snapshot(&snapshot, surface))
}

/// In-memory table, used as the dashboard's backing store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableSurface {
    rows: Vec<StudentRow>,
    counts: AggregateCounts,
}

impl TableSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[StudentRow] {
        &self.rows
    }

    pub fn counter(&self, counter: Counter) -> u64 {
        counter.value_in(&self.counts)
    }
}

impl DisplaySurface for TableSurface {
    fn clear(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, row: StudentRow) {
        self.rows.push(row);
    }

    fn set_counter(&mut self, counter: Counter, value: u64) {
        match counter {
            Counter::Total => self.counts.total = value,
            Counter::Active => self.counts.active = value,
            Counter::Passive => self.counts.passive = value,
            Counter::Distracted => self.counts.distracted = value,
        }
    }
}

/// Writes the table as plain text lines, for headless output.
///
/// The surface interface is infallible, so the first write error is kept and
/// reported by [`ConsoleSurface::finish`].
pub struct ConsoleSurface<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    fn write_line(&mut self, line: std::fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.out.write_fmt(line).and_then(|_| self.out.write_all(b"\n")) {
            self.error = Some(e);
        }
    }

    /// Flushes the writer and hands it back, or returns the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> DisplaySurface for ConsoleSurface<W> {
    fn clear(&mut self) {
        self.write_line(format_args!(
            "{:<12} {:<20} {:>6} {:>8}  {:<6} {:<4} {:<7} {:<10} {:<8}  {}",
            "ID", "NAME", "EAR", "FATIGUE", "EYES", "YAWN", "HEAD", "REPORTED", "SEEN", "STATUS"
        ));
    }

    fn append_row(&mut self, row: StudentRow) {
        self.write_line(format_args!(
            "{:<12} {:<20} {:>6} {:>8}  {:<6} {:<4} {:<7} {:<10} {:<8}  {}",
            row.id,
            row.name_text(),
            row.ear_text(),
            row.fatigue_text(),
            row.eyes_text(),
            row.yawn_text(),
            row.head_text(),
            row.reported_text(),
            row.seen_text(),
            row.status
        ));
    }

    fn set_counter(&mut self, counter: Counter, value: u64) {
        self.write_line(format_args!("{}: {}", counter.element_id(), value));
    }
}
