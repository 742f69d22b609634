//! End-of-class session report

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{self, Write};

/// One student's summary for the whole session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SessionEntry {
    #[serde(default)]
    pub name: String,
    /// Session state as decided by the server from the average fatigue
    pub status: String,
    /// Average fatigue over the session
    pub fatigue: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ClassSummary {
    pub class_average_fatigue: f64,
    pub engagement_score: f64,
    pub total_students: u64,
}

/// Response of `POST /end_class`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ClassReport {
    pub students: BTreeMap<String, SessionEntry>,
    pub summary: ClassSummary,
}

impl ClassReport {
    /// Writes the report as a plain text table.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{:<12} {:<20} {:>8}  {}", "ID", "NAME", "FATIGUE", "STATUS")?;
        for (id, entry) in &self.students {
            writeln!(
                out,
                "{:<12} {:<20} {:>8}  {}",
                id, entry.name, entry.fatigue, entry.status
            )?;
        }
        writeln!(out)?;
        writeln!(out, "Students:          {}", self.summary.total_students)?;
        writeln!(
            out,
            "Average fatigue:   {:.1}",
            self.summary.class_average_fatigue
        )?;
        writeln!(out, "Engagement score:  {:.1}", self.summary.engagement_score)?;
        Ok(())
    }
}
