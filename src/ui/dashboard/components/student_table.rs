//! Student table component

use super::super::state::DashboardState;
use super::super::utils::{format_compact_timestamp, status_color};
use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Padding, Row, Table};

/// Render one row per student in the current snapshot.
pub fn render_student_table(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header = Row::new([
        "ID", "NAME", "EAR", "FATIGUE", "EYES", "YAWN", "HEAD", "REPORTED", "SEEN", "STATUS",
    ])
    .style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = state
        .table
        .rows()
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.id.clone()),
                Cell::from(row.name_text()),
                Cell::from(row.ear_text()),
                Cell::from(row.fatigue_text()),
                Cell::from(row.eyes_text()),
                Cell::from(row.yawn_text()),
                Cell::from(row.head_text()),
                Cell::from(row.reported_text()).style(Style::default().fg(Color::Gray)),
                Cell::from(row.seen_text()).style(Style::default().fg(Color::DarkGray)),
                Cell::from(row.status.to_string()).style(
                    Style::default()
                        .fg(status_color(row.status))
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    let title = match state.last_update_timestamp() {
        Some(timestamp) => format!("STUDENTS (updated {})", format_compact_timestamp(timestamp)),
        None => "STUDENTS (waiting for first snapshot)".to_string(),
    };

    let widths = [
        Constraint::Length(10),
        Constraint::Fill(1),
        Constraint::Length(6),
        Constraint::Length(7),
        Constraint::Length(6),
        Constraint::Length(4),
        Constraint::Length(7),
        Constraint::Length(10),
        Constraint::Length(8),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );

    f.render_widget(table, area);
}
