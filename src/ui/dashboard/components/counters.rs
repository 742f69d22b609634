//! Aggregate counter cards

use super::super::state::DashboardState;
use super::super::utils::status_color;
use crate::classify::Status;
use crate::display::Counter;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

fn counter_color(counter: Counter) -> Color {
    match counter {
        Counter::Total => Color::Cyan,
        Counter::Active => status_color(Status::Active),
        Counter::Passive => status_color(Status::Passive),
        Counter::Distracted => status_color(Status::Distracted),
    }
}

fn counter_title(counter: Counter) -> &'static str {
    match counter {
        Counter::Total => "TOTAL",
        Counter::Active => "ACTIVE",
        Counter::Passive => "PASSIVE",
        Counter::Distracted => "DISTRACTED",
    }
}

/// Render the four counters side by side.
pub fn render_counters(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (counter, chunk) in Counter::ALL.iter().zip(chunks.iter()) {
        let color = counter_color(*counter);
        let card = Paragraph::new(state.table.counter(*counter).to_string())
            .alignment(Alignment::Center)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .title(counter_title(*counter))
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color)),
            );
        f.render_widget(card, *chunk);
    }
}
