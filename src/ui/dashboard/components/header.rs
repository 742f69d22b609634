//! Dashboard header component
//!
//! Renders the title and poll progress gauge

use super::super::state::{DashboardState, PollState};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title and poll progress.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let title_text = format!(
        "CLASS MONITOR v{}  |  {}",
        env!("CARGO_PKG_VERSION"),
        state.server_url
    );

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let (progress_text, gauge_color, progress_percent) = gauge_content(state);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}

/// Label, color and fill for the poll gauge
fn gauge_content(state: &DashboardState) -> (String, Color, u16) {
    let interval_ms = state.poll_interval.as_millis().max(1);
    match state.poll_state() {
        PollState::Connecting => {
            // Loops every 20 ticks
            let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
            ("CONNECTING".to_string(), Color::LightBlue, progress)
        }
        PollState::Polling { started_at } => {
            let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
            (
                format!(
                    "POLLING - Fetching students ({} ms)",
                    started_at.elapsed().as_millis()
                ),
                Color::LightGreen,
                progress,
            )
        }
        PollState::Idle { since } => {
            let progress = (since.elapsed().as_millis() * 100 / interval_ms).min(100) as u16;
            (
                format!("LIVE - {} snapshots received", state.snapshots_rendered),
                Color::LightBlue,
                progress,
            )
        }
        PollState::Failed { since } => (
            format!(
                "OFFLINE {}s - {} failed poll(s), showing last snapshot",
                since.elapsed().as_secs(),
                state.consecutive_failures
            ),
            Color::LightRed,
            100,
        ),
    }
}
