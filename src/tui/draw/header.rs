//! Header: logo/spinner, title, endpoint.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use std::time::Instant;

use crate::core::app::NAME as APP_NAME;

use super::super::app::App;
use super::super::constants::{LOGO_IDLE, LOGO_SENDING};

/// Start time for header animation phase (sending spinner).
static HEADER_START: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();

/// Max width for the endpoint in the header; longer values are truncated with "…".
const ENDPOINT_HEADER_WIDTH: u16 = 40;

fn truncate_start(s: &str, max_len: usize) -> String {
    let count = s.chars().count();
    if count <= max_len {
        return s.to_string();
    }
    let tail: String = s.chars().skip(count - max_len.saturating_sub(1)).collect();
    format!("…{}", tail)
}

pub(crate) fn draw_header(f: &mut Frame, app: &App, area: Rect, accent: Color) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Min(0),
            Constraint::Length(ENDPOINT_HEADER_WIDTH),
        ])
        .split(area);

    let (logo_symbol, status) = if app.is_sending() {
        let start = HEADER_START.get_or_init(Instant::now);
        let phase = start.elapsed().as_millis() as usize;
        (LOGO_SENDING[(phase / 80) % LOGO_SENDING.len()], "sending")
    } else {
        (LOGO_IDLE, "ready")
    };
    let logo_line = Line::from(vec![
        Span::styled(format!("{} ", logo_symbol), Style::default().fg(accent)),
        Span::styled(status, Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(logo_line), header_chunks[0]);

    let title = Line::from(Span::styled(
        APP_NAME,
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    ));
    f.render_widget(
        Paragraph::new(title).alignment(Alignment::Center),
        header_chunks[1],
    );

    let endpoint_line = Line::from(Span::styled(
        truncate_start(&app.endpoint, ENDPOINT_HEADER_WIDTH as usize),
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(
        Paragraph::new(endpoint_line).alignment(Alignment::Right),
        header_chunks[2],
    );
}
