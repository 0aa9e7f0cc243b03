//! TUI rendering: layout and widgets for the chat interface.

mod header;
mod history;
mod input;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use std::time::Instant;

use super::app::App;
use super::constants::{ACCENT, INPUT_LINES};

const HEADER_HEIGHT: u16 = 2;

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(INPUT_LINES + 3),
        ])
        .split(area);
    header::draw_header(f, app, chunks[0], ACCENT);
    history::draw_history(f, app, chunks[1]);
    input::draw_input_section(f, app, chunks[2]);

    // Toast: top right, below header. Opaque background so it's visible over history.
    if let Some(deadline) = app.copy_toast_until {
        if deadline > Instant::now() {
            let toast_text = " Copied ";
            let toast_width = toast_text.len() as u16 + 2;
            let toast_area = Rect {
                x: area.x + area.width.saturating_sub(toast_width).saturating_sub(1),
                y: area.y + HEADER_HEIGHT,
                width: toast_width.min(area.width),
                height: 3u16.min(area.height.saturating_sub(HEADER_HEIGHT)),
            };
            f.render_widget(Clear, toast_area);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT))
                .style(Style::default().bg(Color::Black));
            let para = Paragraph::new(Line::from(toast_text))
                .block(block)
                .style(Style::default().fg(ACCENT).bg(Color::Black));
            f.render_widget(para, toast_area);
        } else {
            app.copy_toast_until = None;
        }
    }
}
