//! Input box and bottom bar.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::super::app::App;
use super::super::constants::{ACCENT, INPUT_LINES};

/// (line, column) of the cursor in the input, in chars.
fn cursor_line_col(input: &str, cursor: usize) -> (usize, usize) {
    let before = &input[..cursor.min(input.len())];
    let line = before.matches('\n').count();
    let col = before
        .rsplit('\n')
        .next()
        .map(|s| s.chars().count())
        .unwrap_or(0);
    (line, col)
}

/// Draw the input block and set cursor position. Scrolls to keep the cursor line visible.
fn draw_input_block(f: &mut Frame, app: &App, input_area: Rect) {
    let border_color = if app.is_sending() {
        Color::DarkGray
    } else {
        ACCENT
    };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = input_block.inner(input_area);

    let (cursor_line, cursor_col) = cursor_line_col(&app.input, app.input_cursor);
    let visible = inner.height.max(1) as usize;
    let scroll_y = cursor_line.saturating_sub(visible - 1);

    let lines: Vec<Line> = if app.input.is_empty() {
        vec![Line::from(Span::styled(
            "Type a message... ",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        app.input
            .split('\n')
            .skip(scroll_y)
            .take(visible)
            .map(|l| Line::from(l.to_string()))
            .collect()
    };
    let input_paragraph = Paragraph::new(lines)
        .block(input_block)
        .style(Style::default().fg(Color::White));
    f.render_widget(input_paragraph, input_area);

    let cx = inner.x + cursor_col.min(inner.width.saturating_sub(1) as usize) as u16;
    let cy = inner.y + cursor_line.saturating_sub(scroll_y) as u16;
    f.set_cursor_position(Position::new(cx, cy));
}

/// Bottom bar: status hint on the left, shortcuts on the right.
fn draw_bottom_bar(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(72)])
        .split(area);

    let status = if app.is_sending() {
        "waiting for reply"
    } else {
        "click a code block to copy it"
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            status,
            Style::default().fg(Color::DarkGray),
        ))),
        chunks[0],
    );

    let key = Style::default().fg(ACCENT);
    let hint = Style::default().fg(Color::DarkGray);
    let shortcuts = Line::from(vec![
        Span::styled("Enter", key),
        Span::styled(" send  ", hint),
        Span::styled("Shift+Enter", key),
        Span::styled(" newline  ", hint),
        Span::styled("↑↓ PgUp PgDn", key),
        Span::styled(" scroll  ", hint),
        Span::styled("Ctrl+C", key),
        Span::styled(" quit", hint),
    ]);
    f.render_widget(
        Paragraph::new(shortcuts).alignment(Alignment::Right),
        chunks[1],
    );
}

pub(crate) fn draw_input_section(f: &mut Frame, app: &App, input_section: Rect) {
    let input_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(INPUT_LINES + 2), Constraint::Length(1)])
        .split(input_section);

    draw_input_block(f, app, input_chunks[0]);
    draw_bottom_bar(f, app, input_chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::cursor_line_col;

    #[test]
    fn cursor_position_counts_chars_per_line() {
        assert_eq!(cursor_line_col("", 0), (0, 0));
        assert_eq!(cursor_line_col("héllo", "héllo".len()), (0, 5));
        assert_eq!(cursor_line_col("one\ntwo", 5), (1, 1));
        assert_eq!(cursor_line_col("one\n", 4), (1, 0));
    }
}
