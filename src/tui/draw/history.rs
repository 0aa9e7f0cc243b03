//! Chat history: bordered bubbles, code blocks with copy labels, math, scrollbar.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::core::message::{Author, Message};

use super::super::app::{App, CodeBlockKey, CopyRegion};
use super::super::bubble::{self, Block, Bubble};
use super::super::constants::{ACCENT, ACCENT_SECONDARY};
use super::super::text::wrap_spans;

/// Repeat a character to fill width (approximate; chars may have different display widths).
fn repeat_char(c: char, n: usize) -> String {
    std::iter::repeat_n(c, n).collect()
}

const COPY_LABEL: &str = " copy ";
const COPIED_LABEL: &str = " ✓ copied ";

/// Parameters for rendering a message block.
struct MessageBlockParams<'a> {
    msg_idx: usize,
    message: &'a Message,
    bubble: &'a Bubble,
    content_width: usize,
    wrap_width: usize,
    show_timestamp: bool,
}

/// Prefix every wrapped line with the bubble's left border and indent.
fn push_wrapped(
    lines: &mut Vec<Line<'static>>,
    spans: &[Span<'static>],
    width: usize,
    border_style: Style,
    indent: &'static str,
) {
    for chunk in wrap_spans(spans, width.max(1)) {
        let mut row = vec![Span::styled("│ ", border_style), Span::raw(indent)];
        row.extend(chunk);
        lines.push(Line::from(row));
    }
}

/// Boxed code block. Returns the line range it occupies (the copy target).
fn add_code_block(
    lines: &mut Vec<Line<'static>>,
    code_lines: &[Vec<Span<'static>>],
    inner_width: usize,
    border_style: Style,
    copied: bool,
) -> (usize, usize) {
    let start = lines.len();
    let code_style = Style::default().fg(ACCENT_SECONDARY);
    let (label, label_style) = if copied {
        (COPIED_LABEL, Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
    } else {
        (COPY_LABEL, Style::default().fg(Color::DarkGray))
    };
    let header = "┌─ code ";
    let trail_len = inner_width
        .saturating_sub(header.chars().count() + label.chars().count() + 2);
    lines.push(Line::from(vec![
        Span::styled("│ ", border_style),
        Span::styled(format!("{}{}", header, repeat_char('─', trail_len)), code_style),
        Span::styled(label, label_style),
        Span::styled("─┐", code_style),
    ]));
    for code_line in code_lines {
        for chunk in wrap_spans(code_line, inner_width.saturating_sub(2).max(1)) {
            let mut row = vec![
                Span::styled("│ ", border_style),
                Span::styled("│ ", code_style),
            ];
            row.extend(chunk);
            lines.push(Line::from(row));
        }
    }
    lines.push(Line::from(vec![
        Span::styled("│ ", border_style),
        Span::styled(
            format!("└{}┘", repeat_char('─', inner_width.saturating_sub(2))),
            code_style,
        ),
    ]));
    (start, lines.len())
}

/// Add a User or Assistant message block with borders, code blocks, and separator.
fn add_message_block(
    lines: &mut Vec<Line<'static>>,
    copy_regions: &mut Vec<CopyRegion>,
    copied: Option<CodeBlockKey>,
    p: MessageBlockParams<'_>,
) {
    let is_user = p.message.author == Author::User;
    let border_color = if is_user {
        Color::DarkGray
    } else {
        ACCENT_SECONDARY
    };
    let border_style = Style::default().fg(border_color);
    let label = if is_user { "You" } else { "Assistant" };

    // Top border: "┌─ Label ───...──┐" or "┌─ Label 14:32 ───...──┐"
    let top_label = if p.show_timestamp {
        format!("┌─ {} {} ", label, p.message.timestamp)
    } else {
        format!("┌─ {} ", label)
    };
    let top_trail_len = p.wrap_width.saturating_sub(top_label.chars().count() + 1);
    let top_line = format!("{}{}┐", top_label, repeat_char('─', top_trail_len));
    lines.push(Line::from(Span::styled(top_line, border_style)));

    for (block_idx, block) in p.bubble.blocks.iter().enumerate() {
        match block {
            Block::Paragraph(spans) => {
                push_wrapped(lines, spans, p.content_width, border_style, "  ");
            }
            Block::Code { text, lines: code } => {
                let key = (p.msg_idx, block_idx);
                let (start, end) = add_code_block(
                    lines,
                    code,
                    p.content_width.saturating_sub(2),
                    border_style,
                    copied == Some(key),
                );
                copy_regions.push(CopyRegion {
                    start,
                    end,
                    key,
                    text: text.clone(),
                });
            }
            Block::Math { text, failed } => {
                let style = bubble::math_style(*failed);
                for math_line in text.split('\n') {
                    let spans = [Span::styled(math_line.to_string(), style)];
                    push_wrapped(
                        lines,
                        &spans,
                        p.content_width.saturating_sub(4),
                        border_style,
                        "      ",
                    );
                }
            }
            Block::Error(text) => {
                let spans = [Span::styled(text.clone(), Style::default().fg(Color::Red))];
                push_wrapped(lines, &spans, p.content_width, border_style, "  ");
            }
        }
    }

    let bottom_line = format!("└{}┘", repeat_char('─', p.wrap_width.saturating_sub(2)));
    lines.push(Line::from(Span::styled(bottom_line, border_style)));

    // Separator between messages
    lines.push(Line::from(Span::styled(
        repeat_char('─', p.wrap_width),
        Style::default().fg(Color::DarkGray),
    )));
}

pub(crate) fn draw_history(f: &mut Frame, app: &mut App, history_area: Rect) {
    let history_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(history_area);
    let text_area = history_chunks[0];
    let scrollbar_area = history_chunks[1];
    let wrap_width = text_area.width as usize;
    let content_width = wrap_width.saturating_sub(5);
    app.history_area_rect = Some(text_area);

    let now = Instant::now();
    let copied = app
        .copied
        .map(|(key, _)| key)
        .filter(|key| app.is_copied(*key, now));
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut copy_regions = Vec::new();

    for (msg_idx, (message, bubble)) in app
        .controller
        .messages()
        .iter()
        .zip(&app.bubbles)
        .enumerate()
    {
        add_message_block(
            &mut lines,
            &mut copy_regions,
            copied,
            MessageBlockParams {
                msg_idx,
                message,
                bubble,
                content_width,
                wrap_width,
                show_timestamp: app.show_timestamps,
            },
        );
    }

    if app.is_sending() {
        lines.push(Line::from(vec![Span::styled(
            "  Thinking... ",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]));
    }

    app.copy_regions = copy_regions;

    let total_lines = lines.len();
    let visible = text_area.height as usize;
    let max_scroll = total_lines.saturating_sub(visible.max(1));
    app.last_max_scroll = max_scroll;
    let scroll_pos = app.scroll_line();
    let end = (scroll_pos + visible).min(total_lines);
    let visible_lines: Vec<Line> = lines
        .into_iter()
        .skip(scroll_pos)
        .take(end.saturating_sub(scroll_pos))
        .collect();

    f.render_widget(Paragraph::new(visible_lines), text_area);

    let mut scrollbar_state = ScrollbarState::default()
        .position(scroll_pos)
        .content_length(total_lines);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .thumb_symbol("█")
        .thumb_style(Style::default().fg(ACCENT_SECONDARY))
        .track_symbol(Some("│"));
    f.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
}
