//! TUI application state: controller, rendered bubbles, input, scroll, copy state.

use std::time::Instant;

use ratatui::layout::Rect;

use crate::core::client::ChatError;
use crate::core::controller::ChatController;

use super::bubble::Bubble;
use super::constants::COPY_INDICATION;

/// Scroll position: either a specific line index, or "at bottom" (follow new content).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollPosition {
    Line(usize),
    Bottom,
}

/// Identifies a code block: (message index, block index).
pub(crate) type CodeBlockKey = (usize, usize);

/// Clickable area of a code block in the history buffer: lines [start, end).
#[derive(Clone, Debug)]
pub(crate) struct CopyRegion {
    pub start: usize,
    pub end: usize,
    pub key: CodeBlockKey,
    pub text: String,
}

pub struct App {
    pub(crate) controller: ChatController,
    /// One rendered bubble per controller message, same order.
    pub(crate) bubbles: Vec<Bubble>,
    /// User input in the text field.
    pub(crate) input: String,
    /// Cursor position in the input (byte index, always on a char boundary).
    pub(crate) input_cursor: usize,
    pub(crate) scroll: ScrollPosition,
    pub(crate) last_max_scroll: usize,
    /// Rect of history text area; for click hit testing.
    pub(crate) history_area_rect: Option<Rect>,
    /// Code block copy targets from the last draw.
    pub(crate) copy_regions: Vec<CopyRegion>,
    /// Last copied code block and when; its label reads "copied" for a while.
    pub(crate) copied: Option<(CodeBlockKey, Instant)>,
    /// When set, show "Copied" toast until this instant.
    pub(crate) copy_toast_until: Option<Instant>,
    /// Whether to show timestamps next to message labels.
    pub(crate) show_timestamps: bool,
    /// Endpoint shown in the header.
    pub(crate) endpoint: String,
}

impl App {
    pub fn new(endpoint: String, show_timestamps: bool) -> Self {
        let mut app = Self {
            controller: ChatController::new(),
            bubbles: vec![],
            input: String::new(),
            input_cursor: 0,
            scroll: ScrollPosition::Bottom,
            last_max_scroll: 0,
            history_area_rect: None,
            copy_regions: vec![],
            copied: None,
            copy_toast_until: None,
            show_timestamps,
            endpoint,
        };
        app.sync_bubbles();
        app
    }

    /// Render bubbles for messages pushed since the last call and follow them.
    fn sync_bubbles(&mut self) {
        let messages = self.controller.messages();
        if self.bubbles.len() == messages.len() {
            return;
        }
        for message in &messages[self.bubbles.len()..] {
            self.bubbles.push(Bubble::render(message));
        }
        self.scroll = ScrollPosition::Bottom;
    }

    /// Hand the input to the controller. Returns the text to send when accepted;
    /// the input is cleared only then.
    pub(crate) fn submit_input(&mut self) -> Option<String> {
        let outbound = self.controller.submit(&self.input)?;
        self.input.clear();
        self.input_cursor = 0;
        self.sync_bubbles();
        Some(outbound)
    }

    /// Apply the result of the in-flight request.
    pub(crate) fn complete(&mut self, result: Result<String, ChatError>) {
        self.controller.complete(result);
        self.sync_bubbles();
    }

    pub(crate) fn is_sending(&self) -> bool {
        self.controller.is_sending()
    }

    pub(crate) fn mark_copied(&mut self, key: CodeBlockKey, now: Instant) {
        self.copied = Some((key, now));
        self.copy_toast_until = Some(now + COPY_INDICATION);
    }

    /// True while the given code block should show its "copied" indication.
    pub(crate) fn is_copied(&self, key: CodeBlockKey, now: Instant) -> bool {
        self.copied
            .is_some_and(|(k, at)| k == key && now.duration_since(at) < COPY_INDICATION)
    }

    pub(crate) fn insert_char(&mut self, c: char) {
        self.input.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
    }

    pub(crate) fn delete_char_before_cursor(&mut self) {
        if let Some(c) = self.input[..self.input_cursor].chars().next_back() {
            self.input_cursor -= c.len_utf8();
            self.input.remove(self.input_cursor);
        }
    }

    pub(crate) fn move_cursor_left(&mut self) {
        if let Some(c) = self.input[..self.input_cursor].chars().next_back() {
            self.input_cursor -= c.len_utf8();
        }
    }

    pub(crate) fn move_cursor_right(&mut self) {
        if let Some(c) = self.input[self.input_cursor..].chars().next() {
            self.input_cursor += c.len_utf8();
        }
    }

    /// Must be called before scroll_up/scroll_down when at bottom.
    pub(crate) fn materialize_scroll(&mut self) {
        if self.scroll == ScrollPosition::Bottom {
            self.scroll = ScrollPosition::Line(self.last_max_scroll);
        }
    }

    pub(crate) fn scroll_down(&mut self, n: usize) {
        self.materialize_scroll();
        if let ScrollPosition::Line(pos) = self.scroll {
            self.scroll = ScrollPosition::Line((pos + n).min(self.last_max_scroll));
        }
    }

    pub(crate) fn scroll_up(&mut self, n: usize) {
        self.materialize_scroll();
        if let ScrollPosition::Line(pos) = self.scroll {
            self.scroll = ScrollPosition::Line(pos.saturating_sub(n));
        }
    }

    /// Resolve scroll position to a concrete line index.
    pub(crate) fn scroll_line(&self) -> usize {
        match self.scroll {
            ScrollPosition::Line(n) => n.min(self.last_max_scroll),
            ScrollPosition::Bottom => self.last_max_scroll,
        }
    }
}
