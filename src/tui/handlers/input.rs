//! Handler for the input box and history scrolling keys.

use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::Arc;

use tokio::runtime::Runtime;

use crate::core::client::ChatClient;

use super::super::app::App;
use super::super::constants;
use super::chat_spawn;
use super::{HandleResult, PendingChat};

/// Handle a key press aimed at the input box.
pub(crate) fn handle_main_input(
    key_code: KeyCode,
    key_modifiers: KeyModifiers,
    app: &mut App,
    client: &Arc<ChatClient>,
    pending_chat: &mut Option<PendingChat>,
    rt: &Arc<Runtime>,
) -> HandleResult {
    match (key_code, key_modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => HandleResult::Break,
        (KeyCode::Enter, mods)
            if mods.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) =>
        {
            app.insert_char('\n');
            HandleResult::Continue
        }
        (KeyCode::Enter, _) => {
            if let Some(message) = app.submit_input() {
                *pending_chat = Some(chat_spawn::spawn_chat(rt, Arc::clone(client), message));
            }
            HandleResult::Continue
        }
        (KeyCode::Backspace, _) => {
            app.delete_char_before_cursor();
            HandleResult::Continue
        }
        (KeyCode::Left, _) => {
            app.move_cursor_left();
            HandleResult::Continue
        }
        (KeyCode::Right, _) => {
            app.move_cursor_right();
            HandleResult::Continue
        }
        (KeyCode::Home, _) => {
            app.input_cursor = 0;
            HandleResult::Continue
        }
        (KeyCode::End, _) => {
            app.input_cursor = app.input.len();
            HandleResult::Continue
        }
        (KeyCode::Up, _) => {
            app.scroll_up(constants::SCROLL_LINES_SMALL);
            HandleResult::Continue
        }
        (KeyCode::Down, _) => {
            app.scroll_down(constants::SCROLL_LINES_SMALL);
            HandleResult::Continue
        }
        (KeyCode::PageUp, _) => {
            app.scroll_up(constants::SCROLL_LINES_PAGE);
            HandleResult::Continue
        }
        (KeyCode::PageDown, _) => {
            app.scroll_down(constants::SCROLL_LINES_PAGE);
            HandleResult::Continue
        }
        (KeyCode::Char(c), mods) => {
            // Ctrl/Alt combinations are not text
            if mods.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
                return HandleResult::Continue;
            }
            app.insert_char(c);
            HandleResult::Continue
        }
        _ => HandleResult::Continue,
    }
}
