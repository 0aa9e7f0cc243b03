//! Event handlers for the TUI: keyboard and mouse.

mod chat_spawn;
mod copy;
mod input;

use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use std::sync::Arc;
use std::sync::mpsc;

use tokio::runtime::Runtime;

use crate::core::client::{ChatClient, ChatError};

use super::app::App;
use super::constants;

/// Receiver for the chat request in progress.
pub struct PendingChat {
    pub result_rx: mpsc::Receiver<Result<String, ChatError>>,
}

/// Result of handling an event: continue the loop or exit.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Break,
}

/// Handle a mouse event: wheel scrolls the history, left click copies a code block.
pub fn handle_mouse(mouse: MouseEvent, app: &mut App) -> HandleResult {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            copy::try_copy_at(app, Position::new(mouse.column, mouse.row));
        }
        MouseEventKind::ScrollUp => app.scroll_up(constants::SCROLL_LINES_SMALL),
        MouseEventKind::ScrollDown => app.scroll_down(constants::SCROLL_LINES_SMALL),
        _ => {}
    }
    HandleResult::Continue
}

/// Context for key event handling.
pub struct HandleKeyContext<'a> {
    pub app: &'a mut App,
    pub client: &'a Arc<ChatClient>,
    pub pending_chat: &'a mut Option<PendingChat>,
    pub rt: &'a Arc<Runtime>,
}

/// Handle a key event. Returns HandleResult::Break to exit the main loop.
pub fn handle_key(key: KeyEvent, ctx: HandleKeyContext<'_>) -> HandleResult {
    let HandleKeyContext {
        app,
        client,
        pending_chat,
        rt,
    } = ctx;

    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }

    input::handle_main_input(key.code, key.modifiers, app, client, pending_chat, rt)
}
