//! TUI (Text User Interface) for chatting with the relay endpoint.

mod app;
mod bubble;
mod constants;
mod draw;
mod handlers;
mod syntax;
mod text;

pub use app::App;

use crossterm::event::{self, Event};
use crossterm::execute;
use std::io::{self};
use std::sync::Arc;
use std::sync::mpsc::TryRecvError;

use tokio::runtime::Runtime;

use crate::core::client::{ChatClient, ChatError};
use crate::core::config::Config;

use draw::draw;
use handlers::{HandleResult, PendingChat};

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = execute!(
            std::io::stdout(),
            crossterm::event::PopKeyboardEnhancementFlags
        );
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), crossterm::event::DisableMouseCapture);
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the TUI loop. Uses a dedicated Tokio runtime for the chat requests.
pub fn run(config: &Config, client: Arc<ChatClient>) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let rt = Arc::new(
        Runtime::new().map_err(|e| io::Error::other(format!("Failed to create runtime: {}", e)))?,
    );

    let mut app = App::new(client.endpoint().to_string(), config.show_timestamps);
    let mut pending_chat: Option<PendingChat> = None;

    // Mouse events for wheel scrolling and click-to-copy
    execute!(io::stdout(), crossterm::event::EnableMouseCapture)?;

    // Kitty keyboard protocol: lets Shift+Enter arrive as a distinct key
    let _ = execute!(
        io::stdout(),
        crossterm::event::PushKeyboardEnhancementFlags(
            crossterm::event::KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                | crossterm::event::KeyboardEnhancementFlags::REPORT_ALTERNATE_KEYS
        )
    );

    loop {
        if let Some(ref chat) = pending_chat {
            match chat.result_rx.try_recv() {
                Ok(result) => {
                    app.complete(result);
                    pending_chat = None;
                }
                Err(TryRecvError::Disconnected) => {
                    app.complete(Err(ChatError::WorkerStopped));
                    pending_chat = None;
                }
                Err(TryRecvError::Empty) => {}
            }
        }

        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if event::poll(std::time::Duration::from_millis(
            constants::EVENT_POLL_TIMEOUT_MS,
        ))? {
            match event::read()? {
                Event::Mouse(mouse) => {
                    let _ = handlers::handle_mouse(mouse, &mut app);
                }
                Event::Key(key) => {
                    let result = handlers::handle_key(
                        key,
                        handlers::HandleKeyContext {
                            app: &mut app,
                            client: &client,
                            pending_chat: &mut pending_chat,
                            rt: &rt,
                        },
                    );
                    if result == HandleResult::Break {
                        break;
                    }
                }
                _ => {}
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
