//! Chat messages shown in the history.

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

/// One chat message. Immutable once pushed; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub author: Author,
    /// Local time of creation, already formatted for display ("HH:MM").
    pub timestamp: String,
    /// Transport failure text; rendered literally instead of formatted.
    pub is_error: bool,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text.into(), Author::User, false)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(text.into(), Author::Assistant, false)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text.into(), Author::Assistant, true)
    }

    fn new(text: String, author: Author, is_error: bool) -> Self {
        Self {
            text,
            author,
            timestamp: display_time(),
            is_error,
        }
    }

    /// True when the body goes through the formatter (assistant, not an error).
    pub fn is_formatted(&self) -> bool {
        self.author == Author::Assistant && !self.is_error
    }
}

fn display_time() -> String {
    chrono::Local::now().format("%H:%M").to_string()
}
