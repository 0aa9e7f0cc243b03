//! Chat controller: the message list and the single in-flight request guard.

use crate::core::client::ChatError;
use crate::core::message::Message;

/// First assistant message of every session.
pub const GREETING: &str = "Hello! How can I assist you today?";

/// Whether a request is in flight. At most one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SendState {
    #[default]
    Idle,
    Sending,
}

pub struct ChatController {
    messages: Vec<Message>,
    state: SendState,
}

impl ChatController {
    pub fn new() -> Self {
        Self {
            messages: vec![Message::assistant(GREETING)],
            state: SendState::Idle,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_sending(&self) -> bool {
        self.state == SendState::Sending
    }

    /// Accept user input for sending. Returns the text to POST, or `None` when a
    /// request is already in flight or the input is blank. Dropped triggers are
    /// not queued.
    pub fn submit(&mut self, input: &str) -> Option<String> {
        if self.is_sending() {
            log::debug!("Send ignored: a request is already in flight");
            return None;
        }
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        self.messages.push(Message::user(text));
        self.state = SendState::Sending;
        Some(text.to_string())
    }

    /// Record the outcome of the in-flight request and return to idle.
    pub fn complete(&mut self, result: Result<String, ChatError>) {
        let message = match result {
            Ok(text) => Message::assistant(text),
            Err(e) => {
                log::warn!("Chat error: {}", e);
                Message::error(format!("Error: {}", e))
            }
        };
        self.messages.push(message);
        self.state = SendState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message::Author;

    #[test]
    fn starts_idle_with_greeting() {
        let controller = ChatController::new();
        assert!(!controller.is_sending());
        assert_eq!(controller.messages().len(), 1);
        assert_eq!(controller.messages()[0].text, GREETING);
        assert!(controller.messages()[0].is_formatted());
    }

    #[test]
    fn submit_pushes_trimmed_user_message_and_starts_sending() {
        let mut controller = ChatController::new();
        let outbound = controller.submit("  what is 2+2?\n");
        assert_eq!(outbound.as_deref(), Some("what is 2+2?"));
        assert!(controller.is_sending());
        let last = controller.messages().last().unwrap();
        assert_eq!(last.author, Author::User);
        assert_eq!(last.text, "what is 2+2?");
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut controller = ChatController::new();
        assert_eq!(controller.submit("   \n"), None);
        assert!(!controller.is_sending());
        assert_eq!(controller.messages().len(), 1);
    }

    #[test]
    fn second_submit_while_sending_is_dropped() {
        let mut controller = ChatController::new();
        let mut outbound = Vec::new();
        outbound.extend(controller.submit("first"));
        outbound.extend(controller.submit("second"));
        assert_eq!(outbound, vec!["first".to_string()]);
        assert_eq!(controller.messages().len(), 2);
    }

    #[test]
    fn success_appends_formatted_reply_and_returns_to_idle() {
        let mut controller = ChatController::new();
        controller.submit("hi");
        controller.complete(Ok("**hello**".to_string()));
        assert!(!controller.is_sending());
        let last = controller.messages().last().unwrap();
        assert_eq!(last.text, "**hello**");
        assert!(last.is_formatted());
    }

    #[test]
    fn failure_appends_literal_error_and_returns_to_idle() {
        let mut controller = ChatController::new();
        controller.submit("hi");
        controller.complete(Err(ChatError::InvalidResponse));
        assert!(!controller.is_sending());
        let last = controller.messages().last().unwrap();
        assert_eq!(last.text, "Error: Invalid JSON response");
        assert!(last.is_error);
        assert!(controller.submit("again").is_some());
    }
}
