//! Message formatting: code blocks, math spans, HTML escaping, and emphasis.
//!
//! Formatting is two passes. [`parse_spans`] classifies the text into ordered
//! text / code / math spans, then [`Markup::render`] escapes the text, applies
//! emphasis over the whole message with code and math held in place, and
//! yields markup nodes (escaped text with emphasis tags, literal code, math
//! source).
//! The markup serializes to HTML with [`Markup::to_html`]; the TUI walks the
//! nodes directly.

mod emphasis;
mod escape;
mod markup;
mod spans;

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::core::message::Author;

pub use emphasis::{Emphasis, Run};
pub use escape::escape_html;
pub use markup::{Markup, Node};
pub use spans::{Span, parse_spans};

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("cannot serialize content: {0}")]
    Json(#[from] serde_json::Error),
}

/// Compiled patterns shared by every formatting call.
pub(crate) struct Patterns {
    pub(crate) code: Regex,
    pub(crate) math: Regex,
    pub(crate) bold_italic: Regex,
    pub(crate) mixed_bold_italic: Regex,
    pub(crate) bold: Regex,
    pub(crate) italic: Regex,
}

impl Patterns {
    fn compile() -> Result<Self, regex::Error> {
        Ok(Self {
            code: Regex::new(r"(?s)```(.*?)```")?,
            // Display math first: it may span lines, inline math may not.
            math: Regex::new(r"(?s:\$\$.*?\$\$)|\$.*?\$")?,
            bold_italic: Regex::new(r"\*\*\*(.*?)\*\*\*|___(.*?)___")?,
            mixed_bold_italic: Regex::new(r"(\*\*_|__\*)(.*?)(_\*\*|\*__)")?,
            bold: Regex::new(r"\*\*(.*?)\*\*|__(.*?)__")?,
            italic: Regex::new(r"\*(.*?)\*|_(.*?)_")?,
        })
    }
}

static PATTERNS: OnceLock<Result<Patterns, regex::Error>> = OnceLock::new();

pub(crate) fn patterns() -> Result<&'static Patterns, FormatError> {
    PATTERNS
        .get_or_init(Patterns::compile)
        .as_ref()
        .map_err(|e| FormatError::Pattern(e.clone()))
}

/// Text of a message body: strings as-is, anything else as pretty-printed JSON.
pub fn content_text(content: &Value) -> Result<Cow<'_, str>, FormatError> {
    match content {
        Value::String(s) => Ok(Cow::Borrowed(s)),
        other => Ok(Cow::Owned(serde_json::to_string_pretty(other)?)),
    }
}

/// Format an assistant message body into markup.
pub fn format_markup(text: &str) -> Result<Markup, FormatError> {
    let spans = parse_spans(text)?;
    Markup::render(&spans)
}

/// Format message content into HTML. Never fails: errors become an error fragment.
pub fn format_content(content: &Value, author: Author) -> String {
    match content_text(content) {
        Ok(text) => format_text(&text, author),
        Err(e) => error_fragment(&e),
    }
}

/// Format message text into HTML. User text is escaped only.
pub fn format_text(text: &str, author: Author) -> String {
    match author {
        Author::User => Markup::literal(text).to_html(),
        Author::Assistant => match format_markup(text) {
            Ok(markup) => markup.to_html(),
            Err(e) => error_fragment(&e),
        },
    }
}

fn error_fragment(e: &FormatError) -> String {
    log::warn!("Content formatting error: {}", e);
    format!(
        "<div class=\"error\">Formatting error: {}</div>",
        escape_html(&e.to_string())
    )
}

#[cfg(test)]
mod tests;
