//! Span classification: split message text into plain text, code, and math.

use super::{FormatError, Patterns, patterns};

/// A classified slice of message text, in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    Text(&'a str),
    /// Content between triple backticks, trimmed.
    Code(&'a str),
    /// Math source with its `$` / `$$` delimiters stripped.
    Math { tex: &'a str, display: bool },
}

/// Parse text into spans. Code fences are extracted first, then math in the
/// remaining text. Unclosed fences and lone dollars stay plain text.
pub fn parse_spans(text: &str) -> Result<Vec<Span<'_>>, FormatError> {
    let patterns = patterns()?;
    let mut spans = Vec::new();
    let mut last = 0;
    for caps in patterns.code.captures_iter(text) {
        let Some(fence) = caps.get(0) else { continue };
        push_text_and_math(&text[last..fence.start()], patterns, &mut spans);
        let code = caps.get(1).map_or("", |m| m.as_str());
        spans.push(Span::Code(code.trim()));
        last = fence.end();
    }
    push_text_and_math(&text[last..], patterns, &mut spans);
    Ok(spans)
}

fn push_text_and_math<'a>(text: &'a str, patterns: &Patterns, spans: &mut Vec<Span<'a>>) {
    let mut last = 0;
    for m in patterns.math.find_iter(text) {
        push_text(&text[last..m.start()], spans);
        spans.push(math_span(m.as_str()));
        last = m.end();
    }
    push_text(&text[last..], spans);
}

fn push_text<'a>(text: &'a str, spans: &mut Vec<Span<'a>>) {
    if !text.is_empty() {
        spans.push(Span::Text(text));
    }
}

/// Anything starting with `$$` is display math, even the empty inline match `$$`.
fn math_span(delimited: &str) -> Span<'_> {
    if let Some(rest) = delimited.strip_prefix("$$") {
        Span::Math {
            tex: rest.strip_suffix("$$").unwrap_or(""),
            display: true,
        }
    } else {
        let tex = delimited
            .strip_prefix('$')
            .and_then(|r| r.strip_suffix('$'))
            .unwrap_or("");
        Span::Math {
            tex,
            display: false,
        }
    }
}
