//! Display tree for one chat bubble.
//!
//! A bubble is built once, when its message is pushed: the formatter runs on
//! assistant text, then math nodes are typeset, code blocks highlighted, and
//! everything lands in width-independent blocks that the history view wraps
//! on every draw.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::core::format::{self, Emphasis, Markup, Node};
use crate::core::math;
use crate::core::message::Message;

use super::constants::MATH;
use super::syntax;

/// Appended to math that failed to typeset; the source is shown instead.
const MATH_ERROR_MARKER: &str = " ⚠";

#[derive(Debug, Clone)]
pub(crate) enum Block {
    /// Flowing text with inline math; may contain newlines.
    Paragraph(Vec<Span<'static>>),
    /// Code block: literal text (what gets copied) and highlighted lines.
    Code {
        text: String,
        lines: Vec<Vec<Span<'static>>>,
    },
    /// Display math, typeset or literal on failure.
    Math { text: String, failed: bool },
    Error(String),
}

#[derive(Debug, Clone)]
pub(crate) struct Bubble {
    pub(crate) blocks: Vec<Block>,
}

impl Bubble {
    pub(crate) fn render(message: &Message) -> Self {
        if message.is_error {
            return Self {
                blocks: vec![Block::Error(message.text.clone())],
            };
        }
        if !message.is_formatted() {
            return Self {
                blocks: vec![Block::Paragraph(vec![Span::raw(message.text.clone())])],
            };
        }
        match format::format_markup(&message.text) {
            Ok(markup) => Self::from_markup(&markup),
            Err(e) => {
                log::warn!("Content formatting error: {}", e);
                Self {
                    blocks: vec![Block::Error(format!("Formatting error: {}", e))],
                }
            }
        }
    }

    fn from_markup(markup: &Markup) -> Self {
        let mut blocks = Vec::new();
        let mut paragraph: Vec<Span<'static>> = Vec::new();
        // Tags may open before a math or code node and close after it.
        let mut emphasis = Emphasis::default();
        for node in &markup.nodes {
            match node {
                Node::Text(html) => {
                    paragraph.extend(
                        emphasis
                            .runs(html)
                            .into_iter()
                            .map(|run| Span::styled(run.text, emphasized(run.bold, run.italic))),
                    );
                }
                Node::Math {
                    tex,
                    display: false,
                } => {
                    let (text, failed) = typeset(tex, false);
                    let style = math_style(failed)
                        .patch(emphasized(emphasis.bold(), emphasis.italic()));
                    paragraph.push(Span::styled(text, style));
                }
                Node::Math { tex, display: true } => {
                    flush_paragraph(&mut paragraph, &mut blocks);
                    let (text, failed) = typeset(tex, true);
                    blocks.push(Block::Math { text, failed });
                }
                Node::Code(code) => {
                    flush_paragraph(&mut paragraph, &mut blocks);
                    blocks.push(Block::Code {
                        text: code.clone(),
                        lines: syntax::highlight_block(code),
                    });
                }
            }
        }
        flush_paragraph(&mut paragraph, &mut blocks);
        Self { blocks }
    }

    /// Literal text of every code block, in order (copy targets).
    #[cfg(test)]
    pub(crate) fn code_texts(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Code { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Typeset one math span. Failures keep the source and add an error marker.
fn typeset(tex: &str, display: bool) -> (String, bool) {
    match math::typeset(tex, display, false) {
        Ok(text) => (text, false),
        Err(e) => {
            log::debug!("Math rendering failed for {:?}: {}", tex, e);
            (format!("{}{}", tex, MATH_ERROR_MARKER), true)
        }
    }
}

fn emphasized(bold: bool, italic: bool) -> Style {
    let mut style = Style::default();
    if bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    style
}

pub(crate) fn math_style(failed: bool) -> Style {
    if failed {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(MATH).add_modifier(Modifier::ITALIC)
    }
}

/// Push the pending paragraph without its leading/trailing blank lines.
fn flush_paragraph(paragraph: &mut Vec<Span<'static>>, blocks: &mut Vec<Block>) {
    let mut spans = std::mem::take(paragraph);
    while spans.first().is_some_and(|s| s.content.trim().is_empty()) {
        spans.remove(0);
    }
    while spans.last().is_some_and(|s| s.content.trim().is_empty()) {
        spans.pop();
    }
    if let Some(first) = spans.first_mut() {
        first.content = first.content.trim_start_matches('\n').to_string().into();
    }
    if let Some(last) = spans.last_mut() {
        last.content = last.content.trim_end().to_string().into();
    }
    if !spans.is_empty() {
        blocks.push(Block::Paragraph(spans));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph_text(block: &Block) -> String {
        match block {
            Block::Paragraph(spans) => spans.iter().map(|s| s.content.as_ref()).collect(),
            other => panic!("expected paragraph, got {:?}", other),
        }
    }

    #[test]
    fn user_message_is_literal() {
        let bubble = Bubble::render(&Message::user("**not bold** $x$"));
        assert_eq!(bubble.blocks.len(), 1);
        assert_eq!(paragraph_text(&bubble.blocks[0]), "**not bold** $x$");
    }

    #[test]
    fn error_message_is_error_block() {
        let bubble = Bubble::render(&Message::error("Error: boom **x**"));
        assert!(matches!(&bubble.blocks[0], Block::Error(t) if t == "Error: boom **x**"));
    }

    #[test]
    fn emphasis_becomes_styles_and_inline_math_is_typeset() {
        let bubble = Bubble::render(&Message::assistant("Hello **world**, here: $x^2$"));
        assert_eq!(bubble.blocks.len(), 1);
        let Block::Paragraph(spans) = &bubble.blocks[0] else {
            panic!("expected paragraph");
        };
        let bold = spans.iter().find(|s| s.content == "world").unwrap();
        assert!(bold.style.add_modifier.contains(Modifier::BOLD));
        let math = spans.last().unwrap();
        assert_eq!(math.content.as_ref(), "x²");
        assert_eq!(math.style.fg, Some(MATH));
    }

    #[test]
    fn bold_around_inline_math_styles_every_span() {
        let bubble = Bubble::render(&Message::assistant("**Answer: $x=2$**"));
        let Block::Paragraph(spans) = &bubble.blocks[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(paragraph_text(&bubble.blocks[0]), "Answer: x=2");
        assert!(
            spans
                .iter()
                .all(|s| s.style.add_modifier.contains(Modifier::BOLD))
        );
    }

    #[test]
    fn code_and_display_math_are_blocks() {
        let bubble = Bubble::render(&Message::assistant(
            "Intro:\n```\n<b>raw</b>\n```\nThen\n$$\\alpha$$\nEnd",
        ));
        let kinds: Vec<&str> = bubble
            .blocks
            .iter()
            .map(|b| match b {
                Block::Paragraph(_) => "p",
                Block::Code { .. } => "code",
                Block::Math { .. } => "math",
                Block::Error(_) => "error",
            })
            .collect();
        assert_eq!(kinds, ["p", "code", "p", "math", "p"]);
        assert_eq!(paragraph_text(&bubble.blocks[0]), "Intro:");
        assert_eq!(bubble.code_texts(), ["<b>raw</b>"]);
        assert!(matches!(&bubble.blocks[3], Block::Math { text, failed: false } if text == "α"));
    }

    #[test]
    fn failed_math_keeps_source_with_marker_and_siblings_render() {
        let bubble = Bubble::render(&Message::assistant("$x^{2$ and $y^2$"));
        let Block::Paragraph(spans) = &bubble.blocks[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(spans[0].content.as_ref(), "x^{2 ⚠");
        assert_eq!(spans[0].style.fg, Some(Color::Red));
        assert_eq!(spans.last().unwrap().content.as_ref(), "y²");
    }
}
