//! Rendered markup: escaped text with emphasis tags, code, and math nodes,
//! serializable to HTML.

use super::emphasis::apply_emphasis;
use super::escape::escape_html;
use super::{FormatError, Span, patterns};

/// A rendered span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Escaped text carrying `<strong>` / `<em>` tags.
    Text(String),
    /// Literal code block body, not escaped.
    Code(String),
    Math { tex: String, display: bool },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup {
    pub nodes: Vec<Node>,
}

/// Placeholder for a held code/math node inside the text being emphasized.
/// Escaped text never contains `<`, and the emphasis tags never start with `<@`.
const HOLD_OPEN: &str = "<@";
const HOLD_CLOSE: char = '>';

impl Markup {
    /// Render parsed spans: text is escaped, then emphasis runs over the whole
    /// message with each code and math span held as an opaque placeholder, so
    /// `**see $x$**` is bold around the math. Code and math keep their source.
    pub fn render(spans: &[Span<'_>]) -> Result<Self, FormatError> {
        let patterns = patterns()?;
        let mut text = String::new();
        let mut held = Vec::new();
        for span in spans {
            let node = match *span {
                Span::Text(t) => {
                    text.push_str(&escape_html(t));
                    continue;
                }
                Span::Code(code) => Node::Code(code.to_string()),
                Span::Math { tex, display } => Node::Math {
                    tex: tex.to_string(),
                    display,
                },
            };
            text.push_str(HOLD_OPEN);
            text.push_str(&held.len().to_string());
            text.push(HOLD_CLOSE);
            held.push(Some(node));
        }
        let emphasized = apply_emphasis(&text, patterns);
        Ok(Self {
            nodes: restore(&emphasized, held),
        })
    }

    /// Markup of text shown as-is (user messages).
    pub fn literal(text: &str) -> Self {
        Self {
            nodes: vec![Node::Text(escape_html(text))],
        }
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for node in &self.nodes {
            match node {
                Node::Text(s) => html.push_str(s),
                Node::Code(code) => {
                    html.push_str("<pre><code>");
                    html.push_str(code);
                    html.push_str("</code></pre>");
                }
                Node::Math { tex, display: true } => {
                    html.push_str("<div class=\"math-display\">");
                    html.push_str(tex);
                    html.push_str("</div>");
                }
                Node::Math {
                    tex,
                    display: false,
                } => {
                    html.push_str("<span class=\"math-inline\">");
                    html.push_str(tex);
                    html.push_str("</span>");
                }
            }
        }
        html
    }
}

/// Split emphasized text at its placeholders, putting each held node back.
fn restore(emphasized: &str, mut held: Vec<Option<Node>>) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut text = String::new();
    let mut rest = emphasized;
    while let Some(at) = rest.find(HOLD_OPEN) {
        let after = &rest[at + HOLD_OPEN.len()..];
        let node = after.find(HOLD_CLOSE).and_then(|end| {
            let index: usize = after[..end].parse().ok()?;
            held.get_mut(index)?.take().map(|node| (node, end))
        });
        match node {
            Some((node, end)) => {
                text.push_str(&rest[..at]);
                if !text.is_empty() {
                    nodes.push(Node::Text(std::mem::take(&mut text)));
                }
                nodes.push(node);
                rest = &after[end + HOLD_CLOSE.len_utf8()..];
            }
            None => {
                text.push_str(&rest[..at + HOLD_OPEN.len()]);
                rest = after;
            }
        }
    }
    text.push_str(rest);
    if !text.is_empty() {
        nodes.push(Node::Text(text));
    }
    nodes
}
