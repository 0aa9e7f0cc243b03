//! Markdown emphasis over escaped text, and the inverse split into styled runs.

use regex::{Captures, Regex};

use super::Patterns;
use super::escape::unescape_html;

const STRONG_EM_OPEN: &str = "<strong><em>";
const STRONG_EM_CLOSE: &str = "</em></strong>";

/// Apply bold-italic, mixed bold-italic, bold, then italic, each globally.
/// Longer marker runs go first so `***x***` is not read as bold plus a stray `*`.
pub(crate) fn apply_emphasis(escaped: &str, patterns: &Patterns) -> String {
    let s = wrap_either(&patterns.bold_italic, escaped, STRONG_EM_OPEN, STRONG_EM_CLOSE);
    let s = patterns
        .mixed_bold_italic
        .replace_all(&s, "<strong><em>${2}</em></strong>")
        .into_owned();
    let s = wrap_either(&patterns.bold, &s, "<strong>", "</strong>");
    wrap_either(&patterns.italic, &s, "<em>", "</em>")
}

/// Replace each match of a two-alternative pattern (`A(.*?)A|B(.*?)B`) with its
/// inner text between `open` and `close`.
fn wrap_either(pattern: &Regex, s: &str, open: &str, close: &str) -> String {
    pattern
        .replace_all(s, |caps: &Captures<'_>| {
            let inner = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
            format!("{}{}{}", open, inner, close)
        })
        .into_owned()
}

/// A piece of unescaped text with its emphasis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

/// Emphasis open at a point of the markup. A tag may open in one text node
/// and close in a later one (`**see $x$**`), so front ends carry this from
/// node to node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Emphasis {
    bold: usize,
    italic: usize,
}

impl Emphasis {
    pub fn bold(&self) -> bool {
        self.bold > 0
    }

    pub fn italic(&self) -> bool {
        self.italic > 0
    }

    /// Split a text node's markup into styled runs, updating the open tags.
    /// Only the tags produced by [`apply_emphasis`] are understood; anything
    /// else is kept as text.
    pub fn runs(&mut self, markup: &str) -> Vec<Run> {
        let mut out: Vec<Run> = Vec::new();
        let mut rest = markup;
        let mut pending = String::new();
        while !rest.is_empty() {
            let tag = ["<strong>", "</strong>", "<em>", "</em>"]
                .into_iter()
                .find(|t| rest.starts_with(t));
            match tag {
                Some(t) => {
                    flush(&mut out, &mut pending, self.bold(), self.italic());
                    match t {
                        "<strong>" => self.bold += 1,
                        "</strong>" => self.bold = self.bold.saturating_sub(1),
                        "<em>" => self.italic += 1,
                        _ => self.italic = self.italic.saturating_sub(1),
                    }
                    rest = &rest[t.len()..];
                }
                None => {
                    let first = rest.chars().next().map_or(1, char::len_utf8);
                    let next = rest[first..].find('<').map_or(rest.len(), |i| i + first);
                    pending.push_str(&rest[..next]);
                    rest = &rest[next..];
                }
            }
        }
        flush(&mut out, &mut pending, self.bold(), self.italic());
        out
    }
}

fn flush(out: &mut Vec<Run>, pending: &mut String, bold: bool, italic: bool) {
    if pending.is_empty() {
        return;
    }
    let text = unescape_html(pending);
    pending.clear();
    match out.last_mut() {
        Some(last) if last.bold == bold && last.italic == italic => last.text.push_str(&text),
        _ => out.push(Run { text, bold, italic }),
    }
}
