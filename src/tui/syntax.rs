//! Syntax highlighting for code blocks using syntect.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};

use super::constants::ACCENT_SECONDARY;

const THEME: &str = "base16-ocean.dark";

/// Convert syntect Color to ratatui Color. Alpha 0 => None (colourless).
fn translate_colour(c: syntect::highlighting::Color) -> Option<Color> {
    let syntect::highlighting::Color { r, g, b, a } = c;
    if a > 0 {
        Some(Color::Rgb(r, g, b))
    } else {
        None
    }
}

/// Convert syntect FontStyle to ratatui Modifier.
fn translate_font_style(f: FontStyle) -> Modifier {
    let mut m = Modifier::empty();
    if f.contains(FontStyle::BOLD) {
        m.insert(Modifier::BOLD);
    }
    if f.contains(FontStyle::ITALIC) {
        m.insert(Modifier::ITALIC);
    }
    if f.contains(FontStyle::UNDERLINE) {
        m.insert(Modifier::UNDERLINED);
    }
    m
}

/// Foreground and font style only: the code box keeps the terminal background.
fn translate_style(s: syntect::highlighting::Style) -> Style {
    let fg = translate_colour(s.foreground).unwrap_or(ACCENT_SECONDARY);
    Style::default()
        .fg(fg)
        .add_modifier(translate_font_style(s.font_style))
}

static SYNTAX_SET: std::sync::OnceLock<SyntaxSet> = std::sync::OnceLock::new();
static THEME_SET: std::sync::OnceLock<ThemeSet> = std::sync::OnceLock::new();

fn syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn theme() -> Option<&'static Theme> {
    let ts = THEME_SET.get_or_init(ThemeSet::load_defaults);
    ts.themes.get(THEME).or_else(|| ts.themes.values().next())
}

/// Map a language identifier (e.g. "rust", "python") to a syntect extension.
fn lang_to_extension(lang: &str) -> Option<&'static str> {
    Some(match lang.trim().to_lowercase().as_str() {
        "rs" | "rust" => "rs",
        "py" | "python" => "py",
        "js" | "javascript" => "js",
        "ts" | "typescript" => "ts",
        "go" | "golang" => "go",
        "rb" | "ruby" => "rb",
        "sh" | "bash" | "zsh" | "shell" => "sh",
        "sql" => "sql",
        "json" => "json",
        "yaml" | "yml" => "yml",
        "toml" => "toml",
        "md" | "markdown" => "md",
        "html" => "html",
        "css" => "css",
        "c" | "h" => "c",
        "cpp" | "cc" | "cxx" | "hpp" | "c++" => "cpp",
        "java" => "java",
        _ => return None,
    })
}

/// Pick a syntax for a code block. Fenced blocks keep their language line
/// (e.g. "python\nprint(1)"), so a lone known word on the first line wins;
/// otherwise syntect's first-line detection (shebangs, doctypes) is tried.
fn detect_syntax(code: &str) -> Option<&'static SyntaxReference> {
    let ps = syntax_set();
    let first = code.lines().next().unwrap_or("").trim();
    if !first.contains(char::is_whitespace)
        && let Some(ext) = lang_to_extension(first)
    {
        return ps.find_syntax_by_extension(ext);
    }
    ps.find_syntax_by_first_line(code)
}

fn plain_lines(code: &str) -> Vec<Vec<Span<'static>>> {
    code.split('\n')
        .map(|line| {
            vec![Span::styled(
                line.to_string(),
                Style::default().fg(ACCENT_SECONDARY),
            )]
        })
        .collect()
}

/// Highlight a whole code block, one span list per source line. Unknown
/// languages and highlighter errors fall back to the plain code style.
pub(super) fn highlight_block(code: &str) -> Vec<Vec<Span<'static>>> {
    let (Some(syntax), Some(theme)) = (detect_syntax(code), theme()) else {
        return plain_lines(code);
    };
    let ps = syntax_set();
    let mut h = HighlightLines::new(syntax, theme);
    let mut lines = Vec::new();
    for line in code.split('\n') {
        let with_ending = format!("{}\n", line);
        let segments = match h.highlight_line(&with_ending, ps) {
            Ok(segments) => segments,
            Err(e) => {
                log::debug!("Highlighting failed, using plain style: {}", e);
                return plain_lines(code);
            }
        };
        let spans = segments
            .into_iter()
            .filter_map(|(style, content)| {
                let s = content.trim_end_matches('\n');
                (!s.is_empty()).then(|| Span::styled(s.to_string(), translate_style(style)))
            })
            .collect();
        lines.push(spans);
    }
    lines
}
