use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use super::wrap::place_chunks;
use super::wrap_spans;

fn plain(line: &[Span<'static>]) -> String {
    line.iter().map(|s| s.content.as_ref()).collect()
}

#[test]
fn wrap_spans_splits_on_newlines() {
    let spans = vec![Span::raw("one\ntwo"), Span::raw(" three")];
    let lines = wrap_spans(&spans, 80);
    assert_eq!(lines.len(), 2);
    assert_eq!(plain(&lines[0]), "one");
    assert_eq!(plain(&lines[1]), "two three");
}

#[test]
fn wrap_spans_keeps_styles_across_chunks() {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let spans = vec![Span::raw("hello "), Span::styled("bold world", bold)];
    let lines = wrap_spans(&spans, 10);
    let texts: Vec<String> = lines.iter().map(|l| plain(l)).collect();
    assert_eq!(texts, ["hello bold", "world"]);
    assert_eq!(lines[0][1].content.as_ref(), "bold");
    assert_eq!(lines[0][1].style, bold);
    assert_eq!(lines[1][0].style, bold);
}

#[test]
fn wrap_spans_keeps_blank_lines() {
    let lines = wrap_spans(&[Span::raw("a\n\nb")], 80);
    assert_eq!(lines.len(), 3);
    assert!(lines[1].is_empty());
}

#[test]
fn wrap_spans_keeps_code_indentation() {
    let lines = wrap_spans(&[Span::raw("    let x = 1;")], 80);
    assert_eq!(plain(&lines[0]), "    let x = 1;");
}

#[test]
fn unplaceable_chunk_keeps_rest_of_line() {
    let line = vec![
        Span::raw("alpha "),
        Span::styled("beta gamma", Style::default().add_modifier(Modifier::BOLD)),
    ];
    let mut out = Vec::new();
    place_chunks(&line, "alpha beta gamma", ["alpha", "delta"], &mut out);
    assert_eq!(out.len(), 2);
    assert_eq!(plain(&out[0]), "alpha");
    assert_eq!(plain(&out[1]), " beta gamma");
    assert!(out[1].last().unwrap().style.add_modifier.contains(Modifier::BOLD));
}
