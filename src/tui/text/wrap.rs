//! Text wrapping for display.

use ratatui::text::Span;

/// Split styled spans at newlines, keeping each piece's style.
fn split_lines(spans: &[Span<'static>]) -> Vec<Vec<Span<'static>>> {
    let mut lines = vec![Vec::new()];
    for span in spans {
        for (i, part) in span.content.split('\n').enumerate() {
            if i > 0 {
                lines.push(Vec::new());
            }
            if !part.is_empty()
                && let Some(line) = lines.last_mut()
            {
                line.push(Span::styled(part.to_string(), span.style));
            }
        }
    }
    lines
}

/// Wrap styled spans to `width`: newlines split lines, then each line is wrapped
/// on its plain text and the styles are carried over to every chunk.
pub(crate) fn wrap_spans(spans: &[Span<'static>], width: usize) -> Vec<Vec<Span<'static>>> {
    let mut out = Vec::new();
    for line in split_lines(spans) {
        let plain: String = line.iter().map(|s| s.content.as_ref()).collect();
        if plain.is_empty() || width == 0 {
            out.push(line);
            continue;
        }
        let chunks = textwrap::wrap(&plain, width);
        place_chunks(&line, &plain, chunks.iter().map(|c| c.as_ref()), &mut out);
    }
    out
}

/// Map wrapped chunks of `plain` back onto the styled `line`. Chunks are
/// slices of `plain` minus the whitespace at break points; if one cannot be
/// found, the rest of the line is pushed unwrapped.
pub(super) fn place_chunks<'c>(
    line: &[Span<'static>],
    plain: &str,
    chunks: impl IntoIterator<Item = &'c str>,
    out: &mut Vec<Vec<Span<'static>>>,
) {
    let mut cursor = 0;
    for chunk in chunks {
        let Some(offset) = plain[cursor..].find(chunk) else {
            let start = plain[..cursor].chars().count();
            out.push(slice_spans_by_range(line, start, plain.chars().count()));
            return;
        };
        let start_byte = cursor + offset;
        let start = plain[..start_byte].chars().count();
        let end = start + chunk.chars().count();
        out.push(slice_spans_by_range(line, start, end));
        cursor = start_byte + chunk.len();
    }
}

/// Slice spans to cover only the character range [range_start, range_end).
fn slice_spans_by_range(
    spans: &[Span<'static>],
    range_start: usize,
    range_end: usize,
) -> Vec<Span<'static>> {
    let mut result = Vec::new();
    let mut pos = 0;
    for span in spans {
        let s = span.content.as_ref();
        let len = s.chars().count();
        let span_end = pos + len;
        if span_end <= range_start || pos >= range_end {
            pos = span_end;
            continue;
        }
        let take_start = range_start.saturating_sub(pos);
        let take_end = (range_end - pos).min(len);
        if take_start < take_end {
            let sliced: String = s
                .chars()
                .skip(take_start)
                .take(take_end - take_start)
                .collect();
            result.push(Span::styled(sliced, span.style));
        }
        pos = span_end;
    }
    result
}
