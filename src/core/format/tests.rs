use serde_json::json;

use super::{
    Emphasis, FormatError, Markup, Node, Run, Span, error_fragment, format_content, format_markup,
    format_text, parse_spans,
};
use crate::core::message::Author;

fn assistant(text: &str) -> String {
    format_text(text, Author::Assistant)
}

#[test]
fn plain_text_is_only_escaped() {
    let input = "if a < b && c > d then stop";
    assert_eq!(
        assistant(input),
        "if a &lt; b &amp;&amp; c &gt; d then stop"
    );
}

#[test]
fn escaping_does_not_double_escape_entities() {
    assert_eq!(assistant("&lt;"), "&amp;lt;");
}

#[test]
fn code_block_is_trimmed_and_not_escaped() {
    let html = assistant("Run this:\n```\n  <b>x</b> & y\n```\ndone");
    assert_eq!(
        html,
        "Run this:\n<pre><code><b>x</b> & y</code></pre>\ndone"
    );
}

#[test]
fn code_block_keeps_language_line() {
    let spans = parse_spans("```python\nprint(1)\n```").unwrap();
    assert_eq!(spans, vec![Span::Code("python\nprint(1)")]);
}

#[test]
fn markers_inside_code_are_untouched() {
    let html = assistant("```\nlet total = a * b * c; // $5\n```");
    assert_eq!(
        html,
        "<pre><code>let total = a * b * c; // $5</code></pre>"
    );
}

#[test]
fn unclosed_fence_stays_text() {
    assert_eq!(assistant("```rust\nfn main"), "```rust\nfn main");
}

#[test]
fn triple_markers_are_bold_italic() {
    assert_eq!(
        assistant("***bold-italic***"),
        "<strong><em>bold-italic</em></strong>"
    );
    assert_eq!(assistant("___both___"), "<strong><em>both</em></strong>");
}

#[test]
fn mixed_markers_are_bold_italic() {
    assert_eq!(assistant("**_mixed_**"), "<strong><em>mixed</em></strong>");
    assert_eq!(assistant("__*mixed*__"), "<strong><em>mixed</em></strong>");
}

#[test]
fn bold_and_italic() {
    assert_eq!(
        assistant("**bold** and *italic* and __b__ and _i_"),
        "<strong>bold</strong> and <em>italic</em> and <strong>b</strong> and <em>i</em>"
    );
}

#[test]
fn italic_inside_bold_nests() {
    assert_eq!(
        assistant("**a *b* c**"),
        "<strong>a <em>b</em> c</strong>"
    );
}

#[test]
fn emphasis_does_not_cross_lines() {
    assert_eq!(assistant("*open\nclose*"), "*open\nclose*");
}

#[test]
fn bold_wraps_inline_math() {
    assert_eq!(
        assistant("**Answer: $x=2$**"),
        "<strong>Answer: <span class=\"math-inline\">x=2</span></strong>"
    );
}

#[test]
fn italic_wraps_code_block() {
    assert_eq!(
        assistant("*see ```x``` here*"),
        "<em>see <pre><code>x</code></pre> here</em>"
    );
}

#[test]
fn emphasis_across_math_splits_into_nodes() {
    let markup = format_markup("**a $x$ b**").unwrap();
    assert_eq!(
        markup.nodes,
        vec![
            Node::Text("<strong>a ".to_string()),
            Node::Math {
                tex: "x".to_string(),
                display: false
            },
            Node::Text(" b</strong>".to_string()),
        ]
    );
}

#[test]
fn text_resembling_a_placeholder_is_kept() {
    assert_eq!(assistant("<@0> $y$"), "&lt;@0&gt; <span class=\"math-inline\">y</span>");
}

#[test]
fn display_math() {
    assert_eq!(
        assistant("$$x^2$$"),
        "<div class=\"math-display\">x^2</div>"
    );
}

#[test]
fn inline_math() {
    assert_eq!(assistant("$x$"), "<span class=\"math-inline\">x</span>");
}

#[test]
fn display_math_may_span_lines() {
    let spans = parse_spans("$$\na + b\n$$").unwrap();
    assert_eq!(
        spans,
        vec![Span::Math {
            tex: "\na + b\n",
            display: true
        }]
    );
}

#[test]
fn math_is_not_escaped_or_emphasized() {
    assert_eq!(
        assistant("$a<b_1_$"),
        "<span class=\"math-inline\">a<b_1_</span>"
    );
}

#[test]
fn lone_dollar_stays_text() {
    assert_eq!(assistant("costs $5 today"), "costs $5 today");
}

#[test]
fn mixed_example_message() {
    assert_eq!(
        assistant("Hello **world**, here: $a+b$"),
        "Hello <strong>world</strong>, here: <span class=\"math-inline\">a+b</span>"
    );
}

#[test]
fn spans_keep_source_order() {
    let spans = parse_spans("a $x$ b ```c``` d $$y$$").unwrap();
    assert_eq!(
        spans,
        vec![
            Span::Text("a "),
            Span::Math {
                tex: "x",
                display: false
            },
            Span::Text(" b "),
            Span::Code("c"),
            Span::Text(" d "),
            Span::Math {
                tex: "y",
                display: true
            },
        ]
    );
}

#[test]
fn user_text_is_literal() {
    assert_eq!(
        format_text("**hi** <b> $x$", Author::User),
        "**hi** &lt;b&gt; $x$"
    );
}

#[test]
fn non_string_content_is_pretty_json() {
    let html = format_content(&json!({"error": "Invalid JSON response"}), Author::Assistant);
    assert_eq!(html, "{\n  \"error\": \"Invalid JSON response\"\n}");
}

#[test]
fn string_content_is_used_directly() {
    assert_eq!(
        format_content(&json!("*hi*"), Author::Assistant),
        "<em>hi</em>"
    );
}

#[test]
fn markup_nodes_for_tui() {
    let markup = format_markup("see **this**:\n```\nx\n```").unwrap();
    assert_eq!(
        markup,
        Markup {
            nodes: vec![
                Node::Text("see <strong>this</strong>:\n".to_string()),
                Node::Code("x".to_string()),
            ]
        }
    );
}

#[test]
fn runs_follow_emphasis_tags() {
    let r = Emphasis::default().runs("a <strong>b <em>c</em></strong> &lt;d&gt;");
    assert_eq!(
        r,
        vec![
            Run {
                text: "a ".to_string(),
                bold: false,
                italic: false
            },
            Run {
                text: "b ".to_string(),
                bold: true,
                italic: false
            },
            Run {
                text: "c".to_string(),
                bold: true,
                italic: true
            },
            Run {
                text: " <d>".to_string(),
                bold: false,
                italic: false
            },
        ]
    );
}

#[test]
fn runs_handle_non_ascii_text() {
    let r = Emphasis::default().runs("é<em>ü</em>");
    assert_eq!(r.len(), 2);
    assert_eq!(r[0].text, "é");
    assert!(r[1].italic);
}

#[test]
fn emphasis_state_carries_across_nodes() {
    let mut emphasis = Emphasis::default();
    let first = emphasis.runs("<strong>a ");
    assert!(first[0].bold);
    assert!(emphasis.bold());
    let last = emphasis.runs(" b</strong> c");
    assert!(last[0].bold);
    assert!(!last[1].bold);
    assert!(!emphasis.bold());
}

#[test]
fn error_fragment_escapes_the_message() {
    let error = FormatError::Pattern(regex::Error::Syntax("unclosed <group>".to_string()));
    assert_eq!(
        error_fragment(&error),
        "<div class=\"error\">Formatting error: invalid pattern: unclosed &lt;group&gt;</div>"
    );
}
