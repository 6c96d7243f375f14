//! Property-based tests for the message renderer
//!
//! Arbitrary text must always render without panicking, render the same way
//! twice, and keep every non-delimiter character in order.

use chatmark::{Block, Span, render, tokenize_inline};
use proptest::prelude::*;

fn strip_delimiters(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '*' | '_' | '`')).collect()
}

fn span_text(spans: &[Span]) -> String {
    spans.iter().map(Span::text).collect()
}

/// Lines built from words, spaces and markdown punctuation
fn markdown_line() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z0-9 ]{1,6}",
            Just("*".to_string()),
            Just("**".to_string()),
            Just("_".to_string()),
            Just("__".to_string()),
            Just("`".to_string()),
            Just("é💪".to_string()),
        ],
        0..12,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn tokenize_never_panics(text in any::<String>()) {
        let _ = tokenize_inline(&text);
    }

    #[test]
    fn render_is_deterministic(text in any::<String>()) {
        prop_assert_eq!(render(&text), render(&text));
    }

    #[test]
    fn one_block_per_line(text in any::<String>()) {
        let blocks = render(&text);
        let expected = if text.is_empty() { 0 } else { text.split('\n').count() };
        prop_assert_eq!(blocks.len(), expected);
    }

    #[test]
    fn only_delimiters_are_dropped(line in markdown_line()) {
        let spans = tokenize_inline(&line);
        prop_assert_eq!(strip_delimiters(&span_text(&spans)), strip_delimiters(&line));
    }

    #[test]
    fn spans_never_outgrow_the_line(line in markdown_line()) {
        let spans = tokenize_inline(&line);
        prop_assert!(spans.len() <= line.len());
        prop_assert!(span_text(&spans).len() <= line.len());
    }

    #[test]
    fn plain_paragraph_is_single_text_span(line in "[a-zA-Z][a-zA-Z ,.!?']{0,40}") {
        prop_assert_eq!(
            render(&line),
            vec![Block::Paragraph { content: vec![Span::Text(line.clone())] }]
        );
    }
}

#[test]
fn documented_examples() {
    assert_eq!(
        render("# Title"),
        vec![Block::Heading {
            level: 2,
            text: "Title".to_string()
        }]
    );
    assert_eq!(
        render("## Sub"),
        vec![Block::Heading {
            level: 3,
            text: "Sub".to_string()
        }]
    );
    assert_eq!(
        render("- item one"),
        vec![Block::ListItem {
            ordered: false,
            content: vec![Span::Text("item one".to_string())]
        }]
    );
    assert_eq!(
        render("1. first"),
        vec![Block::ListItem {
            ordered: true,
            content: vec![Span::Text("first".to_string())]
        }]
    );
    assert!(render("").is_empty());
}

#[test]
fn unmatched_star_is_literal() {
    let blocks = render("unmatched *star");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].plain_text(), "unmatched *star");
}
