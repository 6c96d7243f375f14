use tracing::debug;

use crate::block::Block;
use crate::inline::tokenize_inline;

const BULLET: char = '•';

/// Parse a chat message into one block per line
pub fn parse(text: &str) -> Vec<Block> {
    if text.is_empty() {
        return Vec::new();
    }

    let blocks: Vec<Block> = text.split('\n').map(classify_line).collect();
    debug!(bytes = text.len(), blocks = blocks.len(), "rendered message");
    blocks
}

fn classify_line(line: &str) -> Block {
    if let Some(block) = heading(line) {
        return block;
    }

    let trimmed = line.trim();

    if trimmed.starts_with("- ") || trimmed.starts_with("• ") {
        let rest = line.trim_start_matches(|c: char| c.is_whitespace() || c == '-' || c == BULLET);
        return Block::ListItem {
            ordered: false,
            content: tokenize_inline(rest),
        };
    }

    if let Some(rest) = strip_list_number(line.trim_start()) {
        return Block::ListItem {
            ordered: true,
            content: tokenize_inline(rest),
        };
    }

    if trimmed.is_empty() {
        return Block::Blank;
    }

    Block::Paragraph {
        content: tokenize_inline(line),
    }
}

/// `###` maps to level 4 down to `#` at level 2; the top level is left to
/// whatever page the message is embedded in.
fn heading(line: &str) -> Option<Block> {
    let (marker, level) = [("###", 4), ("##", 3), ("#", 2)]
        .into_iter()
        .find(|(marker, _)| line.starts_with(marker))?;

    Some(Block::Heading {
        level,
        text: line[marker.len()..].trim_start().to_string(),
    })
}

/// Strip a leading `12.` marker and the whitespace after it.
fn strip_list_number(line: &str) -> Option<&str> {
    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix('.')?;
    Some(rest.trim_start())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Span;

    fn text(s: &str) -> Span {
        Span::Text(s.to_string())
    }

    #[test]
    fn empty_input() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn headings() {
        assert_eq!(
            parse("# Title"),
            vec![Block::Heading {
                level: 2,
                text: "Title".to_string()
            }]
        );
        assert_eq!(
            parse("## Sub"),
            vec![Block::Heading {
                level: 3,
                text: "Sub".to_string()
            }]
        );
        assert_eq!(
            parse("###Warm-up"),
            vec![Block::Heading {
                level: 4,
                text: "Warm-up".to_string()
            }]
        );
    }

    #[test]
    fn deep_heading_keeps_extra_hashes() {
        assert_eq!(
            parse("#### Cooldown"),
            vec![Block::Heading {
                level: 4,
                text: "# Cooldown".to_string()
            }]
        );
    }

    #[test]
    fn heading_text_is_not_tokenized() {
        assert_eq!(
            parse("## **Day 1**"),
            vec![Block::Heading {
                level: 3,
                text: "**Day 1**".to_string()
            }]
        );
    }

    #[test]
    fn indented_hash_is_not_a_heading() {
        assert_eq!(
            parse("  # not a heading"),
            vec![Block::Paragraph {
                content: vec![text("  # not a heading")]
            }]
        );
    }

    #[test]
    fn unordered_items() {
        assert_eq!(
            parse("- item one\n  • item two"),
            vec![
                Block::ListItem {
                    ordered: false,
                    content: vec![text("item one")]
                },
                Block::ListItem {
                    ordered: false,
                    content: vec![text("item two")]
                },
            ]
        );
    }

    #[test]
    fn bullet_prefix_strips_repeated_markers() {
        assert_eq!(
            parse("- - -stretch"),
            vec![Block::ListItem {
                ordered: false,
                content: vec![text("stretch")]
            }]
        );
    }

    #[test]
    fn dash_without_space_is_a_paragraph() {
        assert_eq!(
            parse("-5 kg"),
            vec![Block::Paragraph {
                content: vec![text("-5 kg")]
            }]
        );
    }

    #[test]
    fn ordered_items() {
        assert_eq!(
            parse("1. first\n  12.second"),
            vec![
                Block::ListItem {
                    ordered: true,
                    content: vec![text("first")]
                },
                Block::ListItem {
                    ordered: true,
                    content: vec![text("second")]
                },
            ]
        );
    }

    #[test]
    fn number_without_period_is_a_paragraph() {
        assert_eq!(
            parse("10 push-ups"),
            vec![Block::Paragraph {
                content: vec![text("10 push-ups")]
            }]
        );
    }

    #[test]
    fn blank_lines() {
        assert_eq!(
            parse("a\n   \nb\n"),
            vec![
                Block::Paragraph {
                    content: vec![text("a")]
                },
                Block::Blank,
                Block::Paragraph {
                    content: vec![text("b")]
                },
                Block::Blank,
            ]
        );
    }

    #[test]
    fn list_item_content_is_tokenized() {
        assert_eq!(
            parse("- **Squats**: 3x10"),
            vec![Block::ListItem {
                ordered: false,
                content: vec![Span::Bold("Squats".to_string()), text(": 3x10")]
            }]
        );
    }

    #[test]
    fn carriage_returns_stay_in_paragraph_text() {
        assert_eq!(
            parse("rest\r\n\r"),
            vec![
                Block::Paragraph {
                    content: vec![text("rest\r")]
                },
                Block::Blank,
            ]
        );
    }

    #[test]
    fn plain_text_round_trips() {
        let message = "## Plan\n- Squats 3x10\n2. Lunges\n\nRest 60s";
        let lines: Vec<String> = parse(message).iter().map(Block::plain_text).collect();
        assert_eq!(lines, vec!["Plan", "Squats 3x10", "Lunges", "", "Rest 60s"]);
    }
}
