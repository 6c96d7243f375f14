use serde::Serialize;

/// Inline text spans with formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Span {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
}

impl Span {
    /// The span's text without any styling.
    pub fn text(&self) -> &str {
        match self {
            Span::Text(text) | Span::Bold(text) | Span::Italic(text) | Span::Code(text) => text,
        }
    }
}

/// Block-level elements, one per input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Heading text is kept raw, it is never inline-tokenized.
    Heading {
        level: u8,
        text: String,
    },
    ListItem {
        ordered: bool,
        content: Vec<Span>,
    },
    Paragraph {
        content: Vec<Span>,
    },
    Blank,
}

impl Block {
    /// Concatenated text of the block with all styling dropped.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading { text, .. } => text.clone(),
            Block::ListItem { content, .. } | Block::Paragraph { content } => {
                content.iter().map(Span::text).collect()
            }
            Block::Blank => String::new(),
        }
    }
}
