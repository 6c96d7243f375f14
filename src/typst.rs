use crate::block::{Block, Span};
use crate::config::Config;
use crate::transcript::{MessageBody, RenderedMessage, Role};

/// Convert the blocks of a single message to Typst markup
pub fn blocks_to_typst(blocks: &[Block], config: &Config) -> String {
    let mut out = preamble(config);
    emit_blocks(blocks, &mut out);
    out
}

/// Convert a rendered conversation to Typst markup, one labelled section per
/// message
pub fn transcript_to_typst(messages: &[RenderedMessage], config: &Config) -> String {
    let mut out = preamble(config);

    if messages.is_empty() {
        out.push_str("#emph(");
        push_string(&config.transcript.welcome, &mut out);
        out.push_str(")\n\n");
        return out;
    }

    for (i, message) in messages.iter().enumerate() {
        if i > 0 {
            out.push_str("#line(length: 100%)\n\n");
        }

        let label = match message.role {
            Role::User => &config.labels.user,
            Role::Assistant => &config.labels.assistant,
        };
        // Keep the label on the same page as the first line of the message
        out.push_str("#block(sticky: true, strong(");
        push_string(label, &mut out);
        out.push_str("))\n\n");

        match &message.body {
            MessageBody::Raw(text) => emit_raw(text, &mut out),
            MessageBody::Blocks(blocks) => emit_blocks(blocks, &mut out),
        }
    }

    out
}

fn preamble(config: &Config) -> String {
    let mut out = String::from("#set page(paper: ");
    push_string(&config.page.paper, &mut out);
    if config.page.numbers {
        out.push_str(", numbering: \"1\"");
    }
    out.push_str(")\n");

    // Set up paragraph settings to prevent widows/orphans
    out.push_str("#set par(linebreaks: \"optimized\")\n\n");
    out
}

fn emit_blocks(blocks: &[Block], out: &mut String) {
    let mut in_list = false;

    for block in blocks {
        let is_item = matches!(block, Block::ListItem { .. });
        if in_list && !is_item {
            // A blank line ends the list
            out.push('\n');
        }
        in_list = is_item;
        emit_block(block, out);
    }

    if in_list {
        out.push('\n');
    }
}

fn emit_block(block: &Block, out: &mut String) {
    match block {
        Block::Heading { level, text } => {
            for _ in 0..*level {
                out.push('=');
            }
            out.push_str(" #");
            push_string(text, out);
            out.push_str(";\n\n");
        }
        Block::ListItem { ordered, content } => {
            out.push_str(if *ordered { "+ " } else { "- " });
            spans_to_typst(content, out);
            out.push('\n');
        }
        Block::Paragraph { content } => {
            spans_to_typst(content, out);
            out.push_str("\n\n");
        }
        Block::Blank => {
            out.push_str("#v(0.6em)\n\n");
        }
    }
}

/// User messages are printed as typed, line breaks included.
fn emit_raw(text: &str, out: &mut String) {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push_str("#linebreak();");
        }
        if !line.is_empty() {
            out.push('#');
            push_string(line, out);
            out.push(';');
        }
    }
    out.push_str("\n\n");
}

fn spans_to_typst(spans: &[Span], out: &mut String) {
    for span in spans {
        span_to_typst(span, out);
    }
}

// Span text goes out as string literals, so nothing a coach writes can turn
// into Typst markup or code.
fn span_to_typst(span: &Span, out: &mut String) {
    let func = match span {
        Span::Text(text) => {
            out.push('#');
            push_string(text, out);
            out.push(';');
            return;
        }
        Span::Bold(_) => "strong",
        Span::Italic(_) => "emph",
        Span::Code(_) => "raw",
    };
    out.push('#');
    out.push_str(func);
    out.push('(');
    push_string(span.text(), out);
    out.push_str(");");
}

fn push_string(text: &str, out: &mut String) {
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
}
