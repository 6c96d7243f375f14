use crate::block::Span;

const BOLD_DELIMITERS: [&str; 2] = ["**", "__"];
const ITALIC_DELIMITERS: [&str; 2] = ["*", "_"];

fn is_special(ch: char) -> bool {
    matches!(ch, '*' | '_' | '`')
}

/// Match `delim ... delim` at the start of `rest`, closing on the first
/// occurrence of the delimiter. Returns the enclosed text and the number of
/// bytes consumed.
fn delimited<'a>(rest: &'a str, delim: &str) -> Option<(&'a str, usize)> {
    let body = rest.strip_prefix(delim)?;
    let end = body.find(delim)?;
    Some((&body[..end], end + delim.len() * 2))
}

/// Bold and italic pairs never enclose a carriage return.
fn emphasis<'a>(rest: &'a str, delims: &[&str]) -> Option<(&'a str, usize)> {
    delims
        .iter()
        .filter_map(|delim| delimited(rest, delim))
        .find(|(inner, _)| !inner.contains('\r'))
}

/// Code spans need at least one character between the backticks.
fn code_span(rest: &str) -> Option<(&str, usize)> {
    match delimited(rest, "`") {
        Some(("", _)) => None,
        found => found,
    }
}

/// Tokenize one line of text into bold, italic, code and plain spans.
///
/// Unmatched delimiters never fail: they come out as single-character
/// [`Span::Text`] runs and scanning moves on by one character.
pub fn tokenize_inline(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        if let Some((inner, consumed)) = emphasis(rest, &BOLD_DELIMITERS) {
            spans.push(Span::Bold(inner.to_string()));
            rest = &rest[consumed..];
            continue;
        }

        if let Some((inner, consumed)) = emphasis(rest, &ITALIC_DELIMITERS) {
            spans.push(Span::Italic(inner.to_string()));
            rest = &rest[consumed..];
            continue;
        }

        if let Some((inner, consumed)) = code_span(rest) {
            spans.push(Span::Code(inner.to_string()));
            rest = &rest[consumed..];
            continue;
        }

        match rest.find(is_special) {
            None => {
                spans.push(Span::Text(rest.to_string()));
                break;
            }
            Some(0) => {
                // Delimiters are ASCII, so the first char is one byte wide
                spans.push(Span::Text(rest[..1].to_string()));
                rest = &rest[1..];
            }
            Some(offset) => {
                spans.push(Span::Text(rest[..offset].to_string()));
                rest = &rest[offset..];
            }
        }
    }

    spans
}
