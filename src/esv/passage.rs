// Passage text transforms.
// Marks bracketed spans in ESV text so the renderer can highlight them.

/// Start of a highlighted span in cached verse text.
pub const HIGHLIGHT_START: char = '\u{2}';
/// End of a highlighted span in cached verse text.
pub const HIGHLIGHT_END: char = '\u{3}';

/// Replace `[` and `]` with the highlight markers, leaving everything else as is.
pub fn mark_brackets(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '[' => HIGHLIGHT_START,
            ']' => HIGHLIGHT_END,
            _ => c,
        })
        .collect()
}

/// A piece of marked text, either plain or highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    Plain(&'a str),
    Highlight(&'a str),
}

/// Split marked text into plain and highlighted spans.
///
/// An unterminated highlight runs to the end of the text; stray end markers
/// are dropped.
pub fn spans(text: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut highlighted = false;
    let mut start = 0;

    for (pos, c) in text.char_indices() {
        if c != HIGHLIGHT_START && c != HIGHLIGHT_END {
            continue;
        }
        push_span(&mut spans, &text[start..pos], highlighted);
        start = pos + c.len_utf8();
        highlighted = c == HIGHLIGHT_START;
    }
    push_span(&mut spans, &text[start..], highlighted);

    spans
}

fn push_span<'a>(spans: &mut Vec<Span<'a>>, piece: &'a str, highlighted: bool) {
    if piece.is_empty() {
        return;
    }
    spans.push(if highlighted {
        Span::Highlight(piece)
    } else {
        Span::Plain(piece)
    });
}
