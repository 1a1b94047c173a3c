use crate::parsing::rope::{lines::LineRef, span::Span};

use super::kinds::{BlockQuote, ListItem, ListMarker};

/// Lists markers may be indented by at most this many spaces.
const MAX_MARKER_INDENT: usize = 3;

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the rope, newline included.
    pub line: Span,
    /// Whether the line is blank (whitespace only after stripping quote prefixes).
    pub is_blank: bool,
    /// Number of blockquote `>` prefixes found.
    pub quote_depth: u8,
    /// Line content after quote prefixes, newline excluded, indentation kept.
    pub remainder_span: Span,
    /// Leading spaces of the remainder.
    pub indent: usize,
    /// A list marker opening the remainder, if any.
    pub list_marker: Option<ListMarker>,
    /// Leaf content: after quote prefixes, list marker and indentation,
    /// without trailing whitespace.
    pub content_span: Span,
    /// Text of `content_span`.
    pub content_text: String,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let line_text = lr.without_terminator();
        let base = lr.span.start;

        let (quote_depth, idx) = BlockQuote::strip_prefixes(line_text);
        let remainder = &line_text[idx..];
        let remainder_span = Span::new(base + idx, base + line_text.len());

        let unindented = remainder.trim_start_matches(' ');
        let indent = remainder.len() - unindented.len();

        let list_marker = if indent <= MAX_MARKER_INDENT {
            ListItem::marker(unindented)
        } else {
            None
        };

        let mut content_offset = idx + indent;
        if let Some(marker) = list_marker {
            content_offset += marker.width;
        }
        let content = line_text[content_offset..].trim_start();
        content_offset = line_text.len() - content.len();
        let content = content.trim_end();

        LineClass {
            line: lr.span,
            is_blank: remainder.trim().is_empty(),
            quote_depth,
            remainder_span,
            indent,
            list_marker,
            content_span: Span::new(base + content_offset, base + content_offset + content.len()),
            content_text: content.to_string(),
        }
    }
}
