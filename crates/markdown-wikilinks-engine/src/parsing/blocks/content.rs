use crate::parsing::rope::span::Span;

/// A single line's content projection within a block.
///
/// Separates the container prefix (`> `, a list marker, indentation or a
/// heading's `#`) from the meaningful content.
///
/// # Invariants
///
/// - `raw_line.start <= prefix.start`
/// - `prefix.end <= content.start`
/// - `content.end <= raw_line.end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLine {
    /// Full physical line span, newline included.
    pub raw_line: Span,
    /// Everything on the line before the content.
    pub prefix: Span,
    /// The content, without trailing whitespace or the line terminator.
    pub content: Span,
}

impl ContentLine {
    /// Builds a content line whose prefix runs from the line start to the
    /// content.
    pub fn new(raw_line: Span, content: Span) -> Self {
        Self {
            raw_line,
            prefix: Span::new(raw_line.start, content.start),
            content,
        }
    }
}
