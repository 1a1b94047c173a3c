use crate::parsing::rope::span::Span;

/// A wikilink occurrence after normalization.
///
/// `title` is the trimmed text between the brackets, kept as a span into the
/// source. `destination` is whatever the configured normalizer produced for
/// that text and is never set independently of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiLinkNode {
    /// Full span including `[[` and `]]`.
    pub full: Span,
    /// Span of the trimmed link text.
    pub title: Span,
    pub destination: String,
}

impl WikiLinkNode {
    pub fn title<'s>(&self, source: &'s str) -> &'s str {
        self.title.slice(source)
    }
}

/// A parsed inline node with byte spans into the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// A line break inside a block. Spans from the end of one line's content
    /// to the start of the next.
    SoftBreak(Span),
    /// A code span (backtick-delimited). This is a "raw zone": no parsing inside.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Inner span (content between backticks).
        inner: Span,
    },
    /// An explicit `[text](destination)` link.
    Link {
        full: Span,
        text: Span,
        destination: Span,
    },
    /// A `[[wikilink]]`.
    WikiLink(WikiLinkNode),
}

impl InlineNode {
    /// The full span of the node, delimiters included.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) | InlineNode::SoftBreak(sp) => *sp,
            InlineNode::CodeSpan { full, .. } | InlineNode::Link { full, .. } => *full,
            InlineNode::WikiLink(link) => link.full,
        }
    }
}
