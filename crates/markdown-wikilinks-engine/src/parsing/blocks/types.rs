use crate::parsing::rope::span::Span;

use super::{content::ContentLine, kinds::FenceKind};

/// A frame in the container stack representing a nesting level.
///
/// Containers wrap leaf blocks and can nest (lists inside blockquotes,
/// blockquotes inside blockquotes). Each blockquote level gets its own frame
/// so that consecutive blocks share a common prefix of frames exactly when
/// they share an enclosing container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerFrame {
    /// One level of blockquote; `depth` 1 is the outermost `>`. `id`
    /// tells apart quotes separated by unquoted lines.
    BlockQuote { depth: u8, id: usize },
    /// A list. `id` distinguishes separate lists in one document.
    List { id: usize, ordered: bool },
    /// A single item of the enclosing list.
    ListItem { id: usize },
}

/// The kind of a leaf block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// A paragraph block (default when no other block opener matches).
    Paragraph,
    /// An ATX heading.
    Heading { level: u8 },
    /// A fenced code block (``` or ~~~). A raw zone: no inline parsing.
    FencedCode {
        kind: FenceKind,
        /// Span of the info string on the opening fence, if any.
        info: Option<Span>,
    },
}

impl BlockKind {
    /// Whether inline parsers run over this block's lines.
    #[must_use]
    pub fn has_inlines(&self) -> bool {
        matches!(self, BlockKind::Paragraph | BlockKind::Heading { .. })
    }
}

/// A parsed block node with its containers, kind, spans and content lines.
#[derive(Debug, Clone)]
pub struct BlockNode {
    /// The container stack this block is nested within, outermost first.
    pub containers: Vec<ContainerFrame>,
    pub kind: BlockKind,
    /// Full byte span of the block including delimiters and newlines.
    pub span: Span,
    /// From the start of the first content line to the end of the last one.
    pub content_span: Span,
    /// Per-line content segments, in order. For fenced code these are the
    /// lines between the fences.
    pub lines: Vec<ContentLine>,
}

impl BlockNode {
    /// The block's text: every content line segment, joined with `\n`.
    ///
    /// This is the reconstructed text of the block that an inline construct
    /// was found in, without container prefixes or markers.
    #[must_use]
    pub fn text(&self, source: &str) -> String {
        let mut out = String::with_capacity(self.content_span.len());
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(line.content.slice(source));
        }
        out
    }
}
