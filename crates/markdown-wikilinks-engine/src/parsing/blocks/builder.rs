use crate::parsing::rope::span::Span;

use super::{
    classify::LineClass,
    containers::ContainerPath,
    content::ContentLine,
    kinds::{CodeFence, Fence},
    open::{BlockOpen, try_open_leaf},
    types::{BlockKind, BlockNode},
};

#[derive(Debug)]
enum LeafState {
    None,
    Paragraph {
        lines: Vec<ContentLine>,
    },
    Fence {
        fence: Fence,
        info: Option<Span>,
        open_line: Span,
        lines: Vec<ContentLine>,
    },
}

/// Phase 2 of block parsing: turns classified lines into [`BlockNode`]s.
///
/// Every block is complete, with all of its lines, by the time `finish`
/// returns. Inline parsing only starts after that.
pub struct BlockBuilder {
    containers: ContainerPath,
    leaf: LeafState,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            containers: ContainerPath::default(),
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        if c.quote_depth != self.containers.quote_depth() {
            self.flush_paragraph();
            self.containers.set_blockquote_depth(c.quote_depth);
        }

        if c.is_blank {
            self.flush_paragraph();
            self.containers.mark_blank();
            return;
        }

        if let Some(marker) = c.list_marker {
            self.flush_paragraph();
            self.containers.open_item(marker.ordered);
        } else {
            if self.containers.closes_list(c.indent) {
                self.flush_paragraph();
            }
            self.containers.continue_line(c.indent);
        }

        if c.content_span.is_empty() {
            // An empty list item carries no leaf.
            return;
        }

        if let Some(open) = try_open_leaf(&c.content_text) {
            self.flush_paragraph();
            self.open_leaf(open, c);
            return;
        }

        self.extend_paragraph(c);
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.flush_paragraph();
        self.flush_fence(None);
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn open_leaf(&mut self, open: BlockOpen, c: &LineClass) {
        let base = c.content_span.start;
        match open {
            BlockOpen::FencedCode { fence } => {
                self.leaf = LeafState::Fence {
                    fence,
                    info: fence
                        .info
                        .map(|(start, end)| Span::new(base + start, base + end)),
                    open_line: c.line,
                    lines: vec![],
                }
            }
            BlockOpen::Heading { level, content } => {
                let content = Span::new(base + content.0, base + content.1);
                self.out.push(BlockNode {
                    containers: self.containers.frames(),
                    kind: BlockKind::Heading { level },
                    span: c.line,
                    content_span: content,
                    lines: vec![ContentLine::new(c.line, content)],
                });
            }
        }
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        let LeafState::Fence { fence, lines, .. } = &mut self.leaf else {
            return;
        };

        if CodeFence::closes(fence, &c.content_text) {
            self.flush_fence(Some(c.line));
            return;
        }
        lines.push(ContentLine::new(c.line, c.remainder_span));
    }

    fn extend_paragraph(&mut self, c: &LineClass) {
        let line = ContentLine::new(c.line, c.content_span);
        match &mut self.leaf {
            LeafState::Paragraph { lines } => lines.push(line),
            _ => self.leaf = LeafState::Paragraph { lines: vec![line] },
        }
    }

    fn flush_paragraph(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Paragraph { lines } = prev {
            let (Some(first), Some(last)) = (lines.first(), lines.last()) else {
                return;
            };
            let span = Span::new(first.raw_line.start, last.raw_line.end);
            let content_span = Span::new(first.content.start, last.content.end);
            self.out.push(BlockNode {
                containers: self.containers.frames(),
                kind: BlockKind::Paragraph,
                span,
                content_span,
                lines,
            });
        } else {
            self.leaf = prev; // put back non-paragraph leaf (e.g. fence)
        }
    }

    /// Emits the open fence. `close_line` is `None` for a fence left
    /// unterminated at end of input.
    fn flush_fence(&mut self, close_line: Option<Span>) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Fence {
            fence,
            info,
            open_line,
            lines,
        } = prev
        {
            let end = close_line
                .or_else(|| lines.last().map(|l| l.raw_line))
                .unwrap_or(open_line)
                .end;
            let content_span = match (lines.first(), lines.last()) {
                (Some(first), Some(last)) => Span::new(first.content.start, last.content.end),
                _ => Span::new(open_line.end, open_line.end),
            };
            self.out.push(BlockNode {
                containers: self.containers.frames(),
                kind: BlockKind::FencedCode {
                    kind: fence.kind,
                    info,
                },
                span: Span::new(open_line.start, end),
                content_span,
                lines,
            });
        } else {
            self.leaf = prev;
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
