use xi_rope::Rope;

use crate::parsing::blocks::BlockNode;

/// Panics if any block breaks the span invariants: spans in bounds, content
/// inside the block, and every content line ordered as prefix then content
/// within its raw line.
pub fn check(rope: &Rope, blocks: &[BlockNode]) {
    let n = rope.len();
    for b in blocks {
        assert!(
            b.span.start <= b.span.end && b.span.end <= n,
            "block span out of bounds: {:?} (rope len: {})",
            b.span,
            n
        );
        assert!(
            b.content_span.start <= b.content_span.end && b.content_span.end <= n,
            "content span out of bounds: {:?} (rope len: {})",
            b.content_span,
            n
        );
        assert!(
            b.content_span.start >= b.span.start && b.content_span.end <= b.span.end,
            "content span not contained in block span: content {:?}, block {:?}",
            b.content_span,
            b.span
        );
        for line in &b.lines {
            assert!(
                line.raw_line.start <= line.prefix.start
                    && line.prefix.end <= line.content.start
                    && line.content.end <= line.raw_line.end,
                "content line out of order: {line:?}"
            );
            assert!(
                line.raw_line.start >= b.span.start && line.raw_line.end <= b.span.end,
                "content line {:?} outside block {:?}",
                line.raw_line,
                b.span
            );
        }
    }
}
