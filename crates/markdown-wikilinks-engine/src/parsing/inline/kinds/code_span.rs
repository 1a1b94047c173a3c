use crate::parsing::{
    blocks::BlockNode,
    inline::{reader::LineReader, registry::InlineParser, types::InlineNode},
    rope::span::Span,
};

/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones": no other inline parsing occurs inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
}

/// Parses a run of backticks closed by a run of the same length on the
/// same line.
#[derive(Debug, Default)]
pub struct CodeSpanParser;

impl CodeSpanParser {
    pub const PRIORITY: u32 = 100;
}

impl InlineParser for CodeSpanParser {
    fn trigger(&self) -> &'static [u8] {
        b"`"
    }

    fn parse(&mut self, _parent: &BlockNode, reader: &mut LineReader<'_>) -> Option<InlineNode> {
        let (line, segment) = reader.peek_line()?;
        let b = line.as_bytes();
        let run = |from: usize| b[from..].iter().take_while(|&&c| c == CodeSpan::TICK).count();

        let ticks = run(0);
        if ticks == 0 {
            return None;
        }

        let mut i = ticks;
        while i < b.len() {
            if b[i] != CodeSpan::TICK {
                i += 1;
                continue;
            }
            let close = run(i);
            if close == ticks {
                reader.advance(i + close);
                return Some(InlineNode::CodeSpan {
                    full: Span::new(segment.start, segment.start + i + close),
                    inner: Span::new(segment.start + ticks, segment.start + i),
                });
            }
            i += close;
        }
        None
    }
}
