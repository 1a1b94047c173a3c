use crate::parsing::{
    blocks::BlockNode,
    inline::{reader::LineReader, registry::InlineParser, types::InlineNode},
    rope::span::Span,
};

/// Inline `[text](destination)` link syntax.
pub struct Link;

impl Link {
    pub const TEXT_OPEN: u8 = b'[';
    pub const TEXT_CLOSE: u8 = b']';
    pub const DEST_OPEN: u8 = b'(';
    pub const DEST_CLOSE: u8 = b')';
}

/// Parses explicit inline links. Link text may not contain brackets and the
/// whole link must sit on one line.
#[derive(Debug, Default)]
pub struct LinkParser;

impl LinkParser {
    pub const PRIORITY: u32 = 200;
}

impl InlineParser for LinkParser {
    fn trigger(&self) -> &'static [u8] {
        b"["
    }

    fn parse(&mut self, _parent: &BlockNode, reader: &mut LineReader<'_>) -> Option<InlineNode> {
        let (line, segment) = reader.peek_line()?;
        let b = line.as_bytes();
        if b.first() != Some(&Link::TEXT_OPEN) {
            return None;
        }

        let text_end = 1 + b[1..]
            .iter()
            .position(|&c| c == Link::TEXT_CLOSE || c == Link::TEXT_OPEN)?;
        if b[text_end] != Link::TEXT_CLOSE || b.get(text_end + 1) != Some(&Link::DEST_OPEN) {
            return None;
        }

        let dest_start = text_end + 2;
        let dest_end = dest_start + b[dest_start..].iter().position(|&c| c == Link::DEST_CLOSE)?;

        let destination = Span::new(segment.start + dest_start, segment.start + dest_end);
        reader.advance(dest_end + 1);
        Some(InlineNode::Link {
            full: Span::new(segment.start, segment.start + dest_end + 1),
            text: Span::new(segment.start + 1, segment.start + text_end),
            destination: destination.trim(reader.source()),
        })
    }
}
