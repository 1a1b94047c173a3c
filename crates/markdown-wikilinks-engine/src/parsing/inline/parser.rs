use crate::parsing::{blocks::BlockNode, rope::span::Span};

use super::{
    kinds::{CodeSpanParser, LinkParser},
    reader::LineReader,
    registry::InlineParsers,
    types::InlineNode,
};

/// Parsers every document pass starts with: code spans ahead of everything
/// else (raw zones), plain links last.
pub fn default_parsers<'a>() -> InlineParsers<'a> {
    let mut parsers = InlineParsers::new();
    parsers.add(CodeSpanParser, CodeSpanParser::PRIORITY);
    parsers.add(LinkParser, LinkParser::PRIORITY);
    parsers
}

/// Parses a block's content lines into a sequence of [`InlineNode`]s.
///
/// At each byte the registered parsers triggered by it get a turn in
/// priority order. If all decline, the byte becomes part of the surrounding
/// text. Line ends become [`InlineNode::SoftBreak`]s.
///
/// # Returns
/// Nodes covering every content byte of the block. Text between special
/// constructs is emitted as `InlineNode::Text`.
pub fn parse_inlines(
    parsers: &mut InlineParsers<'_>,
    source: &str,
    block: &BlockNode,
) -> Vec<InlineNode> {
    let mut reader = LineReader::new(source, &block.lines);
    let mut out = vec![];
    let mut text_start = reader.pos();

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while let Some((line, _)) = reader.peek_line() {
        let Some(&byte) = line.as_bytes().first() else {
            let line_end = reader.pos();
            flush_text(&mut out, text_start, line_end);
            if !reader.next_line() {
                break;
            }
            out.push(InlineNode::SoftBreak(Span::new(line_end, reader.pos())));
            text_start = reader.pos();
            continue;
        };

        let start = reader.pos();
        if let Some(node) = parsers.try_parse(byte, block, &mut reader) {
            debug_assert!(reader.pos() > start, "inline parser matched without advancing");
            flush_text(&mut out, text_start, start);
            text_start = reader.pos();
            out.push(node);
            continue;
        }
        // Step over the whole char so the reader stays on a char boundary.
        reader.advance(line.chars().next().map_or(1, char::len_utf8));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{blocks::BlockKind, parse_document};
    use pretty_assertions::assert_eq;
    use xi_rope::Rope;

    fn inlines(src: &str) -> Vec<InlineNode> {
        let doc = parse_document(&Rope::from(src));
        let block = &doc.blocks[0];
        assert!(block.kind.has_inlines());
        parse_inlines(&mut default_parsers(), src, block)
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(inlines("hello world"), vec![InlineNode::Text(Span::new(0, 11))]);
    }

    #[test]
    fn parse_code_span() {
        assert_eq!(
            inlines("`code`"),
            vec![InlineNode::CodeSpan {
                full: Span::new(0, 6),
                inner: Span::new(1, 5),
            }]
        );
    }

    #[test]
    fn double_tick_code_span_may_contain_single_tick() {
        assert_eq!(
            inlines("``a`b``"),
            vec![InlineNode::CodeSpan {
                full: Span::new(0, 7),
                inner: Span::new(2, 5),
            }]
        );
    }

    #[test]
    fn parse_plain_link() {
        assert_eq!(
            inlines("go [home]( index.html ) now"),
            vec![
                InlineNode::Text(Span::new(0, 3)),
                InlineNode::Link {
                    full: Span::new(3, 23),
                    text: Span::new(4, 8),
                    destination: Span::new(11, 21),
                },
                InlineNode::Text(Span::new(23, 27)),
            ]
        );
    }

    #[test]
    fn without_wikilink_parser_double_brackets_are_text() {
        assert_eq!(inlines("[[Foo]]"), vec![InlineNode::Text(Span::new(0, 7))]);
    }

    #[test]
    fn lines_are_joined_by_soft_breaks() {
        let src = "one\n  two";
        assert_eq!(
            inlines(src),
            vec![
                InlineNode::Text(Span::new(0, 3)),
                InlineNode::SoftBreak(Span::new(3, 6)),
                InlineNode::Text(Span::new(6, 9)),
            ]
        );
    }

    #[test]
    fn multibyte_text_before_a_construct() {
        assert_eq!(
            inlines("Café `x`"),
            vec![
                InlineNode::Text(Span::new(0, 6)),
                InlineNode::CodeSpan {
                    full: Span::new(6, 9),
                    inner: Span::new(7, 8),
                },
            ]
        );
    }

    #[test]
    fn unclosed_code_span_becomes_text() {
        assert_eq!(inlines("`unclosed code"), vec![InlineNode::Text(Span::new(0, 14))]);
    }

    #[test]
    fn fenced_code_has_no_inlines() {
        let doc = parse_document(&Rope::from("```\n[[x]]\n```\n"));
        assert!(matches!(doc.blocks[0].kind, BlockKind::FencedCode { .. }));
        assert!(!doc.blocks[0].kind.has_inlines());
    }
}
