use crate::parsing::{blocks::ContentLine, rope::span::Span};

use super::cursor::Cursor;

/// Reads a block's content lines for the inline parsers.
///
/// Inline parsers see one line at a time: [`LineReader::peek_line`] returns
/// only the unconsumed part of the current line, so no inline construct can
/// span a line break.
#[derive(Debug, Clone)]
pub struct LineReader<'a> {
    source: &'a str,
    lines: &'a [ContentLine],
    line: usize,
    cur: Cursor<'a>,
}

impl<'a> LineReader<'a> {
    pub fn new(source: &'a str, lines: &'a [ContentLine]) -> Self {
        Self {
            source,
            lines,
            line: 0,
            cur: Self::cursor_for(source, lines.first()),
        }
    }

    fn cursor_for(source: &'a str, line: Option<&ContentLine>) -> Cursor<'a> {
        match line {
            Some(line) => Cursor::new(line.content.slice(source), line.content.start),
            None => Cursor::new("", 0),
        }
    }

    /// The full source text the block's spans point into.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The unconsumed bytes of the current line and their absolute span, or
    /// `None` once every line has been read.
    pub fn peek_line(&self) -> Option<(&'a str, Span)> {
        if self.line >= self.lines.len() {
            return None;
        }
        Some((self.cur.rest(), Span::new(self.cur.pos(), self.cur.end())))
    }

    /// Moves the cursor `n` bytes forward within the current line.
    pub fn advance(&mut self, n: usize) {
        self.cur.bump_n(n);
    }

    /// Absolute source position of the cursor.
    pub fn pos(&self) -> usize {
        self.cur.pos()
    }

    /// Moves to the start of the next line. Returns false if there is none.
    pub fn next_line(&mut self) -> bool {
        self.line += 1;
        match self.lines.get(self.line) {
            Some(line) => {
                self.cur = Self::cursor_for(self.source, Some(line));
                true
            }
            None => false,
        }
    }

    /// Text covered by `span`.
    pub fn value(&self, span: Span) -> &'a str {
        span.slice(self.source)
    }
}
