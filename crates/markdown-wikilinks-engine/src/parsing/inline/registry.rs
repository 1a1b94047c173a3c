use crate::parsing::blocks::BlockNode;

use super::{reader::LineReader, types::InlineNode};

/// An inline syntax handler offered a turn by the dispatch loop.
///
/// The loop calls [`InlineParser::parse`] only when the current byte equals
/// the first byte of [`InlineParser::trigger`]. A parser that declines must
/// return `None`; any cursor movement it made is rolled back.
pub trait InlineParser {
    /// Bytes that announce this syntax. Only the first byte is checked by
    /// the dispatcher; the parser confirms the rest.
    fn trigger(&self) -> &'static [u8];

    /// Attempts to parse at the reader's position inside `parent`. On success
    /// the reader must have been advanced past the construct.
    fn parse(&mut self, parent: &BlockNode, reader: &mut LineReader<'_>) -> Option<InlineNode>;
}

/// A value with a registration priority. Lower numbers run first.
#[derive(Debug, Clone)]
pub struct Prioritized<T> {
    pub value: T,
    pub priority: u32,
}

impl<T> Prioritized<T> {
    pub fn new(value: T, priority: u32) -> Self {
        Self { value, priority }
    }
}

/// The inline parsers of one document pass, kept in priority order.
#[derive(Default)]
pub struct InlineParsers<'a> {
    parsers: Vec<Prioritized<Box<dyn InlineParser + 'a>>>,
}

impl<'a> InlineParsers<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a parser. Parsers with equal priority keep registration order.
    pub fn add(&mut self, parser: impl InlineParser + 'a, priority: u32) {
        let at = self.parsers.partition_point(|p| p.priority <= priority);
        self.parsers
            .insert(at, Prioritized::new(Box::new(parser), priority));
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Priorities and triggers in dispatch order.
    pub fn triggers(&self) -> Vec<(u32, &'static [u8])> {
        self.parsers
            .iter()
            .map(|p| (p.priority, p.value.trigger()))
            .collect()
    }

    /// Offers the current position to every parser triggered by `byte`, in
    /// priority order, until one matches.
    pub fn try_parse(
        &mut self,
        byte: u8,
        parent: &BlockNode,
        reader: &mut LineReader<'_>,
    ) -> Option<InlineNode> {
        for entry in &mut self.parsers {
            if entry.value.trigger().first() != Some(&byte) {
                continue;
            }
            let saved = reader.clone();
            if let Some(node) = entry.value.parse(parent, reader) {
                return Some(node);
            }
            *reader = saved;
        }
        None
    }
}
