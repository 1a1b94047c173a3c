//! The `[[...]]` inline parser.

use crate::parsing::{
    blocks::BlockNode,
    inline::{InlineNode, InlineParser, LineReader, WikiLinkNode, kinds::WikiLink},
    rope::span::Span,
};

use super::{
    normalizer::Normalizer,
    tracker::{Backlink, Tracker},
};

/// One `[[...]]` match on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    /// From the first `[` to just past the closing `]]`.
    pub full: Span,
    /// Everything strictly between the brackets, untrimmed.
    pub inner: Span,
}

/// Finds a wikilink at the start of `line`, whose first byte sits at
/// `base` in the source.
///
/// The closer is the first pair of consecutive `]` after the opener, so
/// `[[a]b]]` yields `a]b`. Returns `None` if the line does not start with
/// `[[` or ends before a `]]`.
pub fn find_occurrence(line: &[u8], base: usize) -> Option<Occurrence> {
    if !line.starts_with(WikiLink::OPEN) {
        return None;
    }

    let mut pending_close = false;
    for (pos, &b) in line.iter().enumerate().skip(WikiLink::OPEN.len()) {
        if b != WikiLink::CLOSE {
            pending_close = false;
            continue;
        }
        if pending_close {
            return Some(Occurrence {
                full: Span::new(base, base + pos + 1),
                inner: Span::new(base + WikiLink::OPEN.len(), base + pos - 1),
            });
        }
        pending_close = true;
    }
    None
}

/// Recognizes `[[wikilinks]]` for one document pass.
///
/// Every match is normalized into a destination. If a tracker is present it
/// also receives a [`Backlink`] carrying the full text of the enclosing
/// block; without one the block text is never assembled.
pub struct WikilinkScanner<'a> {
    normalizer: &'a dyn Normalizer,
    tracker: Option<&'a mut dyn Tracker>,
}

impl<'a> WikilinkScanner<'a> {
    /// Runs before the plain link parser, which would otherwise take the `[`.
    pub const PRIORITY: u32 = 102;

    pub fn new(normalizer: &'a dyn Normalizer, tracker: Option<&'a mut dyn Tracker>) -> Self {
        Self { normalizer, tracker }
    }
}

impl InlineParser for WikilinkScanner<'_> {
    fn trigger(&self) -> &'static [u8] {
        WikiLink::OPEN
    }

    fn parse(&mut self, parent: &BlockNode, reader: &mut LineReader<'_>) -> Option<InlineNode> {
        let (line, segment) = reader.peek_line()?;
        let Some(occurrence) = find_occurrence(line.as_bytes(), segment.start) else {
            log::trace!("no wikilink closer on line at {}", segment.start);
            return None;
        };

        let title = occurrence.inner.trim(reader.source());
        let raw_text = reader.value(title);
        log::trace!("normalizing wikilink {raw_text:?}");
        let destination = self.normalizer.normalize(raw_text);

        if let Some(tracker) = &mut self.tracker {
            tracker.record(Backlink {
                raw_text: raw_text.to_owned(),
                destination: destination.clone(),
                context: parent.text(reader.source()),
            });
        }

        reader.advance(occurrence.full.len());
        Some(InlineNode::WikiLink(WikiLinkNode {
            full: occurrence.full,
            title,
            destination,
        }))
    }
}
