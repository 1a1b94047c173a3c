/// A byte range `[start, end)` into the source text.
///
/// Parsed nodes store spans rather than copied text. Slicing the source with
/// any span reproduces the exact bytes it was parsed from, and text is only
/// copied out when a consumer needs an owned value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Borrows the text this span covers in `source`.
    ///
    /// Spans always fall on ASCII delimiters or line boundaries, so they are
    /// valid char boundaries for any source they were produced from.
    #[must_use]
    pub fn slice(self, source: &str) -> &str {
        &source[self.start..self.end]
    }

    /// Narrows the span to exclude leading and trailing whitespace.
    ///
    /// A whitespace-only span collapses to an empty span at its end.
    #[must_use]
    pub fn trim(self, source: &str) -> Span {
        let text = self.slice(source);
        let without_leading = text.trim_start();
        let start = self.start + (text.len() - without_leading.len());
        Span {
            start,
            end: start + without_leading.trim_end().len(),
        }
    }
}
