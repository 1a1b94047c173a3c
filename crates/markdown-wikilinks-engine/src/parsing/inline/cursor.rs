/// A byte cursor over one line of inline content.
///
/// Operates over a string slice while tracking the absolute byte position
/// in the source (via `base` offset).
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The line being scanned, without its terminator.
    pub s: &'a str,
    /// Source offset of `s` (added to local index for absolute positions).
    pub base: usize,
    /// Current local index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s` with the given base offset.
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Returns the current absolute byte position (base + local index).
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    /// Absolute position just past the end of the line.
    pub fn end(&self) -> usize {
        self.base + self.s.len()
    }

    /// Returns true if at end of the line.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// The unconsumed remainder of the line.
    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or("")
    }

    /// Advances by `n` bytes, stopping at the end of the line.
    pub fn bump_n(&mut self, n: usize) {
        self.i = (self.i + n).min(self.s.len());
    }
}
