/// ATX heading syntax: one to six `#` followed by a space or end of line.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: u8 = 6;

    /// Parses an ATX heading, returning its level and the byte range of its
    /// text relative to `text`. An optional closing run of `#` is excluded.
    pub fn parse(text: &str) -> Option<(u8, (usize, usize))> {
        let b = text.as_bytes();
        let level = b.iter().take_while(|&&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL as usize {
            return None;
        }
        if level < b.len() && b[level] != b' ' && b[level] != b'\t' {
            return None;
        }

        let rest = &text[level..];
        let start = level + (rest.len() - rest.trim_start().len());
        let mut inner = rest.trim();

        // Closing sequence must be separated from the text by whitespace.
        let without_closing = inner.trim_end_matches(Self::MARKER as char);
        if without_closing.is_empty() {
            inner = "";
        } else if without_closing.len() < inner.len() && without_closing.ends_with([' ', '\t']) {
            inner = without_closing.trim_end();
        }

        Some((level as u8, (start, start + inner.len())))
    }
}
