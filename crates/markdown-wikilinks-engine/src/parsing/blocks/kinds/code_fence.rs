/// Which fence character opened a code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// A fence line: the character used, how many were repeated, and the byte
/// range of the info string (relative to the text passed to [`CodeFence::open`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fence {
    pub kind: FenceKind,
    pub len: usize,
    pub info: Option<(usize, usize)>,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICK: u8 = b'`';
    pub const TILDE: u8 = b'~';
    /// Minimum run of fence characters.
    pub const MIN_LEN: usize = 3;

    /// Recognizes a fence opener at the start of `text`.
    pub fn open(text: &str) -> Option<Fence> {
        let b = text.as_bytes();
        let ch = *b.first()?;
        let kind = match ch {
            Self::BACKTICK => FenceKind::Backticks,
            Self::TILDE => FenceKind::Tildes,
            _ => return None,
        };
        let len = b.iter().take_while(|&&c| c == ch).count();
        if len < Self::MIN_LEN {
            return None;
        }

        let rest = &text[len..];
        // Backtick fences may not carry backticks in their info string.
        if kind == FenceKind::Backticks && rest.contains('`') {
            return None;
        }
        let info = rest.trim();
        let info = (!info.is_empty()).then(|| {
            let start = len + (rest.len() - rest.trim_start().len());
            (start, start + info.len())
        });

        Some(Fence { kind, len, info })
    }

    /// True if `text` closes a block opened by `fence`: same character, at
    /// least as long, nothing else on the line.
    pub fn closes(fence: &Fence, text: &str) -> bool {
        match Self::open(text) {
            Some(close) => close.kind == fence.kind && close.len >= fence.len && close.info.is_none(),
            None => false,
        }
    }
}
