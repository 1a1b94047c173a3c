use super::kinds::{CodeFence, Fence, Heading};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen {
    FencedCode { fence: Fence },
    /// `content` is the heading text's byte range relative to the line content.
    Heading { level: u8, content: (usize, usize) },
}

/// Detects a leaf block opener at the start of a line's content.
pub fn try_open_leaf(content: &str) -> Option<BlockOpen> {
    // Precedence: fence beats everything else.
    if let Some(fence) = CodeFence::open(content) {
        return Some(BlockOpen::FencedCode { fence });
    }
    if let Some((level, content)) = Heading::parse(content) {
        return Some(BlockOpen::Heading { level, content });
    }
    None
}
