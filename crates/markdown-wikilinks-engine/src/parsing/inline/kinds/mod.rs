//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters, plus the
//! built-in parsers for them.
//!
//! - **`CodeSpan`**: `` ` `` runs, a raw zone that suppresses other parsing
//! - **`Link`**: `[text](destination)`
//! - **`WikiLink`**: `[[` … `]]`; the scanner itself lives in [`crate::wikilink`]

pub mod code_span;
pub mod link;
pub mod wikilink;

pub use code_span::{CodeSpan, CodeSpanParser};
pub use link::{Link, LinkParser};
pub use wikilink::WikiLink;
