//! # Inline Parsing
//!
//! Trigger-dispatched inline parsing over the content lines of a block.
//!
//! ## Architecture
//!
//! Inline parsing runs after block parsing has finished, over the content
//! lines of inline-eligible blocks (paragraphs and headings).
//!
//! The dispatch loop walks the lines byte by byte. Each registered
//! [`InlineParser`] declares a trigger; when the current byte matches the
//! trigger's first byte the parser is offered a turn, in priority order.
//! Parsers that decline leave the reader untouched and the byte falls
//! through to the next parser, and finally to plain text.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, SoftBreak, CodeSpan, Link, WikiLink)
//! - **`kinds`**: Inline-specific delimiters and the built-in parsers
//! - **`cursor`**: `Cursor` for byte-by-byte scanning of one line
//! - **`reader`**: `LineReader`, the line-at-a-time view parsers receive
//! - **`registry`**: `InlineParser` trait and the priority-ordered `InlineParsers`
//! - **`parser`**: `parse_inlines()` dispatch loop
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence: `` `[[not a link]]` `` parses as a single CodeSpan,
//! not as text containing a WikiLink.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod reader;
pub mod registry;
pub mod types;

pub use parser::{default_parsers, parse_inlines};
pub use reader::LineReader;
pub use registry::{InlineParser, InlineParsers, Prioritized};
pub use types::{InlineNode, WikiLinkNode};
