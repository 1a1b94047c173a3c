//! Block kinds that own their syntax delimiters.
//!
//! The classifier and builder call into these types; they never hardcode
//! `>`, `#`, list bullets or fence characters themselves.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list_item;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, Fence, FenceKind};
pub use heading::Heading;
pub use list_item::{ListItem, ListMarker};
