//! # Snapshot Support
//!
//! Inspection helpers for the parser.
//!
//! - **`normalize`**: Converts parsed structures to a stable, serializable `Snap`
//!   (used by tests and by `markdown-wikilinks inspect`)
//! - **`invariants`**: Runtime checks for parser correctness (spans in bounds,
//!   content lines contained in their blocks)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, inspect, normalize};
