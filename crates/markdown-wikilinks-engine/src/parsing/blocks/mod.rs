//! # Block Parsing
//!
//! Two-phase block parsing over a container stack.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (blockquote depth, indentation, list marker, blank status)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` tracks the container stack
//!    and emits `BlockNode`s as leaf blocks close
//!
//! ## Modules
//!
//! - **`types`**: Core types (`BlockNode`, `BlockKind`, `ContainerFrame`)
//! - **`kinds`**: Block-specific types with owned delimiters (BlockQuote, CodeFence, Heading, ListItem)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`containers`**: `ContainerPath` for blockquote and list state
//! - **`content`**: `ContentLine`, the per-line prefix/content split
//! - **`open`**: `try_open_leaf` dispatch for detecting block openers
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no inline parsing inside
//! - All block nodes store byte spans into the source
//! - A block's `lines` are final before any inline parser sees the block

pub mod builder;
pub mod classify;
pub mod containers;
pub mod content;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use content::ContentLine;
pub use types::{BlockKind, BlockNode, ContainerFrame};
