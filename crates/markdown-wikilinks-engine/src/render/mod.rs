//! # Rendering
//!
//! Turns parsed blocks and inlines into a node tree and walks it into HTML.
//!
//! - **`tree`**: `Node`, `NodeKind` and `build_tree`
//! - **`writer`**: `HtmlWriter`, the escaping output buffer
//! - **`registry`**: `RendererRegistry` dispatch by `NodeKind` and priority
//! - **`html`**: `HtmlRenderer`, the default functions for host node kinds

pub mod html;
pub mod registry;
pub mod tree;
pub mod writer;

pub use html::HtmlRenderer;
pub use registry::{FuncRegisterer, NodeRenderer, RenderFn, RendererRegistry};
pub use tree::{Node, NodeData, NodeKind, build_tree};
pub use writer::HtmlWriter;
