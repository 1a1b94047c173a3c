use std::collections::BTreeMap;

use serde::Serialize;
use xi_rope::Rope;

use crate::parsing::{
    blocks::{BlockKind, BlockNode, ContainerFrame},
    inline::{InlineNode, InlineParsers, parse_inlines},
    parse_document,
    rope::{
        slice::{preview, slice_to_string},
        span::Span,
    },
};

/// Serializable view of a parsed document.
#[derive(Debug, Serialize)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

#[derive(Debug, Serialize)]
pub struct BlockSnap {
    /// e.g. "Paragraph", "Heading(2)", "FencedCode(Backticks)".
    pub kind: String,
    pub span: (usize, usize),
    /// e.g. ["Quote(1)", "List(0, ordered)", "Item(1)"].
    pub containers: Vec<String>,
    pub text: String,
    pub inline: Vec<InlineSnap>,
}

#[derive(Debug, Serialize)]
pub struct InlineSnap {
    pub kind: String,
    pub span: (usize, usize),
    pub text: String,
    /// Named sub-spans ("inner", "title", "destination").
    pub parts: BTreeMap<String, (usize, usize)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

fn pair(sp: Span) -> (usize, usize) {
    (sp.start, sp.end)
}

fn block_kind(kind: &BlockKind) -> String {
    match kind {
        BlockKind::Paragraph => "Paragraph".to_string(),
        BlockKind::Heading { level } => format!("Heading({level})"),
        BlockKind::FencedCode { kind, .. } => format!("FencedCode({kind:?})"),
    }
}

fn container(frame: &ContainerFrame) -> String {
    match frame {
        ContainerFrame::BlockQuote { depth, .. } => format!("Quote({depth})"),
        ContainerFrame::List { id, ordered: true } => format!("List({id}, ordered)"),
        ContainerFrame::List { id, ordered: false } => format!("List({id})"),
        ContainerFrame::ListItem { id } => format!("Item({id})"),
    }
}

fn inline(rope: &Rope, node: InlineNode) -> InlineSnap {
    let mut parts = BTreeMap::new();
    let full = node.span();
    let (kind, destination) = match node {
        InlineNode::Text(_) => ("Text", None),
        InlineNode::SoftBreak(_) => ("SoftBreak", None),
        InlineNode::CodeSpan { inner, .. } => {
            parts.insert("inner".into(), pair(inner));
            ("CodeSpan", None)
        }
        InlineNode::Link {
            text, destination, ..
        } => {
            parts.insert("text".into(), pair(text));
            parts.insert("destination".into(), pair(destination));
            ("Link", None)
        }
        InlineNode::WikiLink(link) => {
            parts.insert("title".into(), pair(link.title));
            ("WikiLink", Some(link.destination))
        }
    };
    InlineSnap {
        kind: kind.into(),
        span: pair(full),
        text: preview(rope, full, 60),
        parts,
        destination,
    }
}

/// Converts parsed blocks into a [`Snap`], running `parsers` over every
/// inline-eligible block.
pub fn normalize(rope: &Rope, blocks: &[BlockNode], parsers: &mut InlineParsers<'_>) -> Snap {
    let source = slice_to_string(rope, Span::new(0, rope.len()));
    let blocks = blocks
        .iter()
        .map(|b| {
            let inline_nodes = if b.kind.has_inlines() {
                parse_inlines(parsers, &source, b)
            } else {
                vec![]
            };
            BlockSnap {
                kind: block_kind(&b.kind),
                span: pair(b.span),
                containers: b.containers.iter().map(container).collect(),
                text: preview(rope, b.span, 80),
                inline: inline_nodes.into_iter().map(|n| inline(rope, n)).collect(),
            }
        })
        .collect();

    Snap { blocks }
}

/// Parses `source` and returns its [`Snap`].
pub fn inspect(source: &str, parsers: &mut InlineParsers<'_>) -> Snap {
    let rope = Rope::from(source);
    let doc = parse_document(&rope);
    normalize(&rope, &doc.blocks, parsers)
}
