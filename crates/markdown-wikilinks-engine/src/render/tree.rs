use crate::parsing::{
    blocks::{BlockKind, BlockNode, ContainerFrame},
    inline::InlineNode,
};

/// Tag used to look up a node's render function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    BlockQuote,
    List,
    ListItem,
    Paragraph,
    Heading,
    FencedCode,
    Text,
    SoftBreak,
    CodeSpan,
    Link,
    WikiLink,
}

/// What a tree node was built from.
#[derive(Debug, Clone)]
pub enum NodeData {
    Document,
    Container(ContainerFrame),
    Block(BlockNode),
    Inline(InlineNode),
}

/// A node of the document tree walked by the renderer.
#[derive(Debug, Clone)]
pub struct Node {
    pub data: NodeData,
    pub children: Vec<Node>,
    /// A paragraph of a tight list, rendered without `<p>`.
    pub tight: bool,
}

impl Node {
    pub fn new(data: NodeData) -> Self {
        Self {
            data,
            children: vec![],
            tight: false,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match &self.data {
            NodeData::Document => NodeKind::Document,
            NodeData::Container(frame) => match frame {
                ContainerFrame::BlockQuote { .. } => NodeKind::BlockQuote,
                ContainerFrame::List { .. } => NodeKind::List,
                ContainerFrame::ListItem { .. } => NodeKind::ListItem,
            },
            NodeData::Block(block) => match block.kind {
                BlockKind::Paragraph => NodeKind::Paragraph,
                BlockKind::Heading { .. } => NodeKind::Heading,
                BlockKind::FencedCode { .. } => NodeKind::FencedCode,
            },
            NodeData::Inline(inline) => match inline {
                InlineNode::Text(_) => NodeKind::Text,
                InlineNode::SoftBreak(_) => NodeKind::SoftBreak,
                InlineNode::CodeSpan { .. } => NodeKind::CodeSpan,
                InlineNode::Link { .. } => NodeKind::Link,
                InlineNode::WikiLink(_) => NodeKind::WikiLink,
            },
        }
    }

    /// Visits this node and its descendants depth-first, parents first.
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.descendants());
        }
        out
    }
}

/// Nests blocks under their containers.
///
/// Consecutive blocks whose container stacks share a prefix share those
/// container nodes; where the stacks diverge the old containers close and
/// new ones open.
pub fn build_tree(blocks: Vec<(BlockNode, Vec<InlineNode>)>) -> Node {
    let mut frames: Vec<ContainerFrame> = vec![];
    // open[0] is the document; open[i + 1] is the node for frames[i].
    let mut open = vec![Node::new(NodeData::Document)];

    fn close_innermost(frames: &mut Vec<ContainerFrame>, open: &mut Vec<Node>) {
        frames.pop();
        if let Some(node) = open.pop() {
            if let Some(parent) = open.last_mut() {
                parent.children.push(node);
            }
        }
    }

    for (block, inlines) in blocks {
        let shared = frames
            .iter()
            .zip(&block.containers)
            .take_while(|(a, b)| a == b)
            .count();
        while frames.len() > shared {
            close_innermost(&mut frames, &mut open);
        }
        for frame in &block.containers[shared..] {
            frames.push(*frame);
            open.push(Node::new(NodeData::Container(*frame)));
        }

        let leaf = Node {
            children: inlines
                .into_iter()
                .map(|inline| Node::new(NodeData::Inline(inline)))
                .collect(),
            data: NodeData::Block(block),
            tight: false,
        };
        if let Some(parent) = open.last_mut() {
            parent.children.push(leaf);
        }
    }

    while !frames.is_empty() {
        close_innermost(&mut frames, &mut open);
    }
    let mut root = open.pop().unwrap_or_else(|| Node::new(NodeData::Document));
    mark_tight_lists(&mut root);
    root
}

/// A list is loose when any of its items holds more than one block. The
/// paragraphs directly inside the items of every other list are tight.
fn mark_tight_lists(node: &mut Node) {
    if node.kind() == NodeKind::List {
        let loose = node.children.iter().any(|item| item.children.len() > 1);
        if !loose {
            for block in node.children.iter_mut().flat_map(|item| &mut item.children) {
                block.tight = block.kind() == NodeKind::Paragraph;
            }
        }
    }
    for child in &mut node.children {
        mark_tight_lists(child);
    }
}
