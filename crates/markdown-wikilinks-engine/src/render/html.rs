use crate::parsing::{
    blocks::{BlockKind, ContainerFrame},
    inline::InlineNode,
};

use super::{
    registry::{FuncRegisterer, NodeRenderer},
    tree::{Node, NodeData, NodeKind},
    writer::HtmlWriter,
};

/// Default HTML for every node kind the host parser produces.
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub const PRIORITY: u32 = 1000;
}

impl NodeRenderer for HtmlRenderer {
    fn register_funcs(&self, reg: &mut FuncRegisterer<'_>) {
        reg.register(NodeKind::BlockQuote, render_block_quote);
        reg.register(NodeKind::List, render_list);
        reg.register(NodeKind::ListItem, render_list_item);
        reg.register(NodeKind::Paragraph, render_paragraph);
        reg.register(NodeKind::Heading, render_heading);
        reg.register(NodeKind::FencedCode, render_fenced_code);
        reg.register(NodeKind::Text, render_text);
        reg.register(NodeKind::SoftBreak, render_soft_break);
        reg.register(NodeKind::CodeSpan, render_code_span);
        reg.register(NodeKind::Link, render_link);
    }
}

fn render_block_quote(w: &mut HtmlWriter, _: &str, _: &Node, entering: bool) {
    w.write_raw(if entering {
        "<blockquote>\n"
    } else {
        "</blockquote>\n"
    });
}

fn render_list(w: &mut HtmlWriter, _: &str, node: &Node, entering: bool) {
    let ordered = matches!(
        node.data,
        NodeData::Container(ContainerFrame::List { ordered: true, .. })
    );
    w.write_raw(match (ordered, entering) {
        (true, true) => "<ol>\n",
        (true, false) => "</ol>\n",
        (false, true) => "<ul>\n",
        (false, false) => "</ul>\n",
    });
}

fn render_list_item(w: &mut HtmlWriter, _: &str, node: &Node, entering: bool) {
    if !entering {
        w.write_raw("</li>\n");
        return;
    }
    w.write_raw("<li>");
    // Block-level content starts on its own line.
    if node.children.first().is_some_and(|child| !child.tight) {
        w.write_raw("\n");
    }
}

fn render_paragraph(w: &mut HtmlWriter, _: &str, node: &Node, entering: bool) {
    if node.tight {
        return;
    }
    w.write_raw(if entering { "<p>" } else { "</p>\n" });
}

fn render_heading(w: &mut HtmlWriter, _: &str, node: &Node, entering: bool) {
    let NodeData::Block(block) = &node.data else {
        return;
    };
    let BlockKind::Heading { level } = block.kind else {
        return;
    };
    if entering {
        w.write_raw(&format!("<h{level}>"));
    } else {
        w.write_raw(&format!("</h{level}>\n"));
    }
}

fn render_fenced_code(w: &mut HtmlWriter, source: &str, node: &Node, entering: bool) {
    let NodeData::Block(block) = &node.data else {
        return;
    };
    if !entering {
        w.write_raw("</code></pre>\n");
        return;
    }

    w.write_raw("<pre><code");
    let language = match block.kind {
        BlockKind::FencedCode { info: Some(info), .. } => info.slice(source).split_whitespace().next(),
        _ => None,
    };
    if let Some(language) = language {
        w.write_raw(" class=\"language-");
        w.write_attr(language);
        w.write_raw("\"");
    }
    w.write_raw(">");
    for line in &block.lines {
        w.write_text(line.content.slice(source));
        w.write_raw("\n");
    }
}

fn render_text(w: &mut HtmlWriter, source: &str, node: &Node, entering: bool) {
    if let (true, NodeData::Inline(InlineNode::Text(span))) = (entering, &node.data) {
        w.write_text(span.slice(source));
    }
}

fn render_soft_break(w: &mut HtmlWriter, _: &str, _: &Node, entering: bool) {
    if entering {
        w.write_raw("\n");
    }
}

fn render_code_span(w: &mut HtmlWriter, source: &str, node: &Node, entering: bool) {
    if let (true, NodeData::Inline(InlineNode::CodeSpan { inner, .. })) = (entering, &node.data) {
        w.write_raw("<code>");
        w.write_text(inner.slice(source));
        w.write_raw("</code>");
    }
}

fn render_link(w: &mut HtmlWriter, source: &str, node: &Node, entering: bool) {
    if let (
        true,
        NodeData::Inline(InlineNode::Link {
            text, destination, ..
        }),
    ) = (entering, &node.data)
    {
        w.write_raw("<a href=\"");
        w.write_attr(destination.slice(source));
        w.write_raw("\">");
        w.write_text(text.slice(source));
        w.write_raw("</a>");
    }
}
