use crate::{
    parsing::inline::InlineNode,
    render::{FuncRegisterer, HtmlWriter, Node, NodeData, NodeKind, NodeRenderer},
};

/// Renders wikilink nodes as `<a href="DESTINATION">TITLE</a>`.
pub struct WikilinkHtmlRenderer;

impl WikilinkHtmlRenderer {
    /// Ahead of the default HTML renderers.
    pub const PRIORITY: u32 = 500;
}

impl NodeRenderer for WikilinkHtmlRenderer {
    fn register_funcs(&self, reg: &mut FuncRegisterer<'_>) {
        reg.register(NodeKind::WikiLink, render_wikilink);
    }
}

/// Writes nothing on entry; the whole anchor is written on exit.
fn render_wikilink(w: &mut HtmlWriter, source: &str, node: &Node, entering: bool) {
    if entering {
        return;
    }
    let NodeData::Inline(InlineNode::WikiLink(link)) = &node.data else {
        return;
    };
    w.write_raw("<a href=\"");
    w.write_attr(&link.destination);
    w.write_raw("\">");
    w.write_text(link.title(source));
    w.write_raw("</a>");
}
