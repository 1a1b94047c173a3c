//! The document pipeline: block pass, inline pass, tree, HTML.

use xi_rope::Rope;

use crate::{
    parsing::{
        inline::{InlineParsers, default_parsers, parse_inlines},
        parse_document,
    },
    render::{HtmlRenderer, Node, RendererRegistry, build_tree},
    wikilink::{Backlink, BacklinkCollector, Normalizer, Wikilinks},
};

/// Something that registers parsers or renderers on a [`Markdown`].
pub trait Extension<'a> {
    fn extend(self, md: &mut Markdown<'a>);
}

/// A configured parser and renderer.
///
/// Parsers may borrow caller state (a wikilink tracker, say) for `'a`, so a
/// `Markdown` is usually built for one document pass and then dropped.
pub struct Markdown<'a> {
    parsers: InlineParsers<'a>,
    renderers: RendererRegistry,
}

impl Default for Markdown<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Markdown<'a> {
    /// A pipeline with the built-in inline parsers and HTML renderers.
    pub fn new() -> Self {
        let mut renderers = RendererRegistry::new();
        renderers.add(&HtmlRenderer, HtmlRenderer::PRIORITY);
        Self {
            parsers: default_parsers(),
            renderers,
        }
    }

    pub fn with(mut self, extension: impl Extension<'a>) -> Self {
        extension.extend(&mut self);
        self
    }

    pub fn inline_parsers_mut(&mut self) -> &mut InlineParsers<'a> {
        &mut self.parsers
    }

    pub fn renderers_mut(&mut self) -> &mut RendererRegistry {
        &mut self.renderers
    }

    /// Parses `source` into a document tree.
    ///
    /// Every block is segmented before any inline parser runs, so inline
    /// parsers always see the finished block they sit in.
    pub fn parse(&mut self, source: &str) -> Node {
        let rope = Rope::from(source);
        let doc = parse_document(&rope);
        log::debug!("parsed {} blocks", doc.blocks.len());

        let blocks = doc
            .blocks
            .into_iter()
            .map(|block| {
                let inlines = if block.kind.has_inlines() {
                    parse_inlines(&mut self.parsers, source, &block)
                } else {
                    vec![]
                };
                (block, inlines)
            })
            .collect();
        build_tree(blocks)
    }

    pub fn render(&self, source: &str, document: &Node) -> String {
        self.renderers.render(source, document)
    }

    pub fn convert(&mut self, source: &str) -> String {
        let document = self.parse(source);
        self.render(source, &document)
    }
}

/// Renders `source` with wikilinks enabled and returns the HTML together
/// with every wikilink occurrence in document order.
pub fn render_with_backlinks(source: &str, normalizer: &dyn Normalizer) -> (String, Vec<Backlink>) {
    let mut collector = BacklinkCollector::new();
    let html = Markdown::new()
        .with(Wikilinks::new(normalizer, Some(&mut collector)))
        .convert(source);
    log::debug!("collected {} backlinks", collector.len());
    (html, collector.into_backlinks())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render::NodeKind, wikilink::DefaultNormalizer};
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_nests_inlines_under_their_blocks() {
        let normalizer = DefaultNormalizer::default();
        let mut md = Markdown::new().with(Wikilinks::new(&normalizer, None));
        let doc = md.parse("- [[a]]\n- [[b]]\n");
        let kinds: Vec<NodeKind> = doc.descendants().iter().map(|n| n.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::Document,
                NodeKind::List,
                NodeKind::ListItem,
                NodeKind::Paragraph,
                NodeKind::WikiLink,
                NodeKind::ListItem,
                NodeKind::Paragraph,
                NodeKind::WikiLink,
            ]
        );
    }

    #[test]
    fn without_the_extension_wikilinks_stay_text() {
        let html = Markdown::new().convert("see [[Foo]]\n");
        assert_eq!(html, "<p>see [[Foo]]</p>\n");
    }

    #[test]
    fn the_extension_turns_them_into_anchors() {
        let normalizer = DefaultNormalizer::default();
        let html = Markdown::new()
            .with(Wikilinks::new(&normalizer, None))
            .convert("see [[Foo]]\n");
        assert_eq!(html, "<p>see <a href=\"Foo.html\">Foo</a></p>\n");
    }

    #[test]
    fn wikilinks_win_over_plain_links() {
        let normalizer = DefaultNormalizer::default();
        let mut md = Markdown::new().with(Wikilinks::new(&normalizer, None));
        let triggers: Vec<u32> = md
            .inline_parsers_mut()
            .triggers()
            .into_iter()
            .map(|(priority, _)| priority)
            .collect();
        assert_eq!(triggers, vec![100, 102, 200]);
        assert_eq!(
            md.convert("[[a]](b)\n"),
            "<p><a href=\"a.html\">a</a>(b)</p>\n"
        );
    }

    #[test]
    fn tight_list_items_skip_paragraph_tags() {
        let html = Markdown::new().convert("- one\n- two\n");
        assert_eq!(html, "<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n");
    }

    #[test]
    fn paragraphs_in_one_item_stay_separate() {
        let normalizer = DefaultNormalizer::default();
        let html = Markdown::new()
            .with(Wikilinks::new(&normalizer, None))
            .convert("- first [[A]]\n\n  second para\n");
        assert_eq!(
            html,
            "<ul>\n<li>\n<p>first <a href=\"A.html\">A</a></p>\n<p>second para</p>\n</li>\n</ul>\n"
        );
    }

    #[test]
    fn one_loose_item_loosens_the_whole_list() {
        let html = Markdown::new().convert("- a\n\n  b\n- c\n");
        assert_eq!(
            html,
            "<ul>\n<li>\n<p>a</p>\n<p>b</p>\n</li>\n<li>\n<p>c</p>\n</li>\n</ul>\n"
        );
    }

    #[test]
    fn separated_quotes_render_as_two_blockquotes() {
        let html = Markdown::new().convert("> a\n\n> b\n");
        assert_eq!(
            html,
            "<blockquote>\n<p>a</p>\n</blockquote>\n<blockquote>\n<p>b</p>\n</blockquote>\n"
        );
    }

    #[test]
    fn backlinks_come_back_with_the_html() {
        let (html, backlinks) =
            render_with_backlinks("# [[Home]]\n", &DefaultNormalizer::default());
        assert_eq!(html, "<h1><a href=\"Home.html\">Home</a></h1>\n");
        assert_eq!(
            backlinks,
            vec![Backlink {
                raw_text: "Home".into(),
                destination: "Home.html".into(),
                context: "[[Home]]".into(),
            }]
        );
    }
}
