//! Fixture-driven tests for the parsing module.
//!
//! Fixtures (.md) live in `fixtures/`. Each one is checked against the span
//! invariants and its block/inline structure is compared field by field.

use pretty_assertions::assert_eq;
use xi_rope::Rope;

use crate::{
    parsing::{
        blocks::BlockKind,
        inline::{InlineNode, default_parsers, parse_inlines},
        parse_document,
        rope::Span,
        snapshot::{Snap, invariants, normalize},
    },
    wikilink::{DefaultNormalizer, WikilinkScanner},
};

fn load_fixture(name: &str) -> String {
    let path = format!(
        "{}/src/parsing/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    );
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("reading {path}: {e}"))
}

fn snap_fixture(name: &str) -> Snap {
    let md = load_fixture(name);
    let rope = Rope::from(md.as_str());
    let doc = parse_document(&rope);
    invariants(&rope, &doc.blocks);

    let normalizer = DefaultNormalizer::default();
    let mut parsers = default_parsers();
    parsers.add(WikilinkScanner::new(&normalizer, None), WikilinkScanner::PRIORITY);
    normalize(&rope, &doc.blocks, &mut parsers)
}

fn outline(snap: &Snap) -> Vec<(String, Vec<String>)> {
    snap.blocks
        .iter()
        .map(|b| (b.kind.clone(), b.containers.clone()))
        .collect()
}

fn wikilinks(snap: &Snap) -> Vec<(String, String)> {
    snap.blocks
        .iter()
        .flat_map(|b| &b.inline)
        .filter(|i| i.kind == "WikiLink")
        .map(|i| (i.text.clone(), i.destination.clone().unwrap_or_default()))
        .collect()
}

fn owned(items: &[(&str, &[&str])]) -> Vec<(String, Vec<String>)> {
    items
        .iter()
        .map(|(kind, containers)| {
            (
                kind.to_string(),
                containers.iter().map(|c| c.to_string()).collect(),
            )
        })
        .collect()
}

#[test]
fn fixture_nested_quote_fence() {
    let snap = snap_fixture("nested_quote_fence");
    assert_eq!(
        outline(&snap),
        owned(&[
            ("Paragraph", &[]),
            ("Paragraph", &["Quote(1)"]),
            ("Paragraph", &["Quote(1)", "Quote(2)"]),
            ("FencedCode(Backticks)", &["Quote(1)"]),
            ("Paragraph", &[]),
        ])
    );
    assert_eq!(
        wikilinks(&snap),
        vec![
            ("[[Home]]".to_string(), "Home.html".to_string()),
            ("[[Inner Page]]".to_string(), "Inner%20Page.html".to_string()),
        ]
    );
}

#[test]
fn fixture_lists_and_headings() {
    let snap = snap_fixture("lists_and_headings");
    assert_eq!(
        outline(&snap),
        owned(&[
            ("Heading(1)", &[]),
            ("Paragraph", &["List(1)", "Item(0)"]),
            ("Paragraph", &["List(1)", "Item(2)"]),
            ("Paragraph", &["List(4, ordered)", "Item(3)"]),
            ("Paragraph", &["List(4, ordered)", "Item(5)"]),
            ("Heading(2)", &[]),
        ])
    );
    assert_eq!(
        wikilinks(&snap),
        vec![
            ("[[Gardening]]".to_string(), "Gardening.html".to_string()),
            ("[[Wiki Link]]".to_string(), "Wiki%20Link.html".to_string()),
        ]
    );
}

#[test]
fn fixture_raw_zones() {
    let snap = snap_fixture("raw_zones");
    assert_eq!(
        outline(&snap),
        owned(&[("Paragraph", &[]), ("FencedCode(Tildes)", &[])])
    );
    let kinds: Vec<&str> = snap.blocks[0]
        .inline
        .iter()
        .map(|i| i.kind.as_str())
        .collect();
    assert_eq!(kinds, vec!["Text", "CodeSpan", "Text", "WikiLink", "Text"]);
    assert!(snap.blocks[1].inline.is_empty());
}

/// Slicing any block span reproduces exact text.
#[test]
fn lossless_span_invariant() {
    let md = "Hello [[world]]!\n\n> quoted\n";
    let rope = Rope::from(md);

    let doc = parse_document(&rope);
    for block in &doc.blocks {
        assert_eq!(
            rope.slice_to_cow(block.span.start..block.span.end),
            block.span.slice(md)
        );
    }
}

/// Code spans win over every other inline syntax.
#[test]
fn raw_zones_suppress_inline_parsing() {
    let md = "`[[not a link]]`";
    let rope = Rope::from(md);

    let doc = parse_document(&rope);
    assert_eq!(doc.blocks.len(), 1);
    assert!(matches!(doc.blocks[0].kind, BlockKind::Paragraph));

    let normalizer = DefaultNormalizer::default();
    let mut parsers = default_parsers();
    parsers.add(WikilinkScanner::new(&normalizer, None), WikilinkScanner::PRIORITY);
    let inlines = parse_inlines(&mut parsers, md, &doc.blocks[0]);

    assert_eq!(inlines.len(), 1);
    assert!(matches!(inlines[0], InlineNode::CodeSpan { .. }));
}

/// Unclosed constructs become plain text.
#[test]
fn unclosed_constructs_become_text() {
    let md = "[[unclosed and `also unclosed";
    let rope = Rope::from(md);

    let doc = parse_document(&rope);
    let inlines = parse_inlines(&mut default_parsers(), md, &doc.blocks[0]);

    assert_eq!(inlines, vec![InlineNode::Text(Span::new(0, md.len()))]);
}

#[test]
fn empty_document() {
    let rope = Rope::from("");
    let doc = parse_document(&rope);
    assert!(doc.blocks.is_empty());
}

#[test]
fn blank_lines_only() {
    let rope = Rope::from("\n\n\n");
    let doc = parse_document(&rope);
    assert!(doc.blocks.is_empty());
}
