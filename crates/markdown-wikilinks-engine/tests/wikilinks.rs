use markdown_wikilinks_engine::{
    AliasNormalizer, Backlink, BacklinkCollector, DefaultNormalizer, Markdown, Normalizer,
    Wikilinks, render_with_backlinks,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}.md", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("reading {path}: {e}"))
}

fn change_me() -> AliasNormalizer<DefaultNormalizer> {
    AliasNormalizer::new([("change me", "ChangeMe.html")], DefaultNormalizer::default()).unwrap()
}

fn convert(source: &str, normalizer: &dyn Normalizer) -> (String, Vec<Backlink>) {
    let mut collector = BacklinkCollector::new();
    let html = Markdown::new()
        .with(Wikilinks::new(normalizer, Some(&mut collector)))
        .convert(source);
    (html, collector.into_backlinks())
}

#[test]
fn renders_fixture() {
    let (html, _) = convert(&fixture("backlinks"), &change_me());
    insta::assert_snapshot!(html.trim_end(), @r#"
    <h1>Welcome to <a href="Home.html">Home</a></h1>
    <p>Some intro text that mentions <a href="Foo%20Bar.html">Foo Bar</a>
    and carries on over a second line.</p>
    <ul>
    <li>First bullet</li>
    <li>That has a <a href="Wiki%20Link.html">Wiki Link</a> in the second bullet</li>
    <li>Two in one: <a href="Alpha.html">Alpha</a> and <a href="Beta.html">Beta</a></li>
    </ul>
    <blockquote>
    <p>Quoted mention of <a href="Quoted%20Page.html">Quoted Page</a></p>
    </blockquote>
    <pre><code>[[Not Tracked]] inside a fence
    </code></pre>
    <p>Closing paragraph linking <code>[[code]]</code> and <a href="ChangeMe.html">change me</a>.</p>
    "#);
}

#[test]
fn fixture_yields_seven_backlinks_in_document_order() {
    let (_, backlinks) = convert(&fixture("backlinks"), &change_me());
    let found: Vec<(&str, &str)> = backlinks
        .iter()
        .map(|b| (b.raw_text.as_str(), b.destination.as_str()))
        .collect();
    assert_eq!(
        found,
        vec![
            ("Home", "Home.html"),
            ("Foo Bar", "Foo%20Bar.html"),
            ("Wiki Link", "Wiki%20Link.html"),
            ("Alpha", "Alpha.html"),
            ("Beta", "Beta.html"),
            ("Quoted Page", "Quoted%20Page.html"),
            ("change me", "ChangeMe.html"),
        ]
    );
}

#[test]
fn list_item_context_is_the_item_text() {
    let (_, backlinks) = convert(&fixture("backlinks"), &change_me());
    let wiki_link = backlinks
        .iter()
        .find(|b| b.raw_text == "Wiki Link")
        .unwrap();
    assert_eq!(
        wiki_link.context,
        "That has a [[Wiki Link]] in the second bullet"
    );
}

#[test]
fn paragraph_context_joins_its_lines() {
    let (_, backlinks) = convert(&fixture("backlinks"), &change_me());
    assert_eq!(
        backlinks[1].context,
        "Some intro text that mentions [[Foo Bar]]\nand carries on over a second line."
    );
}

#[test]
fn links_on_one_line_share_context() {
    let (_, backlinks) = convert(&fixture("backlinks"), &change_me());
    assert_eq!(backlinks[3].context, "Two in one: [[Alpha]] and [[Beta]]");
    assert_eq!(backlinks[3].context, backlinks[4].context);
}

#[rstest]
#[case("[[Foo Bar]]", "Foo Bar", "Foo%20Bar.html")]
#[case("[[  padded  ]]", "padded", "padded.html")]
#[case("[[ ]]", "", ".html")]
#[case("[[a]b]]", "a]b", "a%5Db.html")]
#[case("[[Café]]", "Café", "Caf%C3%A9.html")]
fn default_destinations(#[case] source: &str, #[case] raw: &str, #[case] destination: &str) {
    let (_, backlinks) = render_with_backlinks(source, &DefaultNormalizer::default());
    assert_eq!(backlinks.len(), 1);
    assert_eq!(backlinks[0].raw_text, raw);
    assert_eq!(backlinks[0].destination, destination);
}

#[test]
fn custom_mapping_applies_to_exact_text_only() {
    let normalizer = change_me();
    assert_eq!(normalizer.normalize("change me"), "ChangeMe.html");
    assert_eq!(normalizer.normalize("Change Me"), "Change%20Me.html");
}

#[test]
fn closure_normalizer() {
    let slug = |raw: &str| format!("/notes/{}", raw.to_lowercase().replace(' ', "-"));
    let (html, _) = convert("[[Big Idea]]", &slug);
    assert_eq!(html, "<p><a href=\"/notes/big-idea\">Big Idea</a></p>\n");
}

#[test]
fn missing_close_is_left_as_text() {
    let (html, backlinks) = convert("[[missing close", &DefaultNormalizer::default());
    assert_eq!(html, "<p>[[missing close</p>\n");
    assert!(backlinks.is_empty());
}

#[test]
fn wikilinks_do_not_span_lines() {
    let (html, backlinks) = convert("[[split\nacross]]", &DefaultNormalizer::default());
    assert_eq!(html, "<p>[[split\nacross]]</p>\n");
    assert!(backlinks.is_empty());
}

#[test]
fn first_closer_wins() {
    let (html, _) = convert("[[one]] two]]", &DefaultNormalizer::default());
    assert_eq!(html, "<p><a href=\"one.html\">one</a> two]]</p>\n");
}

#[test]
fn title_and_destination_are_escaped() {
    let normalizer = |_: &str| "a\"b".to_string();
    let (html, _) = convert("[[<b>]]", &normalizer);
    assert_eq!(html, "<p><a href=\"a&quot;b\">&lt;b&gt;</a></p>\n");
}

#[test]
fn untracked_pass_renders_the_same() {
    let source = fixture("backlinks");
    let normalizer = change_me();
    let (tracked, _) = convert(&source, &normalizer);
    let untracked = Markdown::new()
        .with(Wikilinks::new(&normalizer, None))
        .convert(&source);
    assert_eq!(tracked, untracked);
}
