pub mod markdown;
pub mod parsing;
pub mod render;
pub mod wikilink;

pub use markdown::{Extension, Markdown, render_with_backlinks};
pub use wikilink::{
    AliasNormalizer, Backlink, BacklinkCollector, DefaultNormalizer, Normalizer, NormalizerError,
    SharedBacklinks, Tracker, Wikilinks,
};
