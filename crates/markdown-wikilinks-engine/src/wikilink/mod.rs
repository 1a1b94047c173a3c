//! # Wikilinks
//!
//! `[[Page Name]]` support for the inline pipeline.
//!
//! The [`Wikilinks`] extension plugs a [`WikilinkScanner`] into the inline
//! parsers and a [`WikilinkHtmlRenderer`] into the renderers. The scanner
//! maps each link's text to a destination through a [`Normalizer`] and, when
//! given a [`Tracker`], reports every occurrence as a [`Backlink`] together
//! with the text of the block it appeared in.
//!
//! ```
//! use markdown_wikilinks_engine::{
//!     Markdown,
//!     wikilink::{BacklinkCollector, DefaultNormalizer, Wikilinks},
//! };
//!
//! let normalizer = DefaultNormalizer::default();
//! let mut backlinks = BacklinkCollector::new();
//! let html = Markdown::new()
//!     .with(Wikilinks::new(&normalizer, Some(&mut backlinks)))
//!     .convert("See [[Foo Bar]].");
//! assert_eq!(html, "<p>See <a href=\"Foo%20Bar.html\">Foo Bar</a>.</p>\n");
//! assert_eq!(backlinks.backlinks()[0].context, "See [[Foo Bar]].");
//! ```

pub mod normalizer;
pub mod render;
pub mod scanner;
pub mod tracker;

pub use normalizer::{AliasNormalizer, DefaultNormalizer, Normalizer, NormalizerError};
pub use render::WikilinkHtmlRenderer;
pub use scanner::{Occurrence, WikilinkScanner, find_occurrence};
pub use tracker::{Backlink, BacklinkCollector, SharedBacklinks, Tracker};

use crate::markdown::{Extension, Markdown};

/// Adds wikilink parsing and rendering to a [`Markdown`] pipeline.
pub struct Wikilinks<'a> {
    scanner: WikilinkScanner<'a>,
}

impl<'a> Wikilinks<'a> {
    pub fn new(normalizer: &'a dyn Normalizer, tracker: Option<&'a mut dyn Tracker>) -> Self {
        Self {
            scanner: WikilinkScanner::new(normalizer, tracker),
        }
    }
}

impl<'a> Extension<'a> for Wikilinks<'a> {
    fn extend(self, md: &mut Markdown<'a>) {
        md.inline_parsers_mut()
            .add(self.scanner, WikilinkScanner::PRIORITY);
        md.renderers_mut()
            .add(&WikilinkHtmlRenderer, WikilinkHtmlRenderer::PRIORITY);
    }
}
