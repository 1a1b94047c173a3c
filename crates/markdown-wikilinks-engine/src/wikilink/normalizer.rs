//! Strategies that turn wikilink text into a link destination.

use std::collections::HashMap;

use thiserror::Error;

/// Maps the raw text of a wikilink to the destination it links to.
///
/// Implementations must be pure and total: the same input gives the same
/// destination for the whole document pass, and every string (including the
/// empty string) maps to something.
pub trait Normalizer {
    fn normalize(&self, raw_text: &str) -> String;
}

impl<F> Normalizer for F
where
    F: Fn(&str) -> String,
{
    fn normalize(&self, raw_text: &str) -> String {
        self(raw_text)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizerError {
    #[error("alias {alias:?} maps to an empty destination")]
    EmptyDestination { alias: String },
}

/// Percent-encodes the text and appends a suffix.
///
/// Everything outside `A-Z a-z 0-9 - _ . ~` is percent-encoded as UTF-8, so
/// `Foo Bar` becomes `Foo%20Bar.html` and the empty string becomes `.html`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultNormalizer {
    suffix: String,
    percent_encode: bool,
}

impl DefaultNormalizer {
    pub const DEFAULT_SUFFIX: &'static str = ".html";

    pub fn new(suffix: impl Into<String>, percent_encode: bool) -> Self {
        Self {
            suffix: suffix.into(),
            percent_encode,
        }
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl Default for DefaultNormalizer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SUFFIX, true)
    }
}

impl Normalizer for DefaultNormalizer {
    fn normalize(&self, raw_text: &str) -> String {
        let mut destination = if self.percent_encode {
            urlencoding::encode(raw_text).into_owned()
        } else {
            raw_text.to_owned()
        };
        destination.push_str(&self.suffix);
        destination
    }
}

/// Redirects known link texts to fixed destinations, deferring everything
/// else to `fallback`.
#[derive(Debug, Clone)]
pub struct AliasNormalizer<N> {
    aliases: HashMap<String, String>,
    fallback: N,
}

impl<N: Normalizer> AliasNormalizer<N> {
    /// Builds the table, rejecting aliases whose destination is empty.
    pub fn new<I, K, V>(aliases: I, fallback: N) -> Result<Self, NormalizerError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = HashMap::new();
        for (alias, destination) in aliases {
            let (alias, destination) = (alias.into(), destination.into());
            if destination.trim().is_empty() {
                return Err(NormalizerError::EmptyDestination { alias });
            }
            table.insert(alias, destination);
        }
        Ok(Self {
            aliases: table,
            fallback,
        })
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl<N: Normalizer> Normalizer for AliasNormalizer<N> {
    fn normalize(&self, raw_text: &str) -> String {
        match self.aliases.get(raw_text) {
            Some(destination) => destination.clone(),
            None => self.fallback.normalize(raw_text),
        }
    }
}
