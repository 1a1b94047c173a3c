//! Sinks that record wikilink occurrences for building a backlink graph.

use std::sync::{Arc, Mutex};

use serde::Serialize;

/// One wikilink occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Backlink {
    /// The trimmed text between the brackets.
    pub raw_text: String,
    /// What the normalizer turned `raw_text` into.
    pub destination: String,
    /// Full text of the block the link was found in.
    pub context: String,
}

/// Receives one [`Backlink`] per wikilink, in document order.
pub trait Tracker {
    fn record(&mut self, backlink: Backlink);
}

impl<F> Tracker for F
where
    F: FnMut(Backlink),
{
    fn record(&mut self, backlink: Backlink) {
        self(backlink)
    }
}

/// Collects the backlinks of a single document pass.
#[derive(Debug, Default, Clone)]
pub struct BacklinkCollector {
    backlinks: Vec<Backlink>,
}

impl BacklinkCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn backlinks(&self) -> &[Backlink] {
        &self.backlinks
    }

    pub fn into_backlinks(self) -> Vec<Backlink> {
        self.backlinks
    }

    pub fn len(&self) -> usize {
        self.backlinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backlinks.is_empty()
    }
}

impl Tracker for BacklinkCollector {
    fn record(&mut self, backlink: Backlink) {
        self.backlinks.push(backlink);
    }
}

/// A tracker whose clones all append to one collection, for document passes
/// running on several threads.
///
/// Records from one pass stay in document order; records from different
/// passes interleave in whatever order the threads run.
#[derive(Debug, Default, Clone)]
pub struct SharedBacklinks {
    inner: Arc<Mutex<Vec<Backlink>>>,
}

impl SharedBacklinks {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of everything recorded so far.
    pub fn snapshot(&self) -> Vec<Backlink> {
        match self.inner.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Tracker for SharedBacklinks {
    fn record(&mut self, backlink: Backlink) {
        match self.inner.lock() {
            Ok(mut guard) => guard.push(backlink),
            // A panicking recorder cannot leave a half-pushed Vec behind.
            Err(poisoned) => poisoned.into_inner().push(backlink),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(raw: &str) -> Backlink {
        Backlink {
            raw_text: raw.into(),
            destination: format!("{raw}.html"),
            context: format!("about {raw}"),
        }
    }

    #[test]
    fn collector_preserves_order() {
        let mut c = BacklinkCollector::new();
        c.record(link("a"));
        c.record(link("b"));
        c.record(link("a"));
        let raws: Vec<_> = c.backlinks().iter().map(|b| b.raw_text.as_str()).collect();
        assert_eq!(raws, ["a", "b", "a"]);
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn closures_are_trackers() {
        let mut seen = vec![];
        {
            let mut t = |b: Backlink| seen.push(b.destination);
            t.record(link("x"));
        }
        assert_eq!(seen, ["x.html"]);
    }

    #[test]
    fn shared_clones_append_to_one_collection() {
        let shared = SharedBacklinks::new();
        std::thread::scope(|s| {
            for name in ["left", "right"] {
                let mut t = shared.clone();
                s.spawn(move || t.record(link(name)));
            }
        });
        let mut raws: Vec<_> = shared.snapshot().into_iter().map(|b| b.raw_text).collect();
        raws.sort();
        assert_eq!(raws, ["left", "right"]);
    }
}
