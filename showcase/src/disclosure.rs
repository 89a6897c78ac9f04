//! Per-card disclosure state for the "View implementation code" regions.
//!
//! Every card starts collapsed. The state is a plain value keyed by entry id:
//! opening or closing one card never touches another, and nothing is
//! persisted. The composer reads it once to decide which `<details>` elements
//! carry the `open` attribute; after that the browser owns the toggle.

use std::collections::BTreeSet;

/// Open/closed state of every card's code disclosure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisclosureState {
    open: BTreeSet<String>,
}

impl DisclosureState {
    /// All cards collapsed.
    pub fn collapsed() -> Self {
        Self::default()
    }

    /// Start with the given ids open.
    ///
    /// Ids are not checked against the catalog; unknown ids simply never match
    /// a card.
    pub fn with_open<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            open: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the card with this id renders expanded.
    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    /// Flip one card. Returns the new state (`true` = open).
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.open.remove(id) {
            false
        } else {
            self.open.insert(id.to_string());
            true
        }
    }

    /// Expand one card.
    pub fn open(&mut self, id: &str) {
        self.open.insert(id.to_string());
    }

    /// Collapse one card.
    pub fn close(&mut self, id: &str) {
        self.open.remove(id);
    }

    /// Ids currently open, sorted.
    pub fn open_ids(&self) -> impl Iterator<Item = &str> {
        self.open.iter().map(String::as_str)
    }
}
