//! Compendium state management
//!
//! Holds the monster index loaded once at startup. The index only backs
//! the autocomplete dropdown; the search path fetches its own copy, so the
//! two may diverge if the remote data changes mid-session.

use dioxus::prelude::*;

use bestiary_domain::{prefix_filter, MonsterSummary};

/// Session-owned cache of the monster index.
///
/// Provided through Dioxus context and injected into the handlers that
/// need it; there is no module-global index.
#[derive(Clone, Copy)]
pub struct CompendiumState {
    /// Monster summaries in API response order. Empty until the initial
    /// load completes, and left empty if that load fails.
    index: Signal<Vec<MonsterSummary>>,
}

impl CompendiumState {
    /// Create a new CompendiumState with an empty index
    pub fn new() -> Self {
        Self {
            index: Signal::new(Vec::new()),
        }
    }

    /// Replace the index with a freshly loaded collection
    pub fn set_index(&mut self, monsters: Vec<MonsterSummary>) {
        self.index.set(monsters);
    }

    /// Summaries whose name starts with `query`, in index order
    pub fn suggestions(&self, query: &str) -> Vec<MonsterSummary> {
        prefix_filter(&self.index.read(), query)
    }

    /// Number of cached summaries
    pub fn len(&self) -> usize {
        self.index.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.read().is_empty()
    }
}

impl Default for CompendiumState {
    fn default() -> Self {
        Self::new()
    }
}
