//! Injected keyword classification.
//!
//! The scanners never hard-code which identifiers are keywords. They consume
//! a [`KeywordFilter`] through a single lookup call and fall back to a
//! generic identifier kind when it returns `None`. Filters are read-only and
//! `Sync`: one filter instance is safely shared by scanner instances running
//! on different threads (background re-lex of many files).

use rustc_hash::FxHashMap;

/// Pure `text -> Option<kind>` classification.
pub trait KeywordFilter<K>: Sync {
    fn check(&self, text: &str) -> Option<K>;
}

/// Hash-table filter built from static entries.
///
/// Used for the smaller, context-dependent keyword sets (preprocessor
/// directive names, pragma and OpenMP keywords) that hosts assemble once and
/// share across scanner instances.
#[derive(Debug, Clone)]
pub struct TableFilter<K> {
    entries: FxHashMap<&'static str, K>,
}

impl<K: Copy> TableFilter<K> {
    pub fn new(entries: &[(&'static str, K)]) -> Self {
        Self {
            entries: entries.iter().copied().collect(),
        }
    }

    /// Add or override a single entry.
    pub fn insert(&mut self, text: &'static str, id: K) {
        self.entries.insert(text, id);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Copy + Sync> KeywordFilter<K> for TableFilter<K> {
    fn check(&self, text: &str) -> Option<K> {
        self.entries.get(text).copied()
    }
}

/// Filter that classifies nothing; every identifier stays generic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoKeywords;

impl<K> KeywordFilter<K> for NoKeywords {
    fn check(&self, _text: &str) -> Option<K> {
        None
    }
}

#[cfg(test)]
mod tests;
