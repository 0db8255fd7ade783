//! Aggregation and dedup of search result batches.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::issue::Issue;

/// A unique-by-identity collection of issues.
///
/// Built by folding one or more query result batches into a map keyed by
/// issue identity. Later batches overwrite earlier ones on identity
/// collision (last-write-wins); the fold order is always the order the
/// queries were issued, never completion order, so merging is deterministic
/// and reproducible for a given batch sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    issues: BTreeMap<u64, Issue>,
}

impl ResultSet {
    /// Creates an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds batches strictly in call order into a fresh result set.
    pub fn merge<I>(batches: I) -> Self
    where
        I: IntoIterator<Item = Vec<Issue>>,
    {
        let mut set = Self::new();
        for batch in batches {
            set.insert_batch(batch);
        }
        set
    }

    /// Folds one batch into this set, overwriting repeated identities.
    pub fn insert_batch(&mut self, batch: Vec<Issue>) {
        for issue in batch {
            self.issues.insert(issue.id, issue);
        }
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.issues.contains_key(&id)
    }

    pub fn get(&self, id: u64) -> Option<&Issue> {
        self.issues.get(&id)
    }

    /// Iterates issues in the map's deterministic (identity) order.
    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.issues.values()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Issue;
    type IntoIter = std::collections::btree_map::Values<'a, u64, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.values()
    }
}

impl FromIterator<Issue> for ResultSet {
    fn from_iter<T: IntoIterator<Item = Issue>>(iter: T) -> Self {
        let mut set = Self::new();
        set.insert_batch(iter.into_iter().collect());
        set
    }
}
