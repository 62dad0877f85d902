//! Secondary index over an in-memory table.

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet};

/// Maps a key to the ids of every row carrying it.
#[derive(Debug)]
pub(crate) struct SecondaryIndex<K, ID> {
    entries: BTreeMap<K, BTreeSet<ID>>,
}

impl<K, ID> Default for SecondaryIndex<K, ID> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<K: Ord, ID: Ord + Copy> SecondaryIndex<K, ID> {
    pub(crate) fn insert(&mut self, key: K, id: ID) {
        self.entries.entry(key).or_default().insert(id);
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q, id: ID)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if let Some(ids) = self.entries.get_mut(key) {
            ids.remove(&id);
            if ids.is_empty() {
                self.entries.remove(key);
            }
        }
    }

    /// Ids stored under `key`, ascending.
    pub(crate) fn get<Q>(&self, key: &Q) -> Vec<ID>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries
            .get(key)
            .map(|ids| ids.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Ids stored under any key strictly below `bound`, ascending.
    pub(crate) fn below(&self, bound: &K) -> BTreeSet<ID> {
        self.entries
            .range(..bound)
            .flat_map(|(_, ids)| ids.iter().copied())
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn key_count(&self) -> usize {
        self.entries.len()
    }
}
