#[cfg(test)]
mod tests;

use crate::error::{ErrorClass, ErrorOrigin, InternalError};
use std::{collections::HashMap, fmt::Debug, hash::Hash};
use thiserror::Error as ThisError;

///
/// RosterError
///

#[derive(Debug, ThisError)]
pub enum RosterError {
    #[error("no roster slot recorded for key {key}")]
    NotFound { key: String },
}

impl From<RosterError> for InternalError {
    fn from(err: RosterError) -> Self {
        Self::new(ErrorClass::NotFound, ErrorOrigin::Roster, err.to_string())
    }
}

///
/// RosterEntry
///
/// Identity extractor for roster elements. Rosters hold owned copies of
/// their entries; the key is the only part the container interprets.
///

pub trait RosterEntry {
    type Key: Copy + Eq + Hash + Debug;

    fn key(&self) -> Self::Key;
}

///
/// IndexedRoster
///
/// Append/remove-by-key sequence with an auxiliary position map.
/// Removal swaps the victim with the current last element and truncates, so
/// every mutation is O(1) amortized. Element order is an artifact of the
/// swap strategy and carries no meaning; only membership does.
///

#[derive(Clone, Debug, PartialEq)]
pub struct IndexedRoster<T: RosterEntry> {
    entries: Vec<T>,
    positions: HashMap<T::Key, usize>,
}

impl<T: RosterEntry> IndexedRoster<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> u64 {
        self.entries.len() as u64
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, key: T::Key) -> bool {
        self.positions.contains_key(&key)
    }

    #[must_use]
    pub fn get(&self, key: T::Key) -> Option<&T> {
        self.positions.get(&key).map(|slot| &self.entries[*slot])
    }

    /// Append an entry at the end and record its slot.
    ///
    /// Keys are unique per roster; callers never append a key that is
    /// already present.
    pub fn append(&mut self, item: T) {
        let key = item.key();
        debug_assert!(
            !self.positions.contains_key(&key),
            "roster key {key:?} appended twice (debug-only)"
        );

        self.positions.insert(key, self.entries.len());
        self.entries.push(item);
        self.debug_verify_positions();
    }

    /// Remove the entry recorded for `key` and return it.
    ///
    /// Swap-removal: the last entry moves into the vacated slot and its
    /// recorded position is rewritten, then the sequence shrinks by one.
    /// Removing the sole remaining entry leaves no dangling position.
    pub fn remove(&mut self, key: T::Key) -> Result<T, RosterError> {
        let slot = self.positions.remove(&key).ok_or(RosterError::NotFound {
            key: format!("{key:?}"),
        })?;

        let removed = self.entries.swap_remove(slot);
        if let Some(moved) = self.entries.get(slot) {
            self.positions.insert(moved.key(), slot);
        }
        self.debug_verify_positions();

        Ok(removed)
    }

    /// Iterate entries in storage order. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    // Debug-only verification: the position map is authoritative for
    // removal, so divergence from the sequence is checked opportunistically
    // during development and panics on mismatch.
    #[cfg(debug_assertions)]
    fn debug_verify_positions(&self) {
        assert_eq!(
            self.entries.len(),
            self.positions.len(),
            "roster position map out of sync with entries (debug-only)"
        );
        for (slot, entry) in self.entries.iter().enumerate() {
            assert_eq!(
                self.positions.get(&entry.key()),
                Some(&slot),
                "roster slot {slot} not indexed under its key (debug-only)"
            );
        }
    }

    #[cfg(not(debug_assertions))]
    const fn debug_verify_positions(&self) {}
}

impl<T: RosterEntry> Default for IndexedRoster<T> {
    fn default() -> Self {
        Self::new()
    }
}
