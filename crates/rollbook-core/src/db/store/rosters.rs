use crate::{
    db::{
        roster::{IndexedRoster, RosterError},
        store::Student,
    },
    types::{CourseId, StudentId, TeacherId},
};
use derive_more::{Deref, DerefMut, Display};
use std::collections::BTreeMap;

///
/// RosterKey
///
/// Addresses one roster store: the per-course roster or one teacher's
/// roster. Both hold denormalized student copies with identical mechanics.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum RosterKey {
    #[display("course {_0}")]
    Course(CourseId),

    #[display("teacher {_0}")]
    Teacher(TeacherId),
}

///
/// RosterMap
///
/// Lazily-created rosters addressed by `RosterKey`. A missing roster reads
/// as empty; the first append materializes it.
///

#[derive(Debug, Default, Deref, DerefMut)]
pub struct RosterMap(BTreeMap<RosterKey, IndexedRoster<Student>>);

impl RosterMap {
    #[must_use]
    pub fn roster(&self, key: RosterKey) -> Option<&IndexedRoster<Student>> {
        self.0.get(&key)
    }

    /// Borrow a roster mutably, materializing it if absent.
    pub fn roster_mut(&mut self, key: RosterKey) -> &mut IndexedRoster<Student> {
        self.0.entry(key).or_default()
    }

    /// Create an empty roster for `key` if none exists yet.
    pub fn materialize(&mut self, key: RosterKey) {
        self.0.entry(key).or_default();
    }

    /// Current length of a roster; zero when it was never materialized.
    #[must_use]
    pub fn count(&self, key: RosterKey) -> u64 {
        self.0.get(&key).map_or(0, IndexedRoster::len)
    }

    /// Remove one student copy from the roster addressed by `key`.
    pub fn remove_from(&mut self, key: RosterKey, id: StudentId) -> Result<Student, RosterError> {
        let roster = self.0.get_mut(&key).ok_or(RosterError::NotFound {
            key: format!("{id:?} in {key}"),
        })?;

        roster.remove(id)
    }
}
