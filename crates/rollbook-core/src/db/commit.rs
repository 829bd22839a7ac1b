//! Atomic mutation boundary.
//!
//! Contract:
//! - Phase 1 (plan) is fallible and read-only; a rejected operation has
//!   touched nothing.
//! - Phase 2 (apply) is mechanical application of a prevalidated plan.
//!   A failure there is an invariant violation, not a user error.
//! - Pre-images of everything a plan may write are captured before the
//!   first write and restored whenever apply reports a violation, so no
//!   caller ever observes a partially-applied mutation.

use crate::{
    db::{
        roster::IndexedRoster,
        store::{RegistryState, RosterKey, Student},
    },
    error::InternalError,
};
use std::collections::BTreeSet;

///
/// TouchSet
///
/// The rosters and canonical records one apply phase may write.
///

#[derive(Debug, Default)]
pub(crate) struct TouchSet {
    pub rosters: BTreeSet<RosterKey>,
    pub students: BTreeSet<String>,
}

///
/// PreImage
///
/// Cloned state written back on rollback. A roster or record that did not
/// exist yet is recorded as `None`, so rollback also erases anything the
/// failed apply materialized.
///

#[derive(Debug)]
struct PreImage {
    rosters: Vec<(RosterKey, Option<IndexedRoster<Student>>)>,
    students: Vec<(String, Option<Student>)>,
}

impl PreImage {
    fn capture(state: &RegistryState, touched: &TouchSet) -> Self {
        Self {
            rosters: touched
                .rosters
                .iter()
                .map(|key| (*key, state.rosters.roster(*key).cloned()))
                .collect(),
            students: touched
                .students
                .iter()
                .map(|name| (name.clone(), state.students.get(name).cloned()))
                .collect(),
        }
    }

    fn restore(self, state: &mut RegistryState) {
        for (key, image) in self.rosters {
            match image {
                Some(roster) => {
                    state.rosters.insert(key, roster);
                }
                None => {
                    state.rosters.remove(&key);
                }
            }
        }
        for (name, image) in self.students {
            state.students.restore(name, image);
        }
    }
}

/// Run an apply closure under pre-image protection.
///
/// On failure every touched roster and record is restored before the error
/// propagates; on success the captured images are simply dropped.
pub(crate) fn apply_atomic(
    state: &mut RegistryState,
    touched: &TouchSet,
    apply: impl FnOnce(&mut RegistryState) -> Result<(), InternalError>,
) -> Result<(), InternalError> {
    let images = PreImage::capture(state, touched);

    match apply(state) {
        Ok(()) => Ok(()),
        Err(err) => {
            images.restore(state);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorClass, types::{CourseId, StudentId}};

    fn student(id: u64, name: &str, course: u64) -> Student {
        Student {
            id: StudentId::new(id),
            name: name.to_string(),
            grade: 4,
            course: CourseId::new(course),
        }
    }

    fn seeded_state() -> RegistryState {
        let mut state = RegistryState::default();
        let key = RosterKey::Course(CourseId::new(1));
        state.rosters.roster_mut(key).append(student(1, "ada", 1));
        state.students.insert("ada".to_string(), 4, CourseId::new(1));
        state
    }

    #[test]
    fn failed_apply_restores_touched_rosters_and_records() {
        let mut state = seeded_state();
        let key = RosterKey::Course(CourseId::new(1));
        let ghost = RosterKey::Teacher(crate::types::TeacherId::new(9));

        let mut touched = TouchSet::default();
        touched.rosters.insert(key);
        touched.rosters.insert(ghost);
        touched.students.insert("ada".to_string());

        let err = apply_atomic(&mut state, &touched, |state| {
            state
                .rosters
                .remove_from(key, StudentId::new(1))
                .expect("seeded entry should be removable");
            state.rosters.roster_mut(ghost).append(student(1, "ada", 1));
            state
                .students
                .set_course("ada", CourseId::new(2))
                .expect("seeded record should be rewritable");

            Err(InternalError::roster_invariant("forced failure"))
        })
        .expect_err("apply failure should propagate");
        assert_eq!(err.class, ErrorClass::InvariantViolation);

        // The removed entry is back, the materialized roster is gone, and
        // the canonical record reads as before.
        assert_eq!(state.rosters.count(key), 1);
        assert!(state.rosters.roster(ghost).is_none());
        assert_eq!(
            state.students.get("ada").map(|s| s.course),
            Some(CourseId::new(1))
        );
    }

    #[test]
    fn successful_apply_keeps_mutations() {
        let mut state = seeded_state();
        let key = RosterKey::Course(CourseId::new(1));

        let mut touched = TouchSet::default();
        touched.rosters.insert(key);

        apply_atomic(&mut state, &touched, |state| {
            state.rosters.roster_mut(key).append(student(2, "grace", 1));
            Ok(())
        })
        .expect("apply should succeed");

        assert_eq!(state.rosters.count(key), 2);
    }
}
