use crate::types::{CourseId, TeacherId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

///
/// Course
///
/// Registered course record. The teacher set is fixed at registration; no
/// operation mutates it afterwards.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub teachers: BTreeSet<TeacherId>,
}

///
/// CourseStore
///
/// Courses keyed by their dense id. Ids start at 1 and are never reused.
///

#[derive(Debug, Default)]
pub struct CourseStore {
    courses: BTreeMap<CourseId, Course>,
    last_id: CourseId,
}

impl CourseStore {
    #[must_use]
    pub fn get(&self, id: CourseId) -> Option<&Course> {
        self.courses.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: CourseId) -> bool {
        self.courses.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> u64 {
        self.courses.len() as u64
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Allocate the next dense id and store the course built from it.
    pub fn insert(&mut self, name: String, teachers: BTreeSet<TeacherId>) -> CourseId {
        let id = self.last_id.next();
        self.last_id = id;
        self.courses.insert(id, Course { id, name, teachers });

        id
    }

    /// Teacher set of a course; empty for ids that were never registered.
    ///
    /// An unregistered course legitimately appears here as the source of a
    /// move when a student was enrolled into it directly.
    #[must_use]
    pub fn teachers(&self, id: CourseId) -> BTreeSet<TeacherId> {
        self.courses
            .get(&id)
            .map(|course| course.teachers.clone())
            .unwrap_or_default()
    }
}
