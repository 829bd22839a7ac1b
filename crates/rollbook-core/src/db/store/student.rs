use crate::{
    db::roster::RosterEntry,
    types::{CourseId, StudentId},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// Student
///
/// Canonical student record. Rosters hold denormalized copies of this
/// record; `course` is the only field that changes after enrollment, and
/// only the relocation path changes it.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub grade: u8,
    pub course: CourseId,
}

impl RosterEntry for Student {
    type Key = StudentId;

    fn key(&self) -> StudentId {
        self.id
    }
}

///
/// StudentStore
///
/// Records keyed by the globally-unique student name. Ids are dense,
/// start at 1, and are never reused.
///

#[derive(Debug, Default)]
pub struct StudentStore {
    students: BTreeMap<String, Student>,
    last_id: StudentId,
}

impl StudentStore {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Student> {
        self.students.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.students.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> u64 {
        self.students.len() as u64
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Allocate the next dense id and store a new record.
    ///
    /// Callers enforce name uniqueness before allocating; a duplicate name
    /// must never reach this point.
    pub fn insert(&mut self, name: String, grade: u8, course: CourseId) -> Student {
        let id = self.last_id.next();
        self.last_id = id;

        let student = Student {
            id,
            name: name.clone(),
            grade,
            course,
        };
        self.students.insert(name, student.clone());

        student
    }

    /// Rewrite the canonical record's course assignment.
    pub fn set_course(&mut self, name: &str, course: CourseId) -> Result<(), super::StoreError> {
        let student = self
            .students
            .get_mut(name)
            .ok_or_else(|| super::StoreError::StudentNotFound(name.to_string()))?;
        student.course = course;

        Ok(())
    }

    /// Write a record image back, or erase it. Rollback plumbing only.
    pub(crate) fn restore(&mut self, name: String, image: Option<Student>) {
        match image {
            Some(student) => {
                self.students.insert(name, student);
            }
            None => {
                self.students.remove(&name);
            }
        }
    }
}
