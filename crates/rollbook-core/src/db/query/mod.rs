//! Read-only aggregates over roster snapshots.
//!
//! Queries never mutate state and never fail: an id with no roster reads
//! as an empty roster and aggregates to zero.

use crate::{
    db::{
        executor,
        roster::IndexedRoster,
        store::{RegistryState, RosterKey, Student},
    },
    types::{CourseId, TeacherId, Tenths},
};

/// Truncating average grade over one roster.
fn average_grade(roster: Option<&IndexedRoster<Student>>) -> Tenths {
    let Some(roster) = roster else {
        return Tenths::ZERO;
    };

    let sum: u64 = roster.iter().map(|s| u64::from(s.grade)).sum();

    Tenths::from_ratio(sum, roster.len())
}

/// Average grade across a course's roster; 0.0 when empty or unregistered.
#[must_use]
pub fn course_average_grade(state: &RegistryState, course: CourseId) -> Tenths {
    average_grade(state.rosters.roster(RosterKey::Course(course)))
}

/// Average grade across a teacher's roster; 0.0 when empty or unknown.
#[must_use]
pub fn teacher_average_grade(state: &RegistryState, teacher: TeacherId) -> Tenths {
    average_grade(state.rosters.roster(RosterKey::Teacher(teacher)))
}

/// Number of students on a course's roster.
#[must_use]
pub fn course_student_count(state: &RegistryState, course: CourseId) -> u64 {
    state.rosters.count(RosterKey::Course(course))
}

/// Number of students on a teacher's roster.
#[must_use]
pub fn teacher_student_count(state: &RegistryState, teacher: TeacherId) -> u64 {
    state.rosters.count(RosterKey::Teacher(teacher))
}

/// Block-based salary owed to a teacher at the current pay rate.
#[must_use]
pub fn teacher_salary(state: &RegistryState, teacher: TeacherId) -> u64 {
    executor::block_salary(
        teacher_student_count(state, teacher),
        state.pay.salary_per_block,
    )
}
