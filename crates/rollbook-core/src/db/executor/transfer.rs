use crate::{
    db::{
        commit::{self, TouchSet},
        executor::{Context, ExecutorError},
        store::{RosterKey, StoreError, Student},
    },
    error::InternalError,
    obs::ChangeEvent,
    types::{CourseId, TeacherId},
};
use std::collections::BTreeMap;

///
/// StudentMove
///
/// One prepared relocation: the updated record copy destined for the new
/// rosters, plus the minimal roster deltas derived from the source and
/// destination teacher sets.
///

#[derive(Debug)]
struct StudentMove {
    /// Copy already carrying the destination course id.
    student: Student,
    from: CourseId,
    /// Teachers assigned only to the source course.
    leave: Vec<TeacherId>,
    /// Teachers assigned only to the destination course.
    join: Vec<TeacherId>,
}

///
/// TransferExecutor
///
/// Relocates students between courses. A teacher assigned to both the
/// source and the destination course never observes roster churn for a
/// moved student; only the symmetric difference of the two teacher sets is
/// written.
///

pub struct TransferExecutor<'a> {
    ctx: Context<'a>,
}

impl<'a> TransferExecutor<'a> {
    pub(crate) const fn new(ctx: Context<'a>) -> Self {
        Self { ctx }
    }

    /// Move each named student into `to`.
    ///
    /// Names that resolve to no student, or to a student already assigned
    /// to `to`, are skipped silently: a batch may legitimately contain
    /// no-ops. The destination must be a registered course — stricter than
    /// enrollment, which accepts any course id.
    pub fn execute(self, names: &[&str], to: CourseId) -> Result<(), InternalError> {
        // Phase 1: batch-level validation.
        if names.is_empty() {
            return Err(ExecutorError::EmptyMoveBatch.into());
        }
        let Some(destination) = self.ctx.state.courses.get(to) else {
            return Err(StoreError::CourseNotFound(to).into());
        };
        let to_teachers = destination.teachers.clone();

        // Phase 1b: plan every name against a staged view of course
        // assignments, so a name repeated within one batch observes the
        // earlier staged move and is skipped as already-in-destination.
        let mut staged: BTreeMap<&str, CourseId> = BTreeMap::new();
        let mut plan: Vec<StudentMove> = Vec::new();
        let mut skips = 0u64;

        for name in names {
            let Some(record) = self.ctx.state.students.get(name) else {
                skips += 1;
                continue;
            };
            let from = staged.get(name).copied().unwrap_or(record.course);
            if from == to {
                skips += 1;
                continue;
            }

            let from_teachers = self.ctx.state.courses.teachers(from);
            let mut student = record.clone();
            student.course = to;

            plan.push(StudentMove {
                student,
                from,
                leave: from_teachers.difference(&to_teachers).copied().collect(),
                join: to_teachers.difference(&from_teachers).copied().collect(),
            });
            staged.insert(*name, to);
        }

        self.ctx.state.metrics.record_move_skips(skips);
        if plan.is_empty() {
            return Ok(());
        }

        // Phase 2: mechanical application under pre-image protection. A
        // removal can only fail if a denormalized copy diverged from the
        // canonical record, which no public path can produce; rollback
        // keeps even that failure all-or-nothing.
        let touched = touch_set(&plan, to);
        commit::apply_atomic(self.ctx.state, &touched, |state| {
            for op in &plan {
                state
                    .rosters
                    .remove_from(RosterKey::Course(op.from), op.student.id)
                    .map_err(|err| InternalError::roster_invariant(err.to_string()))?;
                state
                    .rosters
                    .roster_mut(RosterKey::Course(to))
                    .append(op.student.clone());

                for teacher in &op.leave {
                    state
                        .rosters
                        .remove_from(RosterKey::Teacher(*teacher), op.student.id)
                        .map_err(|err| InternalError::roster_invariant(err.to_string()))?;
                }
                for teacher in &op.join {
                    state
                        .rosters
                        .roster_mut(RosterKey::Teacher(*teacher))
                        .append(op.student.clone());
                }

                state
                    .students
                    .set_course(&op.student.name, to)
                    .map_err(|err| InternalError::store_invariant(err.to_string()))?;
            }

            Ok(())
        })?;

        // Post-commit accounting and notifications.
        for op in &plan {
            self.ctx
                .state
                .metrics
                .record_move(1 + op.join.len() as u64, 1 + op.leave.len() as u64);
            self.ctx.events.record(ChangeEvent {
                student: op.student.id,
                name: op.student.name.clone(),
                course: to,
                grade: op.student.grade,
            });
        }

        Ok(())
    }
}

/// Everything the apply phase may write: both course rosters, the rosters
/// of every teacher in either symmetric-difference half, and the canonical
/// records of the moved students.
fn touch_set(plan: &[StudentMove], to: CourseId) -> TouchSet {
    let mut touched = TouchSet::default();
    touched.rosters.insert(RosterKey::Course(to));

    for op in plan {
        touched.rosters.insert(RosterKey::Course(op.from));
        for teacher in op.leave.iter().chain(&op.join) {
            touched.rosters.insert(RosterKey::Teacher(*teacher));
        }
        touched.students.insert(op.student.name.clone());
    }

    touched
}
