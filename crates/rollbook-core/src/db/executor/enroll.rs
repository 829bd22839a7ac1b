use crate::{
    db::{
        executor::{Context, ExecutorError},
        store::{RosterKey, StoreError},
    },
    error::InternalError,
    obs::ChangeEvent,
    types::{CourseId, StudentId},
};

///
/// EnrollExecutor
///

pub struct EnrollExecutor<'a> {
    ctx: Context<'a>,
}

impl<'a> EnrollExecutor<'a> {
    pub(crate) const fn new(ctx: Context<'a>) -> Self {
        Self { ctx }
    }

    /// Enroll a brand-new student (errors if the name is taken).
    ///
    /// The course id is deliberately not validated: enrolling into an
    /// unregistered course materializes empty-course bookkeeping on first
    /// use, and an unregistered course has no teacher set to fan out to.
    /// Relocation is stricter about its destination; see `TransferExecutor`.
    pub fn execute(
        self,
        name: &str,
        grade: u8,
        course: CourseId,
    ) -> Result<StudentId, InternalError> {
        // Phase 1: validation only.
        if name.is_empty() {
            return Err(ExecutorError::EmptyStudentName.into());
        }
        if self.ctx.state.students.contains(name) {
            self.ctx.state.metrics.record_unique_violation();
            return Err(StoreError::StudentExists(name.to_string()).into());
        }

        let teachers = self.ctx.state.courses.teachers(course);

        // Phase 2: id allocation and appends cannot fail, so the operation
        // is atomic by construction.
        let student = self.ctx.state.students.insert(name.to_string(), grade, course);
        self.ctx
            .state
            .rosters
            .roster_mut(RosterKey::Course(course))
            .append(student.clone());
        for teacher in &teachers {
            self.ctx
                .state
                .rosters
                .roster_mut(RosterKey::Teacher(*teacher))
                .append(student.clone());
        }
        self.ctx
            .state
            .metrics
            .record_enroll(1 + teachers.len() as u64);

        self.ctx.events.record(ChangeEvent {
            student: student.id,
            name: student.name,
            course,
            grade,
        });

        Ok(student.id)
    }
}
