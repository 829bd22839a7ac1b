use crate::{
    db::{
        executor::{Context, ExecutorError},
        store::RosterKey,
    },
    error::InternalError,
    types::{CourseId, TeacherId},
};
use std::collections::BTreeSet;

///
/// RegisterExecutor
///

pub struct RegisterExecutor<'a> {
    ctx: Context<'a>,
}

impl<'a> RegisterExecutor<'a> {
    pub(crate) const fn new(ctx: Context<'a>) -> Self {
        Self { ctx }
    }

    /// Register a course with its immutable teacher set.
    ///
    /// Duplicate teacher ids in the input collapse; membership is what
    /// matters, not multiplicity. Teacher ids are not validated further —
    /// a teacher is defined implicitly by first use.
    pub fn execute(self, name: &str, teachers: &[TeacherId]) -> Result<CourseId, InternalError> {
        // Phase 1: validation only; nothing is touched on failure.
        if name.is_empty() {
            return Err(ExecutorError::EmptyCourseName.into());
        }
        let teachers: BTreeSet<TeacherId> = teachers.iter().copied().collect();
        if teachers.is_empty() {
            return Err(ExecutorError::EmptyTeacherSet.into());
        }

        // Phase 2: id allocation and insertion cannot fail.
        let id = self.ctx.state.courses.insert(name.to_string(), teachers);
        self.ctx.state.rosters.materialize(RosterKey::Course(id));
        self.ctx.state.metrics.record_register();

        Ok(id)
    }
}
