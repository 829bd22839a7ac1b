pub(crate) mod commit;

pub mod executor;
pub mod query;
pub mod roster;
pub mod store;

use crate::{
    db::{
        executor::{Context, EnrollExecutor, RegisterExecutor, RewardExecutor, TransferExecutor},
        store::{Course, RegistryState, Student},
    },
    error::InternalError,
    obs::{EventSink, NullSink, RegistryMetrics},
    types::{CourseId, StudentId, TeacherId, Tenths},
};
use std::{fmt, rc::Rc};

///
/// Registry
///
/// Owner of all registry state. Mutations require `&mut self` and queries
/// `&self`, so a writer is serialized against every reader by construction
/// and no operation can observe another's partial mutation.
///

pub struct Registry {
    state: RegistryState,
    events: Rc<dyn EventSink>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::with_events(Rc::new(NullSink))
    }

    /// Create a registry announcing state changes to `events`.
    #[must_use]
    pub fn with_events(events: Rc<dyn EventSink>) -> Self {
        Self {
            state: RegistryState::default(),
            events,
        }
    }

    fn ctx(&mut self) -> Context<'_> {
        Context {
            state: &mut self.state,
            events: &*self.events,
        }
    }

    //
    // Mutations
    //

    /// Register a course with its immutable teacher set.
    pub fn register_course(
        &mut self,
        name: &str,
        teachers: &[TeacherId],
    ) -> Result<CourseId, InternalError> {
        let ctx = self.ctx();
        RegisterExecutor::new(ctx).execute(name, teachers)
    }

    /// Enroll a new student into a course.
    pub fn enroll(
        &mut self,
        name: &str,
        grade: u8,
        course: CourseId,
    ) -> Result<StudentId, InternalError> {
        let ctx = self.ctx();
        EnrollExecutor::new(ctx).execute(name, grade, course)
    }

    /// Move each named student into a registered destination course.
    pub fn move_students(&mut self, names: &[&str], to: CourseId) -> Result<(), InternalError> {
        let ctx = self.ctx();
        TransferExecutor::new(ctx).execute(names, to)
    }

    /// Install a new per-block pay rate.
    pub fn change_salary_per_block(&mut self, salary: u64) -> Result<(), InternalError> {
        let ctx = self.ctx();
        RewardExecutor::new(ctx).change_salary_per_block(salary)
    }

    //
    // Queries
    //

    #[must_use]
    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.state.courses.get(id)
    }

    #[must_use]
    pub fn student(&self, name: &str) -> Option<&Student> {
        self.state.students.get(name)
    }

    #[must_use]
    pub fn course_average_grade(&self, course: CourseId) -> Tenths {
        query::course_average_grade(&self.state, course)
    }

    #[must_use]
    pub fn teacher_average_grade(&self, teacher: TeacherId) -> Tenths {
        query::teacher_average_grade(&self.state, teacher)
    }

    #[must_use]
    pub fn course_student_count(&self, course: CourseId) -> u64 {
        query::course_student_count(&self.state, course)
    }

    #[must_use]
    pub fn teacher_student_count(&self, teacher: TeacherId) -> u64 {
        query::teacher_student_count(&self.state, teacher)
    }

    /// Salary owed to a teacher at the current pay rate.
    #[must_use]
    pub fn reward_teacher(&self, teacher: TeacherId) -> u64 {
        query::teacher_salary(&self.state, teacher)
    }

    #[must_use]
    pub const fn salary_per_block(&self) -> u64 {
        self.state.pay.salary_per_block
    }

    //
    // Observability
    //

    #[must_use]
    pub const fn metrics(&self) -> &RegistryMetrics {
        &self.state.metrics
    }

    pub fn reset_metrics(&mut self) {
        self.state.metrics.reset();
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
