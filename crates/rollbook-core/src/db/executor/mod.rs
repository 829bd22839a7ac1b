mod enroll;
mod register;
mod reward;
mod transfer;


pub use enroll::EnrollExecutor;
pub use register::RegisterExecutor;
pub use reward::{BLOCK_SIZE, RewardExecutor, block_salary};
pub use transfer::TransferExecutor;

use crate::{
    db::store::RegistryState,
    error::{ErrorClass, ErrorOrigin, InternalError},
    obs::EventSink,
};
use thiserror::Error as ThisError;

///
/// ExecutorError
///
/// Input validation failures shared by the mutation executors.
///

#[derive(Debug, ThisError)]
pub enum ExecutorError {
    #[error("course name must not be empty")]
    EmptyCourseName,

    #[error("no student names supplied")]
    EmptyMoveBatch,

    #[error("student name must not be empty")]
    EmptyStudentName,

    #[error("a course requires at least one teacher")]
    EmptyTeacherSet,

    #[error("salary per block must be nonzero")]
    ZeroSalary,
}

impl From<ExecutorError> for InternalError {
    fn from(err: ExecutorError) -> Self {
        Self::new(ErrorClass::InvalidInput, ErrorOrigin::Executor, err.to_string())
    }
}

///
/// Context
///
/// Mutable registry state plus the notification sink, scoped to one
/// operation.
///

pub(crate) struct Context<'a> {
    pub state: &'a mut RegistryState,
    pub events: &'a dyn EventSink,
}
