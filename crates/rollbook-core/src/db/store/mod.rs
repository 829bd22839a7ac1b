mod course;
mod rosters;
mod student;

pub use course::{Course, CourseStore};
pub use rosters::{RosterKey, RosterMap};
pub use student::{Student, StudentStore};

use crate::{
    error::{ErrorClass, ErrorOrigin, InternalError},
    obs::RegistryMetrics,
    types::CourseId,
};
use thiserror::Error as ThisError;

/// Pay rate installed before any `change_salary_per_block` call.
pub const DEFAULT_SALARY_PER_BLOCK: u64 = 100;

///
/// StoreError
///

#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("course {0} is not registered")]
    CourseNotFound(CourseId),

    #[error("a student named '{0}' is already enrolled")]
    StudentExists(String),

    #[error("no student named '{0}' is enrolled")]
    StudentNotFound(String),
}

impl StoreError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::CourseNotFound(_) | Self::StudentNotFound(_) => ErrorClass::NotFound,
            Self::StudentExists(_) => ErrorClass::Conflict,
        }
    }
}

impl From<StoreError> for InternalError {
    fn from(err: StoreError) -> Self {
        Self::new(err.class(), ErrorOrigin::Store, err.to_string())
    }
}

///
/// PayConfig
///
/// Mutable pay configuration. Anyone may change the rate; the original
/// system carries no authorization model and neither does this one.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PayConfig {
    pub salary_per_block: u64,
}

impl Default for PayConfig {
    fn default() -> Self {
        Self {
            salary_per_block: DEFAULT_SALARY_PER_BLOCK,
        }
    }
}

///
/// RegistryState
///
/// All mutable registry state: entity stores, rosters, pay configuration,
/// and op metrics. A logical operation owns the whole value while it runs,
/// so no reader can observe a partially-applied mutation.
///

#[derive(Debug, Default)]
pub struct RegistryState {
    pub courses: CourseStore,
    pub students: StudentStore,
    pub rosters: RosterMap,
    pub pay: PayConfig,
    pub metrics: RegistryMetrics,
}
