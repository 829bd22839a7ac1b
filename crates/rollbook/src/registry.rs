use crate::error::Error;
use rollbook_core::{
    db,
    db::store::{Course, Student},
    obs::{EventSink, RegistryMetrics},
    types::{CourseId, StudentId, TeacherId, Tenths},
};
use std::rc::Rc;

///
/// Registry
///
/// Public registry handle. Delegates to the core runtime and maps internal
/// errors into the stable public taxonomy at the crate boundary.
///

#[derive(Debug, Default)]
pub struct Registry {
    inner: db::Registry,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry announcing state changes to `events`.
    #[must_use]
    pub fn with_events(events: Rc<dyn EventSink>) -> Self {
        Self {
            inner: db::Registry::with_events(events),
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
    ) -> Result<CourseId, Error> {
        self.inner
            .register_course(name, teachers)
            .map_err(Error::from)
    }

    /// Enroll a new student into a course.
    pub fn enroll(&mut self, name: &str, grade: u8, course: CourseId) -> Result<StudentId, Error> {
        self.inner.enroll(name, grade, course).map_err(Error::from)
    }

    /// Move each named student into a registered destination course.
    ///
    /// Names that resolve to no student, or to a student already in the
    /// destination, are skipped silently.
    pub fn move_students(&mut self, names: &[&str], to: CourseId) -> Result<(), Error> {
        self.inner.move_students(names, to).map_err(Error::from)
    }

    /// Install a new per-block pay rate.
    pub fn change_salary_per_block(&mut self, salary: u64) -> Result<(), Error> {
        self.inner
            .change_salary_per_block(salary)
            .map_err(Error::from)
    }

    //
    // Queries
    //

    #[must_use]
    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.inner.course(id)
    }

    #[must_use]
    pub fn student(&self, name: &str) -> Option<&Student> {
        self.inner.student(name)
    }

    #[must_use]
    pub fn course_average_grade(&self, course: CourseId) -> Tenths {
        self.inner.course_average_grade(course)
    }

    #[must_use]
    pub fn teacher_average_grade(&self, teacher: TeacherId) -> Tenths {
        self.inner.teacher_average_grade(teacher)
    }

    #[must_use]
    pub fn course_student_count(&self, course: CourseId) -> u64 {
        self.inner.course_student_count(course)
    }

    #[must_use]
    pub fn teacher_student_count(&self, teacher: TeacherId) -> u64 {
        self.inner.teacher_student_count(teacher)
    }

    /// Salary owed to a teacher at the current pay rate.
    #[must_use]
    pub fn reward_teacher(&self, teacher: TeacherId) -> u64 {
        self.inner.reward_teacher(teacher)
    }

    #[must_use]
    pub fn salary_per_block(&self) -> u64 {
        self.inner.salary_per_block()
    }

    //
    // Observability
    //

    #[must_use]
    pub fn metrics(&self) -> &RegistryMetrics {
        self.inner.metrics()
    }

    pub fn reset_metrics(&mut self) {
        self.inner.reset_metrics();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, ErrorOrigin};

    #[test]
    fn validation_failures_surface_as_invalid_argument() {
        let mut registry = Registry::new();

        let err = registry
            .register_course("", &[TeacherId::new(1)])
            .expect_err("empty name should be rejected");
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
        assert_eq!(err.origin, ErrorOrigin::Executor);
    }

    #[test]
    fn duplicate_enrollment_surfaces_as_already_exists() {
        let mut registry = Registry::new();
        let course = registry
            .register_course("algebra", &[TeacherId::new(1)])
            .expect("valid course should register");
        registry
            .enroll("ada", 5, course)
            .expect("fresh name should enroll");

        let err = registry
            .enroll("ada", 3, course)
            .expect_err("duplicate name should be rejected");
        assert_eq!(err.kind, ErrorKind::AlreadyExists);
        assert_eq!(err.origin, ErrorOrigin::Store);
    }

    #[test]
    fn unknown_move_destination_surfaces_as_not_found() {
        let mut registry = Registry::new();
        let course = registry
            .register_course("algebra", &[TeacherId::new(1)])
            .expect("valid course should register");
        registry
            .enroll("ada", 5, course)
            .expect("fresh name should enroll");

        let err = registry
            .move_students(&["ada"], CourseId::new(9))
            .expect_err("unregistered destination should be rejected");
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[test]
    fn end_to_end_move_keeps_shared_teacher_untouched() {
        let mut registry = Registry::new();
        let from = registry
            .register_course("algebra", &[TeacherId::new(1), TeacherId::new(2)])
            .expect("valid course should register");
        let to = registry
            .register_course("botany", &[TeacherId::new(2), TeacherId::new(3)])
            .expect("valid course should register");
        registry
            .enroll("ada", 5, from)
            .expect("fresh name should enroll");

        registry
            .move_students(&["ada"], to)
            .expect("move should succeed");

        assert_eq!(registry.teacher_student_count(TeacherId::new(1)), 0);
        assert_eq!(registry.teacher_student_count(TeacherId::new(2)), 1);
        assert_eq!(registry.teacher_student_count(TeacherId::new(3)), 1);
        assert_eq!(registry.student("ada").map(|s| s.course), Some(to));
    }
}
