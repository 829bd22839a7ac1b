mod id;
mod tenths;

pub use id::{CourseId, StudentId, TeacherId};
pub use tenths::Tenths;
