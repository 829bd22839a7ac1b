//! Core runtime for Rollbook: typed ids, indexed rosters, entity stores,
//! mutation executors, and the change-notification boundary.
#![warn(unreachable_pub)]

pub mod db;
pub mod error;
pub mod obs;
pub mod types;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, executors, or stores are re-exported here.
///

pub mod prelude {
    pub use crate::{
        db::{
            Registry,
            store::{Course, Student},
        },
        obs::{ChangeEvent, EventSink},
        types::{CourseId, StudentId, TeacherId, Tenths},
    };
}
