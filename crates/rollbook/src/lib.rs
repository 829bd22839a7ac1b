//! ## Crate layout
//! - `core`: runtime registry, rosters, stores, and executors.
//! - `error`: public error taxonomy mapped from runtime errors.
//! - `registry`: the public registry handle.
//!
//! The `prelude` module mirrors the surface a host embedding the registry
//! needs; everything else is reachable through the `core` re-export.

pub use rollbook_core as core;

mod error;
mod registry;

pub use error::{Error, ErrorKind, ErrorOrigin};
pub use registry::Registry;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{Error, ErrorKind, ErrorOrigin, Registry};
    pub use rollbook_core::{
        db::store::{Course, Student},
        obs::{ChangeEvent, EventSink, MemorySink, NullSink},
        types::{CourseId, StudentId, TeacherId, Tenths},
    };
}
