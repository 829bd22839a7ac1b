use derive_more::Display;
use rollbook_core::error::{ErrorClass, ErrorOrigin as CoreErrorOrigin, InternalError};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Debug, Deserialize, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }
}

impl From<InternalError> for Error {
    fn from(err: InternalError) -> Self {
        let kind = match err.class {
            ErrorClass::Conflict => ErrorKind::AlreadyExists,
            ErrorClass::InvalidInput => ErrorKind::InvalidArgument,
            ErrorClass::InvariantViolation => ErrorKind::Internal,
            ErrorClass::NotFound => ErrorKind::NotFound,
        };

        Self::new(kind, err.origin.into(), err.message)
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers and host interfaces.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    /// A student with the same unique name is already registered.
    AlreadyExists,

    /// The caller cannot remediate this.
    Internal,

    /// Input failed validation (empty name, empty teacher set, zero salary).
    InvalidArgument,

    /// The referenced entity does not exist.
    NotFound,
}

///
/// ErrorOrigin
/// Public origin taxonomy for callers and host interfaces.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Executor,
    Roster,
    Store,
}

impl From<CoreErrorOrigin> for ErrorOrigin {
    fn from(origin: CoreErrorOrigin) -> Self {
        match origin {
            CoreErrorOrigin::Executor => Self::Executor,
            CoreErrorOrigin::Roster => Self::Roster,
            CoreErrorOrigin::Store => Self::Store,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_errors_map_onto_the_public_taxonomy() {
        let err: Error = InternalError::new(
            ErrorClass::Conflict,
            CoreErrorOrigin::Store,
            "a student named 'ada' is already enrolled",
        )
        .into();

        assert_eq!(err.kind, ErrorKind::AlreadyExists);
        assert_eq!(err.origin, ErrorOrigin::Store);
        assert_eq!(err.to_string(), "a student named 'ada' is already enrolled");
    }

    #[test]
    fn errors_serialize_for_host_interfaces() {
        let err = Error::new(ErrorKind::NotFound, ErrorOrigin::Store, "course 9");
        let json = serde_json::to_string(&err).expect("error should serialize");

        assert!(json.contains("NotFound"));
        assert!(json.contains("course 9"));
    }
}
