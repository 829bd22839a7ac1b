use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

// Identifiers are dense integers handed out from 1; 0 is reserved as the
// not-found sentinel so hosts can persist "no such entity" without an option
// type on the wire.
macro_rules! entity_id {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[repr(transparent)]
        #[derive(
            Clone,
            Copy,
            Debug,
            Default,
            Deserialize,
            Display,
            Eq,
            From,
            Hash,
            Ord,
            PartialEq,
            PartialOrd,
            Serialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Reserved sentinel: no entity carries this id.
            pub const NONE: Self = Self(0);

            #[must_use]
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }

            /// True when this id is the reserved not-found sentinel.
            #[must_use]
            pub const fn is_none(self) -> bool {
                self.0 == 0
            }

            /// Successor id, used by the dense allocators.
            #[must_use]
            pub(crate) const fn next(self) -> Self {
                Self(self.0 + 1)
            }
        }
    };
}

entity_id!(
    ///
    /// CourseId
    ///
    CourseId
);

entity_id!(
    ///
    /// StudentId
    ///
    StudentId
);

entity_id!(
    ///
    /// TeacherId
    ///
    /// Teachers have no entity of their own; an id is defined implicitly by
    /// its first appearance in a course's teacher set.
    ///
    TeacherId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_zero_and_allocation_starts_at_one() {
        assert!(CourseId::NONE.is_none());
        assert_eq!(CourseId::NONE.get(), 0);

        let first = CourseId::NONE.next();
        assert_eq!(first.get(), 1);
        assert!(!first.is_none());
        assert_eq!(first.next().get(), 2);
    }

    #[test]
    fn ids_serialize_transparently() {
        let id = StudentId::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        assert_eq!(id.to_string(), "7");
    }
}
