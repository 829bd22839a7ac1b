//! Change-notification boundary.
//!
//! Registry logic MUST NOT know where state-change announcements go.
//! All notification traffic flows through ChangeEvent and EventSink; the
//! sink is fire-and-forget and its failures cannot affect a mutation.

use crate::types::{CourseId, StudentId};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

///
/// ChangeEvent
///
/// Snapshot of a student's state, announced after every successful
/// enrollment and after every successfully relocated student.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ChangeEvent {
    pub student: StudentId,
    pub name: String,
    pub course: CourseId,
    pub grade: u8,
}

///
/// EventSink
///

pub trait EventSink {
    fn record(&self, event: ChangeEvent);
}

///
/// NullSink
/// Default sink: notifications are discarded.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&self, _: ChangeEvent) {}
}

///
/// MemorySink
/// Buffers events in emission order, for hosts and tests that consume
/// notification traffic after the fact.
///

#[derive(Debug, Default)]
pub struct MemorySink {
    events: RefCell<Vec<ChangeEvent>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Take every buffered event, oldest first.
    pub fn drain(&self) -> Vec<ChangeEvent> {
        self.events.borrow_mut().drain(..).collect()
    }
}

impl EventSink for MemorySink {
    fn record(&self, event: ChangeEvent) {
        self.events.borrow_mut().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_preserves_emission_order() {
        let sink = MemorySink::new();
        for n in 1..=3 {
            sink.record(ChangeEvent {
                student: StudentId::new(n),
                name: format!("s{n}"),
                course: CourseId::new(1),
                grade: 4,
            });
        }

        assert_eq!(sink.len(), 3);
        let drained = sink.drain();
        assert_eq!(drained.len(), 3);
        assert_eq!(drained[0].student, StudentId::new(1));
        assert_eq!(drained[2].student, StudentId::new(3));
        assert!(sink.is_empty());
    }
}
