use serde::Serialize;

///
/// RegistryMetrics
///
/// Saturating op counters for one registry instance. Counters are
/// observability, not transactional state: a rejected operation may still
/// account for the violation that rejected it.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct RegistryMetrics {
    pub courses_registered: u64,
    pub students_enrolled: u64,
    pub students_moved: u64,
    pub move_skips: u64,
    pub roster_inserts: u64,
    pub roster_removes: u64,
    pub unique_violations: u64,
}

impl RegistryMetrics {
    pub(crate) const fn record_register(&mut self) {
        self.courses_registered = self.courses_registered.saturating_add(1);
    }

    pub(crate) const fn record_enroll(&mut self, roster_inserts: u64) {
        self.students_enrolled = self.students_enrolled.saturating_add(1);
        self.roster_inserts = self.roster_inserts.saturating_add(roster_inserts);
    }

    pub(crate) const fn record_move(&mut self, roster_inserts: u64, roster_removes: u64) {
        self.students_moved = self.students_moved.saturating_add(1);
        self.roster_inserts = self.roster_inserts.saturating_add(roster_inserts);
        self.roster_removes = self.roster_removes.saturating_add(roster_removes);
    }

    pub(crate) const fn record_move_skips(&mut self, skips: u64) {
        self.move_skips = self.move_skips.saturating_add(skips);
    }

    pub(crate) const fn record_unique_violation(&mut self) {
        self.unique_violations = self.unique_violations.saturating_add(1);
    }

    /// Reset every counter to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
