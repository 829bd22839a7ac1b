use super::{IndexedRoster, RosterEntry, RosterError};
use proptest::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq)]
struct Entry {
    id: u8,
    payload: u16,
}

impl RosterEntry for Entry {
    type Key = u8;

    fn key(&self) -> u8 {
        self.id
    }
}

fn entry(id: u8) -> Entry {
    Entry {
        id,
        payload: u16::from(id) * 3,
    }
}

/// Walk both directions of the roster/position relationship.
fn assert_consistent(roster: &IndexedRoster<Entry>) {
    assert_eq!(roster.entries.len(), roster.positions.len());
    for (slot, e) in roster.entries.iter().enumerate() {
        assert_eq!(
            roster.positions.get(&e.key()),
            Some(&slot),
            "entry at slot {slot} has a stale position record"
        );
    }
}

#[test]
fn append_records_position_at_end() {
    let mut roster = IndexedRoster::new();
    roster.append(entry(1));
    roster.append(entry(2));

    assert_eq!(roster.len(), 2);
    assert!(roster.contains(1));
    assert!(roster.contains(2));
    assert_eq!(roster.get(2).map(|e| e.payload), Some(6));
    assert_consistent(&roster);
}

#[test]
fn remove_middle_swaps_last_into_slot() {
    let mut roster = IndexedRoster::new();
    for id in 1..=4 {
        roster.append(entry(id));
    }

    let removed = roster
        .remove(2)
        .expect("present key should be removable");
    assert_eq!(removed.id, 2);
    assert_eq!(roster.len(), 3);
    assert!(!roster.contains(2));

    // The former last entry took the vacated slot and stays reachable.
    assert!(roster.contains(4));
    assert_consistent(&roster);
}

#[test]
fn remove_last_truncates_without_swap() {
    let mut roster = IndexedRoster::new();
    roster.append(entry(1));
    roster.append(entry(2));

    roster
        .remove(2)
        .expect("last entry should be removable");
    assert_eq!(roster.len(), 1);
    assert!(roster.contains(1));
    assert_consistent(&roster);
}

#[test]
fn remove_sole_entry_leaves_no_dangling_position() {
    let mut roster = IndexedRoster::new();
    roster.append(entry(9));

    roster
        .remove(9)
        .expect("sole entry should be removable");
    assert!(roster.is_empty());
    assert!(roster.positions.is_empty());
}

#[test]
fn remove_missing_key_fails() {
    let mut roster: IndexedRoster<Entry> = IndexedRoster::new();
    assert!(matches!(
        roster.remove(7),
        Err(RosterError::NotFound { .. })
    ));

    roster.append(entry(1));
    roster
        .remove(1)
        .expect("present key should be removable");
    assert!(matches!(
        roster.remove(1),
        Err(RosterError::NotFound { .. })
    ));
}

#[derive(Clone, Debug)]
enum Op {
    Append(u8),
    Remove(u8),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..32).prop_map(Op::Append),
        (0u8..32).prop_map(Op::Remove),
    ]
}

proptest! {
    /// Membership matches a model set and every position record is live and
    /// accurate after any sequence of appends and removals.
    #[test]
    fn positions_stay_consistent(ops in prop::collection::vec(arb_op(), 0..200)) {
        let mut roster = IndexedRoster::new();
        let mut model: HashSet<u8> = HashSet::new();

        for op in ops {
            match op {
                Op::Append(id) => {
                    // Keys are unique per roster; duplicate appends are not
                    // a legal input, so skip them in the model too.
                    if model.insert(id) {
                        roster.append(entry(id));
                    }
                }
                Op::Remove(id) => {
                    let removed = roster.remove(id);
                    if model.remove(&id) {
                        prop_assert_eq!(removed.expect("modeled key must be present").id, id);
                    } else {
                        prop_assert!(removed.is_err());
                    }
                }
            }

            assert_consistent(&roster);
            prop_assert_eq!(roster.len() as usize, model.len());
            for id in &model {
                prop_assert!(roster.contains(*id));
            }
        }
    }
}
