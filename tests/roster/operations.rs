//! Edits through the session and the standalone components.

use crate::common::Fixture;
use staff_roster::{
    BackingOrder, IdAllocator, MemoryReporter, RecordOps, RecordStore, Severity, NO_ID,
};

#[test]
fn test_insert_allocates_above_first_key() {
    let fx = Fixture::new("5,Eve\n");
    let (mut roster, reporter) = fx.open();
    reporter.take();

    assert_eq!(roster.insert("Frank"), Some(6));
    assert_eq!(roster.insert("Grace"), Some(7));
    assert_eq!(reporter.count(Severity::Info), 2);
}

#[test]
fn test_insertion_and_sorted_anchor_differ() {
    let fx = Fixture::new("40,A\n1,B\n2,C\n");

    let (mut insertion, _) = fx.open();
    assert_eq!(insertion.insert("D"), Some(41));

    let (mut sorted, _) = fx.open_sorted();
    assert_eq!(sorted.insert("D"), Some(3));
}

#[test]
fn test_rename_unknown_id() {
    let fx = Fixture::new("1,Alice\n");
    let (mut roster, reporter) = fx.open();
    reporter.take();

    assert!(!roster.rename(2, "Bob"));
    assert!(!roster.is_dirty());
    assert_eq!(reporter.messages(Severity::Warning), vec!["record 2 was not found"]);
}

#[test]
fn test_delete_twice_leaves_store_unchanged() {
    let fx = Fixture::new("1,Alice\n2,Bob\n");
    let (mut roster, _) = fx.open();

    assert!(roster.delete(1));
    let after = roster.list();
    assert!(roster.delete(1));
    assert_eq!(roster.list(), after);
}

#[test]
fn test_standalone_components_share_a_store() {
    let reporter = MemoryReporter::new();
    let mut store = RecordStore::from_pairs(BackingOrder::Insertion, [(10, "A"), (11, "B")]);

    let next = IdAllocator::new(&reporter).next_id(Some(&store));
    assert_eq!(next, Some(12));

    let ops = RecordOps::new(&reporter);
    assert_eq!(ops.insert(Some(&mut store), "C"), Some(12));
    assert!(ops.rename(Some(&mut store), 12, "Cee"));
    assert!(ops.delete(Some(&mut store), 10));
    assert_eq!(store.get(12), Some("Cee"));

    let none = IdAllocator::new(&reporter).next_id(Some(&RecordStore::default()));
    assert_eq!(none.unwrap_or(NO_ID), NO_ID);
}
