//! Property tests over whole sessions.

use proptest::prelude::*;
use staff_roster::{BackingOrder, MemoryReporter, Roster};
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

fn name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ,\"']{0,12}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_save_then_reopen_preserves_records(
        seed in prop::collection::vec((0i32..1000, name()), 1..20),
        adds in prop::collection::vec(name(), 0..10),
        sorted in any::<bool>(),
    ) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("staff.csv");
        fs::write(&path, "").unwrap();

        let order = if sorted { BackingOrder::Sorted } else { BackingOrder::Insertion };
        let mut roster = Roster::builder()
            .path(&path)
            .ordering(order)
            .open_with(MemoryReporter::new())
            .unwrap();

        // Seed through a file so ids are chosen freely
        let mut text = String::new();
        let mut seen = HashSet::new();
        for (id, n) in &seed {
            if seen.insert(*id) {
                text.push_str(&format!("{},\"{}\"\n", id, n.trim().replace('"', "\"\"")));
            }
        }
        fs::write(&path, &text).unwrap();
        roster.reload();
        for n in &adds {
            roster.insert(n);
        }
        let before = roster.list();
        prop_assert!(roster.save());

        let reopened = Roster::builder()
            .path(&path)
            .ordering(order)
            .open_with(MemoryReporter::new())
            .unwrap();
        prop_assert_eq!(reopened.list(), before);
    }
}
