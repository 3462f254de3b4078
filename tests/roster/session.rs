//! Session lifecycle: open, edit, save, close, reopen.

use crate::common::Fixture;
use staff_roster::{Record, Roster, Severity};

#[test]
fn test_close_then_reopen_round_trip() {
    let fx = Fixture::new("1,Alice\n2,Bob\n");
    let (mut roster, _) = fx.open();

    roster.insert("Carol, Jr.");
    roster.rename(1, "Alicia");
    roster.delete(2);
    assert!(roster.close());

    assert_eq!(fx.read(), "1,Alicia\n3,\"Carol, Jr.\"\n");

    let (reopened, _) = fx.open();
    assert_eq!(
        reopened.list(),
        vec![Record::new(1, "Alicia"), Record::new(3, "Carol, Jr.")]
    );
}

#[test]
fn test_save_into_missing_directory_fails() {
    let fx = Fixture::new("1,Alice\n");
    let reporter = std::sync::Arc::new(staff_roster::MemoryReporter::new());
    let mut roster = Roster::builder()
        .path(fx.dir.path().join("nope").join("staff.csv"))
        .open_with(reporter.clone())
        .unwrap();
    reporter.take();

    assert!(!roster.save());
    assert_eq!(reporter.count(Severity::Error), 1);
}

#[test]
fn test_missing_file_then_save_creates_it() {
    let fx = Fixture::missing();
    let (mut roster, _) = fx.open();

    assert!(roster.save());
    assert_eq!(fx.read(), "");
}

#[test]
fn test_tracing_reporter_session() {
    let fx = Fixture::new("1,Alice\n");
    let mut roster = Roster::open(&fx.path).unwrap();
    assert_eq!(roster.insert("Bob"), Some(2));
    assert!(roster.close());
    assert_eq!(fx.read(), "1,Alice\n2,Bob\n");
}
