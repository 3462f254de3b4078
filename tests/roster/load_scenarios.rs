//! Loading files with good, bad and missing data.

use crate::common::Fixture;
use staff_roster::{BackingOrder, MemoryReporter, Record, RosterFile, Severity};

#[test]
fn test_mixed_bad_rows_are_isolated() {
    let fx = Fixture::new("1,Alice\n,Bob\nabc,Carol\n1,Dup\n2,Dan\n");
    let (roster, reporter) = fx.open();

    assert_eq!(
        roster.list(),
        vec![Record::new(1, "Alice"), Record::new(2, "Dan")]
    );
    assert_eq!(
        reporter.messages(Severity::Warning),
        vec![
            "line 2: one or more fields are empty",
            "line 3: invalid key 'abc', must be an integer",
            "line 4: duplicate key 1 found",
        ]
    );
    assert_eq!(reporter.count(Severity::Info), 1);

    let load = roster.load_result();
    assert!(load.file_read);
    assert_eq!(load.records_loaded, 2);
    assert_eq!(load.rows_skipped(), 3);
    assert!(load.has_issues());
}

#[test]
fn test_missing_file_gives_empty_roster() {
    let fx = Fixture::missing();
    let (roster, reporter) = fx.open();

    assert!(roster.store().is_empty());
    let errors = reporter.messages(Severity::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("the specified file does not exist at"));
}

#[test]
fn test_quoted_fields_and_whitespace() {
    let fx = Fixture::new("1,\"Smith, John\"\n 2 , Jane \n3,\"Say \"\"hi\"\"\"\n");
    let (roster, reporter) = fx.open();

    assert_eq!(
        roster.list(),
        vec![
            Record::new(1, "Smith, John"),
            Record::new(2, "Jane"),
            Record::new(3, "Say \"hi\""),
        ]
    );
    assert_eq!(reporter.count(Severity::Warning), 0);
}

#[test]
fn test_crlf_and_blank_lines() {
    let fx = Fixture::new("1,Alice\r\n\r\n2,Bob\r\n");
    let (roster, _) = fx.open();
    assert_eq!(roster.store().len(), 2);
}

#[test]
fn test_sorted_load_orders_by_id() {
    let fx = Fixture::new("30,C\n10,A\n20,B\n");
    let reporter = MemoryReporter::new();
    let store = RosterFile::new(&reporter).load(&fx.path, BackingOrder::Sorted);

    let ids: Vec<_> = store.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec![10, 20, 30]);
}

#[test]
fn test_undecodable_line_survives_close() {
    let fx = Fixture::new("");
    std::fs::write(&fx.path, b"1,Alice\n2,Bob\n3,Caf\xE9\n4,Dan\n").unwrap();
    let (roster, reporter) = fx.open();

    let ids: Vec<_> = roster.list().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(roster.get(3), Some(Record::new(3, "Caf\u{FFFD}")));
    assert_eq!(reporter.count(Severity::Error), 0);
    assert_eq!(
        reporter.messages(Severity::Warning),
        vec!["line 3: unreadable characters were replaced"]
    );

    assert!(roster.close());
    assert_eq!(fx.read(), "1,Alice\n2,Bob\n3,Caf\u{FFFD}\n4,Dan\n");
}

#[test]
fn test_bad_data_row_and_neighbours_survive_close() {
    let fx = Fixture::new("1,Alice\n2,Bob \"Bobby\" Jones\n3,Carol\n");
    let (roster, reporter) = fx.open();

    let warnings = reporter.messages(Severity::Warning);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].starts_with("line 2: bad data in row"));
    assert_eq!(roster.load_result().bad_data_kept, 1);

    assert!(roster.close());
    assert_eq!(
        fx.read(),
        "1,Alice\n2,\"Bob \"\"Bobby\"\" Jones\"\n3,Carol\n"
    );

    let (reopened, reporter) = fx.open();
    assert_eq!(
        reopened.list(),
        vec![
            Record::new(1, "Alice"),
            Record::new(2, "Bob \"Bobby\" Jones"),
            Record::new(3, "Carol"),
        ]
    );
    assert_eq!(reporter.count(Severity::Warning), 0);
}

#[test]
fn test_unterminated_quote_keeps_earlier_rows() {
    let fx = Fixture::new("1,Alice\n2,Bob\n3,\"Carol\n");
    let (roster, reporter) = fx.open();

    assert_eq!(
        roster.list(),
        vec![Record::new(1, "Alice"), Record::new(2, "Bob")]
    );
    assert_eq!(roster.load_result().bad_rows, 1);
    assert_eq!(reporter.count(Severity::Warning), 1);
}
