//! Search through the session.

use crate::common::Fixture;
use staff_roster::{Query, Record};

#[test]
fn test_id_prefix_search() {
    let fx = Fixture::new("7,A\n70,B\n17,C\n700,D\n");
    let (mut roster, _) = fx.open();

    assert!(roster.search(Some("7")));
    let ids: Vec<_> = roster.results().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![7, 70, 700]);
    assert_eq!(
        roster.query(),
        &Query::IdPrefix {
            prefix: "7".into()
        }
    );
}

#[test]
fn test_name_search_ignores_case() {
    let fx = Fixture::new("1,Alice Smith\n2,Bob\n3,Carol SMITH\n");
    let (mut roster, _) = fx.open();

    roster.search(Some("smith"));
    assert_eq!(
        roster.results(),
        &[Record::new(1, "Alice Smith"), Record::new(3, "Carol SMITH")]
    );
}

#[test]
fn test_empty_search_shows_nothing() {
    let fx = Fixture::new("1,Alice\n");
    let (mut roster, reporter) = fx.open();
    reporter.take();

    assert!(roster.search(Some("")));
    assert!(roster.results().is_empty());
    assert!(roster.search(None));
    assert!(roster.results().is_empty());
    assert!(reporter.is_empty());
}

#[test]
fn test_search_sees_new_records() {
    let fx = Fixture::new("1,Alice\n");
    let (mut roster, _) = fx.open();

    roster.search(Some("ann"));
    assert!(roster.results().is_empty());
    roster.insert("Annie");
    assert_eq!(roster.results(), &[Record::new(2, "Annie")]);
}
