use core::fmt;
use std::error::Error;

use try_rail::{Captured, CauseKind};

#[derive(Debug)]
struct ReplicationLost;

impl fmt::Display for ReplicationLost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("replication lost")
    }
}

impl Error for ReplicationLost {}

#[derive(Debug)]
struct SnapshotFailed {
    source: ReplicationLost,
}

impl fmt::Display for SnapshotFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("snapshot failed")
    }
}

impl Error for SnapshotFailed {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

#[test]
fn test_new_is_a_bare_message() {
    let err = Captured::new("boom");

    assert_eq!(err.kind(), CauseKind::Message);
    assert_eq!(err.message(), "boom");
    assert!(err.causes().is_empty());
}

#[test]
fn test_from_error_walks_the_source_chain() {
    let err = Captured::from_error(&SnapshotFailed { source: ReplicationLost });

    assert_eq!(err.kind(), CauseKind::Error);
    assert_eq!(err.message(), "snapshot failed");
    assert_eq!(err.causes().len(), 1);
    assert_eq!(err.causes()[0].kind(), CauseKind::Error);
    assert_eq!(err.causes()[0].message(), "replication lost");
}

#[test]
fn test_predicate_has_a_fixed_message() {
    let err = Captured::predicate();

    assert_eq!(err.kind(), CauseKind::Predicate);
    assert_eq!(err.message(), "the given predicate does not hold");
}

#[test]
fn test_causes_accumulate_nearest_first() {
    let err = Captured::new("top")
        .with_cause(Captured::new("first"))
        .with_cause(Captured::new("second"));

    assert_eq!(err.causes()[0].message(), "first");
    assert_eq!(err.causes()[1].message(), "second");
    assert_eq!(err.chain(), "top -> first -> second");
}

#[test]
fn test_with_cause_preserves_the_cause_kind() {
    let err = Captured::new("validation failed").with_cause(Captured::predicate());

    assert_eq!(err.kind(), CauseKind::Message);
    assert_eq!(err.causes()[0].kind(), CauseKind::Predicate);
}

#[test]
fn test_display_is_plain_by_default() {
    let err = Captured::new("load failed").with_cause(Captured::new("timeout"));

    assert_eq!(format!("{err}"), "load failed");
}

#[test]
fn test_alternate_display_lists_causes() {
    let err = Captured::new("load failed")
        .with_cause(Captured::new("timeout"))
        .with_cause(Captured::new("dns lookup failed"));

    assert_eq!(
        format!("{err:#}"),
        "load failed\n  caused by: timeout\n  caused by: dns lookup failed"
    );
}

#[test]
fn test_source_exposes_the_most_direct_cause() {
    let err = Captured::new("outer").with_cause(Captured::new("mid").with_cause(Captured::new("root")));

    let source = err.source().expect("outer has causes");
    assert_eq!(source.to_string(), "mid");
}

#[test]
fn test_source_is_none_without_causes() {
    assert!(Captured::new("standalone").source().is_none());
}

#[test]
fn test_message_conversions() {
    let from_str: Captured = "boom".into();
    let from_string: Captured = String::from("boom").into();

    assert_eq!(from_str, from_string);
    assert_eq!(from_str.kind(), CauseKind::Message);
}

#[test]
#[cfg(feature = "std")]
fn test_from_panic_reports_opaque_payloads() {
    let payload = std::panic::catch_unwind(|| std::panic::panic_any(7u32)).unwrap_err();
    let err = Captured::from_panic(payload.as_ref());

    assert_eq!(err.kind(), CauseKind::Panic);
    assert_eq!(err.message(), "opaque panic payload");
}

#[test]
#[cfg(feature = "serde")]
fn test_captured_serde_round_trip() {
    let err = Captured::new("outer").with_cause(Captured::predicate());

    let json = serde_json::to_string(&err).unwrap();
    let back: Captured = serde_json::from_str(&json).unwrap();

    assert_eq!(back, err);
}

#[test]
#[cfg(feature = "serde")]
fn test_try_serde_round_trip() {
    use try_rail::Try;

    let success = Try::success(5i32);
    let json = serde_json::to_string(&success).unwrap();
    assert_eq!(serde_json::from_str::<Try<i32>>(&json).unwrap(), success);

    let failure = Try::<i32>::failure("boom");
    let json = serde_json::to_string(&failure).unwrap();
    assert_eq!(serde_json::from_str::<Try<i32>>(&json).unwrap(), failure);
}
