use chrono::Utc;
use errmark::{Fault, LogEntry, MaxDepth, Payload, Severity, extract};
use serde_json::{Value, json};

fn data(name: &str) -> Value {
    json!({ "name": name })
}

fn depth(n: i64) -> MaxDepth {
    MaxDepth::new(n).unwrap()
}

fn assert_entry(entry: &LogEntry, expected: &Value, severity: Severity) {
    assert_eq!(entry.data, Payload::Data(expected.clone()));
    assert_eq!(entry.severity, severity);
}

fn assert_single_correlation(entries: &[LogEntry]) {
    let first = entries[0].correlation_id;
    assert!(entries.iter().all(|e| e.correlation_id == first));
}

#[test]
fn test_marked_fault_yields_its_mark() {
    for severity in [Severity::Info, Severity::Warn, Severity::Error] {
        let fault = Fault::new("boom").mark(severity, data("payload"));
        let marked_at = fault.log_entry_mark().unwrap().timestamp();

        let entries = fault.log_entries();

        assert_eq!(entries.len(), 1);
        assert_entry(&entries[0], &data("payload"), severity);
        assert_eq!(entries[0].timestamp, marked_at);
    }
}

#[test]
fn test_remarked_fault_yields_only_latest_mark() {
    let fault = Fault::new("boom")
        .mark_as_info(data("old"))
        .mark_as_error(data("new"));

    let entries = fault.log_entries();

    assert_eq!(entries.len(), 1);
    assert_entry(&entries[0], &data("new"), Severity::Error);
}

#[test]
fn test_missing_root_yields_empty() {
    assert!(extract(None, MaxDepth::default()).is_empty());
}

#[test]
fn test_unmarked_fault_yields_fallback_with_root() {
    let before = Utc::now();
    let fault = Fault::new("boom");

    let entries = fault.log_entries();

    assert_eq!(entries.len(), 1);
    assert!(entries[0].is_fallback());
    assert_eq!(entries[0].severity, Severity::Error);
    assert_eq!(entries[0].data.as_fault(), Some(&fault));
    assert!(entries[0].timestamp >= before);
}

#[test]
fn test_mark_on_inner_fault_is_found() {
    let fault = Fault::with_inner("parent", Fault::new("inner").mark_as_info(data("inner")));

    let entries = fault.log_entries();

    assert_eq!(entries.len(), 1);
    assert_entry(&entries[0], &data("inner"), Severity::Info);
}

#[test]
fn test_marked_parent_and_inner_share_correlation_id() {
    let inner = Fault::new("inner").mark_as_info(data("inner"));
    let parent = Fault::with_inner("parent", inner).mark_as_info(data("parent"));

    let entries = parent.log_entries();

    assert_eq!(entries.len(), 2);
    assert_entry(&entries[0], &data("parent"), Severity::Info);
    assert_entry(&entries[1], &data("inner"), Severity::Info);
    assert_single_correlation(&entries);
}

#[test]
fn test_aggregate_with_all_causes_marked() {
    let fault = Fault::aggregate(
        "aggregate",
        [
            Fault::new("one").mark_as_info(data("one")),
            Fault::new("two").mark_as_warn(data("two")),
        ],
    );

    let entries = fault.log_entries();

    assert_eq!(entries.len(), 2);
    assert_entry(&entries[0], &data("one"), Severity::Info);
    assert_entry(&entries[1], &data("two"), Severity::Warn);
    assert!(entries.iter().all(|e| !e.is_fallback()));
    assert_single_correlation(&entries);
}

#[test]
fn test_aggregate_with_no_causes_marked_yields_one_fallback() {
    let fault = Fault::aggregate("aggregate", [Fault::new("one"), Fault::new("two")]);

    let entries = fault.log_entries();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].severity, Severity::Error);
    assert_eq!(entries[0].data.as_fault(), Some(&fault));
}

#[test]
fn test_aggregate_with_one_unmarked_cause() {
    let fault = Fault::aggregate(
        "aggregate",
        [Fault::new("unmarked"), Fault::new("marked").mark_as_info(data("marked"))],
    );

    let entries = fault.log_entries();

    assert_eq!(entries.len(), 2);
    let marked: Vec<_> = entries.iter().filter(|e| !e.is_fallback()).collect();
    let fallbacks: Vec<_> = entries.iter().filter(|e| e.is_fallback()).collect();
    assert_eq!(marked.len(), 1);
    assert_entry(marked[0], &data("marked"), Severity::Info);
    assert_eq!(fallbacks.len(), 1);
    assert_eq!(fallbacks[0].data.as_fault(), Some(&fault));
    assert_single_correlation(&entries);
}

#[test]
fn test_aggregate_without_causes_yields_fallback_for_itself() {
    let fault = Fault::aggregate("aggregate", Vec::<Fault>::new());

    let entries = fault.log_entries();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].severity, Severity::Error);
    assert_eq!(entries[0].data.as_fault(), Some(&fault));
}

#[test]
fn test_marked_ancestor_suppresses_fallback_for_unmarked_aggregate() {
    let fault = Fault::with_inner(
        "outer",
        Fault::aggregate("aggregate", [Fault::new("one"), Fault::new("two")]),
    )
    .mark_as_info(data("outer"));

    let entries = fault.log_entries();

    assert_eq!(entries.len(), 1);
    assert_entry(&entries[0], &data("outer"), Severity::Info);
}

#[test]
fn test_mark_beyond_max_depth_is_invisible() {
    let fault = Fault::with_inner("level 1", Fault::new("level 2").mark_as_info(data("deep")));

    let entries = fault.log_entries_within(depth(1));

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].severity, Severity::Error);
    assert_eq!(entries[0].data.as_fault(), Some(&fault));
}

#[test]
fn test_mark_exactly_at_max_depth_is_found() {
    let fault = Fault::with_inner(
        "level 1",
        Fault::with_inner(
            "level 2",
            Fault::with_inner("level 3", Fault::new("level 4").mark_as_info(data("deep"))),
        ),
    );

    let entries = fault.log_entries_within(depth(4));
    assert_eq!(entries.len(), 1);
    assert_entry(&entries[0], &data("deep"), Severity::Info);

    let truncated = fault.log_entries_within(depth(3));
    assert_eq!(truncated.len(), 1);
    assert!(truncated[0].is_fallback());
}

#[test]
fn test_nested_aggregate_collects_every_mark() {
    let fault = Fault::with_inner(
        "level 1",
        Fault::with_inner(
            "level 2",
            Fault::aggregate(
                "level 3",
                [
                    Fault::with_inner("level 4.1", Fault::new("level 5.1"))
                        .mark_as_info(data("4.1")),
                    Fault::with_inner(
                        "level 4.2",
                        Fault::new("level 5.2").mark_as_warn(data("5.2")),
                    ),
                ],
            ),
        )
        .mark_as_error(data("2")),
    );

    let entries = fault.log_entries_within(depth(6));

    assert_eq!(entries.len(), 3);
    assert_entry(&entries[0], &data("2"), Severity::Error);
    assert_entry(&entries[1], &data("4.1"), Severity::Info);
    assert_entry(&entries[2], &data("5.2"), Severity::Warn);
    assert_single_correlation(&entries);
}

#[test]
fn test_marked_outer_unmarked_middle_marked_inner() {
    let c = Fault::new("C").mark_as_info(json!({ "x": 2 }));
    let b = Fault::with_inner("B", c);
    let a = Fault::with_inner("A", b).mark_as_warn(json!({ "x": 1 }));

    let entries = extract(Some(&a), depth(10));

    assert_eq!(entries.len(), 2);
    assert_entry(&entries[0], &json!({ "x": 1 }), Severity::Warn);
    assert_entry(&entries[1], &json!({ "x": 2 }), Severity::Info);
    assert_single_correlation(&entries);
}

#[test]
fn test_extraction_does_not_mutate_and_is_repeatable() {
    let fault = Fault::aggregate(
        "aggregate",
        [Fault::new("a").mark_as_info(data("a")), Fault::new("b")],
    );
    let snapshot = fault.clone();

    let first = fault.log_entries();
    let second = fault.log_entries();

    assert_eq!(fault, snapshot);
    assert_eq!(first.len(), second.len());
    assert_ne!(first[0].correlation_id, second[0].correlation_id);
}

#[test]
fn test_captured_std_error_chain_gets_fallback() {
    let io = std::io::Error::other("connection reset");
    let fault = Fault::capture(&io);

    let entries = fault.log_entries();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].data.as_fault().unwrap().message(), "connection reset");
}

#[test]
fn test_extraction_is_shareable_across_threads() {
    let fault = std::sync::Arc::new(Fault::with_inner(
        "outer",
        Fault::new("inner").mark_as_warn(data("inner")),
    ));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let fault = fault.clone();
            std::thread::spawn(move || fault.log_entries())
        })
        .collect();

    for handle in handles {
        let entries = handle.join().unwrap();
        assert_eq!(entries.len(), 1);
        assert_entry(&entries[0], &data("inner"), Severity::Warn);
    }
}
