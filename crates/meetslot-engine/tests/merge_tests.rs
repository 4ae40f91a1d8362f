//! Tests for busy-interval merging.

use chrono::{DateTime, Utc};
use meetslot_engine::{merge_busy, Interval};

/// Helper to build an interval from RFC 3339 strings.
fn iv(start: &str, end: &str) -> Interval {
    Interval {
        start: start.parse::<DateTime<Utc>>().unwrap(),
        end: end.parse::<DateTime<Utc>>().unwrap(),
    }
}

// ── Coalescing ──────────────────────────────────────────────────────────────

#[test]
fn overlapping_intervals_coalesce() {
    // [10:00, 11:00] and [10:30, 12:00] → [10:00, 12:00]
    let merged = merge_busy([
        iv("2026-03-02T10:00:00Z", "2026-03-02T11:00:00Z"),
        iv("2026-03-02T10:30:00Z", "2026-03-02T12:00:00Z"),
    ]);

    assert_eq!(
        merged,
        vec![iv("2026-03-02T10:00:00Z", "2026-03-02T12:00:00Z")]
    );
}

#[test]
fn touching_intervals_coalesce() {
    // One ends exactly when the next starts — still one busy block.
    let merged = merge_busy([
        iv("2026-03-02T09:00:00Z", "2026-03-02T10:00:00Z"),
        iv("2026-03-02T10:00:00Z", "2026-03-02T11:00:00Z"),
    ]);

    assert_eq!(
        merged,
        vec![iv("2026-03-02T09:00:00Z", "2026-03-02T11:00:00Z")]
    );
}

#[test]
fn contained_interval_is_absorbed() {
    let merged = merge_busy([
        iv("2026-03-02T09:00:00Z", "2026-03-02T15:00:00Z"),
        iv("2026-03-02T10:00:00Z", "2026-03-02T11:00:00Z"),
    ]);

    assert_eq!(
        merged,
        vec![iv("2026-03-02T09:00:00Z", "2026-03-02T15:00:00Z")]
    );
}

#[test]
fn disjoint_intervals_stay_separate() {
    let merged = merge_busy([
        iv("2026-03-02T09:00:00Z", "2026-03-02T10:00:00Z"),
        iv("2026-03-02T11:00:00Z", "2026-03-02T12:00:00Z"),
    ]);

    assert_eq!(merged.len(), 2);
    assert!(merged[0].end < merged[1].start);
}

// ── Input hygiene ───────────────────────────────────────────────────────────

#[test]
fn out_of_order_input_is_sorted() {
    let merged = merge_busy([
        iv("2026-03-02T14:00:00Z", "2026-03-02T15:00:00Z"),
        iv("2026-03-02T09:00:00Z", "2026-03-02T10:00:00Z"),
        iv("2026-03-02T11:00:00Z", "2026-03-02T12:00:00Z"),
    ]);

    assert_eq!(merged.len(), 3);
    assert_eq!(merged[0].start, "2026-03-02T09:00:00Z".parse::<DateTime<Utc>>().unwrap());
    assert_eq!(merged[1].start, "2026-03-02T11:00:00Z".parse::<DateTime<Utc>>().unwrap());
    assert_eq!(merged[2].start, "2026-03-02T14:00:00Z".parse::<DateTime<Utc>>().unwrap());
}

#[test]
fn malformed_intervals_are_dropped() {
    // Zero-length and inverted ranges are provider noise, not errors.
    let merged = merge_busy([
        iv("2026-03-02T10:00:00Z", "2026-03-02T10:00:00Z"),
        iv("2026-03-02T12:00:00Z", "2026-03-02T11:00:00Z"),
        iv("2026-03-02T09:00:00Z", "2026-03-02T09:30:00Z"),
    ]);

    assert_eq!(
        merged,
        vec![iv("2026-03-02T09:00:00Z", "2026-03-02T09:30:00Z")]
    );
}

#[test]
fn empty_input_produces_empty_timeline() {
    let merged = merge_busy(Vec::<Interval>::new());
    assert!(merged.is_empty());
}

// ── Idempotence ─────────────────────────────────────────────────────────────

#[test]
fn merging_a_merged_timeline_is_identity() {
    let once = merge_busy([
        iv("2026-03-02T09:00:00Z", "2026-03-02T10:30:00Z"),
        iv("2026-03-02T10:00:00Z", "2026-03-02T11:00:00Z"),
        iv("2026-03-02T14:00:00Z", "2026-03-02T15:00:00Z"),
    ]);
    let twice = merge_busy(once.clone());

    assert_eq!(once, twice);
}

// ── Multiple participants ───────────────────────────────────────────────────

#[test]
fn intervals_from_several_participants_merge_into_one_timeline() {
    let alice = vec![iv("2026-03-02T09:00:00Z", "2026-03-02T10:30:00Z")];
    let bob = vec![iv("2026-03-02T10:00:00Z", "2026-03-02T12:00:00Z")];
    let carol: Vec<Interval> = vec![]; // reported no busy time

    let merged = merge_busy(
        alice
            .into_iter()
            .chain(bob)
            .chain(carol),
    );

    assert_eq!(
        merged,
        vec![iv("2026-03-02T09:00:00Z", "2026-03-02T12:00:00Z")]
    );
}
