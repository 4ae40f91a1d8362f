//! Merge many participants' busy intervals into one timeline.
//!
//! Sorts intervals by start time and coalesces overlapping or touching
//! ranges into a minimal sorted, non-overlapping sequence -- the times when
//! at least one participant is unavailable.

use crate::interval::Interval;

/// Merge busy intervals into a sorted, non-overlapping timeline.
///
/// Input may come from any number of participants in any order; a
/// participant with no reported busy time simply contributes nothing.
/// Intervals with `start >= end` are dropped. Overlapping or touching
/// intervals (where the next starts at or before the current end) are
/// coalesced into one.
///
/// The operation is idempotent: merging an already-merged timeline returns
/// it unchanged.
pub fn merge_busy<I>(intervals: I) -> Vec<Interval>
where
    I: IntoIterator<Item = Interval>,
{
    let mut intervals: Vec<Interval> = intervals
        .into_iter()
        .filter(|iv| iv.is_well_formed())
        .collect();

    // Sort by start time (then by end time for stability).
    intervals.sort_by_key(|iv| (iv.start, iv.end));

    let mut merged: Vec<Interval> = Vec::new();
    for iv in intervals {
        if let Some(last) = merged.last_mut() {
            if iv.start <= last.end {
                // Overlapping or touching -- extend the current interval.
                last.end = last.end.max(iv.end);
                continue;
            }
        }
        merged.push(iv);
    }

    merged
}
