//! Earliest-slot search over a merged busy timeline.
//!
//! Walks the merged timeline once, left to right, testing the gap before
//! each busy interval against the work-hours policy and the search window.
//! Linear in the number of merged intervals: sorted order lets the scan
//! stop as soon as a busy interval starts at or after the window end.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::interval::Interval;
use crate::workhours::{WorkCalendar, WorkHoursPolicy};

/// Hard outer bounds of a search, `[from, to)`. A window with
/// `from >= to` is degenerate and yields [`SlotResult::NotFound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

/// Outcome of a slot search. Absence of a slot is an expected outcome, not
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotResult {
    /// A meeting of the policy's minimum duration can start at `start`
    /// without conflicting with anyone's busy time, ending inside both the
    /// business day and the search window.
    Found { start: DateTime<Utc> },
    NotFound,
}

impl SlotResult {
    pub fn is_found(&self) -> bool {
        matches!(self, SlotResult::Found { .. })
    }
}

/// Find the earliest instant at which a meeting of the policy's minimum
/// duration fits -- avoiding every busy interval, inside business hours,
/// inside the window.
///
/// `busy` must be a merged timeline as produced by
/// [`merge_busy`](crate::merge::merge_busy): sorted ascending and
/// non-overlapping. Intervals entirely before the window are skipped;
/// the scan stops at the first interval starting at or after the window
/// end. After the last relevant busy interval the search continues day by
/// day until the window is exhausted, so a day whose remaining hours are
/// too short rolls over to the next morning.
pub fn find_earliest_slot(
    busy: &[Interval],
    window: &SearchWindow,
    policy: &WorkHoursPolicy,
) -> SlotResult {
    if window.from >= window.to {
        return SlotResult::NotFound;
    }

    let clock = WorkCalendar::new(*policy);
    let min_slot = policy.min_slot;
    let mut cursor = clock.clamp_forward(window.from);

    for b in busy {
        // Entirely before the window: irrelevant.
        if b.end <= window.from {
            continue;
        }
        // Starts at or after the window end: sorted order guarantees no
        // later interval matters either.
        if b.start >= window.to {
            break;
        }

        // Gap before this busy interval: the candidate must end before the
        // busy block starts, within today's business hours, and within the
        // window.
        let candidate_end = cursor + min_slot;
        if candidate_end <= b.start
            && candidate_end <= clock.end_of_workday(cursor)
            && candidate_end <= window.to
        {
            return SlotResult::Found { start: cursor };
        }

        // Advance past this busy interval, rolling to the next business
        // morning when it pushed us outside working hours.
        if b.end > cursor {
            cursor = b.end;
        }
        cursor = clock.clamp_forward(cursor);

        if cursor >= window.to {
            return SlotResult::NotFound;
        }
    }

    // Tail: nothing left to avoid. Try each remaining business day until
    // the window closes.
    cursor = clock.clamp_forward(cursor);
    while cursor < window.to {
        let candidate_end = cursor + min_slot;
        if candidate_end <= clock.end_of_workday(cursor) && candidate_end <= window.to {
            return SlotResult::Found { start: cursor };
        }
        cursor = clock.clamp_forward(clock.end_of_workday(cursor));
    }

    SlotResult::NotFound
}
