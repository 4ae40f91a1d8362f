//! Collaborator seam for busy-interval data.
//!
//! The engine never talks to a calendar provider itself: callers inject a
//! [`BusySource`] that has already authenticated and knows how to fetch
//! free/busy data. Provider failures surface as errors before any scanning
//! happens; they are never folded into a `NotFound` result.

use std::collections::HashMap;

use crate::error::Result;
use crate::interval::Interval;
use crate::merge::merge_busy;
use crate::scanner::{find_earliest_slot, SearchWindow, SlotResult};
use crate::workhours::WorkHoursPolicy;

/// Source of busy intervals, keyed by participant identifier.
///
/// A participant absent from the returned map reported no busy time and is
/// treated as fully free -- absence is not an error.
pub trait BusySource {
    /// Fetch busy intervals for the given participants over the window.
    ///
    /// # Errors
    /// Implementations return [`SlotError::Provider`](crate::SlotError)
    /// for authentication, network, or provider failures.
    fn busy_intervals(
        &self,
        participants: &[String],
        window: &SearchWindow,
    ) -> Result<HashMap<String, Vec<Interval>>>;
}

/// Fetch busy data for all participants and flatten it into one list.
pub fn gather_busy(
    source: &dyn BusySource,
    participants: &[String],
    window: &SearchWindow,
) -> Result<Vec<Interval>> {
    let by_participant = source.busy_intervals(participants, window)?;
    Ok(by_participant.into_values().flatten().collect())
}

/// Find the earliest common slot for a group of participants.
///
/// Fetches everyone's busy intervals, merges them into a single timeline,
/// and scans for the earliest gap satisfying the policy. Each call builds
/// its own timeline; nothing is shared or cached across calls.
pub fn find_common_slot(
    source: &dyn BusySource,
    participants: &[String],
    window: &SearchWindow,
    policy: &WorkHoursPolicy,
) -> Result<SlotResult> {
    let raw = gather_busy(source, participants, window)?;
    let merged = merge_busy(raw);
    Ok(find_earliest_slot(&merged, window, policy))
}
