//! Busy intervals -- half-open time ranges during which a participant is
//! unavailable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A half-open time range `[start, end)`. A well-formed interval satisfies
/// `start < end`; intervals that do not are dropped during merging rather
/// than rejected up front, since calendar providers occasionally report
/// zero-length or inverted ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    /// Whether this interval satisfies `start < end`.
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }

    /// Length of the interval in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}
