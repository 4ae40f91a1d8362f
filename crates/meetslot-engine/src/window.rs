//! Search-window derivation and boundary date parsing.
//!
//! The window runs from tomorrow's start of business through the earlier of
//! seven days out and the last permissible day, both at end of business.
//! "Now" is always an explicit argument: the engine itself stays
//! deterministic, and the caller owns the clock.

use chrono::{DateTime, Days, NaiveDate, Utc};

use crate::error::{Result, SlotError};
use crate::scanner::SearchWindow;
use crate::workhours::{WorkCalendar, WorkHoursPolicy};

/// Parse a boundary date, accepting `MM/DD/YYYY` or ISO `YYYY-MM-DD`.
///
/// # Errors
/// Returns [`SlotError::InvalidDate`] for any other syntax.
pub fn parse_last_day(input: &str) -> Result<NaiveDate> {
    let parsed = if input.contains('/') {
        NaiveDate::parse_from_str(input, "%m/%d/%Y")
    } else {
        input.parse::<NaiveDate>()
    };
    parsed.map_err(|_| SlotError::InvalidDate(input.to_string()))
}

/// Build the search window `[tomorrow at day_start,
/// min(tomorrow + 7 days at day_end, last_day at day_end))`.
///
/// Dates are taken in the policy's timezone. The result may be degenerate
/// (`from >= to`) when `last_day` is already behind us; the scanner treats
/// that as "no slot", not an error.
pub fn window_until_last_day(
    now: DateTime<Utc>,
    last_day: NaiveDate,
    policy: &WorkHoursPolicy,
) -> SearchWindow {
    let clock = WorkCalendar::new(*policy);
    let today = now.with_timezone(&policy.time_zone).date_naive();
    let tomorrow = today + Days::new(1);

    let from = clock.day_start_on(tomorrow);
    let seven_day_cap = clock.day_end_on(tomorrow + Days::new(7));
    let last_day_end = clock.day_end_on(last_day);

    SearchWindow {
        from,
        to: seven_day_cap.min(last_day_end),
    }
}
