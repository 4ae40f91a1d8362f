//! Textual contract over [`SlotResult`].
//!
//! Downstream collaborators historically consume a string: a found slot is
//! an ISO-8601 timestamp, and "nothing found" is a fixed sentinel sharing a
//! known prefix, so callers can branch on "did we get a real timestamp"
//! without parsing ambiguity.

use chrono_tz::Tz;

use crate::interval::Interval;
use crate::scanner::SlotResult;

/// Prefix shared by every not-found message; see [`is_no_slot`].
pub const NO_SLOT_PREFIX: &str = "No common free time";

/// The fixed sentinel rendered for [`SlotResult::NotFound`].
pub const NO_SLOT_SENTINEL: &str =
    "No common free time found between tomorrow and the last day of work within working hours.";

/// Render a search outcome to the stable textual form.
///
/// A found slot renders as an ISO-8601 (RFC 3339) timestamp in `tz`; a
/// not-found outcome renders as [`NO_SLOT_SENTINEL`].
pub fn render_slot(result: &SlotResult, tz: Tz) -> String {
    match result {
        SlotResult::Found { start } => start.with_timezone(&tz).to_rfc3339(),
        SlotResult::NotFound => NO_SLOT_SENTINEL.to_string(),
    }
}

/// Whether a rendered outcome is the not-found sentinel rather than a
/// timestamp.
pub fn is_no_slot(rendered: &str) -> bool {
    rendered.starts_with(NO_SLOT_PREFIX)
}

/// Human-readable free/busy report for one participant.
pub fn render_busy_report(participant: &str, busy: &[Interval], tz: Tz) -> String {
    if busy.is_empty() {
        return format!("User {} is free for the entire time range.", participant);
    }

    let mut out = format!("User {} busy times:\n", participant);
    for iv in busy {
        out.push_str(&format!(
            "From: {} To: {} ({} min)\n",
            iv.start.with_timezone(&tz).to_rfc3339(),
            iv.end.with_timezone(&tz).to_rfc3339(),
            iv.duration_minutes()
        ));
    }
    out
}
