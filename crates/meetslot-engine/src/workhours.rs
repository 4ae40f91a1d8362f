//! Work-hours policy and the work-calendar clock.
//!
//! [`WorkHoursPolicy`] is read-only configuration: the daily business-hours
//! window, the timezone it is expressed in, and the minimum meeting length.
//! [`WorkCalendar`] answers the two questions the slot scanner needs --
//! "what is the next valid business instant at or after this one" and
//! "when does this instant's workday end".
//!
//! Every calendar day is treated as a potential workday; weekends and
//! holidays are not modeled.

use chrono::{DateTime, Days, Duration, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::error::{Result, SlotError};

/// Business-hours configuration for a search.
///
/// Invariants are checked at construction: `day_start < day_end`, and the
/// minimum slot duration is positive and fits within the business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkHoursPolicy {
    pub day_start: NaiveTime,
    pub day_end: NaiveTime,
    pub time_zone: Tz,
    pub min_slot: Duration,
}

impl WorkHoursPolicy {
    /// Build a policy, rejecting configurations that could never yield a slot.
    ///
    /// # Errors
    /// Returns [`SlotError::InvalidPolicy`] if `day_start >= day_end`, if
    /// `min_slot` is not positive, or if `min_slot` is longer than the
    /// business day.
    pub fn new(
        day_start: NaiveTime,
        day_end: NaiveTime,
        time_zone: Tz,
        min_slot: Duration,
    ) -> Result<Self> {
        if day_start >= day_end {
            return Err(SlotError::InvalidPolicy(format!(
                "day_start {} must be before day_end {}",
                day_start, day_end
            )));
        }
        if min_slot <= Duration::zero() {
            return Err(SlotError::InvalidPolicy(format!(
                "minimum slot duration must be positive, got {} minutes",
                min_slot.num_minutes()
            )));
        }
        if min_slot > day_end.signed_duration_since(day_start) {
            return Err(SlotError::InvalidPolicy(format!(
                "minimum slot of {} minutes does not fit in the {}-{} business day",
                min_slot.num_minutes(),
                day_start,
                day_end
            )));
        }
        Ok(Self {
            day_start,
            day_end,
            time_zone,
            min_slot,
        })
    }
}

/// Clock over a [`WorkHoursPolicy`]. Stateless; all methods map one UTC
/// instant to another.
#[derive(Debug, Clone, Copy)]
pub struct WorkCalendar {
    policy: WorkHoursPolicy,
}

impl WorkCalendar {
    pub fn new(policy: WorkHoursPolicy) -> Self {
        Self { policy }
    }

    /// The next valid business instant at or after `t`, truncated to the
    /// minute.
    ///
    /// Before `day_start` the instant moves up to `day_start` of the same
    /// local day; at or after `day_end` it rolls to `day_start` of the next
    /// local day; inside business hours only the sub-minute precision is
    /// discarded.
    pub fn clamp_forward(&self, t: DateTime<Utc>) -> DateTime<Utc> {
        let local = t.with_timezone(&self.policy.time_zone);
        let time_of_day = local.time();

        if time_of_day < self.policy.day_start {
            self.day_start_on(local.date_naive())
        } else if time_of_day >= self.policy.day_end {
            self.day_start_on(local.date_naive() + Days::new(1))
        } else {
            truncate_to_minute(t, local.second(), local.nanosecond())
        }
    }

    /// `day_end` on the same local calendar day as `t`.
    pub fn end_of_workday(&self, t: DateTime<Utc>) -> DateTime<Utc> {
        let local = t.with_timezone(&self.policy.time_zone);
        self.day_end_on(local.date_naive())
    }

    /// `day_start` on the given local calendar date, as a UTC instant.
    pub fn day_start_on(&self, date: NaiveDate) -> DateTime<Utc> {
        self.resolve_local(date, self.policy.day_start)
    }

    /// `day_end` on the given local calendar date, as a UTC instant.
    pub fn day_end_on(&self, date: NaiveDate) -> DateTime<Utc> {
        self.resolve_local(date, self.policy.day_end)
    }

    /// Resolve a local wall time to a UTC instant.
    ///
    /// A wall time that falls in a spring-forward gap shifts forward to the
    /// next time that exists on the local clock; an ambiguous wall time in
    /// the fall-back fold resolves to the earlier instant.
    fn resolve_local(&self, date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
        let tz = self.policy.time_zone;
        let mut naive = date.and_time(time);
        // DST gaps are at most a couple of hours in the tz database; probe in
        // 15-minute steps until the wall time exists.
        for _ in 0..12 {
            if let Some(local) = tz.from_local_datetime(&naive).earliest() {
                return local.with_timezone(&Utc);
            }
            naive += Duration::minutes(15);
        }
        // Unreachable with real tzdata; treat the wall time as UTC.
        naive.and_utc()
    }
}

/// Discard the seconds and nanoseconds carried by `t`.
fn truncate_to_minute(t: DateTime<Utc>, seconds: u32, nanos: u32) -> DateTime<Utc> {
    t - Duration::seconds(i64::from(seconds)) - Duration::nanoseconds(i64::from(nanos))
}
