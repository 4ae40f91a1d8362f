//! # meetslot-engine
//!
//! Common free-time search: given every participant's busy intervals, a
//! work-hours policy, and a bounded search window, find the earliest
//! instant a meeting of minimum duration can start without conflicting
//! with anyone and without leaving business hours or the window.
//!
//! The search is a pure, synchronous computation over in-memory data.
//! Fetching busy intervals from a calendar provider happens behind the
//! [`BusySource`] seam before the engine runs; booking the meeting happens
//! after it.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{Duration, NaiveTime, TimeZone, Utc};
//! use meetslot_engine::{
//!     find_earliest_slot, merge_busy, Interval, SearchWindow, SlotResult, WorkHoursPolicy,
//! };
//!
//! let policy = WorkHoursPolicy::new(
//!     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
//!     NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
//!     chrono_tz::Tz::UTC,
//!     Duration::minutes(30),
//! )
//! .unwrap();
//!
//! let busy = merge_busy([Interval {
//!     start: Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap(),
//!     end: Utc.with_ymd_and_hms(2026, 3, 2, 10, 30, 0).unwrap(),
//! }]);
//! let window = SearchWindow {
//!     from: Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap(),
//!     to: Utc.with_ymd_and_hms(2026, 3, 6, 17, 0, 0).unwrap(),
//! };
//!
//! assert_eq!(
//!     find_earliest_slot(&busy, &window, &policy),
//!     SlotResult::Found {
//!         start: Utc.with_ymd_and_hms(2026, 3, 2, 10, 30, 0).unwrap(),
//!     },
//! );
//! ```
//!
//! ## Modules
//!
//! - [`interval`] — busy interval value type
//! - [`merge`] — many participants' intervals → one merged timeline
//! - [`workhours`] — work-hours policy and the work-calendar clock
//! - [`scanner`] — earliest-slot search over a merged timeline
//! - [`provider`] — injected busy-data collaborator seam
//! - [`window`] — search-window derivation and boundary date parsing
//! - [`render`] — stable textual contract over results
//! - [`error`] — error types

pub mod error;
pub mod interval;
pub mod merge;
pub mod provider;
pub mod render;
pub mod scanner;
pub mod window;
pub mod workhours;

pub use error::SlotError;
pub use interval::Interval;
pub use merge::merge_busy;
pub use provider::{find_common_slot, gather_busy, BusySource};
pub use render::{is_no_slot, render_busy_report, render_slot, NO_SLOT_PREFIX, NO_SLOT_SENTINEL};
pub use scanner::{find_earliest_slot, SearchWindow, SlotResult};
pub use window::{parse_last_day, window_until_last_day};
pub use workhours::{WorkCalendar, WorkHoursPolicy};
