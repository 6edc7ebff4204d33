//! Core types for summit schedules.
//!
//! This crate turns a flat list of summit events into a day → hour → events
//! structure and answers "what is live right now" questions against a clock
//! value supplied by the caller:
//! - `Summit` and `Event` describe the input data
//! - `grouping` builds the grouped schedule
//! - `live` and `location` derive per-event display state

pub mod clock;
pub mod day_bucket;
pub mod error;
pub mod event;
pub mod grouping;
pub mod live;
pub mod location;
pub mod settings;
pub mod summit;

#[cfg(test)]
mod test_utils;

pub use day_bucket::{DayBucket, build_day_buckets};
pub use error::{ScheduleError, ScheduleResult};
pub use event::{Event, EventLocation, EventType, NamedRef, Speaker, Tag, Track};
pub use grouping::{GroupingOptions, HourGroup, HourOrder, group_events_by_day_and_hour};
pub use live::{current_hour_in, derive_current_hour, is_live, minutes_to_start};
pub use location::location_label;
pub use summit::{Summit, SummitLocation};
