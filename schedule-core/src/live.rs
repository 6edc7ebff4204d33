//! "What is on right now" queries against a caller-supplied clock.
//!
//! Nothing here caches. Callers re-run these on every clock tick and memoize
//! on their side if they need to.

use chrono::{DateTime, Utc};

use crate::day_bucket::DayBucket;
use crate::error::ScheduleResult;
use crate::event::Event;
use crate::grouping::{GroupingOptions, HourGroup, group_events_by_day_and_hour};
use crate::summit::Summit;

/// An event is live strictly between its start and end.
pub fn is_live(event: &Event, now: DateTime<Utc>) -> bool {
    event.start_date < now && now < event.end_date
}

/// Whole minutes until the event starts, rounded up and never below 1.
pub fn minutes_to_start(event: &Event, now: DateTime<Utc>) -> i64 {
    let millis = (event.start_date - now).num_milliseconds();
    (millis + 59_999).div_euclid(60_000).max(1)
}

/// Group the events and find the hour group that is currently running.
pub fn derive_current_hour(
    events: &[Event],
    summit: Option<&Summit>,
    now: DateTime<Utc>,
    options: GroupingOptions,
) -> ScheduleResult<Option<HourGroup>> {
    let days = group_events_by_day_and_hour(events, summit, options)?;
    Ok(current_hour_in(&days, now).cloned())
}

/// Find the running hour group in an already grouped schedule.
///
/// The current hour is the one right before the first hour that has not started
/// yet. When every hour has started, or none has, the last hour still counts if
/// one of its events is live.
pub fn current_hour_in(days: &[DayBucket], now: DateTime<Utc>) -> Option<&HourGroup> {
    let hours: Vec<&HourGroup> = days.iter().flat_map(|d| d.hours.iter()).collect();

    match hours.iter().position(|h| h.hour_key >= now) {
        Some(next) if next > 0 => Some(hours[next - 1]),
        _ => hours
            .last()
            .copied()
            .filter(|last| last.events.iter().any(|ev| is_live(ev, now))),
    }
}
