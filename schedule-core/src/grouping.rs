//! Fold a flat event list into summit days and hour groups.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::day_bucket::{DayBucket, build_day_buckets};
use crate::error::ScheduleResult;
use crate::event::Event;
use crate::summit::Summit;

/// Events sharing an identical start instant within a day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourGroup {
    /// Start instant of the first event that opened this group
    pub hour_key: DateTime<Utc>,
    /// e.g. "2:30 pm"
    pub hour_label: String,
    pub events: Vec<Event>,
}

impl HourGroup {
    fn open(event: &Event, label_tz: Tz) -> Self {
        HourGroup {
            hour_key: event.start_date,
            hour_label: format_hour_label(event.start_date, label_tz),
            events: vec![event.clone()],
        }
    }

    /// `hour_key` as epoch seconds.
    pub fn epoch(&self) -> i64 {
        self.hour_key.timestamp()
    }
}

/// Order of the hour groups inside a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourOrder {
    /// Ascending by start instant
    #[default]
    Chronological,
    /// The order in which each slot's first event was encountered in the input
    FirstSeen,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GroupingOptions {
    pub hour_order: HourOrder,
    /// Timezone for hour labels. Defaults to the summit timezone.
    pub display_tz: Option<Tz>,
}

/// Group events into the summit's days and, within each day, by start instant.
///
/// Returns an empty schedule when no summit is available yet. Events starting
/// outside every day (including exactly on a day boundary) are left out. Days
/// without events are dropped; the rest keep `dates_with_events` order.
pub fn group_events_by_day_and_hour(
    events: &[Event],
    summit: Option<&Summit>,
    options: GroupingOptions,
) -> ScheduleResult<Vec<DayBucket>> {
    let Some(summit) = summit else {
        return Ok(Vec::new());
    };

    let label_tz = match options.display_tz {
        Some(tz) => tz,
        None => summit.tz()?,
    };

    let mut days = build_day_buckets(summit)?;

    for event in events {
        let Some(day) = days.iter_mut().find(|d| d.contains(event.start_date)) else {
            debug!(event_id = event.id, start = %event.start_date, "event starts outside every summit day");
            continue;
        };

        match day.hours.iter_mut().find(|h| h.hour_key == event.start_date) {
            Some(hour) => hour.events.push(event.clone()),
            None => day.hours.push(HourGroup::open(event, label_tz)),
        }
    }

    days.retain(|d| !d.is_empty());

    if options.hour_order == HourOrder::Chronological {
        for day in &mut days {
            day.hours.sort_by_key(|h| h.hour_key);
        }
    }

    debug!(days = days.len(), events = events.len(), "grouped schedule");
    Ok(days)
}

/// Format an instant as a local clock label, e.g. "10:00 am".
pub fn format_hour_label(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format("%-I:%M %P").to_string()
}
