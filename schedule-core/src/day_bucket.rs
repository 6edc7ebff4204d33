//! Summit-local calendar days.
//!
//! Each entry of `Summit::dates_with_events` becomes one `DayBucket` whose
//! bounds are the UTC instants of that date's `00:00:00` and `23:59:59` in the
//! summit timezone. Bounds are resolved independently, so DST days come out
//! 23 or 25 hours long.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use tracing::warn;

use crate::error::{ScheduleError, ScheduleResult};
use crate::grouping::HourGroup;
use crate::summit::Summit;

/// One summit day and the hour groups scheduled on it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    /// e.g. "March 5"
    pub date_label: String,
    /// e.g. "Tuesday"
    pub day_label: String,
    /// Local 00:00:00 as a UTC instant
    pub start_utc: DateTime<Utc>,
    /// Local 23:59:59 as a UTC instant
    pub end_utc: DateTime<Utc>,
    pub hours: Vec<HourGroup>,
}

impl DayBucket {
    /// Build the empty bucket for a summit-local date.
    pub fn for_date(date: NaiveDate, tz: Tz) -> Self {
        let start = resolve_local(tz, date.and_time(NaiveTime::MIN), Edge::Start);
        let end = resolve_local(tz, date.and_hms_opt(23, 59, 59).unwrap_or_default(), Edge::End);

        DayBucket {
            date,
            date_label: start.format("%B %-d").to_string(),
            day_label: start.format("%A").to_string(),
            start_utc: start.with_timezone(&Utc),
            end_utc: end.with_timezone(&Utc),
            hours: Vec::new(),
        }
    }

    pub fn epoch_start(&self) -> i64 {
        self.start_utc.timestamp()
    }

    pub fn epoch_end(&self) -> i64 {
        self.end_utc.timestamp()
    }

    /// Whether an instant falls strictly inside the day. An instant exactly on
    /// either bound belongs to no bucket.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start_utc < instant && instant < self.end_utc
    }

    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    pub fn event_count(&self) -> usize {
        self.hours.iter().map(|h| h.events.len()).sum()
    }
}

/// Build one empty bucket per summit date, in `dates_with_events` order.
///
/// A date that does not parse as `YYYY-MM-DD` fails the whole call.
pub fn build_day_buckets(summit: &Summit) -> ScheduleResult<Vec<DayBucket>> {
    let tz = summit.tz()?;

    summit
        .dates_with_events
        .iter()
        .map(|s| {
            let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| ScheduleError::InvalidDate(s.clone()))?;
            Ok(DayBucket::for_date(date, tz))
        })
        .collect()
}

#[derive(Clone, Copy)]
enum Edge {
    Start,
    End,
}

/// Map a local wall time to an instant.
/// Ambiguous times take the earliest instant for a day start and the latest for
/// a day end. Times inside a DST gap move forward to the first valid wall time.
fn resolve_local(tz: Tz, naive: NaiveDateTime, edge: Edge) -> DateTime<Tz> {
    let mapped = tz.from_local_datetime(&naive);
    let resolved = match edge {
        Edge::Start => mapped.earliest(),
        Edge::End => mapped.latest(),
    };

    if let Some(dt) = resolved {
        return dt;
    }

    warn!(%naive, %tz, "local time falls in a DST gap, moving forward");
    let mut probe = naive;
    loop {
        probe += chrono::Duration::minutes(15);
        if let Some(dt) = tz.from_local_datetime(&probe).earliest() {
            return dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{summit, utc};

    #[test]
    fn buckets_follow_summit_date_order() {
        let s = summit("UTC", &["2024-03-06", "2024-03-05"]);
        let buckets = build_day_buckets(&s).unwrap();

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].date_label, "March 6");
        assert_eq!(buckets[0].day_label, "Wednesday");
        assert_eq!(buckets[1].date_label, "March 5");
        assert_eq!(buckets[1].day_label, "Tuesday");
        assert!(buckets.iter().all(DayBucket::is_empty));
    }

    #[test]
    fn bounds_are_local_midnight_to_last_second() {
        let s = summit("America/New_York", &["2024-03-05"]);
        let bucket = &build_day_buckets(&s).unwrap()[0];

        // EST is UTC-5 in early March
        assert_eq!(bucket.start_utc, utc(2024, 3, 5, 5, 0, 0));
        assert_eq!(bucket.end_utc, utc(2024, 3, 6, 4, 59, 59));
        assert_eq!(bucket.epoch_start(), bucket.start_utc.timestamp());
    }

    #[test]
    fn spring_forward_day_is_23_hours() {
        let s = summit("Europe/Berlin", &["2026-03-29"]);
        let bucket = &build_day_buckets(&s).unwrap()[0];

        assert_eq!(bucket.start_utc, utc(2026, 3, 28, 23, 0, 0));
        assert_eq!(bucket.end_utc, utc(2026, 3, 29, 21, 59, 59));
    }

    #[test]
    fn midnight_inside_dst_gap_moves_forward() {
        // Santiago skipped 00:00-01:00 local on 2023-09-03
        let s = summit("America/Santiago", &["2023-09-03"]);
        let bucket = &build_day_buckets(&s).unwrap()[0];

        assert_eq!(bucket.start_utc, utc(2023, 9, 3, 4, 0, 0));
        assert_eq!(bucket.date_label, "September 3");
    }

    #[test]
    fn contains_is_strict_on_both_bounds() {
        let s = summit("UTC", &["2024-03-05"]);
        let bucket = &build_day_buckets(&s).unwrap()[0];

        assert!(!bucket.contains(bucket.start_utc));
        assert!(!bucket.contains(bucket.end_utc));
        assert!(bucket.contains(utc(2024, 3, 5, 0, 0, 1)));
        assert!(bucket.contains(utc(2024, 3, 5, 23, 59, 58)));
    }

    #[test]
    fn unparseable_date_fails_the_call() {
        let s = summit("UTC", &["2024-03-05", "March 6th"]);

        assert!(matches!(
            build_day_buckets(&s),
            Err(ScheduleError::InvalidDate(d)) if d == "March 6th"
        ));
    }

    #[test]
    fn unknown_timezone_fails_the_call() {
        let s = summit("Nowhere/Special", &["2024-03-05"]);
        assert!(matches!(
            build_day_buckets(&s),
            Err(ScheduleError::UnknownTimeZone(_))
        ));
    }
}
