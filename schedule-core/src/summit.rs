//! The summit (conference) descriptor.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};
use crate::event::Event;
use crate::location::location_label;

/// Location class name the summit API uses for venues
pub const VENUE_CLASS_NAME: &str = "SummitVenue";

/// A summit and the metadata grouping needs from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summit {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,

    /// IANA timezone all summit-local dates are interpreted in
    pub time_zone_id: String,

    /// Days with at least one scheduled event (YYYY-MM-DD). Order defines day order.
    #[serde(default)]
    pub dates_with_events: Vec<String>,

    /// Venue and room names stay hidden until this instant
    #[serde(with = "chrono::serde::ts_seconds")]
    pub start_showing_venues_date: DateTime<Utc>,

    #[serde(default)]
    pub locations: Vec<SummitLocation>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SummitLocation {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub class_name: String,
}

impl Summit {
    /// Resolve the summit timezone.
    pub fn tz(&self) -> ScheduleResult<Tz> {
        self.time_zone_id
            .parse::<Tz>()
            .map_err(|_| ScheduleError::UnknownTimeZone(self.time_zone_id.clone()))
    }

    /// Number of locations classified as a venue.
    pub fn venue_count(&self) -> usize {
        self.locations
            .iter()
            .filter(|loc| loc.class_name == VENUE_CLASS_NAME)
            .count()
    }

    /// Display label for an event's location, honoring this summit's venue policy.
    pub fn location_label_for(&self, event: &Event, now: DateTime<Utc>) -> String {
        location_label(
            event,
            self.start_showing_venues_date,
            self.venue_count(),
            now,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn summit_json(tz: &str) -> String {
        format!(
            r#"{{
                "id": 31,
                "name": "Open Infra Summit",
                "time_zone_id": "{tz}",
                "dates_with_events": ["2024-03-05", "2024-03-06"],
                "start_showing_venues_date": 1709251200,
                "locations": [
                    {{ "id": 1, "name": "Hall A", "class_name": "SummitVenue" }},
                    {{ "id": 2, "name": "Hotel", "class_name": "SummitHotel" }},
                    {{ "id": 3, "name": "Hall B", "class_name": "SummitVenue" }}
                ]
            }}"#
        )
    }

    #[test]
    fn parses_and_counts_venues() {
        let summit: Summit = serde_json::from_str(&summit_json("Europe/Berlin")).unwrap();

        assert_eq!(summit.dates_with_events.len(), 2);
        assert_eq!(summit.venue_count(), 2);
        assert_eq!(
            summit.start_showing_venues_date,
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(summit.tz().unwrap(), chrono_tz::Europe::Berlin);
    }

    #[test]
    fn unknown_timezone_is_an_error() {
        let summit: Summit = serde_json::from_str(&summit_json("Mars/Olympus_Mons")).unwrap();

        assert!(matches!(
            summit.tz(),
            Err(ScheduleError::UnknownTimeZone(name)) if name == "Mars/Olympus_Mons"
        ));
    }
}
