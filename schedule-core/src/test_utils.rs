//! Fixtures shared by the unit tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::event::{Event, EventLocation, NamedRef};
use crate::summit::Summit;

pub fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

pub fn summit(tz: &str, dates: &[&str]) -> Summit {
    Summit {
        id: Some(1),
        name: Some("Test Summit".to_string()),
        time_zone_id: tz.to_string(),
        dates_with_events: dates.iter().map(|d| d.to_string()).collect(),
        start_showing_venues_date: utc(2024, 1, 1, 0, 0, 0),
        locations: vec![],
    }
}

pub fn event(id: u64, start: DateTime<Utc>, end: DateTime<Utc>) -> Event {
    Event {
        id,
        title: format!("Event {id}"),
        start_date: start,
        end_date: end,
        location: None,
        image: None,
        track: None,
        event_type: None,
        speakers: vec![],
        moderator: None,
        tags: vec![],
    }
}

pub fn located(venue: Option<&str>, floor: Option<&str>, room: Option<&str>) -> EventLocation {
    EventLocation {
        name: room.map(String::from),
        venue: venue.map(|n| NamedRef {
            name: Some(n.to_string()),
        }),
        floor: floor.map(|n| NamedRef {
            name: Some(n.to_string()),
        }),
    }
}
