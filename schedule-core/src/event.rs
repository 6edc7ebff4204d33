//! Summit event types.
//!
//! Events arrive in the shape the summit API publishes them: instants as epoch
//! seconds, location and track as nested objects. Summit-local times are never
//! stored; they are always derived from the UTC instants and a timezone.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};
use crate::settings::ColorSource;

/// A scheduled summit session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    #[serde(default)]
    pub title: String,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub start_date: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub end_date: DateTime<Utc>,

    #[serde(default)]
    pub location: Option<EventLocation>,
    /// Thumbnail URL
    #[serde(default)]
    pub image: Option<String>,

    // Descriptive metadata, opaque to grouping
    #[serde(default)]
    pub track: Option<Track>,
    #[serde(default, rename = "type")]
    pub event_type: Option<EventType>,
    #[serde(default)]
    pub speakers: Vec<Speaker>,
    #[serde(default)]
    pub moderator: Option<Speaker>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Where an event takes place. `name` is the room.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventLocation {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub venue: Option<NamedRef>,
    #[serde(default)]
    pub floor: Option<NamedRef>,
}

/// A reference to a venue or floor
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    /// Background color used when the schedule colors events by track
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventType {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Speaker {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tag {
    pub tag: String,
}

impl Event {
    /// Start instant in the given timezone.
    pub fn start_at(&self, tz: Tz) -> DateTime<Tz> {
        self.start_date.with_timezone(&tz)
    }

    /// End instant in the given timezone.
    pub fn end_at(&self, tz: Tz) -> DateTime<Tz> {
        self.end_date.with_timezone(&tz)
    }

    /// Check that the event starts strictly before it ends.
    pub fn validate(&self) -> ScheduleResult<()> {
        if self.start_date >= self.end_date {
            return Err(ScheduleError::InvalidEventTimes { id: self.id });
        }
        Ok(())
    }

    /// Display color for the event under the given color source, if it has one.
    pub fn color(&self, source: ColorSource) -> Option<&str> {
        match source {
            ColorSource::Track => self.track.as_ref()?.color.as_deref(),
            ColorSource::EventType => self.event_type.as_ref()?.color.as_deref(),
        }
    }
}

impl Speaker {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn deserializes_summit_api_shape() {
        let json = r##"{
            "id": 42,
            "title": "Keynote",
            "start_date": 1709632800,
            "end_date": 1709636400,
            "location": {
                "name": "Room 101",
                "venue": { "name": "Convention Center" },
                "floor": { "name": "Level 1" }
            },
            "track": { "name": "Main", "color": "#ff0000" },
            "type": { "name": "Presentation" },
            "speakers": [{ "first_name": "Ada", "last_name": "Lovelace" }],
            "tags": [{ "tag": "opening" }]
        }"##;

        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.id, 42);
        assert_eq!(
            event.start_date,
            Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap()
        );
        assert_eq!(event.location.unwrap().name.as_deref(), Some("Room 101"));
        assert_eq!(event.speakers[0].full_name(), "Ada Lovelace");
        assert!(event.moderator.is_none());
        assert_eq!(event.event_type.unwrap().name, "Presentation");
    }

    #[test]
    fn local_times_follow_timezone() {
        let event = Event {
            id: 1,
            title: "Talk".to_string(),
            start_date: Utc.with_ymd_and_hms(2024, 3, 5, 15, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 3, 5, 16, 0, 0).unwrap(),
            location: None,
            image: None,
            track: None,
            event_type: None,
            speakers: vec![],
            moderator: None,
            tags: vec![],
        };

        let local = event.start_at(chrono_tz::America::Chicago);
        assert_eq!(local.format("%H:%M").to_string(), "09:00");
        assert_eq!(event.end_at(chrono_tz::UTC).format("%H:%M").to_string(), "16:00");
    }

    #[test]
    fn color_follows_source() {
        let json = r##"{
            "id": 3,
            "start_date": 1709632800,
            "end_date": 1709636400,
            "track": { "name": "Main", "color": "#ff0000" },
            "type": { "name": "Workshop", "color": "#00ff00" }
        }"##;
        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.color(ColorSource::Track), Some("#ff0000"));
        assert_eq!(event.color(ColorSource::EventType), Some("#00ff00"));
    }

    #[test]
    fn validate_rejects_inverted_interval() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 15, 0, 0).unwrap();
        let event = Event {
            id: 7,
            title: String::new(),
            start_date: at,
            end_date: at,
            location: None,
            image: None,
            track: None,
            event_type: None,
            speakers: vec![],
            moderator: None,
            tags: vec![],
        };

        assert!(matches!(
            event.validate(),
            Err(ScheduleError::InvalidEventTimes { id: 7 })
        ));
    }
}
