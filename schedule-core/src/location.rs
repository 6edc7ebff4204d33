//! Location labels for events.

use chrono::{DateTime, Utc};

use crate::event::{Event, NamedRef};

/// Shown whenever a location is unknown or not yet public
pub const TBA: &str = "TBA";

/// Build the "Venue - Floor - Room" label for an event.
///
/// Returns "TBA" until `show_venues_at` has passed, when the event has no
/// location, or when none of its parts are named. The venue is only included
/// when the summit has more than one.
pub fn location_label(
    event: &Event,
    show_venues_at: DateTime<Utc>,
    venue_count: usize,
    now: DateTime<Utc>,
) -> String {
    if now <= show_venues_at {
        return TBA.to_string();
    }

    let Some(location) = &event.location else {
        return TBA.to_string();
    };

    let venue = location
        .venue
        .as_ref()
        .filter(|_| venue_count > 1)
        .and_then(ref_name);
    let floor = location.floor.as_ref().and_then(ref_name);
    let room = location.name.as_deref().filter(|n| !n.is_empty());

    let parts: Vec<&str> = [venue, floor, room].into_iter().flatten().collect();

    if parts.is_empty() {
        TBA.to_string()
    } else {
        parts.join(" - ")
    }
}

fn ref_name(r: &NamedRef) -> Option<&str> {
    r.name.as_deref().filter(|n| !n.is_empty())
}
