//! Loading summit and event JSON from disk.

use std::path::Path;

use anyhow::{Context, Result};
use schedule_core::{Event, Summit};
use serde::Deserialize;
use tracing::{debug, warn};

/// Event files are either a bare array or a paginated API response.
#[derive(Deserialize)]
#[serde(untagged)]
enum EventsFile {
    List(Vec<Event>),
    Page { data: Vec<Event> },
}

pub struct ScheduleInput {
    pub summit: Summit,
    pub events: Vec<Event>,
}

impl ScheduleInput {
    pub fn load(summit_path: &Path, events_path: &Path) -> Result<Self> {
        let summit = load_summit(summit_path)?;
        let events = load_events(events_path)?;
        debug!(events = events.len(), days = summit.dates_with_events.len(), "loaded schedule input");
        Ok(ScheduleInput { summit, events })
    }
}

pub fn load_summit(path: &Path) -> Result<Summit> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read summit file {}", path.display()))?;
    let summit: Summit = serde_json::from_str(&content)
        .with_context(|| format!("Invalid summit JSON in {}", path.display()))?;

    // Fail early on a bad timezone rather than on first render
    summit.tz()?;
    Ok(summit)
}

/// Read events, skipping any whose end is not after their start.
pub fn load_events(path: &Path) -> Result<Vec<Event>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read events file {}", path.display()))?;
    let events = match serde_json::from_str::<EventsFile>(&content)
        .with_context(|| format!("Invalid events JSON in {}", path.display()))?
    {
        EventsFile::List(events) => events,
        EventsFile::Page { data } => data,
    };

    Ok(events
        .into_iter()
        .filter(|event| match event.validate() {
            Ok(()) => true,
            Err(e) => {
                warn!("Skipping event: {e}");
                false
            }
        })
        .collect())
}
