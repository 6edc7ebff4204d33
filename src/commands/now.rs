use anyhow::Result;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use owo_colors::OwoColorize;
use schedule_core::clock::resolve_now;
use schedule_core::settings::ScheduleSettings;
use schedule_core::{HourGroup, Summit, derive_current_hour, is_live};

use crate::input::ScheduleInput;

pub fn run(input: ScheduleInput, settings: ScheduleSettings, local_tz: Option<Tz>) -> Result<()> {
    let summit_tz = input.summit.tz()?;
    let now = resolve_now(settings.now.as_deref(), summit_tz)?;

    let current = derive_current_hour(
        &input.events,
        Some(&input.summit),
        now,
        settings.grouping_options(local_tz),
    )?;

    println!("{}", render_now(current.as_ref(), &input.summit, now));
    Ok(())
}

/// The current hour's events with a LIVE / ended status each.
fn render_now(current: Option<&HourGroup>, summit: &Summit, now: DateTime<Utc>) -> String {
    let Some(hour) = current else {
        return "Nothing is on right now".dimmed().to_string();
    };

    let mut lines = vec![format!("{} {}", "Now:".bold(), hour.hour_label.green().bold())];
    for event in &hour.events {
        let status = if is_live(event, now) {
            "LIVE".red().bold().to_string()
        } else {
            "ended".dimmed().to_string()
        };
        let location = summit.location_label_for(event, now);
        lines.push(format!("  {} {} {}", event.title, location.dimmed(), status));
    }

    lines.join("\n")
}
