use anyhow::Result;
use chrono_tz::Tz;
use schedule_core::clock::resolve_now;
use schedule_core::settings::{ScheduleSettings, TimezoneMode};
use schedule_core::{current_hour_in, group_events_by_day_and_hour};
use tracing::debug;

use crate::input::ScheduleInput;
use crate::render::{RenderContext, render_schedule};

pub fn run(input: ScheduleInput, settings: ScheduleSettings, local_tz: Option<Tz>) -> Result<()> {
    let summit_tz = input.summit.tz()?;
    let now = resolve_now(settings.now.as_deref(), summit_tz)?;
    let options = settings.grouping_options(local_tz);

    let days = group_events_by_day_and_hour(&input.events, Some(&input.summit), options)?;
    let current_hour = current_hour_in(&days, now).map(|h| h.hour_key);
    debug!(%now, ?current_hour, "rendering schedule");

    let display_tz = match settings.timezone {
        TimezoneMode::Local => local_tz.unwrap_or(summit_tz),
        TimezoneMode::Summit => summit_tz,
    };

    let ctx = RenderContext {
        summit: &input.summit,
        now,
        display_tz,
        current_hour,
        settings: &settings,
    };

    println!("{}", render_schedule(&days, &ctx));
    Ok(())
}
