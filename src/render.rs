//! Terminal rendering for grouped schedules.
//!
//! Extension traits that turn schedule-core types into colored lines using
//! owo_colors. Everything a renderer needs is carried in `RenderContext`.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use owo_colors::OwoColorize;
use schedule_core::settings::{ColorSource, ScheduleSettings, ViewMode};
use schedule_core::{DayBucket, Event, HourGroup, Speaker, Summit, is_live, minutes_to_start};

/// Events starting within this many minutes get a countdown
const COUNTDOWN_MINUTES: i64 = 60;

/// Shared state for one render pass
pub struct RenderContext<'a> {
    pub summit: &'a Summit,
    pub now: DateTime<Utc>,
    /// Timezone for event times in the list view
    pub display_tz: Tz,
    pub current_hour: Option<DateTime<Utc>>,
    pub settings: &'a ScheduleSettings,
}

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self, ctx: &RenderContext) -> String;
}

impl Render for Event {
    fn render(&self, ctx: &RenderContext) -> String {
        let mut line = colorize_title(self, ctx.settings.color_source);

        if let Some(track) = &self.track {
            line.push_str(&format!(" {}", format!("[{}]", track.name).dimmed()));
        }

        let location = ctx.summit.location_label_for(self, ctx.now);
        line.push_str(&format!(" {}", location.dimmed()));

        if is_live(self, ctx.now) {
            line.push_str(&format!(" {}", "LIVE".red().bold()));
        } else if self.start_date > ctx.now {
            let minutes = minutes_to_start(self, ctx.now);
            if minutes <= COUNTDOWN_MINUTES {
                let until = humantime::format_duration(std::time::Duration::from_secs(
                    minutes.unsigned_abs() * 60,
                ));
                line.push_str(&format!(" {}", format!("starts in {until}").yellow()));
            }
        }

        line
    }
}

impl Render for HourGroup {
    fn render(&self, ctx: &RenderContext) -> String {
        let is_current = ctx.current_hour == Some(self.hour_key);
        let marker = if is_current { "▶".green().to_string() } else { " ".to_string() };
        let label = format!("{:>8}", self.hour_label);
        let label = if is_current {
            label.green().bold().to_string()
        } else {
            label.bold().to_string()
        };

        let mut lines = Vec::with_capacity(self.events.len());
        for (idx, event) in self.events.iter().enumerate() {
            let time_col = if idx == 0 {
                format!("{marker} {label}")
            } else {
                " ".repeat(10)
            };
            lines.push(format!("  {}  {}", time_col, event.render(ctx)));
            let indent = " ".repeat(14);
            lines.extend(event_details(event, ctx.settings).map(|d| format!("{indent}{d}")));
        }
        lines.join("\n")
    }
}

impl Render for DayBucket {
    fn render(&self, ctx: &RenderContext) -> String {
        let mut lines = vec![format!("{}, {}", self.day_label.bold(), self.date_label)];

        match ctx.settings.view {
            ViewMode::Calendar => {
                lines.extend(self.hours.iter().map(|hour| hour.render(ctx)));
            }
            ViewMode::List => {
                for event in self.hours.iter().flat_map(|h| h.events.iter()) {
                    let span = format_span(event, ctx.display_tz);
                    lines.push(format!("  {}  {}", span.dimmed(), event.render(ctx)));
                    lines.extend(event_details(event, ctx.settings).map(|d| format!("    {d}")));
                }
            }
        }

        lines.join("\n")
    }
}

/// Render a whole schedule, or the empty-state message.
pub fn render_schedule(days: &[DayBucket], ctx: &RenderContext) -> String {
    let mut sections = vec![ctx.settings.title.bold().underline().to_string()];
    if let Some(subtitle) = &ctx.settings.subtitle {
        sections.push(subtitle.dimmed().to_string());
    }
    if let Some(actions) = action_bar(ctx.settings) {
        sections.push(actions);
    }

    if days.is_empty() {
        sections.push("There are no activities to display.".dimmed().to_string());
        return sections.join("\n");
    }

    sections.extend(days.iter().map(|day| format!("\n{}", day.render(ctx))));
    sections.join("\n")
}

/// Share link plus the sync and print actions the settings enable.
fn action_bar(settings: &ScheduleSettings) -> Option<String> {
    let mut items = Vec::new();
    if settings.show_sync {
        items.push("[Sync]".cyan().to_string());
    }
    if settings.show_print {
        items.push("[Print]".cyan().to_string());
    }
    if let Some(link) = &settings.share_link {
        items.push(format!("Share: {}", link.underline()));
    }

    (!items.is_empty()).then(|| items.join("  "))
}

/// Speaker, moderator and thumbnail lines shown under an event.
fn event_details(event: &Event, settings: &ScheduleSettings) -> impl Iterator<Item = String> {
    let mut details = Vec::new();

    if !event.speakers.is_empty() {
        let names: Vec<String> = event
            .speakers
            .iter()
            .map(|s| format_person(s, settings.show_send_email))
            .collect();
        details.push(format!("Speakers: {}", names.join(", ")));
    }
    if let Some(moderator) = &event.moderator {
        details.push(format!("Moderator: {}", format_person(moderator, settings.show_send_email)));
    }

    if settings.with_thumbs {
        let image = event.image.as_deref().or(settings.default_image.as_deref());
        if let Some(url) = image {
            details.push(format!("Image: {url}"));
        }
    }

    details.into_iter().map(|d| d.dimmed().to_string())
}

/// "Ada Lovelace (Analytical Engines) <ada@example.org>"
fn format_person(speaker: &Speaker, with_email: bool) -> String {
    let mut out = speaker.full_name();
    if let Some(company) = speaker.company.as_deref().filter(|c| !c.is_empty()) {
        out.push_str(&format!(" ({company})"));
    }
    if with_email {
        if let Some(email) = speaker.email.as_deref().filter(|e| !e.is_empty()) {
            out.push_str(&format!(" <{email}>"));
        }
    }
    out
}

/// "10:00am-11:00am" in the given timezone.
fn format_span(event: &Event, tz: Tz) -> String {
    format!(
        "{}-{}",
        event.start_at(tz).format("%-I:%M%P"),
        event.end_at(tz).format("%-I:%M%P")
    )
}

/// Color an event title with its track or type color when it is a valid hex color.
fn colorize_title(event: &Event, source: ColorSource) -> String {
    match event.color(source).and_then(parse_hex_color) {
        Some((r, g, b)) => event.title.truecolor(r, g, b).to_string(),
        None => event.title.clone(),
    }
}

fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
