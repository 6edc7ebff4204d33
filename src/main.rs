mod commands;
mod input;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand, ValueEnum};
use schedule_core::grouping::HourOrder;
use schedule_core::settings::{ScheduleSettings, TimezoneMode, ViewMode};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::input::ScheduleInput;

#[derive(Parser)]
#[command(name = "summit-schedule")]
#[command(about = "Show a summit's schedule grouped by day and hour")]
struct Cli {
    /// Settings file (defaults to ~/.config/summit-schedule/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Summit JSON file
    #[arg(long)]
    summit: PathBuf,

    /// Events JSON file (array or paginated response)
    #[arg(long)]
    events: PathBuf,

    /// Pretend it is this summit-local time (YYYY-MM-DD,HH:MM:SS)
    #[arg(long)]
    now: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ViewArg {
    Calendar,
    List,
}

#[derive(Clone, Copy, ValueEnum)]
enum TimezoneArg {
    Summit,
    Local,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the grouped schedule
    Show {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long, value_enum)]
        view: Option<ViewArg>,

        /// Show times in the summit timezone or your own
        #[arg(long, value_enum)]
        timezone: Option<TimezoneArg>,

        /// Keep hours in the order their first event appears in the input
        #[arg(long)]
        first_seen: bool,
    },
    /// Show the hour that is currently running
    Now {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Show the settings file location and effective settings
    Config,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => ScheduleSettings::config_path()?,
    };
    let mut settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Show {
            input,
            view,
            timezone,
            first_seen,
        } => {
            if let Some(view) = view {
                settings.view = match view {
                    ViewArg::Calendar => ViewMode::Calendar,
                    ViewArg::List => ViewMode::List,
                };
            }
            if let Some(tz) = timezone {
                settings.timezone = match tz {
                    TimezoneArg::Summit => TimezoneMode::Summit,
                    TimezoneArg::Local => TimezoneMode::Local,
                };
            }
            if first_seen {
                settings.hour_order = HourOrder::FirstSeen;
            }
            let schedule = apply_input(&input, &mut settings)?;
            commands::show::run(schedule, settings, local_timezone())
        }
        Commands::Now { input } => {
            let schedule = apply_input(&input, &mut settings)?;
            commands::now::run(schedule, settings, local_timezone())
        }
        Commands::Config => commands::config::run(&config_path, &settings),
    }
}

fn load_settings(path: Option<&std::path::Path>) -> Result<ScheduleSettings> {
    let settings = match path {
        Some(path) => ScheduleSettings::load_from(path)?,
        None => ScheduleSettings::load()?,
    };
    Ok(settings)
}

/// Load the input files and fold the `--now` flag into the settings.
fn apply_input(args: &InputArgs, settings: &mut ScheduleSettings) -> Result<ScheduleInput> {
    if let Some(now) = &args.now {
        settings.now = Some(now.clone());
        settings.validate()?;
    }
    ScheduleInput::load(&args.summit, &args.events)
}

/// The viewer's timezone, if the system reports one chrono-tz knows.
fn local_timezone() -> Option<Tz> {
    let name = iana_time_zone::get_timezone().ok()?;
    match name.parse::<Tz>() {
        Ok(tz) => Some(tz),
        Err(_) => {
            tracing::warn!("Unrecognized system timezone '{}', using summit time", name);
            None
        }
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("summit_schedule=info,schedule_core=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
