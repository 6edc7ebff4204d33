//! Schedule display settings.
//!
//! Every option the schedule recognizes is a named field here. Settings load
//! from ~/.config/summit-schedule/config.toml and are validated before use.

use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::clock::parse_now_override;
use crate::error::{ScheduleError, ScheduleResult};
use crate::grouping::{GroupingOptions, HourOrder};

static DEFAULT_TITLE: &str = "Schedule";

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Day → hour grid
    #[default]
    Calendar,
    /// Flat list of events per day
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimezoneMode {
    /// Times shown in the summit timezone
    #[default]
    Summit,
    /// Times shown in the viewer's own timezone
    Local,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSource {
    #[default]
    Track,
    EventType,
}

/// Everything the schedule view can be configured with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSettings {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(default)]
    pub view: ViewMode,
    #[serde(default)]
    pub timezone: TimezoneMode,
    #[serde(default)]
    pub color_source: ColorSource,
    #[serde(default)]
    pub hour_order: HourOrder,

    /// Show event thumbnails, falling back to `default_image`
    #[serde(default)]
    pub with_thumbs: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_link: Option<String>,
    #[serde(default = "default_true")]
    pub show_sync: bool,
    #[serde(default = "default_true")]
    pub show_print: bool,
    #[serde(default)]
    pub show_send_email: bool,

    /// Summit-local clock override, `YYYY-MM-DD,HH:MM:SS`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub now: Option<String>,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        ScheduleSettings {
            title: default_title(),
            subtitle: None,
            view: ViewMode::default(),
            timezone: TimezoneMode::default(),
            color_source: ColorSource::default(),
            hour_order: HourOrder::default(),
            with_thumbs: false,
            default_image: None,
            share_link: None,
            show_sync: true,
            show_print: true,
            show_send_email: false,
            now: None,
        }
    }
}

impl ScheduleSettings {
    pub fn config_path() -> ScheduleResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ScheduleError::Config("Could not determine config directory".into()))?
            .join("summit-schedule");

        Ok(config_dir.join("config.toml"))
    }

    /// Load settings from the default config path, creating a commented
    /// default file on first use.
    pub fn load() -> ScheduleResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load and validate settings from a specific file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> ScheduleResult<Self> {
        let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());

        let settings: ScheduleSettings = Config::builder()
            .add_source(File::from(expanded).format(FileFormat::Toml).required(false))
            .build()
            .map_err(|e| ScheduleError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ScheduleError::Config(e.to_string()))?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> ScheduleResult<()> {
        if self.title.trim().is_empty() {
            return Err(ScheduleError::Config("title must not be empty".into()));
        }

        for (field, value) in [
            ("share_link", &self.share_link),
            ("default_image", &self.default_image),
        ] {
            if let Some(url) = value {
                if !is_http_url(url) {
                    return Err(ScheduleError::Config(format!(
                        "{field} must be an http(s) URL, got '{url}'"
                    )));
                }
            }
        }

        if let Some(now) = &self.now {
            // Shape check only; the summit timezone is applied when the clock is resolved
            parse_now_override(now, Tz::UTC)?;
        }

        Ok(())
    }

    /// Grouping options for these settings. `local_tz` is the viewer's
    /// timezone, used when times are shown in local time.
    pub fn grouping_options(&self, local_tz: Option<Tz>) -> GroupingOptions {
        let display_tz = match self.timezone {
            TimezoneMode::Summit => None,
            TimezoneMode::Local => local_tz,
        };

        GroupingOptions {
            hour_order: self.hour_order,
            display_tz,
        }
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> ScheduleResult<String> {
        toml::to_string_pretty(self).map_err(|e| ScheduleError::Serialization(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> ScheduleResult<()> {
        let contents = format!(
            "\
# summit-schedule configuration

# Heading shown above the schedule:
# title = \"{}\"
# subtitle = \"Day one\"

# \"calendar\" or \"list\":
# view = \"calendar\"

# \"summit\" shows summit time, \"local\" shows your own timezone:
# timezone = \"summit\"

# \"chronological\" or \"first_seen\":
# hour_order = \"chronological\"

# color_source = \"track\"
# with_thumbs = false
# default_image = \"https://example.org/placeholder.png\"
# share_link = \"https://example.org/schedule\"
# show_sync = true
# show_print = true
# show_send_email = false

# Preview the schedule at a fixed summit-local time:
# now = \"2024-03-05,10:30:00\"
",
            DEFAULT_TITLE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ScheduleError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ScheduleError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("https://") || value.starts_with("http://")
}
