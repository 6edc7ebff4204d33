use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use schedule_core::settings::ScheduleSettings;

pub fn run(config_path: &Path, settings: &ScheduleSettings) -> Result<()> {
    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!();
    println!("{}", "Effective settings".bold());
    for line in settings.to_toml()?.lines() {
        println!("  {}", line);
    }

    Ok(())
}
