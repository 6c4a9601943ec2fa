use std::path::{Path, PathBuf};

use anyhow::Result;
use owo_colors::OwoColorize;
use studyplan_core::config::PlannerConfig;

pub fn run(config: &PlannerConfig, set_data_dir: Option<PathBuf>) -> Result<()> {
    let config_path = PlannerConfig::config_path()?;

    if let Some(dir) = set_data_dir {
        let updated = set_data_dir_at(&config_path, dir)?;
        println!(
            "{} data_dir = {}",
            "Saved".green(),
            updated.data_path().display()
        );
        return Ok(());
    }

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Data:    {}", config.data_path().display());

    Ok(())
}

/// Rewrite the config file at `path` with a new data directory.
fn set_data_dir_at(path: &Path, dir: PathBuf) -> Result<PlannerConfig> {
    let mut config = PlannerConfig::load_from(path)?;
    config.data_dir = dir;
    config.save(path)?;

    tracing::debug!(path = %path.display(), "saved config");
    Ok(config)
}
