//! Global studyplan configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};

static DEFAULT_DATA_DIR: &str = "~/.studyplan";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn is_default_data_dir(p: &PathBuf) -> bool {
    *p == default_data_dir()
}

/// Configuration at ~/.config/studyplan/config.toml
///
/// Every key can also be set from the environment with a `STUDYPLAN_`
/// prefix, e.g. `STUDYPLAN_DATA_DIR`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlannerConfig {
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            data_dir: default_data_dir(),
        }
    }
}

impl PlannerConfig {
    pub fn config_path() -> PlannerResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PlannerError::Config("Could not determine config directory".into()))?
            .join("studyplan");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default config path, creating a commented default file
    /// on first run.
    pub fn load() -> PlannerResult<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            Self::create_default_config(&path)?;
        }

        Self::load_from(&path)
    }

    /// Load from `path` (which may be missing) layered under `STUDYPLAN_*` environment variables.
    pub fn load_from(path: &Path) -> PlannerResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("STUDYPLAN"))
            .build()
            .map_err(|e| PlannerError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| PlannerError::Config(e.to_string()))
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn save(&self, path: &Path) -> PlannerResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| PlannerError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)
            .map_err(|e| PlannerError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> PlannerResult<()> {
        let contents = format!(
            "\
# studyplan configuration

# Where schedules and subjects are stored:
# data_dir = \"{}\"
",
            DEFAULT_DATA_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PlannerError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| PlannerError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
