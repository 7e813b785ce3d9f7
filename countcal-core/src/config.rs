//! Global countcal configuration.

use std::path::{Path, PathBuf};

use chrono::Weekday;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CountError, CountResult};

static DEFAULT_BASE_URL: &str = "https://countcal.app/";

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("countcal"))
        .unwrap_or_else(|| PathBuf::from("~/.countcal"))
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// First column of the month calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
        }
    }
}

/// Global configuration at ~/.config/countcal/config.toml
///
/// Every key can be overridden with a `COUNTCAL_`-prefixed environment
/// variable, e.g. `COUNTCAL_DATA_DIR`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CountcalConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Origin and path that share links are built on.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub week_start: WeekStart,
}

impl Default for CountcalConfig {
    fn default() -> Self {
        CountcalConfig {
            data_dir: default_data_dir(),
            base_url: default_base_url(),
            week_start: WeekStart::default(),
        }
    }
}

impl CountcalConfig {
    pub fn config_path() -> CountResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CountError::Config("Could not determine config directory".into()))?
            .join("countcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file (creating it on first run) layered with the
    /// environment.
    pub fn load() -> CountResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: CountcalConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .add_source(Environment::with_prefix("COUNTCAL"))
            .build()
            .map_err(|e| CountError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CountError::Config(e.to_string()))?;

        tracing::debug!(?config, "loaded config");
        Ok(config)
    }

    /// Load only the given file, without environment overrides.
    pub fn load_from(path: &Path) -> CountResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| CountError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CountError::Config(e.to_string()))
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    pub fn base_url(&self) -> CountResult<Url> {
        Url::parse(&self.base_url)
            .map_err(|e| CountError::Config(format!("Invalid base_url '{}': {e}", self.base_url)))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CountResult<()> {
        let contents = format!(
            "\
# countcal configuration

# Where your countdown document lives:
# data_dir = \"{}\"

# Base URL for share links:
# base_url = \"{}\"

# First day of the week in the calendar (monday or sunday):
# week_start = \"monday\"
",
            default_data_dir().display(),
            DEFAULT_BASE_URL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CountError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CountError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
