//! Loading and saving [`Settings`] as a TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

const CONFIG_FILE_NAME: &str = "config.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `config.toml` in the platform config directory, or in the working
    /// directory when no home directory can be determined.
    pub fn with_default_location() -> Self {
        let path = match ProjectDirs::from("com", "Ken24T", "EventCalendar") {
            Some(proj_dirs) => proj_dirs.config_dir().join(CONFIG_FILE_NAME),
            None => PathBuf::from(CONFIG_FILE_NAME),
        };
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where the settings come from, for start-up logging.
    pub fn describe_source(&self) -> String {
        if self.path.exists() {
            format!("Using settings from {:?}", self.path)
        } else {
            format!("No settings at {:?}, using defaults", self.path)
        }
    }

    /// Read the settings file. A missing file yields the defaults.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::debug!("No settings at {:?}, using defaults", self.path);
            return Ok(Settings::default());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings file: {:?}", self.path))?;
        let settings: Settings = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse settings file: {:?}", self.path))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {:?}: {}", self.path, e))?;

        log::info!("Loaded settings from {:?}", self.path);
        Ok(settings)
    }

    /// Validate and write `settings`, creating parent directories.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let raw = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write settings file: {:?}", self.path))?;

        log::info!("Saved settings to {:?}", self.path);
        Ok(())
    }
}
