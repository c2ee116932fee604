use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the record log; `~` is expanded on use
    pub record_file: String,
    #[serde(default = "default_day_target_hours")]
    pub day_target_hours: i64,
    #[serde(default = "default_note_separator")]
    pub note_separator: String,
}

fn default_day_target_hours() -> i64 {
    8
}
fn default_note_separator() -> String {
    ", ".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            record_file: Self::default_record_file().to_string_lossy().to_string(),
            day_target_hours: default_day_target_hours(),
            note_separator: default_note_separator(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("tip")
        } else {
            dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        if cfg!(target_os = "windows") {
            Self::config_dir().join("tip.conf")
        } else {
            Self::config_dir().join(".tip.conf")
        }
    }

    /// Return the default path of the record log
    pub fn default_record_file() -> PathBuf {
        if cfg!(target_os = "windows") {
            Self::config_dir().join("tip.log")
        } else {
            Self::config_dir().join(".tip")
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
        } else {
            Ok(Config::default())
        }
    }

    /// Record log path with `~` expanded
    pub fn record_path(&self) -> PathBuf {
        crate::utils::path::expand_tilde(&self.record_file)
    }

    pub fn day_target_minutes(&self) -> i64 {
        self.day_target_hours * 60
    }

    /// Write the configuration file with the current values
    pub fn init(&self, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        if !is_test {
            let yaml =
                serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(())
    }
}
