use crate::core::generator::GeneratorSettings;
use crate::core::risk::RiskPolicy;
use crate::errors::{AppError, AppResult};
use crate::models::entry::MAX_DURATION_LIMIT_MINUTES;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_uri_scheme")]
    pub uri_scheme: String,
    #[serde(default = "default_supervisor_id")]
    pub supervisor_id: String,
    #[serde(default = "default_warning_ratio")]
    pub warning_ratio: f64,
    #[serde(default)]
    pub risk: RiskPolicy,
    #[serde(default)]
    pub generator: GeneratorSettings,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_seed() -> u64 {
    42
}
fn default_uri_scheme() -> String {
    "safeentry".to_string()
}
fn default_supervisor_id() -> String {
    "SUP-001".to_string()
}
fn default_warning_ratio() -> f64 {
    0.8
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            seed: default_seed(),
            uri_scheme: default_uri_scheme(),
            supervisor_id: default_supervisor_id(),
            warning_ratio: default_warning_ratio(),
            risk: RiskPolicy::default(),
            generator: GeneratorSettings::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("safeentry")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".safeentry")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("safeentry.conf")
    }

    /// Return the full path of the SQLite state file
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("safeentry.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Reject settings the monitor cannot work with.
    pub fn validate(&self) -> AppResult<()> {
        self.risk.validate()?;
        if !(self.warning_ratio > 0.0 && self.warning_ratio <= 1.0) {
            return Err(AppError::Config(format!(
                "warning_ratio must be in (0, 1], got {}",
                self.warning_ratio
            )));
        }
        let max = self.generator.max_duration_minutes;
        if !(1..=MAX_DURATION_LIMIT_MINUTES).contains(&max) {
            return Err(AppError::Config(format!(
                "generator.max_duration_minutes must be between 1 and {MAX_DURATION_LIMIT_MINUTES}, got {max}"
            )));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// `~` is expanded; relative names land in the config directory.
    pub fn resolve_database(name: &str) -> PathBuf {
        let p = crate::utils::path::expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Initialize configuration file and state file location.
    /// Returns the resolved state file path.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = match custom_name {
            Some(name) => Self::resolve_database(&name),
            None => Self::database_file(),
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;

            let mut config = Self::load().unwrap_or_default();
            config.database = db_path.to_string_lossy().to_string();

            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
